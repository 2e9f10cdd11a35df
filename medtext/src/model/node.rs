//! Document nodes
//!
//!     A document is a flat, ordered list of nodes. Escape nodes come in two states: the raw
//!     body read from markup (`Unresolved`) and the catalog entries it names (`Resolved`).
//!     The transition happens once, right after decoding.

use super::catalog::{EscapeCatalog, EscapeSequence, ESCAPE_CHARACTER, LINE_SEPARATOR};
use crate::error::NodeError;
use serde::Serialize;

/// Payload of an escape directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EscapePayload {
    /// Body characters between the delimiters, as read from markup.
    Unresolved(String),
    /// Catalog entries in encounter order.
    Resolved(Vec<EscapeSequence>),
}

/// One unit of document structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    DocumentStart,
    DocumentEnd,
    Text(String),
    LineBreak,
    Escape(EscapePayload),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// A resolved escape node carrying `sequences` in order.
    pub fn escape(sequences: Vec<EscapeSequence>) -> Self {
        Node::Escape(EscapePayload::Resolved(sequences))
    }

    pub fn unresolved_escape(raw: impl Into<String>) -> Self {
        Node::Escape(EscapePayload::Unresolved(raw.into()))
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            Node::DocumentStart => "DocumentStart",
            Node::DocumentEnd => "DocumentEnd",
            Node::Text(_) => "Text",
            Node::LineBreak => "LineBreak",
            Node::Escape(_) => "Escape",
        }
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Node::LineBreak)
    }

    /// Resolved sequences of an escape node. Empty for every other node.
    pub fn sequences(&self) -> &[EscapeSequence] {
        match self {
            Node::Escape(EscapePayload::Resolved(sequences)) => sequences,
            _ => &[],
        }
    }

    /// Raw value as shown by inspection tools: text payload or unresolved escape body.
    pub fn value(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Escape(EscapePayload::Unresolved(raw)) => raw.clone(),
            Node::Escape(EscapePayload::Resolved(sequences)) => {
                sequences.iter().map(|s| s.code).collect()
            }
            _ => String::new(),
        }
    }

    /// Number of characters this node counts against the current line.
    ///
    /// Line breaks count zero: they end the line they would be measured on.
    pub fn rendered_length(&self) -> usize {
        match self {
            Node::Text(text) => text.chars().count(),
            Node::Escape(EscapePayload::Resolved(sequences)) if !sequences.is_empty() => {
                sequences.len() + 2
            }
            _ => 0,
        }
    }

    /// Appends the raw markup form of this node to `out`.
    pub fn write_markup(&self, out: &mut String) {
        match self {
            Node::DocumentStart | Node::DocumentEnd => {}
            Node::LineBreak => out.push(LINE_SEPARATOR),
            Node::Text(text) => out.push_str(text),
            Node::Escape(EscapePayload::Resolved(sequences)) if !sequences.is_empty() => {
                out.push(ESCAPE_CHARACTER);
                out.extend(sequences.iter().map(|s| s.code));
                out.push(ESCAPE_CHARACTER);
            }
            Node::Escape(_) => {}
        }
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    /// One-line summary used by tree views.
    pub fn display_name(&self) -> String {
        format!(
            "Type = {}, Length = {}, Value = '{}'",
            self.node_type(),
            self.rendered_length(),
            self.value()
        )
    }

    /// Converts an unresolved escape node into its catalog entries.
    pub fn resolve_escape(&mut self, catalog: &EscapeCatalog) -> Result<(), NodeError> {
        let raw = match self {
            Node::Escape(EscapePayload::Unresolved(raw)) => raw,
            Node::Escape(EscapePayload::Resolved(_)) => return Err(NodeError::AlreadyResolved),
            other => return Err(NodeError::InvalidNodeType(other.node_type())),
        };
        if raw.is_empty() {
            return Err(NodeError::EmptyEscape);
        }
        let sequences = catalog.resolve(raw);
        *self = Node::escape(sequences);
        Ok(())
    }
}
