//! Node sequences
//!
//! [`Document`] is the ordered node list produced by the decoder or the builder and
//! consumed by the serializers.

use super::catalog::EscapeCatalog;
use super::node::{EscapePayload, Node};
use crate::error::{LineLengthError, NodeError};
use serde::Serialize;

/// Default maximum number of characters between two line breaks.
pub const DEFAULT_LINE_LENGTH: usize = 92;

/// An ordered, append-only sequence of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Document { nodes: Vec::new() }
    }

    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Document { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn last(&self) -> Option<&Node> {
        self.nodes.last()
    }

    pub(crate) fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Resolves every escape node that still carries a non-empty raw body.
    ///
    /// Empty bodies (`\\` in the source) are left unresolved; they render as nothing.
    pub fn resolve_escapes(&mut self, catalog: &EscapeCatalog) -> Result<(), NodeError> {
        for node in &mut self.nodes {
            if matches!(node, Node::Escape(EscapePayload::Unresolved(raw)) if !raw.is_empty()) {
                node.resolve_escape(catalog)?;
            }
        }
        Ok(())
    }

    /// Checks that no logical line is longer than `max` characters.
    pub fn validate(&self, max: usize) -> Result<(), LineLengthError> {
        validate_line_length(&self.nodes, max)
    }

    /// Concatenated raw markup of all nodes.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_markup(&mut out);
        }
        out
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Document::from_nodes(nodes)
    }
}

/// Walks `nodes` and reports the first node that pushes a line over `max` characters.
pub fn validate_line_length(nodes: &[Node], max: usize) -> Result<(), LineLengthError> {
    let mut length = 0;

    for (index, node) in nodes.iter().enumerate() {
        if node.is_line_break() {
            length = 0;
            continue;
        }

        length += node.rendered_length();

        if length > max {
            return Err(LineLengthError {
                index,
                node: node.clone(),
                length,
                max,
            });
        }
    }

    Ok(())
}
