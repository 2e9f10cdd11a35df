//! Markup decoding (raw text → nodes)
//!
//! A single left-to-right scan with one accumulator that is either empty, collecting
//! text, or collecting the body of an escape directive. Escape delimiters come in
//! pairs: the first opens a directive, the second closes it. A delimiter met while
//! collecting text closes the text and opens a directive.
//!
//! CRLF pairs are folded into a single space before scanning. A lone CR, a lone LF or
//! the reserved line separator each end the current logical line.

use crate::error::NodeError;
use crate::model::catalog::{EscapeCatalog, ESCAPE_CHARACTER, LINE_SEPARATOR};
use crate::model::document::Document;
use crate::model::node::Node;

enum Accumulator {
    Text(String),
    Escape(String),
}

impl Accumulator {
    fn push(&mut self, ch: char) {
        match self {
            Accumulator::Text(value) | Accumulator::Escape(value) => value.push(ch),
        }
    }

    fn into_node(self) -> Node {
        match self {
            Accumulator::Text(text) => Node::Text(text),
            Accumulator::Escape(raw) => Node::unresolved_escape(raw),
        }
    }
}

fn is_line_terminator(ch: char) -> bool {
    ch == '\r' || ch == '\n' || ch == LINE_SEPARATOR
}

/// Decodes raw markup into a bracketed node sequence and resolves its escape directives.
pub fn decode(source: &str, catalog: &EscapeCatalog) -> Result<Document, NodeError> {
    let source = source.replace("\r\n", " ");

    let mut doc = Document::new();
    doc.push(Node::DocumentStart);

    let mut current: Option<Accumulator> = None;

    for ch in source.chars() {
        if ch == ESCAPE_CHARACTER {
            current = match current.take() {
                None => Some(Accumulator::Escape(String::new())),
                Some(Accumulator::Escape(raw)) => {
                    doc.push(Node::unresolved_escape(raw));
                    None
                }
                Some(text @ Accumulator::Text(_)) => {
                    doc.push(text.into_node());
                    Some(Accumulator::Escape(String::new()))
                }
            };
        } else if is_line_terminator(ch) {
            if let Some(open) = current.take() {
                doc.push(open.into_node());
            }
            doc.push(Node::LineBreak);
        } else {
            current
                .get_or_insert_with(|| Accumulator::Text(String::new()))
                .push(ch);
        }
    }

    if let Some(open) = current.take() {
        doc.push(open.into_node());
    }
    doc.push(Node::DocumentEnd);

    doc.resolve_escapes(catalog)?;
    log::debug!("decoded {} bytes into {} nodes", source.len(), doc.len());

    Ok(doc)
}
