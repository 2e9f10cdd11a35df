//! HTML serialization (nodes → HTML)
//!
//! Streams the node sequence into a minimal HTML document. Escape sequences other than
//! Normal open a tag and are pushed on a stack; a Normal sequence closes every open tag,
//! innermost first. Line breaks become `<br />` on their own line.

use super::writer::IndentedWriter;
use super::BodyStyle;
use crate::model::catalog::EscapeSequence;
use crate::model::document::Document;
use crate::model::node::Node;

/// Serialize a node document to a complete HTML page using `style` for the body
pub fn serialize_to_html(doc: &Document, style: BodyStyle) -> String {
    let mut out = IndentedWriter::default();

    out.append_line("<html>");
    out.indented(|out| {
        out.append_line("<head>");
        out.append_line("</head>");
        out.append_line(&format!("<body style=\"{}\">", style.css()));
        out.indented(|out| write_body(doc, out));
        if !out.ends_with_newline() {
            out.append_line("");
        }
        out.append_line("</body>");
    });
    out.append_line("</html>");

    log::debug!("rendered {} nodes as HTML", doc.len());
    out.finish()
}

fn write_body(doc: &Document, out: &mut IndentedWriter) {
    let mut open: Vec<EscapeSequence> = Vec::new();

    for node in doc {
        match node {
            Node::LineBreak => {
                if !out.ends_with_newline() {
                    out.append_line("");
                }
                out.append_line("<br />");
            }
            Node::Text(text) => out.append(&escape_text(text)),
            Node::Escape(_) => {
                for sequence in node.sequences() {
                    if sequence.is_normal() {
                        while let Some(closing) = open.pop() {
                            out.append(closing.close_tag);
                        }
                    } else {
                        open.push(*sequence);
                    }
                    out.append(sequence.open_tag);
                }
            }
            Node::DocumentStart | Node::DocumentEnd => {}
        }
    }

    if !open.is_empty() {
        log::debug!("{} formatting sequences left open at end of document", open.len());
    }
}

/// Escapes HTML-significant characters and preserves runs of spaces.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace("  ", "&nbsp;&nbsp;")
        .replace("&nbsp; ", "&nbsp;&nbsp;")
}
