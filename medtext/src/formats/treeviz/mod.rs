//! Treeviz formatter for node documents
//!
//! One line per node under a document root, in the style of a tree view:
//!
//! ```text
//! ⧉ Document (5 nodes)
//! ├─ ▶ Type = DocumentStart, Length = 0, Value = ''
//! ├─ ⎋ Type = Escape, Length = 3, Value = 'H'
//! │  └─ " \H\
//! ├─ ◦ Type = Text, Length = 12, Value = 'Hello World!'
//! │  └─ " Hello World!
//! ├─ ↵ Type = LineBreak, Length = 0, Value = ''
//! └─ ■ Type = DocumentEnd, Length = 0, Value = ''
//! ```
//!
//! Text and escape nodes get a child line with their rendered markup. With
//! `show-index=true` every node line is prefixed with its position.

use super::icons::get_icon;
use crate::error::FormatError;
use crate::format::{bool_option, Format};
use crate::model::document::Document;
use crate::model::node::Node;
use std::collections::HashMap;

fn format_node(node: &Node, index: usize, is_last: bool, show_index: bool) -> String {
    let connector = if is_last { "└─" } else { "├─" };
    let index_prefix = if show_index {
        format!("{index:02} ")
    } else {
        String::new()
    };

    let mut output = format!(
        "{}{} {} {}\n",
        index_prefix,
        connector,
        get_icon(node.node_type()),
        node.display_name()
    );

    if matches!(node, Node::Text(_) | Node::Escape(_)) {
        let child_prefix = if is_last { "   " } else { "│  " };
        let padding = if show_index { "   " } else { "" };
        output.push_str(&format!(
            "{}{}└─ {} {}\n",
            padding,
            child_prefix,
            get_icon("Markup"),
            node.to_markup()
        ));
    }

    output
}

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_with_params(doc, false)
}

/// Convert a document to a treeviz string, optionally numbering the nodes
pub fn to_treeviz_str_with_params(doc: &Document, show_index: bool) -> String {
    let mut output = format!("{} Document ({} nodes)\n", get_icon("Document"), doc.len());
    let count = doc.len();
    for (index, node) in doc.iter().enumerate() {
        output.push_str(&format_node(node, index, index + 1 == count, show_index));
    }
    output
}

/// Format implementation for treeviz format
#[derive(Debug, Clone, Copy, Default)]
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree of document nodes"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let show_index = bool_option(options, "show-index")?.unwrap_or(false);
        Ok(to_treeviz_str_with_params(doc, show_index))
    }
}
