//! Node builder
//!
//!     Assembles a document node by node while keeping every logical line within the
//!     configured maximum. Text that would overflow the current line starts a new one;
//!     text longer than a whole line is split at the nearest natural break point.
//!
//!     Formatting calls map to fixed escape combinations:
//!
//!         start_normal                  \N\
//!         start_highlight               \H\
//!         start_italic                  \ZI\     (local)
//!         start_underline               \ZU\     (local)
//!         start_bold_italic             \ZHI\    (local)
//!         start_italic_underline        \ZIU\    (local)
//!         start_bold_italic_underline   \ZHIU\   (local)
//!
//!     Local combinations are skipped entirely when the target does not support local
//!     escape codes.

use crate::error::LineLengthError;
use crate::model::catalog::{EscapeSequence, ESCAPED_LINE_SEPARATOR, LINE_SEPARATOR};
use crate::model::document::{validate_line_length, Document, DEFAULT_LINE_LENGTH};
use crate::model::node::Node;

/// Characters after which a long line may be wrapped.
pub const BREAK_CHARACTERS: [char; 7] = [' ', ',', '.', '!', ')', '\n', '\r'];

/// Settings shared by builders and documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderOptions {
    /// Maximum characters between two line breaks
    pub line_length: usize,
    /// Whether the target renders local (inline) escape codes
    pub supports_local_escape_codes: bool,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            line_length: DEFAULT_LINE_LENGTH,
            supports_local_escape_codes: false,
        }
    }
}

/// Stateful accumulator of document nodes.
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    nodes: Vec<Node>,
    text_length: usize,
    line_length: usize,
    supports_local_escape_codes: bool,
}

impl Default for NodeBuilder {
    fn default() -> Self {
        Self::new(BuilderOptions::default())
    }
}

impl NodeBuilder {
    pub fn new(options: BuilderOptions) -> Self {
        let mut builder = NodeBuilder {
            nodes: Vec::new(),
            text_length: 0,
            line_length: DEFAULT_LINE_LENGTH,
            supports_local_escape_codes: options.supports_local_escape_codes,
        };
        builder.set_line_length(options.line_length);
        builder
    }

    pub fn with_line_length(mut self, line_length: usize) -> Self {
        self.set_line_length(line_length);
        self
    }

    pub fn with_local_escape_codes(mut self, supported: bool) -> Self {
        self.supports_local_escape_codes = supported;
        self
    }

    /// Sets the maximum line length. Values below 1 are treated as 1.
    pub fn set_line_length(&mut self, line_length: usize) {
        self.line_length = line_length.max(1);
    }

    pub fn line_length(&self) -> usize {
        self.line_length
    }

    pub fn set_supports_local_escape_codes(&mut self, supported: bool) {
        self.supports_local_escape_codes = supported;
    }

    pub fn supports_local_escape_codes(&self) -> bool {
        self.supports_local_escape_codes
    }

    /// Characters used so far on the current line.
    pub fn text_length(&self) -> usize {
        self.text_length
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn finish(self) -> Document {
        Document::from_nodes(self.nodes)
    }

    pub fn start_document(&mut self) {
        self.nodes.push(Node::DocumentStart);
    }

    pub fn end_document(&mut self) {
        self.nodes.push(Node::LineBreak);
        self.nodes.push(Node::DocumentEnd);
    }

    /// Ends the current line.
    pub fn add_newline(&mut self) {
        self.nodes.push(Node::LineBreak);
        self.text_length = 0;
    }

    /// Ends the current line and leaves one blank line, never emitting three breaks in a row.
    pub fn add_line_break(&mut self) {
        if !self.nodes.last().is_some_and(Node::is_line_break) {
            self.nodes.push(Node::LineBreak);
        }
        self.nodes.push(Node::LineBreak);
        self.text_length = 0;
    }

    pub fn start_normal(&mut self) {
        self.push_escape(vec![EscapeSequence::NORMAL]);
    }

    pub fn start_highlight(&mut self) {
        self.push_escape(vec![EscapeSequence::HIGHLIGHT]);
    }

    pub fn start_italic(&mut self) {
        self.push_local_escape(vec![EscapeSequence::LOCAL, EscapeSequence::ITALIC]);
    }

    pub fn start_underline(&mut self) {
        self.push_local_escape(vec![EscapeSequence::LOCAL, EscapeSequence::UNDERLINE]);
    }

    pub fn start_bold_italic(&mut self) {
        self.push_local_escape(vec![
            EscapeSequence::LOCAL,
            EscapeSequence::HIGHLIGHT,
            EscapeSequence::ITALIC,
        ]);
    }

    pub fn start_italic_underline(&mut self) {
        self.push_local_escape(vec![
            EscapeSequence::LOCAL,
            EscapeSequence::ITALIC,
            EscapeSequence::UNDERLINE,
        ]);
    }

    pub fn start_bold_italic_underline(&mut self) {
        self.push_local_escape(vec![
            EscapeSequence::LOCAL,
            EscapeSequence::HIGHLIGHT,
            EscapeSequence::ITALIC,
            EscapeSequence::UNDERLINE,
        ]);
    }

    /// Adds `text` followed by a line break.
    pub fn add_line(&mut self, text: &str, indent: usize) {
        self.add_text(text, indent);
        self.add_newline();
    }

    /// Adds `text`, wrapping it across as many lines as needed.
    ///
    /// A literal line separator is replaced by its escaped form. With a non-zero
    /// `indent` the text is trimmed and prefixed with that many spaces, on every
    /// wrapped line. The indent is capped one below the line length.
    pub fn add_text(&mut self, text: &str, indent: usize) {
        let mut text = text.replace(LINE_SEPARATOR, ESCAPED_LINE_SEPARATOR);
        let indent = indent.min(self.line_length - 1);

        loop {
            if indent > 0 {
                text = format!("{}{}", " ".repeat(indent), text.trim());
            }
            if text.is_empty() {
                return;
            }

            let length = text.chars().count();

            // text never gets pre-broken when it starts a fresh line
            if self.text_length > 0 && self.text_length + length > self.line_length {
                self.add_newline();
            }

            if length <= self.line_length {
                self.text_length += length;
                self.nodes.push(Node::Text(text));
                return;
            }

            let split = find_split_index(&text, self.line_length, indent);
            let offset = text
                .char_indices()
                .nth(split)
                .map(|(offset, _)| offset)
                .unwrap_or(text.len());
            log::trace!("wrapping text of length {length} at character {split}");

            let rest = text.split_off(offset);
            self.nodes.push(Node::Text(text));
            self.add_newline();
            text = rest;
        }
    }

    /// Checks the built sequence against the line length, independent of the running budget.
    pub fn validate(&self) -> Result<(), LineLengthError> {
        validate_line_length(&self.nodes, self.line_length)
    }

    fn push_escape(&mut self, sequences: Vec<EscapeSequence>) {
        let node = Node::escape(sequences);
        let length = node.rendered_length();

        if self.text_length + length > self.line_length {
            self.add_newline();
        }

        self.nodes.push(node);
        self.text_length += length;
    }

    fn push_local_escape(&mut self, sequences: Vec<EscapeSequence>) {
        if !self.supports_local_escape_codes {
            log::trace!("local escape codes unsupported, skipping");
            return;
        }
        self.push_escape(sequences);
    }
}

/// Character index at which an over-long `text` is split.
///
/// Scans backward from `max` for a break character, never at or before `indent` so a
/// split always leaves content on the left. Falls back to `max` itself.
pub fn find_split_index(text: &str, max: usize, indent: usize) -> usize {
    let chars: Vec<char> = text.chars().take(max + 1).collect();

    (indent + 1..=max.min(chars.len().saturating_sub(1)))
        .rev()
        .find(|&index| BREAK_CHARACTERS.contains(&chars[index]))
        .unwrap_or(max)
}
