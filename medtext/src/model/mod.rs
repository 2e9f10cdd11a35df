//! Document model: escape catalog, nodes and node sequences.

pub mod catalog;
pub mod document;
pub mod node;

pub use catalog::{EscapeCatalog, EscapeSequence, SequenceKind};
pub use document::{Document, DEFAULT_LINE_LENGTH};
pub use node::{EscapePayload, Node};
