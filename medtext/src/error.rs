//! Error types for document and format operations

use crate::model::node::Node;
use std::fmt;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during parsing
    ParseError(String),
    /// Error during serialization
    SerializationError(String),
    /// Format does not support the operation
    NotSupported(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Contract violations when resolving escape nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeError {
    /// Resolution was requested on a node that is not an escape node
    InvalidNodeType(&'static str),
    /// The escape node has no body to resolve
    EmptyEscape,
    /// The escape node already carries resolved sequences
    AlreadyResolved,
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeError::InvalidNodeType(found) => {
                write!(f, "Invalid node type: expected Escape, found {found}")
            }
            NodeError::EmptyEscape => write!(f, "Escape value cannot be empty"),
            NodeError::AlreadyResolved => write!(f, "Escape sequences are already resolved"),
        }
    }
}

impl std::error::Error for NodeError {}

/// A logical line that exceeds the configured maximum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLengthError {
    /// Position of the offending node in the sequence
    pub index: usize,
    /// The node that pushed the line over the limit
    pub node: Node,
    /// Accumulated line length including the offending node
    pub length: usize,
    /// Configured maximum line length
    pub max: usize,
}

impl fmt::Display for LineLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line length {} is greater than the allowed length {} at node {} ({})",
            self.length,
            self.max,
            self.index,
            self.node.display_name()
        )
    }
}

impl std::error::Error for LineLengthError {}

impl From<LineLengthError> for FormatError {
    fn from(err: LineLengthError) -> Self {
        FormatError::SerializationError(err.to_string())
    }
}

impl From<NodeError> for FormatError {
    fn from(err: NodeError) -> Self {
        FormatError::ParseError(err.to_string())
    }
}
