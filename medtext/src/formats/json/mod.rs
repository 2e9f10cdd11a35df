//! JSON dump of the node sequence
//!
//! Serializes the document through `serde_json`. Intended for tooling and debugging;
//! the layout follows the serde representation of [`Node`](crate::model::node::Node).

use crate::error::FormatError;
use crate::format::Format;
use crate::model::document::Document;

/// Format implementation for JSON output
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Node sequence as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
