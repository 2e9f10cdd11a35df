//! Markup format implementation
//!
//! The raw escape-coded text is treated as just another format, so it can be read and
//! written through the same registry as the inspection and HTML outputs.
//!
//! # Syntax
//!
//! ```text
//! \H\***** DIAGNOSTIC REPORT******\N\~~\ZU\Attending Physician\N\: LARRY CARLIN~
//! ```
//!
//! - `\…\` wraps one or more escape codes (see [`crate::model::catalog`])
//! - `~` ends a logical line; a literal `~` in content is written as `\R\`
//! - CRLF pairs in the input are folded into a space

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::model::catalog::EscapeCatalog;
use crate::model::document::Document;

pub use parser::decode;
pub use serializer::encode;

/// Format implementation for raw escape-coded markup
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupFormat;

impl Format for MarkupFormat {
    fn name(&self) -> &str {
        "markup"
    }

    fn description(&self) -> &str {
        "Escape-coded formatted text"
    }

    fn file_extensions(&self) -> &[&str] {
        &["mtf", "txt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        decode(source, EscapeCatalog::standard()).map_err(FormatError::from)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(encode(doc))
    }
}
