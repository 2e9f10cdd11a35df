//! HTML format implementation
//!
//! Export only. Produces a small, self-contained page meant for previewing a record the
//! way the target system prints it.
//!
//! # Element Mapping Table
//!
//! | Node                 | HTML                                  |
//! |----------------------|---------------------------------------|
//! | DocumentStart / End  | (nothing)                             |
//! | Text                 | escaped text, space runs as `&nbsp;`  |
//! | LineBreak            | `<br />` on its own line              |
//! | Escape `H`           | `<b>`                                 |
//! | Escape `I`           | `<i>`                                 |
//! | Escape `U`           | `<u>`                                 |
//! | Escape `Z`           | (opens nothing, closed like the rest) |
//! | Escape `N`           | closes every open tag                 |
//!
//! # Body Styles
//!
//! - [`BodyStyle::Fixed`]: Courier New, matching the fixed-pitch printout (default)
//! - [`BodyStyle::Proportional`]: Arial
//!
//! Select with the `style` option (`fixed` / `proportional`).

mod serializer;
pub mod writer;

use crate::error::FormatError;
use crate::format::Format;
use crate::model::document::Document;
use std::collections::HashMap;
use std::str::FromStr;

pub use serializer::{escape_text, serialize_to_html};

/// Presets for the page body style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyStyle {
    /// Fixed-width clinical report look
    #[default]
    Fixed,
    /// Proportional font
    Proportional,
}

impl BodyStyle {
    /// Inline CSS for the `<body>` element
    pub fn css(&self) -> &'static str {
        match self {
            BodyStyle::Fixed => {
                "font-family: 'Courier New'; font-size: 10pt; background-color: #FFF; color: #000;"
            }
            BodyStyle::Proportional => {
                "font-family: Arial; font-size: 10pt; background-color: #FFF; color: #000;"
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BodyStyle::Fixed => "fixed",
            BodyStyle::Proportional => "proportional",
        }
    }
}

impl FromStr for BodyStyle {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" | "monospace" => Ok(BodyStyle::Fixed),
            "proportional" => Ok(BodyStyle::Proportional),
            other => Err(FormatError::SerializationError(format!(
                "Unknown body style '{other}' (expected 'fixed' or 'proportional')"
            ))),
        }
    }
}

/// Format implementation for HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat {
    style: BodyStyle,
}

impl HtmlFormat {
    pub fn new(style: BodyStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> BodyStyle {
        self.style
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML preview page"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_html(doc, self.style))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let style = match options.get("style") {
            Some(raw) => raw.parse()?,
            None => self.style,
        };
        Ok(serialize_to_html(doc, style))
    }
}
