//! Formatted text document
//!
//! [`FormattedText`] is the object collaborators hold on to: the raw escape-coded text
//! plus the target settings. Every conversion decodes the current text again, so there
//! is no cached state to go stale after [`FormattedText::set_text`].

use crate::builder::{BuilderOptions, NodeBuilder};
use crate::error::NodeError;
use crate::formats::html::{serialize_to_html, BodyStyle};
use crate::formats::markup::{decode, encode};
use crate::model::catalog::EscapeCatalog;
use crate::model::document::Document;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedText {
    text: String,
    options: BuilderOptions,
}

impl FormattedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: BuilderOptions::default(),
        }
    }

    pub fn with_options(text: impl Into<String>, options: BuilderOptions) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn supports_local_escape_codes(&self) -> bool {
        self.options.supports_local_escape_codes
    }

    pub fn set_supports_local_escape_codes(&mut self, supported: bool) {
        self.options.supports_local_escape_codes = supported;
    }

    pub fn line_length(&self) -> usize {
        self.options.line_length
    }

    pub fn set_line_length(&mut self, line_length: usize) {
        self.options.line_length = line_length;
    }

    pub fn options(&self) -> BuilderOptions {
        self.options
    }

    /// Decodes the current text with the standard catalog.
    pub fn decode(&self) -> Result<Document, NodeError> {
        decode(&self.text, EscapeCatalog::standard())
    }

    /// Decodes and re-encodes the current text as markup.
    pub fn to_markup(&self) -> Result<String, NodeError> {
        Ok(encode(&self.decode()?))
    }

    /// Decodes the current text and renders it as an HTML page.
    pub fn to_html(&self, style: BodyStyle) -> Result<String, NodeError> {
        Ok(serialize_to_html(&self.decode()?, style))
    }

    /// A builder configured for the same target as this text.
    pub fn builder(&self) -> NodeBuilder {
        NodeBuilder::new(self.options)
    }
}

impl From<Document> for FormattedText {
    fn from(doc: Document) -> Self {
        Self::new(encode(&doc))
    }
}
