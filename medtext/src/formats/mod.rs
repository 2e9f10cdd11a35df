//! Format implementations
//!
//! This module contains all format implementations that convert between
//! node documents and various text representations.

pub mod html;
pub mod icons;
pub mod json;
pub mod markup;
pub mod treeviz;

pub use html::{BodyStyle, HtmlFormat};
pub use json::JsonFormat;
pub use markup::MarkupFormat;
pub use treeviz::TreevizFormat;
