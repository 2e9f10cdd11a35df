//! Formatted clinical-record text
//!
//!     Record text is plain text interleaved with backslash-delimited escape codes that
//!     toggle character formatting, plus a hard limit on the length of every logical line.
//!     This crate turns that text into a flat node sequence and back, renders it as HTML,
//!     and assembles new documents that respect the line limit.
//!
//!         \H\***** DIAGNOSTIC REPORT******\N\~~\ZU\Attending Physician\N\: LARRY CARLIN~
//!
//!     This is a pure lib: it powers medtext-cli but makes no assumption about a shell
//!     environment (no printing, no env vars).
//!
//! Architecture
//!
//!     .
//!     ├── model
//!     │   ├── catalog.rs      # Escape sequences and the reserved characters
//!     │   ├── node.rs         # Node variants, rendered length, escape resolution
//!     │   └── document.rs     # Node sequence and line-length validation
//!     ├── builder.rs          # Line-length aware document assembly
//!     ├── formatted.rs        # FormattedText, the collaborator-facing document
//!     ├── format.rs           # Format trait definition
//!     ├── registry.rs         # FormatRegistry for discovery and selection
//!     └── formats
//!         ├── markup          # Raw escape-coded text (parse and serialize)
//!         ├── html            # HTML preview page (serialize)
//!         ├── treeviz         # Node tree for inspection (serialize)
//!         └── json            # Node dump (serialize)
//!
//!     Data flows raw text → decode → nodes → encode (markup or HTML). The builder produces
//!     nodes for the same encoders; builder and decoder never call each other.
//!
//! Escape Catalog
//!
//!     The catalog is fixed and built once, on first use. Decoding takes it by reference;
//!     unknown codes inside a directive are dropped without error.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs
//!     ├── markup
//!     ├── html
//!     ├── builder
//!     └── properties
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs declares
//!     them as modules.
pub mod builder;
pub mod error;
pub mod format;
pub mod formats;
pub mod formatted;
pub mod model;
pub mod registry;

pub use builder::{BuilderOptions, NodeBuilder};
pub use error::{FormatError, LineLengthError, NodeError};
pub use format::Format;
pub use formatted::FormattedText;
pub use model::{Document, EscapeCatalog, EscapeSequence, Node};
pub use registry::FormatRegistry;
