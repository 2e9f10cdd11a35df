//! Escape sequence catalog
//!
//! The markup knows a fixed set of single-character formatting codes. This module holds
//! the catalog entries and the process-wide instance the decoder and builder resolve
//! against.
//!
//! | Kind      | Code | HTML            |
//! |-----------|------|-----------------|
//! | Normal    | `N`  | (closes all)    |
//! | Highlight | `H`  | `<b>` `</b>`    |
//! | Italic    | `I`  | `<i>` `</i>`    |
//! | Underline | `U`  | `<u>` `</u>`    |
//! | Local     | `Z`  | (marker only)   |

use once_cell::sync::Lazy;
use serde::Serialize;

/// Character that opens and closes an escape directive.
pub const ESCAPE_CHARACTER: char = '\\';

/// Code that prefixes formatting only honoured by targets with local escape support.
pub const LOCAL_CHARACTER: char = 'Z';

/// Reserved character separating logical lines in the raw markup.
pub const LINE_SEPARATOR: char = '~';

/// Substitute written in place of a literal [`LINE_SEPARATOR`] found in content.
pub const ESCAPED_LINE_SEPARATOR: &str = "\\R\\";

static STANDARD: Lazy<EscapeCatalog> = Lazy::new(EscapeCatalog::new);

/// The formatting role of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SequenceKind {
    Normal,
    Highlight,
    Italic,
    Underline,
    Local,
}

/// A single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EscapeSequence {
    pub kind: SequenceKind,
    pub code: char,
    pub description: &'static str,
    pub open_tag: &'static str,
    pub close_tag: &'static str,
}

impl EscapeSequence {
    pub const NORMAL: EscapeSequence = EscapeSequence {
        kind: SequenceKind::Normal,
        code: 'N',
        description: "Normal",
        open_tag: "",
        close_tag: "",
    };

    pub const HIGHLIGHT: EscapeSequence = EscapeSequence {
        kind: SequenceKind::Highlight,
        code: 'H',
        description: "Highlight",
        open_tag: "<b>",
        close_tag: "</b>",
    };

    pub const ITALIC: EscapeSequence = EscapeSequence {
        kind: SequenceKind::Italic,
        code: 'I',
        description: "Italic",
        open_tag: "<i>",
        close_tag: "</i>",
    };

    pub const UNDERLINE: EscapeSequence = EscapeSequence {
        kind: SequenceKind::Underline,
        code: 'U',
        description: "Underline",
        open_tag: "<u>",
        close_tag: "</u>",
    };

    pub const LOCAL: EscapeSequence = EscapeSequence {
        kind: SequenceKind::Local,
        code: LOCAL_CHARACTER,
        description: "Local",
        open_tag: "",
        close_tag: "",
    };

    pub fn is_normal(&self) -> bool {
        self.kind == SequenceKind::Normal
    }
}

/// Immutable registry of supported escape sequences.
#[derive(Debug, Clone)]
pub struct EscapeCatalog {
    entries: Vec<EscapeSequence>,
}

impl EscapeCatalog {
    fn new() -> Self {
        EscapeCatalog {
            entries: vec![
                EscapeSequence::HIGHLIGHT,
                EscapeSequence::NORMAL,
                EscapeSequence::ITALIC,
                EscapeSequence::UNDERLINE,
                EscapeSequence::LOCAL,
            ],
        }
    }

    /// The shared catalog. Built on first access and read-only afterwards.
    pub fn standard() -> &'static EscapeCatalog {
        &STANDARD
    }

    /// Case-insensitive lookup by code.
    pub fn lookup(&self, code: char) -> Option<EscapeSequence> {
        self.entries
            .iter()
            .find(|entry| entry.code.eq_ignore_ascii_case(&code))
            .copied()
    }

    /// Lookup by kind.
    pub fn find(&self, kind: SequenceKind) -> Option<EscapeSequence> {
        self.entries.iter().find(|entry| entry.kind == kind).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EscapeSequence> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves the raw body of an escape directive into catalog entries.
    ///
    /// Characters are looked up in order; duplicates and combination order are kept.
    /// Unknown codes are skipped without error.
    pub fn resolve(&self, raw: &str) -> Vec<EscapeSequence> {
        raw.chars()
            .filter_map(|code| {
                let found = self.lookup(code);
                if found.is_none() {
                    log::trace!("dropping unknown escape code {code:?}");
                }
                found
            })
            .collect()
    }
}
