//! Shared icon mapping for tree visualization

/// Get the Unicode icon for a given node type
///
/// Returns a single Unicode character that visually represents the node type.
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "DocumentStart" => "▶",
        "DocumentEnd" => "■",
        "Text" => "◦",
        "LineBreak" => "↵",
        "Escape" => "⎋",
        "Markup" => "\"",
        _ => "○",
    }
}
