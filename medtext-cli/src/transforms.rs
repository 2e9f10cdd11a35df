//! CLI-specific transforms
//!
//! Inspection views over the decoded node sequence. Each transform is a stage + format
//! combination; the only stage is `nodes`, the decoded document.
//!
//! - `nodes-treeviz`: Tree visualization with Unicode icons (default)
//! - `nodes-json`: JSON representation
//! - `nodes-simple`: One node per line, type and raw value
//!
//! ## Extra Parameters
//!
//! - `show-index`: "true" prefixes every node with its position (treeviz only)
//!
//! Example: `medtext inspect report.mtf nodes-treeviz --extra-show-index false`

use medtext::format::Format;
use medtext::formats::json::JsonFormat;
use medtext::formats::markup::decode;
use medtext::formats::treeviz::TreevizFormat;
use medtext::model::{Document, EscapeCatalog};
use std::collections::HashMap;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &["nodes-treeviz", "nodes-json", "nodes-simple"];

/// Execute a named transform on markup source with optional extra parameters
///
/// # Examples
///
/// ```ignore
/// let params = HashMap::new();
/// let output = execute_transform("\\H\\Title\\N\\~", "nodes-treeviz", &params)?;
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let doc = decode(source, EscapeCatalog::standard())
        .map_err(|e| format!("Transform failed: {e}"))?;

    match transform_name {
        "nodes-treeviz" => {
            let mut params = HashMap::new();
            if let Some(show_index) = extra_params.get("show-index") {
                params.insert("show-index".to_string(), show_index.clone());
            }
            TreevizFormat
                .serialize_with_options(&doc, &params)
                .map_err(|e| format!("Transform failed: {e}"))
        }
        "nodes-json" => JsonFormat
            .serialize(&doc)
            .map(|json| format!("{json}\n"))
            .map_err(|e| format!("JSON serialization failed: {e}")),
        "nodes-simple" => Ok(nodes_to_simple(&doc)),
        _ => Err(format!(
            "Unknown transform '{transform_name}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

fn nodes_to_simple(doc: &Document) -> String {
    let mut output = String::new();
    for node in doc {
        let value = node.value();
        if value.is_empty() {
            output.push_str(node.node_type());
        } else {
            output.push_str(&format!("{} {:?}", node.node_type(), value));
        }
        output.push('\n');
    }
    output
}
