//! Markup encoding (nodes → raw text)

use crate::model::document::Document;

/// Renders `doc` back to raw markup: text verbatim, escapes as `\codes\`, line breaks as
/// the reserved separator.
pub fn encode(doc: &Document) -> String {
    let markup = doc.to_markup();
    log::debug!("encoded {} nodes into {} bytes of markup", doc.len(), markup.len());
    markup
}
