//! Property-based tests for markup decoding and encoding

use medtext::formats::html::{serialize_to_html, BodyStyle};
use medtext::formats::markup::{decode, encode};
use medtext::model::{EscapeCatalog, Node};
use medtext::NodeBuilder;
use proptest::prelude::*;

/// Markup made only of catalog codes, plain text and separators
fn markup_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-zA-Z0-9 ,.:*]{1,20}",
        Just("~".to_string()),
        "[NHIUZ]{1,4}".prop_map(|codes| format!("\\{codes}\\")),
    ];
    prop::collection::vec(piece, 0..30).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn catalog_markup_round_trips(source in markup_strategy()) {
        let doc = decode(&source, EscapeCatalog::standard()).unwrap();
        prop_assert_eq!(encode(&doc), source);
    }

    #[test]
    fn decoded_sequence_is_bracketed(source in "[^\\\\]{0,60}|.{0,60}") {
        let doc = decode(&source, EscapeCatalog::standard()).unwrap();
        prop_assert_eq!(doc.nodes().first(), Some(&Node::DocumentStart));
        prop_assert_eq!(doc.last(), Some(&Node::DocumentEnd));
    }

    #[test]
    fn builder_output_survives_round_trip(
        words in prop::collection::vec("[a-z]{1,10}", 1..60),
        line_length in 20usize..100,
    ) {
        let mut builder = NodeBuilder::default().with_line_length(line_length);
        builder.start_document();
        builder.start_highlight();
        builder.add_text(&words.join(" "), 0);
        builder.start_normal();
        builder.end_document();
        let built = builder.finish();

        let decoded = decode(&encode(&built), EscapeCatalog::standard()).unwrap();
        prop_assert_eq!(decoded, built);
    }

    #[test]
    fn html_tags_balance_when_closed_by_normal(
        codes in prop::collection::vec("[HIUZ]{1,4}", 0..10),
    ) {
        let source: String = codes
            .iter()
            .map(|codes| format!("\\{codes}\\text\\N\\"))
            .collect();
        let doc = decode(&source, EscapeCatalog::standard()).unwrap();
        let html = serialize_to_html(&doc, BodyStyle::Fixed);

        for tag in ["b", "i", "u"] {
            prop_assert_eq!(
                html.matches(&format!("<{tag}>")).count(),
                html.matches(&format!("</{tag}>")).count()
            );
        }
    }
}
