//! Markup round-trip tests (markup → nodes → markup)

use medtext::formats::markup::{decode, encode};
use medtext::model::EscapeCatalog;
use medtext::FormatRegistry;

fn round_trip(source: &str) -> String {
    encode(&decode(source, EscapeCatalog::standard()).unwrap())
}

#[test]
fn test_catalog_only_text_round_trips() {
    let sources = [
        "",
        "plain",
        "\\H\\Hello~World\\N\\",
        "\\H\\***** DIAGNOSTIC REPORT******\\N\\~~\\ZU\\Attending Physician\\N\\: LARRY CARLIN~",
        "\\ZHIU\\all of it\\N\\~",
        "~~~",
    ];
    for source in sources {
        assert_eq!(round_trip(source), source, "source: {source:?}");
    }
}

#[test]
fn test_lossy_inputs_normalize() {
    assert_eq!(round_trip("\\h\\x"), "\\H\\x");
    assert_eq!(round_trip("\\HQ\\x"), "\\H\\x");
    assert_eq!(round_trip("a\nb"), "a~b");
    assert_eq!(round_trip("a\r\nb"), "a b");
}

#[test]
fn test_registry_round_trip() {
    let registry = FormatRegistry::default();
    let source = "\\H\\Title\\N\\~~Body text~";
    let doc = registry.parse(source, "markup").unwrap();
    assert_eq!(registry.serialize(&doc, "markup").unwrap(), source);
}
