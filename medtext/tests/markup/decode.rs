//! Decoding tests for the markup format (markup → nodes)

use medtext::format::Format;
use medtext::formats::markup::{decode, MarkupFormat};
use medtext::model::{EscapeCatalog, EscapeSequence, Node};

fn nodes(source: &str) -> Vec<Node> {
    decode(source, EscapeCatalog::standard())
        .unwrap()
        .into_nodes()
}

#[test]
fn test_separator_inside_highlight() {
    assert_eq!(
        nodes("\\H\\Hello~World\\N\\"),
        vec![
            Node::DocumentStart,
            Node::escape(vec![EscapeSequence::HIGHLIGHT]),
            Node::text("Hello"),
            Node::LineBreak,
            Node::text("World"),
            Node::escape(vec![EscapeSequence::NORMAL]),
            Node::DocumentEnd,
        ]
    );
}

#[test]
fn test_report_heading() {
    let source = "\\H\\***** DIAGNOSTIC REPORT******\\N\\~~\\ZU\\Attending Physician\\N\\: LARRY CARLIN~";
    assert_eq!(
        nodes(source),
        vec![
            Node::DocumentStart,
            Node::escape(vec![EscapeSequence::HIGHLIGHT]),
            Node::text("***** DIAGNOSTIC REPORT******"),
            Node::escape(vec![EscapeSequence::NORMAL]),
            Node::LineBreak,
            Node::LineBreak,
            Node::escape(vec![EscapeSequence::LOCAL, EscapeSequence::UNDERLINE]),
            Node::text("Attending Physician"),
            Node::escape(vec![EscapeSequence::NORMAL]),
            Node::text(": LARRY CARLIN"),
            Node::LineBreak,
            Node::DocumentEnd,
        ]
    );
}

#[test]
fn test_lowercase_codes_resolve() {
    assert_eq!(
        nodes("\\zhi\\x")[1],
        Node::escape(vec![
            EscapeSequence::LOCAL,
            EscapeSequence::HIGHLIGHT,
            EscapeSequence::ITALIC,
        ])
    );
}

#[test]
fn test_unknown_codes_are_dropped() {
    assert_eq!(
        nodes("\\HQ\\x")[1],
        Node::escape(vec![EscapeSequence::HIGHLIGHT])
    );
    assert_eq!(nodes("\\Q\\x")[1], Node::escape(vec![]));
}

#[test]
fn test_line_terminators() {
    assert_eq!(
        nodes("a\nb\rc"),
        vec![
            Node::DocumentStart,
            Node::text("a"),
            Node::LineBreak,
            Node::text("b"),
            Node::LineBreak,
            Node::text("c"),
            Node::DocumentEnd,
        ]
    );
}

#[test]
fn test_crlf_folds_to_space() {
    assert_eq!(
        nodes("first\r\nsecond"),
        vec![
            Node::DocumentStart,
            Node::text("first second"),
            Node::DocumentEnd,
        ]
    );
}

#[test]
fn test_unterminated_escape_is_flushed() {
    let decoded = nodes("x\\H");
    assert_eq!(decoded[1], Node::text("x"));
    assert_eq!(decoded[2], Node::escape(vec![EscapeSequence::HIGHLIGHT]));
    assert_eq!(decoded[3], Node::DocumentEnd);
}

#[test]
fn test_empty_escape_stays_unresolved() {
    let decoded = nodes("\\\\x");
    assert_eq!(decoded[1], Node::unresolved_escape(""));
    assert_eq!(decoded[1].rendered_length(), 0);
}

#[test]
fn test_format_parse_matches_decode() {
    let source = "\\H\\Title\\N\\~Body";
    assert_eq!(MarkupFormat.parse(source).unwrap().into_nodes(), nodes(source));
}
