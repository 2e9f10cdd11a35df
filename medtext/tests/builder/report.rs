//! Builds a complete diagnostic report and checks the resulting markup

use medtext::formats::markup::{decode, encode};
use medtext::model::{EscapeCatalog, Node};
use medtext::{Document, NodeBuilder};

fn diagnostic_report() -> Document {
    let mut nodes = NodeBuilder::default().with_local_escape_codes(true);
    nodes.start_document();

    nodes.start_highlight();
    nodes.add_text("***** DIAGNOSTIC REPORT******", 0);
    nodes.start_normal();
    nodes.add_line_break();

    nodes.start_underline();
    nodes.add_text("Attending Physician", 0);
    nodes.start_normal();
    nodes.add_text(": LARRY CARLIN", 0);
    nodes.add_line_break();

    nodes.add_text("Compared to a prior study of ", 0);
    nodes.start_italic();
    nodes.add_text("02/22/94", 0);
    nodes.start_normal();
    nodes.add_text(".  A small pneumothorax is seen at the", 0);
    nodes.add_text(
        " right apex.  Atelecatic changes are seen in the right mid lung and also in the left base.",
        0,
    );
    nodes.add_line_break();

    nodes.add_text(
        "Mediastinal and right thoracic chest tubes are also noted as before.",
        0,
    );
    nodes.add_newline();
    nodes.add_text(
        "Multiple surgical clips are seen in the lower thoracic region due to prior esophageal surgery.",
        0,
    );
    nodes.add_line_break();

    nodes.add_text(
        "No evidence of florid CHF.  No evidence of new parenchymal opacity since the prior study. The NG tube is also visualized as before.",
        0,
    );
    nodes.add_line_break();

    nodes.add_line("  Signed: R.A. Kolarshky, M.D.", 0);
    nodes.add_line("Cosigned: Victoria V. Venestia, M.D.", 0);
    nodes.end_document();

    nodes.validate().unwrap();
    nodes.finish()
}

#[test]
fn test_report_heading_markup() {
    let markup = encode(&diagnostic_report());
    assert!(markup.starts_with(
        "\\H\\***** DIAGNOSTIC REPORT******\\N\\~~\\ZU\\Attending Physician\\N\\: LARRY CARLIN~~"
    ));
    assert!(markup.contains(
        "Compared to a prior study of \\ZI\\02/22/94\\N\\.  A small pneumothorax is seen at the~ right apex."
    ));
    assert!(markup.ends_with(
        "~  Signed: R.A. Kolarshky, M.D.~Cosigned: Victoria V. Venestia, M.D.~~"
    ));
}

#[test]
fn test_report_wraps_long_sentences() {
    let markup = encode(&diagnostic_report());
    assert!(markup.contains("due to prior esophageal~ surgery.~~"));
    assert!(markup.contains("since the prior study.~ The NG tube is also visualized as before.~~"));
}

#[test]
fn test_report_lines_fit() {
    let markup = encode(&diagnostic_report());
    for line in markup.split('~') {
        let visible: String = line
            .split('\\')
            .enumerate()
            .filter(|(index, _)| index % 2 == 0)
            .map(|(_, part)| part)
            .collect();
        assert!(visible.chars().count() <= 92, "line too long: {line:?}");
    }
}

#[test]
fn test_report_decodes_to_same_nodes() {
    let report = diagnostic_report();
    let decoded = decode(&encode(&report), EscapeCatalog::standard()).unwrap();
    assert_eq!(decoded, report);
}

#[test]
fn test_hello_world() {
    let mut nodes = NodeBuilder::default();
    nodes.start_document();
    nodes.start_highlight();
    nodes.add_text("Hello World!", 0);
    nodes.start_normal();
    nodes.end_document();

    let doc = nodes.finish();
    assert_eq!(doc.nodes().last(), Some(&Node::DocumentEnd));
    assert_eq!(encode(&doc), "\\H\\Hello World!\\N\\~");
}
