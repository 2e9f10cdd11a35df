//! Sample documents assembled with the node builder
//!
//! Both documents exercise the full builder surface: highlight and local formatting,
//! blank-line separation, and wrapping of sentences longer than one line.

use medtext::builder::{BuilderOptions, NodeBuilder};
use medtext::model::Document;

/// A short chest radiology report.
pub fn diagnostic_report(options: BuilderOptions) -> Document {
    let mut nodes = NodeBuilder::new(options);
    nodes.start_document();

    // highlighted title
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
    // exceeds the line, starts a new one
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
    log::debug!("built diagnostic report with {} nodes", nodes.len());
    nodes.finish()
}

pub fn hello_world(options: BuilderOptions) -> Document {
    let mut nodes = NodeBuilder::new(options);
    nodes.start_document();

    nodes.start_highlight();
    nodes.add_text("Hello World!", 0);
    nodes.start_normal();

    nodes.end_document();
    nodes.finish()
}
