//! Property-based tests for the node builder
//!
//! Whatever sequence of operations is applied, the builder must never produce a logical
//! line longer than its maximum.

use medtext::builder::{find_split_index, BuilderOptions, BREAK_CHARACTERS};
use medtext::NodeBuilder;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Text(String, usize),
    Line(String, usize),
    Newline,
    LineBreak,
    Normal,
    Highlight,
    Italic,
    Underline,
    BoldItalic,
    ItalicUnderline,
    BoldItalicUnderline,
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9]{0,200}",
        "[a-zA-Z0-9 ,.!()]{0,200}",
        "([a-z]{1,12} ){0,30}",
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (text_strategy(), 0usize..6).prop_map(|(text, indent)| Op::Text(text, indent)),
        2 => (text_strategy(), 0usize..6).prop_map(|(text, indent)| Op::Line(text, indent)),
        1 => Just(Op::Newline),
        1 => Just(Op::LineBreak),
        1 => Just(Op::Normal),
        1 => Just(Op::Highlight),
        1 => Just(Op::Italic),
        1 => Just(Op::Underline),
        1 => Just(Op::BoldItalic),
        1 => Just(Op::ItalicUnderline),
        1 => Just(Op::BoldItalicUnderline),
    ]
}

fn apply(builder: &mut NodeBuilder, op: &Op) {
    match op {
        Op::Text(text, indent) => builder.add_text(text, *indent),
        Op::Line(text, indent) => builder.add_line(text, *indent),
        Op::Newline => builder.add_newline(),
        Op::LineBreak => builder.add_line_break(),
        Op::Normal => builder.start_normal(),
        Op::Highlight => builder.start_highlight(),
        Op::Italic => builder.start_italic(),
        Op::Underline => builder.start_underline(),
        Op::BoldItalic => builder.start_bold_italic(),
        Op::ItalicUnderline => builder.start_italic_underline(),
        Op::BoldItalicUnderline => builder.start_bold_italic_underline(),
    }
}

proptest! {
    #[test]
    fn builder_output_always_validates(
        line_length in 10usize..120,
        local in any::<bool>(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut builder = NodeBuilder::new(BuilderOptions {
            line_length,
            supports_local_escape_codes: local,
        });
        builder.start_document();
        for op in &ops {
            apply(&mut builder, op);
        }
        builder.end_document();

        prop_assert!(builder.validate().is_ok(), "{:?}", builder.validate());
    }

    #[test]
    fn split_index_stays_in_window(
        text in "[a-z ,.]{2,150}",
        max in 1usize..100,
        indent in 0usize..5,
    ) {
        prop_assume!(indent < max);
        let split = find_split_index(&text, max, indent);
        prop_assert!(split > indent);
        prop_assert!(split <= max);

        let chars: Vec<char> = text.chars().collect();
        if split < max {
            prop_assert!(BREAK_CHARACTERS.contains(&chars[split]));
        }
    }

    #[test]
    fn add_line_break_never_leaves_three_breaks(
        breaks in prop::collection::vec(any::<bool>(), 1..10),
    ) {
        let mut builder = NodeBuilder::default();
        for newline_first in breaks {
            if newline_first {
                builder.add_newline();
            }
            builder.add_line_break();
            builder.add_text("x", 0);
        }
        let nodes = builder.nodes();
        prop_assert!(!nodes.windows(3).any(|w| w.iter().all(|n| n.is_line_break())));
    }
}
