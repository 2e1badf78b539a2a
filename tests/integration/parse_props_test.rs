//! Property-based tests for the tag parser
//!
//! Inputs are built from tagged and untagged pieces, so the expected
//! plain text and colors are known up front.

use proptest::prelude::*;

use typeanim::{parse_colors, strip_tags, Color, Mode, Segment, Speed, RESET};

use crate::helpers::animate;

/// Tag names: mostly real colors, sometimes unknown word characters.
fn tag_name() -> impl Strategy<Value = String> {
    let known: Vec<String> = Color::ALL.iter().map(|c| c.name().to_string()).collect();
    prop_oneof![
        3 => prop::sample::select(known),
        1 => "[a-z0-9_]{1,8}",
    ]
}

/// Text that cannot form a tag opener on its own.
fn piece_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,?é]{0,12}"
}

fn pieces() -> impl Strategy<Value = Vec<(Option<String>, String)>> {
    prop::collection::vec((prop::option::of(tag_name()), piece_text()), 0..8)
}

fn build(pieces: &[(Option<String>, String)]) -> (String, String) {
    let mut input = String::new();
    let mut plain = String::new();
    for (name, text) in pieces {
        if let Some(name) = name {
            input.push_str(&format!("!/{}\\!", name));
        }
        input.push_str(text);
        plain.push_str(text);
    }
    (input, plain)
}

proptest! {
    #[test]
    fn segments_rebuild_input_without_openers(pieces in pieces()) {
        let (input, plain) = build(&pieces);
        let joined: String = parse_colors(&input).iter().map(|s| s.text).collect();
        prop_assert_eq!(&joined, &plain);
        prop_assert_eq!(strip_tags(&input), plain);
    }

    #[test]
    fn tag_free_text_is_one_plain_segment(s in "[a-zA-Z0-9 .,?!/]{1,60}") {
        prop_assume!(!s.contains("!/"));
        prop_assert_eq!(parse_colors(&s), vec![Segment::new(&s, RESET)]);
    }

    #[test]
    fn each_tag_gets_its_color_or_reset(name in tag_name(), text in piece_text()) {
        let input = format!("!/{}\\!{}", name, text);
        let segments = parse_colors(&input);
        prop_assert_eq!(segments, vec![Segment::new(&text, Color::code_for(&name))]);
    }

    #[test]
    fn char_mode_writes_one_reset_per_character(pieces in pieces()) {
        let (input, plain) = build(&pieces);
        let (out, pauses) = animate(&input, Speed::Fast, Mode::Char);

        let chars = plain.chars().count();
        prop_assert_eq!(pauses.len(), chars);
        // Untagged units use reset as their color too, so count trailing resets only
        let trailing_resets = out.matches(RESET).count()
            - parse_colors(&input)
                .iter()
                .filter(|s| s.is_plain())
                .map(|s| s.text.chars().count())
                .sum::<usize>();
        prop_assert_eq!(trailing_resets, chars);
        prop_assert!(out.ends_with('\n'));
    }
}
