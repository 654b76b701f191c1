//! Integration tests for the effective-width probe.

use rstest::rstest;
use termwrap::effective_width;

#[rstest]
#[case(4, "1234 67 9012")]
#[case(5, "1234 67 9012")]
#[case(6, "1234 67 9012")]
#[case(4, "12<4>67 9012")]
#[case(5, "12<4>67 9012")]
fn reflects_the_width_when_tags_are_not_ignored(#[case] width: usize, #[case] text: &str) {
    assert_eq!(effective_width(text, width, false), width);
}

#[rstest]
#[case(4, "1234 67 9012", 4)]
#[case(5, "1234 67 9012", 5)]
#[case(4, "12<4>67 9012", 7)]
#[case(5, "12<4>67 9012", 8)]
#[case(5, "12<4>6<tag>2 4567", 13)]
#[case(5, "12<4><tag>1 3456", 13)]
// tag characters, but no tag
#[case(5, "6 < 12, 12 > 6", 5)]
// possible start of tag, but it runs off the line
#[case(5, "6 <IamNotATag", 5)]
// invisible characters
#[case(5, "\u{1b}[1mfooto", 9)]
#[case(5, "\u{1b}[1mfooto\0", 11)]
#[case(5, "\u{1b}[1m<tag>footo\0", 16)]
fn charges_tags_and_escapes_against_the_raw_count(
    #[case] width: usize,
    #[case] text: &str,
    #[case] expected: usize,
) {
    assert_eq!(effective_width(text, width, true), expected);
}

#[test]
fn short_text_is_consumed_in_full() {
    assert_eq!(effective_width("12<tag>3", 9, true), 8);
}
