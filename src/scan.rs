//! Zero-width span recognition.
//!
//! Two recognizers back the width calculator: [`tag_len`] for inline `<...>`
//! markup and [`invisible_run`] for terminal control sequences. Both are
//! pure positional scans over a char slice that report consumed length and
//! nothing else, so each can be exercised in isolation.

/// Escape introducer for CSI control sequences.
pub(crate) const ESC: char = '\u{1b}';

/// Sentinel standing in for a deferred style-reset sequence.
///
/// Renderers place this marker where a reset escape will eventually be
/// written. It occupies one character in the text but is charged
/// [`RESET_RAW_LEN`] raw units, mirroring the sequence it expands to.
pub(crate) const RESET: char = '\0';

/// Raw units charged for one reset sentinel.
///
/// Adjust here if a target environment expands the sentinel into a
/// differently sized reset sequence.
pub(crate) const RESET_RAW_LEN: usize = 2;

/// A recognized invisible span.
///
/// `advance` is the number of characters consumed from the text; `raw` is
/// the length charged against raw-width accounting. The two differ only
/// for the reset sentinel.
pub(crate) struct InvisibleRun {
    pub advance: usize,
    pub raw: usize,
}

/// Length of the markup tag starting at `pos`, if one is present.
///
/// A tag opens with `<`, is disqualified by whitespace immediately after
/// the opener, and must close with `>` before the end of the line.
/// Anything else leaves the `<` to be counted as an ordinary visible
/// character by the caller.
pub(crate) fn tag_len(chars: &[char], pos: usize) -> Option<usize> {
    if chars.get(pos) != Some(&'<') {
        return None;
    }
    match chars.get(pos + 1) {
        Some(c) if !c.is_whitespace() => {}
        _ => return None,
    }
    let mut end = pos + 1;
    while end < chars.len() {
        match chars[end] {
            '>' => return Some(end - pos + 1),
            '\n' => return None,
            _ => end += 1,
        }
    }
    None
}

/// The invisible run starting at `pos`, if the character opens one.
///
/// Recognizes `ESC [ <params> <final>` control sequences, the reset
/// sentinel, and bare control characters. A sequence truncated by the end
/// of the text is consumed as far as the text reaches.
pub(crate) fn invisible_run(chars: &[char], pos: usize) -> Option<InvisibleRun> {
    match chars.get(pos)? {
        &RESET => Some(InvisibleRun {
            advance: 1,
            raw: RESET_RAW_LEN,
        }),
        &ESC if chars.get(pos + 1) == Some(&'[') => {
            let mut end = pos + 2;
            while end < chars.len() && matches!(chars[end], '0'..='9' | ':'..='?') {
                end += 1;
            }
            while end < chars.len() && matches!(chars[end], ' '..='/') {
                end += 1;
            }
            if end < chars.len() && matches!(chars[end], '@'..='~') {
                end += 1;
            }
            let len = end - pos;
            Some(InvisibleRun {
                advance: len,
                raw: len,
            })
        }
        c if c.is_control() => Some(InvisibleRun { advance: 1, raw: 1 }),
        _ => None,
    }
}
