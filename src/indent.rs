//! Per-line indent resolution.
//!
//! Computes the leading indent applied to the first emitted line of a
//! logical line and to each wrapped continuation, covering the constant,
//! hanging, and smart (marker-derived) policies.

use std::sync::LazyLock;

use regex::Regex;

use crate::options::WrapOptions;

// List markers: optional indentation, a bullet or ordinal, and the spacing
// that follows it. Tag spans after the marker sit outside the capture and
// contribute nothing, so continuations align under the marker's content.
static MARKER_RE: LazyLock<Regex> = lazy_regex!(
    r"^(\s*(?:[-*+]|\d+[.)])\s+)",
    "marker pattern regex should compile",
);

/// Indent strings for one logical line: `first` opens it, `rest` opens each
/// wrapped continuation.
pub(crate) struct LineIndents {
    pub first: String,
    pub rest: String,
}

pub(crate) fn line_indents(line: &str, options: &WrapOptions) -> LineIndents {
    if options.indent > 0 {
        let pad = " ".repeat(options.indent);
        return LineIndents {
            first: pad.clone(),
            rest: pad,
        };
    }
    if options.hanging_indent > 0 {
        return LineIndents {
            first: String::new(),
            rest: " ".repeat(options.hanging_indent),
        };
    }
    if options.smart_indent {
        return LineIndents {
            first: String::new(),
            rest: " ".repeat(marker_width(line)),
        };
    }
    LineIndents {
        first: String::new(),
        rest: String::new(),
    }
}

/// Visible width of the list marker opening `line`, or zero without one.
fn marker_width(line: &str) -> usize {
    MARKER_RE.captures(line).map_or(0, |cap| cap[1].chars().count())
}
