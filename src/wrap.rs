//! The wrap engine.
//!
//! Splits input into logical lines, budgets each emitted line (resolved
//! width minus prefix and indent), asks [`crate::break_point`] where to
//! cut, and reassembles the result with indents and prefixes applied.
//! Paragraph breaks — blank lines — pass through verbatim and are never
//! wrapped across.

use crate::break_point::find_split;
use crate::indent::line_indents;
use crate::options::{WrapError, WrapOptions};

/// Reflow `text` to the width prescribed by `options`.
///
/// Escape sequences and reset sentinels are always zero-width in the
/// accounting; `<...>` tags additionally become zero-width under
/// `ignore_tags`. Pre-existing newlines are respected: every input line
/// wraps independently under the same budget, and blank lines separate
/// paragraphs, passing through untouched apart from the configured prefix.
/// When neither `width` nor `terminal_width` is supplied the input is
/// returned unchanged.
///
/// # Errors
///
/// Returns [`WrapError::ConflictingIndentModes`] before any processing
/// when more than one indent mode is configured. Malformed markup and
/// stray control bytes are not errors; they degrade to literal-character
/// treatment.
///
/// # Examples
///
/// ```
/// use termwrap::{WrapOptions, wrap};
///
/// let options = WrapOptions {
///     width: Some(5),
///     ..WrapOptions::default()
/// };
/// assert_eq!(wrap("123 56 89", &options).unwrap(), "123\n56 89");
/// ```
pub fn wrap(text: &str, options: &WrapOptions) -> Result<String, WrapError> {
    options.validate()?;
    let Some(width) = resolved_width(options) else {
        return Ok(text.to_string());
    };

    let prefix_width = options.prefix.chars().count();
    let mut out = Vec::new();
    for line in text.split('\n') {
        if line.trim().is_empty() {
            out.push(options.prefix.clone());
            continue;
        }
        wrap_line(line, width, prefix_width, options, &mut out);
    }
    Ok(out.join("\n"))
}

/// The column count to wrap at: the requested width capped by the
/// externally reported terminal width, either one alone, or `None` for
/// pass-through.
fn resolved_width(options: &WrapOptions) -> Option<usize> {
    match (options.width, options.terminal_width) {
        (Some(requested), Some(reported)) => Some(requested.min(reported)),
        (requested, reported) => requested.or(reported),
    }
}

fn wrap_line(
    line: &str,
    width: usize,
    prefix_width: usize,
    options: &WrapOptions,
    out: &mut Vec<String>,
) {
    let indents = line_indents(line, options);
    let chars: Vec<char> = line.chars().collect();
    let mut rest = chars.as_slice();
    let mut first = true;
    loop {
        let indent = if first {
            indents.first.as_str()
        } else {
            indents.rest.as_str()
        };
        let budget = width.saturating_sub(prefix_width + indent.len()).max(1);
        let Some(split) = find_split(rest, budget, options) else {
            out.push(compose(&options.prefix, indent, rest));
            return;
        };
        out.push(compose(&options.prefix, indent, &rest[..split.end]));
        rest = &rest[split.resume..];
        if rest.is_empty() {
            return;
        }
        first = false;
    }
}

fn compose(prefix: &str, indent: &str, content: &[char]) -> String {
    let mut line = String::with_capacity(prefix.len() + indent.len() + content.len());
    line.push_str(prefix);
    line.push_str(indent);
    line.extend(content);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_width_caps_the_request() {
        let options = WrapOptions {
            width: Some(20),
            terminal_width: Some(5),
            ..WrapOptions::default()
        };
        assert_eq!(wrap("123-56 89", &options).unwrap(), "123-\n56 89");
    }

    #[test]
    fn terminal_width_stands_in_for_a_missing_request() {
        let options = WrapOptions {
            terminal_width: Some(5),
            ..WrapOptions::default()
        };
        assert_eq!(wrap("123 56 89", &options).unwrap(), "123\n56 89");
    }

    #[test]
    fn no_width_at_all_passes_through() {
        let text = "some text well over any width";
        assert_eq!(wrap(text, &WrapOptions::default()).unwrap(), text);
    }

    #[test]
    fn validation_precedes_pass_through() {
        let options = WrapOptions {
            indent: 1,
            hanging_indent: 1,
            ..WrapOptions::default()
        };
        assert_eq!(wrap("hi", &options), Err(WrapError::ConflictingIndentModes));
    }

    #[test]
    fn blank_lines_carry_the_prefix() {
        let options = WrapOptions {
            width: Some(6),
            prefix: "# ".to_string(),
            ..WrapOptions::default()
        };
        assert_eq!(wrap("1234\n\n5678", &options).unwrap(), "# 1234\n# \n# 5678");
    }

    #[test]
    fn whitespace_only_lines_normalize_to_blank() {
        let options = WrapOptions {
            width: Some(5),
            ..WrapOptions::default()
        };
        assert_eq!(wrap("a\n   \nb", &options).unwrap(), "a\n\nb");
    }
}
