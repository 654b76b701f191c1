//! Wrapping configuration and its validation.

use thiserror::Error;

/// Configuration failure raised before any text is processed.
///
/// Values are `Clone + PartialEq` so callers and tests can match on them
/// directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WrapError {
    /// More than one of `indent`, `hanging_indent`, and `smart_indent` was
    /// set. The modes are mutually exclusive; there is no precedence among
    /// them.
    #[error("multiple indent modes active; set at most one of indent, hanging_indent, smart_indent")]
    ConflictingIndentModes,
}

/// Options for one [`wrap`](crate::wrap()) call.
///
/// All fields are optional in spirit: the `Default` value wraps nothing
/// (no width, no terminal clamp) and applies no indent, prefix, or extra
/// break characters.
#[derive(Debug, Clone, Default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "the wrap surface exposes four independent flags"
)]
pub struct WrapOptions {
    /// Target column count. `None` leaves the text unwrapped unless
    /// [`terminal_width`](Self::terminal_width) supplies one.
    pub width: Option<usize>,
    /// Externally reported terminal column count. Caps `width` when both
    /// are set and stands in for it when `width` is unset. The engine
    /// never probes the terminal itself.
    pub terminal_width: Option<usize>,
    /// Constant leading space run applied to every line.
    pub indent: usize,
    /// Leading space run applied to every line after the first of each
    /// logical line.
    pub hanging_indent: usize,
    /// Derive a hanging indent from a detected list marker, so wrapped
    /// continuations align under the marker's content.
    pub smart_indent: bool,
    /// Literal string prepended to every output line, ahead of any indent.
    pub prefix: String,
    /// Treat `<...>` markup tags as zero-width when accounting for line
    /// width.
    pub ignore_tags: bool,
    /// Let a token with no eligible break run past the width on its own
    /// line instead of force-splitting it.
    pub allow_overflow: bool,
    /// Disable the hyphen as a break point; spaces (and any
    /// [`break_characters`](Self::break_characters)) still apply.
    pub break_spaces_only: bool,
    /// Additional characters usable as break points, kept at the end of
    /// the line like hyphens.
    pub break_characters: Vec<char>,
}

impl WrapOptions {
    /// Check the indent-mode invariant: at most one of `indent`,
    /// `hanging_indent`, and `smart_indent` may be active.
    ///
    /// # Errors
    ///
    /// Returns [`WrapError::ConflictingIndentModes`] when two or more are
    /// set, regardless of the other fields.
    pub fn validate(&self) -> Result<(), WrapError> {
        let active = usize::from(self.indent > 0)
            + usize::from(self.hanging_indent > 0)
            + usize::from(self.smart_indent);
        if active > 1 {
            return Err(WrapError::ConflictingIndentModes);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_modes_validate() {
        for options in [
            WrapOptions::default(),
            WrapOptions {
                indent: 2,
                ..WrapOptions::default()
            },
            WrapOptions {
                hanging_indent: 2,
                ..WrapOptions::default()
            },
            WrapOptions {
                smart_indent: true,
                ..WrapOptions::default()
            },
        ] {
            assert_eq!(options.validate(), Ok(()));
        }
    }

    #[test]
    fn paired_modes_conflict() {
        let options = WrapOptions {
            indent: 1,
            smart_indent: true,
            ..WrapOptions::default()
        };
        assert_eq!(options.validate(), Err(WrapError::ConflictingIndentModes));
    }

    #[test]
    fn error_names_the_problem() {
        assert!(
            WrapError::ConflictingIndentModes
                .to_string()
                .contains("multiple indent modes")
        );
    }
}
