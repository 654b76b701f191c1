//! Width-aware reflowing of tagged terminal text.
//!
//! Reflows plain text into fixed-width lines while treating inline `<...>`
//! markup and terminal escape sequences as zero-width, so embedded
//! formatting codes survive wrapping intact. Callers pick the target width,
//! one of three indentation policies, a literal line prefix, and the break
//! characters through [`WrapOptions`]; [`effective_width`] exposes the
//! underlying raw-length accounting on its own.
//!
//! ```
//! use termwrap::{WrapOptions, wrap};
//!
//! let options = WrapOptions {
//!     width: Some(5),
//!     ignore_tags: true,
//!     ..WrapOptions::default()
//! };
//! assert_eq!(wrap("1<foo>23 56 89", &options).unwrap(), "1<foo>23\n56 89");
//! ```

#[macro_use]
mod macros;

mod break_point;
mod indent;
mod options;
mod scan;
mod width;
mod wrap;

pub use options::{WrapError, WrapOptions};
pub use width::effective_width;
pub use wrap::wrap;
