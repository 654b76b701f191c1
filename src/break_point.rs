//! Break-point selection under a visible-column budget.

use crate::options::WrapOptions;
use crate::scan::{invisible_run, tag_len};
use crate::width::consume;

/// A chosen split: the emitted line ends at `end` and the next line resumes
/// at `resume`. Any gap between the two is a dropped run of break spaces.
pub(crate) struct Split {
    pub end: usize,
    pub resume: usize,
}

/// One step of the break scan.
enum Step {
    /// A tag or invisible run ending at the carried position.
    Span(usize),
    /// A run of spaces ending at the carried position.
    SpaceRun(usize),
    /// A hyphen or configured break character.
    BreakChar,
    /// An ordinary visible character.
    Plain,
}

/// Find where to split `chars` so the first piece fits `budget` visible
/// columns. Returns `None` when the whole slice fits.
///
/// The rightmost eligible break at or before the budget boundary wins. A
/// run of spaces breaks ahead of itself and is dropped whole; a hyphen or
/// configured break character stays at the end of the line. Either is
/// eligible only after some non-space content, so leading whitespace never
/// opens a break. Without an eligible break, `allow_overflow` runs the
/// oversized token through to its own end, otherwise the cut is forced at
/// the boundary. The scan steps over tags and invisible runs whole, so a
/// break character inside one is never a candidate and a forced cut cannot
/// land inside one.
pub(crate) fn find_split(chars: &[char], budget: usize, options: &WrapOptions) -> Option<Split> {
    let limit = consume(chars, budget, options.ignore_tags).pos;
    if limit >= chars.len() {
        return None;
    }

    let mut best = None;
    let mut content = false;
    let mut pos = 0;
    while pos <= limit {
        match step(chars, pos, options) {
            Step::Span(next) => {
                content = true;
                pos = next;
            }
            Step::SpaceRun(next) => {
                if content {
                    best = Some(Split {
                        end: pos,
                        resume: next,
                    });
                }
                pos = next;
            }
            Step::BreakChar => {
                if content && pos < limit {
                    best = Some(Split {
                        end: pos + 1,
                        resume: pos + 1,
                    });
                }
                content = true;
                pos += 1;
            }
            Step::Plain => {
                content = true;
                pos += 1;
            }
        }
    }

    if best.is_some() {
        return best;
    }
    if options.allow_overflow {
        while pos < chars.len() {
            match step(chars, pos, options) {
                Step::Span(next) => {
                    content = true;
                    pos = next;
                }
                Step::SpaceRun(next) => {
                    if content {
                        return Some(Split {
                            end: pos,
                            resume: next,
                        });
                    }
                    pos = next;
                }
                Step::BreakChar => {
                    if content {
                        return Some(Split {
                            end: pos + 1,
                            resume: pos + 1,
                        });
                    }
                    content = true;
                    pos += 1;
                }
                Step::Plain => {
                    content = true;
                    pos += 1;
                }
            }
        }
        return None;
    }
    Some(Split {
        end: limit,
        resume: limit,
    })
}

fn step(chars: &[char], pos: usize, options: &WrapOptions) -> Step {
    if options.ignore_tags && let Some(len) = tag_len(chars, pos) {
        return Step::Span(pos + len);
    }
    if let Some(run) = invisible_run(chars, pos) {
        return Step::Span(pos + run.advance);
    }
    if chars[pos] == ' ' {
        let mut end = pos + 1;
        while end < chars.len() && chars[end] == ' ' {
            end += 1;
        }
        return Step::SpaceRun(end);
    }
    if is_break_char(chars[pos], options) {
        return Step::BreakChar;
    }
    Step::Plain
}

fn is_break_char(c: char, options: &WrapOptions) -> bool {
    (c == '-' && !options.break_spaces_only) || options.break_characters.contains(&c)
}
