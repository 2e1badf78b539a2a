//! Parsed text segments.

use crate::palette::RESET;

/// A run of text sharing one color.
///
/// Borrows its text from the parsed input. `color` is the ANSI code to emit
/// before the text; untagged text carries the reset code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Text to write, tag openers already removed
    pub text: &'a str,
    /// ANSI escape code for this run
    pub color: &'static str,
}

impl<'a> Segment<'a> {
    /// Create a segment with an explicit color code.
    pub fn new(text: &'a str, color: &'static str) -> Self {
        Self { text, color }
    }

    /// Create an untagged segment (reset color).
    pub fn plain(text: &'a str) -> Self {
        Self::new(text, RESET)
    }

    /// Whether this segment renders in the default color.
    pub fn is_plain(&self) -> bool {
        self.color == RESET
    }
}
