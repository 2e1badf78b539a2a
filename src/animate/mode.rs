//! Animation units: characters, words or sentences.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Sentence terminators.
const SENTENCE_DELIMITERS: [char; 3] = ['.', '!', '?'];

/// How text is split into animation units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One character per unit
    #[default]
    Char,
    /// Space-separated words
    Word,
    /// Text up to and including `.`, `!` or `?`
    Sentence,
}

impl Mode {
    /// Every mode.
    pub const ALL: [Mode; 3] = [Mode::Char, Mode::Word, Mode::Sentence];

    /// Name used on the command line and in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Word => "word",
            Self::Sentence => "sentence",
        }
    }

    /// Text written after every unit.
    pub fn separator(&self) -> &'static str {
        match self {
            Self::Char => "",
            Self::Word | Self::Sentence => " ",
        }
    }

    /// Split segment text into units, in order.
    pub fn units<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            Self::Char => text
                .char_indices()
                .map(|(i, c)| &text[i..i + c.len_utf8()])
                .collect(),
            Self::Word => text.split(' ').collect(),
            Self::Sentence => sentences(text),
        }
    }
}

/// Sentences with their terminators. A trailing fragment without a
/// terminator is dropped; leading whitespace stays with its sentence.
fn sentences(text: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if SENTENCE_DELIMITERS.contains(&c) {
            let end = i + c.len_utf8();
            units.push(&text[start..end]);
            start = end;
        }
    }

    units
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|m| m.name() == s).ok_or_else(|| {
            Error::invalid_input(format!(
                "Invalid mode '{}'. Valid: 'char', 'word', 'sentence'.",
                s
            ))
        })
    }
}
