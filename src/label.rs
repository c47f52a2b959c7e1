//! Positional answer labels (A..Z).
//!
//! A label is nothing more than an index into the Latin alphabet. Blanks and
//! answers never carry an identity of their own; the n-th blank gets the n-th
//! label. There is no label after Z.

use std::fmt;

/// Number of labels available.
pub const LABEL_COUNT: usize = 26;

/// Circled numbers recognized as answer labels, in label order (① = A).
const CIRCLED_NUMBERS: [char; 20] = [
    '①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨', '⑩', //
    '⑪', '⑫', '⑬', '⑭', '⑮', '⑯', '⑰', '⑱', '⑲', '⑳',
];

/// A blank/answer label, `A` through `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(u8);

impl Label {
    /// Returns the label for a zero-based position, or `None` past `Z`.
    pub fn nth(index: usize) -> Option<Self> {
        (index < LABEL_COUNT).then(|| Self(index as u8))
    }

    /// Parses an ASCII letter of either case.
    pub fn from_letter(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Maps a one-based number (1 = A) to its label.
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1..=26 => Self::nth(n as usize - 1),
            _ => None,
        }
    }

    /// Maps a circled number (① through ⑳) to its label.
    pub fn from_circled(c: char) -> Option<Self> {
        CIRCLED_NUMBERS
            .iter()
            .position(|&circled| circled == c)
            .and_then(Self::nth)
    }

    /// Zero-based position of this label.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The label letter.
    pub fn as_char(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// True for the circled numbers that can label an answer.
pub fn is_circled_number(c: char) -> bool {
    CIRCLED_NUMBERS.contains(&c)
}
