/// Letter names of the musical alphabet
///
/// The alphabet is cyclic (A B C D E F G A ...). Two index schemes are used:
/// - `index()` counts from A, matching the cyclic successor
/// - `staff_index()` counts from C, because octave numbers roll over at C

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

/// Order in which sharps are added to a key signature.
/// Flats are added in the reverse order.
pub const SHARP_ORDER: [Letter; 7] = [
    Letter::F,
    Letter::C,
    Letter::G,
    Letter::D,
    Letter::A,
    Letter::E,
    Letter::B,
];

const ALPHABET: [Letter; 7] = [
    Letter::A,
    Letter::B,
    Letter::C,
    Letter::D,
    Letter::E,
    Letter::F,
    Letter::G,
];

impl Letter {
    /// Parse a single uppercase letter (case-sensitive)
    pub fn from_char(c: char) -> Option<Letter> {
        match c {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
        }
    }

    /// Position in the alphabet counted from A (A=0 .. G=6)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Position on the staff within one octave, counted from C (C=0 .. B=6)
    pub fn staff_index(&self) -> i32 {
        (self.index() as i32 + 5) % 7
    }

    /// Next letter in the cyclic alphabet (G wraps to A)
    pub fn next(&self) -> Letter {
        ALPHABET[(self.index() + 1) % 7]
    }

    /// True for B and E, the letters a natural half step below their successor
    pub fn half_step_to_next(&self) -> bool {
        matches!(self, Letter::B | Letter::E)
    }

    /// Position of this letter in the sharp order (F=0 .. B=6)
    pub fn sharp_order_position(&self) -> usize {
        match self {
            Letter::F => 0,
            Letter::C => 1,
            Letter::G => 2,
            Letter::D => 3,
            Letter::A => 4,
            Letter::E => 5,
            Letter::B => 6,
        }
    }

    /// Circle-of-fifths position of the natural letter relative to C
    pub fn fifths(&self) -> i32 {
        self.sharp_order_position() as i32 - 1
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
