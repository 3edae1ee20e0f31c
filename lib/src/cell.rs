use crate::error::GridError;
use std::fmt;

/// The feedback given for a single letter of a guess.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum CellColor {
    /// The letter is in the word, at this location.
    Correct,
    /// The letter is in the word, but somewhere else.
    Misplaced,
    /// The letter is not in the word.
    Wrong,
    /// No feedback has been marked yet.
    #[default]
    Empty,
}

impl CellColor {
    /// Returns the next color in the click cycle:
    /// `Empty -> Correct -> Misplaced -> Wrong -> Empty`.
    pub fn cycled(self) -> CellColor {
        match self {
            CellColor::Empty => CellColor::Correct,
            CellColor::Correct => CellColor::Misplaced,
            CellColor::Misplaced => CellColor::Wrong,
            CellColor::Wrong => CellColor::Empty,
        }
    }

    /// Returns `true` iff feedback has been marked.
    pub fn is_marked(self) -> bool {
        self != CellColor::Empty
    }
}

/// One letter slot of a guess row.
///
/// A blank slot has no color of its own: it always reports [`CellColor::Empty`]. This makes it
/// impossible for a cleared letter to keep stale feedback.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Cell {
    #[default]
    Blank,
    Filled { letter: char, color: CellColor },
}

impl Cell {
    /// Creates a filled cell with no feedback yet.
    ///
    /// The letter is normalized to upper case. Only ASCII letters are supported.
    pub fn new(letter: char) -> Result<Cell, GridError> {
        Cell::with_color(letter, CellColor::Empty)
    }

    /// Creates a filled cell with the given feedback.
    pub fn with_color(letter: char, color: CellColor) -> Result<Cell, GridError> {
        if !letter.is_ascii_alphabetic() {
            return Err(GridError::UnsupportedCharacter(letter));
        }
        Ok(Cell::Filled {
            letter: letter.to_ascii_uppercase(),
            color,
        })
    }

    /// Returns the upper case letter in this cell, if any.
    pub fn letter(&self) -> Option<char> {
        match self {
            Cell::Blank => None,
            Cell::Filled { letter, .. } => Some(*letter),
        }
    }

    pub fn color(&self) -> CellColor {
        match self {
            Cell::Blank => CellColor::Empty,
            Cell::Filled { color, .. } => *color,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }

    /// Advances the color one step through the cycle. Blank cells are left untouched.
    pub fn cycle(&mut self) {
        if let Cell::Filled { color, .. } = self {
            *color = color.cycled();
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter() {
            Some(letter) => write!(f, "{}", letter),
            None => write!(f, " "),
        }
    }
}
