use crate::cell::{Cell, CellColor};
use crate::error::GridError;
use std::fmt;

/// The number of letters in every guess.
pub const WORD_LENGTH: usize = 5;

/// Exactly five cells representing one guess.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Default)]
pub struct GuessRow {
    cells: [Cell; WORD_LENGTH],
}

impl GuessRow {
    /// Creates an all-blank row.
    pub fn new() -> GuessRow {
        GuessRow::default()
    }

    /// Creates a row with the given word and colors. Mostly useful for building up history
    /// outside of the grid, e.g. in tests.
    pub fn from_parts(word: &str, colors: [CellColor; WORD_LENGTH]) -> Result<GuessRow, GridError> {
        let mut row = GuessRow::new();
        let mut num_letters = 0;
        for (index, letter) in word.chars().enumerate() {
            if index >= WORD_LENGTH {
                return Err(GridError::IndexOutOfRange(index));
            }
            row.cells[index] = Cell::with_color(letter, colors[index])?;
            num_letters += 1;
        }
        if num_letters < WORD_LENGTH {
            return Err(GridError::IncompleteWord);
        }
        Ok(row)
    }

    pub fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    /// Returns the cell at the given index, if it exists.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Sets or clears the letter at the given index.
    ///
    /// Any change to a slot's letter resets its feedback to [`CellColor::Empty`], including
    /// re-typing the same letter.
    pub fn set_letter(&mut self, index: usize, letter: Option<char>) -> Result<(), GridError> {
        let new_cell = match letter {
            Some(letter) => Cell::new(letter)?,
            None => Cell::Blank,
        };
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GridError::IndexOutOfRange(index))?;
        *cell = new_cell;
        Ok(())
    }

    /// Blanks the slot at the given index. Indices past the end are ignored.
    pub fn clear(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Blank;
        }
    }

    /// Advances the feedback color of the cell at the given index. Blank cells are unaffected.
    pub fn cycle_color(&mut self, index: usize) -> Result<(), GridError> {
        self.cells
            .get_mut(index)
            .ok_or(GridError::IndexOutOfRange(index))?
            .cycle();
        Ok(())
    }

    /// Returns the index of the first blank slot, if any.
    pub fn first_blank(&self) -> Option<usize> {
        self.cells.iter().position(Cell::is_blank)
    }

    /// Returns the index of the last filled slot, if any.
    pub fn last_filled(&self) -> Option<usize> {
        self.cells.iter().rposition(|cell| !cell.is_blank())
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_blank)
    }

    /// Returns `true` iff every slot holds a letter.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_blank())
    }

    /// Returns `true` iff every slot holds a letter with feedback marked.
    pub fn is_complete(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| !cell.is_blank() && cell.color().is_marked())
    }

    /// Checks that this row may be committed.
    ///
    /// Missing letters are reported before missing feedback.
    pub fn validate(&self) -> Result<(), GridError> {
        if !self.is_full() {
            return Err(GridError::IncompleteWord);
        }
        if !self.is_complete() {
            return Err(GridError::IncompleteFeedback);
        }
        Ok(())
    }

    /// The letters typed so far, in upper case. Blank slots are skipped.
    pub fn word(&self) -> String {
        self.cells.iter().filter_map(Cell::letter).collect()
    }

    pub fn colors(&self) -> [CellColor; WORD_LENGTH] {
        self.cells.map(|cell| cell.color())
    }
}

impl fmt::Display for GuessRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells.iter() {
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}
