use crate::cell::{Cell, CellColor};
use crate::error::GridError;
use crate::row::GuessRow;
use tracing::debug;

/// The coarse state of the grid, mostly useful for display.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GridState {
    /// The in-progress row is blank and nothing is pending.
    Idle,
    /// At least one letter of the in-progress row has been typed.
    Editing,
    /// A row was committed and the engine has not answered yet. Editing the next row is allowed.
    Submitting,
    /// The last submit attempt was rejected. The in-progress row is unchanged.
    Error(GridError),
}

/// Owns the committed guesses and the row currently being typed.
///
/// This is the only place that mutates either of them: every edit goes through one of the
/// methods below, which keep the in-progress row consistent after each call.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    history: Vec<GuessRow>,
    in_progress: GuessRow,
    awaiting_engine: bool,
    error: Option<GridError>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Grid {
        Grid::default()
    }

    /// The committed guesses, oldest first.
    pub fn history(&self) -> &[GuessRow] {
        &self.history
    }

    pub fn in_progress(&self) -> &GuessRow {
        &self.in_progress
    }

    pub fn state(&self) -> GridState {
        if let Some(error) = self.error {
            GridState::Error(error)
        } else if self.awaiting_engine {
            GridState::Submitting
        } else if self.in_progress.is_blank() {
            GridState::Idle
        } else {
            GridState::Editing
        }
    }

    /// Sets (or, with `None`, clears) the letter at the given slot of the in-progress row.
    ///
    /// Letters are stored in upper case. The slot's feedback is reset either way.
    pub fn set_letter(&mut self, index: usize, letter: Option<char>) -> Result<(), GridError> {
        self.in_progress.set_letter(index, letter)?;
        self.error = None;
        Ok(())
    }

    /// Types a letter into the first blank slot.
    ///
    /// Returns `false` if the row was already full, in which case the letter is dropped.
    pub fn push_letter(&mut self, letter: char) -> Result<bool, GridError> {
        match self.in_progress.first_blank() {
            Some(index) => {
                self.set_letter(index, Some(letter))?;
                Ok(true)
            }
            None => {
                Cell::new(letter)?;
                Ok(false)
            }
        }
    }

    /// Clears the last typed letter. Returns `false` if the row was already blank.
    pub fn pop_letter(&mut self) -> bool {
        match self.in_progress.last_filled() {
            Some(index) => {
                self.in_progress.clear(index);
                self.error = None;
                true
            }
            None => false,
        }
    }

    /// Types the given text as if each character was entered in turn. Anything past the last
    /// slot is dropped.
    ///
    /// If any character that would be kept is unsupported, nothing is typed at all. Returns the
    /// number of letters typed.
    pub fn enter_text(&mut self, text: &str) -> Result<usize, GridError> {
        let free_slots = self
            .in_progress
            .cells()
            .iter()
            .filter(|cell| cell.is_blank())
            .count();
        let letters: Vec<char> = text.chars().take(free_slots).collect();
        for letter in letters.iter() {
            Cell::new(*letter)?;
        }
        for letter in letters.iter() {
            self.push_letter(*letter)?;
        }
        Ok(letters.len())
    }

    /// Advances the feedback color at the given slot. Does nothing if the slot is blank.
    pub fn cycle_color(&mut self, index: usize) -> Result<(), GridError> {
        self.in_progress.cycle_color(index)?;
        self.error = None;
        Ok(())
    }

    /// Cycles the color at the given slot until it shows `target`. Does nothing if the slot is
    /// blank.
    pub fn mark(&mut self, index: usize, target: CellColor) -> Result<(), GridError> {
        let cell = self
            .in_progress
            .cell(index)
            .ok_or(GridError::IndexOutOfRange(index))?;
        if cell.is_blank() {
            return Ok(());
        }
        while self.in_progress.cells()[index].color() != target {
            self.cycle_color(index)?;
        }
        Ok(())
    }

    /// Commits the in-progress row to the history.
    ///
    /// The row must have all letters typed and all feedback marked; otherwise nothing changes
    /// besides the grid entering the error state. On success the in-progress row is blanked, the
    /// grid waits for [`Grid::settle`], and the new number of committed guesses is returned.
    pub fn submit(&mut self) -> Result<usize, GridError> {
        if let Err(error) = self.in_progress.validate() {
            debug!(%error, row = %self.in_progress, "rejected submission");
            self.error = Some(error);
            return Err(error);
        }
        let row = std::mem::take(&mut self.in_progress);
        debug!(%row, guesses = self.history.len() + 1, "committed guess");
        self.history.push(row);
        self.error = None;
        self.awaiting_engine = true;
        Ok(self.history.len())
    }

    /// Marks the outstanding engine call as finished.
    pub fn settle(&mut self) {
        self.awaiting_engine = false;
    }

    /// Clears everything: history, in-progress row and any error.
    pub fn reset(&mut self) {
        debug!(guesses = self.history.len(), "reset grid");
        *self = Grid::new();
    }
}
