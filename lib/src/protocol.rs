//! The request and response shapes understood by the solving engine.
//!
//! A query carries the full committed history, oldest guess first:
//!
//! ```json
//! [{ "word": "hello", "mask": ["correct", "misplaced", "wrong", "wrong", "correct"] }]
//! ```
//!
//! and the engine answers with its suggestions, best first:
//!
//! ```json
//! [{ "word": "tares", "score": -3.2 }]
//! ```

use crate::cell::{Cell, CellColor};
use crate::error::{EncodeError, GridError};
use crate::row::{GuessRow, WORD_LENGTH};
use serde::{Deserialize, Serialize};

/// The feedback for one letter, as sent to the engine.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WireColor {
    /// Green
    Correct,
    /// Yellow
    Misplaced,
    /// Gray
    Wrong,
}

impl WireColor {
    /// Returns the wire form of the given color, or `None` for [`CellColor::Empty`], which has no
    /// wire form.
    pub fn from_cell_color(color: CellColor) -> Option<WireColor> {
        match color {
            CellColor::Correct => Some(WireColor::Correct),
            CellColor::Misplaced => Some(WireColor::Misplaced),
            CellColor::Wrong => Some(WireColor::Wrong),
            CellColor::Empty => None,
        }
    }
}

impl From<WireColor> for CellColor {
    fn from(color: WireColor) -> Self {
        match color {
            WireColor::Correct => CellColor::Correct,
            WireColor::Misplaced => CellColor::Misplaced,
            WireColor::Wrong => CellColor::Wrong,
        }
    }
}

/// One committed guess, as sent to the engine.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct WireGuess {
    /// The guessed word, in lower case.
    pub word: String,
    /// The feedback for each letter, in the same order as the word's letters.
    pub mask: [WireColor; WORD_LENGTH],
}

/// A word suggested by the engine.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Suggestion {
    pub word: String,
    /// Opaque desirability score. Only the engine's ordering is meaningful.
    pub score: f64,
}

/// Encodes one committed row. `row_index` is only used to describe errors.
///
/// Fails if the row has a blank letter or unmarked feedback: committed rows never should.
pub fn encode_row(row_index: usize, row: &GuessRow) -> Result<WireGuess, EncodeError> {
    let mut word = String::with_capacity(WORD_LENGTH);
    let mut mask = [WireColor::Wrong; WORD_LENGTH];
    for (index, cell) in row.cells().iter().enumerate() {
        match cell {
            Cell::Blank => {
                return Err(EncodeError::BlankLetter {
                    row: row_index,
                    index,
                })
            }
            Cell::Filled { letter, color } => {
                mask[index] = WireColor::from_cell_color(*color).ok_or(
                    EncodeError::MissingFeedback {
                        row: row_index,
                        index,
                    },
                )?;
                word.push(letter.to_ascii_lowercase());
            }
        }
    }
    Ok(WireGuess { word, mask })
}

/// Encodes the whole history, in order.
pub fn encode_history(history: &[GuessRow]) -> Result<Vec<WireGuess>, EncodeError> {
    history
        .iter()
        .enumerate()
        .map(|(row_index, row)| encode_row(row_index, row))
        .collect()
}

impl TryFrom<&WireGuess> for GuessRow {
    type Error = GridError;

    /// Rebuilds a committed row from its wire form.
    fn try_from(guess: &WireGuess) -> Result<Self, Self::Error> {
        GuessRow::from_parts(&guess.word, guess.mask.map(CellColor::from))
    }
}
