mod assistant;
mod cell;
mod engine;
mod error;
mod gateway;
mod grid;
pub mod protocol;
mod row;

pub use assistant::Assistant;
pub use cell::{Cell, CellColor};
pub use engine::SolverEngine;
pub use error::*;
pub use gateway::*;
pub use grid::{Grid, GridState};
pub use protocol::{Suggestion, WireColor, WireGuess};
pub use row::{GuessRow, WORD_LENGTH};
