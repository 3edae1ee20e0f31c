use crate::cell::CellColor;
use crate::engine::SolverEngine;
use crate::error::AssistError;
use crate::gateway::{Completion, EngineAnswer, EngineCall, SolverGateway};
use crate::grid::{Grid, GridState};
use crate::protocol::Suggestion;
use crate::row::GuessRow;
use std::rc::Rc;
use tracing::debug;

/// A single puzzle-solving session: the grid, the engine, and the message shown to the player.
///
/// All player actions go through this type. Each action replaces the current message: failures
/// set it, successes clear it.
///
/// Actions that talk to the engine come in two halves. `begin_*` updates the grid at once and
/// returns an [`EngineCall`] to run; [`Assistant::finish`] applies its answer. Editing may go on
/// in between. The `async` forms run both halves back to back.
pub struct Assistant<E> {
    engine: Rc<E>,
    grid: Grid,
    gateway: SolverGateway,
    message: Option<AssistError>,
}

impl<E: SolverEngine> Assistant<E> {
    /// Creates a session talking to the given engine. Call [`Assistant::start`] to fetch the
    /// opening suggestions.
    pub fn new(engine: E) -> Assistant<E> {
        Assistant {
            engine: Rc::new(engine),
            grid: Grid::new(),
            gateway: SolverGateway::new(),
            message: None,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn history(&self) -> &[GuessRow] {
        self.grid.history()
    }

    pub fn in_progress(&self) -> &GuessRow {
        self.grid.in_progress()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        self.gateway.suggestions()
    }

    /// The current message for the player, if the last action failed.
    pub fn message(&self) -> Option<&AssistError> {
        self.message.as_ref()
    }

    pub fn state(&self) -> GridState {
        self.grid.state()
    }

    /// Fetches suggestions for the current history, the opening ones for a fresh session.
    pub fn begin_start(&mut self) -> Result<EngineCall<E>, AssistError> {
        let result = self.issue_query();
        self.record(result)
    }

    pub async fn start(&mut self) -> Result<(), AssistError> {
        let call = self.begin_start()?;
        self.finish(call.run().await).map(|_| ())
    }

    pub fn set_letter(&mut self, index: usize, letter: Option<char>) -> Result<(), AssistError> {
        let result = self.grid.set_letter(index, letter).map_err(AssistError::from);
        self.record(result)
    }

    /// Types a letter into the next blank slot. Returns `false` if the row was full.
    pub fn push_letter(&mut self, letter: char) -> Result<bool, AssistError> {
        let result = self.grid.push_letter(letter).map_err(AssistError::from);
        self.record(result)
    }

    /// Removes the last typed letter. Returns `false` if there was none.
    pub fn pop_letter(&mut self) -> bool {
        self.message = None;
        self.grid.pop_letter()
    }

    /// Types the given text, dropping anything that doesn't fit. Returns the number of letters
    /// typed.
    pub fn enter_text(&mut self, text: &str) -> Result<usize, AssistError> {
        let result = self.grid.enter_text(text).map_err(AssistError::from);
        self.record(result)
    }

    pub fn cycle_color(&mut self, index: usize) -> Result<(), AssistError> {
        let result = self.grid.cycle_color(index).map_err(AssistError::from);
        self.record(result)
    }

    /// Cycles the color at the given slot until it shows `color`.
    pub fn mark(&mut self, index: usize, color: CellColor) -> Result<(), AssistError> {
        let result = self.grid.mark(index, color).map_err(AssistError::from);
        self.record(result)
    }

    /// Commits the in-progress row and issues a query for the updated history.
    ///
    /// If the row is incomplete, nothing is committed and nothing is issued. Until the answer is
    /// finished the grid reports [`GridState::Submitting`], and the next row can be edited.
    pub fn begin_submit(&mut self) -> Result<EngineCall<E>, AssistError> {
        let result = match self.grid.submit() {
            Ok(_) => self.issue_query(),
            Err(err) => Err(err.into()),
        };
        self.record(result)
    }

    /// Commits the in-progress row and fetches new suggestions for the updated history.
    ///
    /// If the engine fails, the row stays committed and the previous suggestions stay in place.
    pub async fn submit(&mut self) -> Result<(), AssistError> {
        let call = self.begin_submit()?;
        self.finish(call.run().await).map(|_| ())
    }

    /// Starts over: clears the grid and the suggestions, and issues a call that resets the
    /// engine's session and fetches the opening suggestions.
    ///
    /// The local reset always happens, whatever the engine says. Answers to calls issued
    /// earlier become stale.
    pub fn begin_reset(&mut self) -> EngineCall<E> {
        self.grid.reset();
        self.message = None;
        let pending = self.gateway.begin_reset();
        EngineCall::reset_then_query(Rc::clone(&self.engine), pending)
    }

    pub async fn reset(&mut self) -> Result<(), AssistError> {
        let call = self.begin_reset();
        self.finish(call.run().await).map(|_| ())
    }

    /// Applies the answer to an engine call.
    ///
    /// A stale answer changes nothing, not even the message, and yields [`Completion::Stale`].
    /// Otherwise the grid stops waiting and the outcome becomes the current message.
    pub fn finish(&mut self, answer: EngineAnswer) -> Result<Completion, AssistError> {
        let EngineAnswer {
            seq,
            reset,
            outcome,
        } = answer;
        let completion = self.gateway.complete(seq, outcome);
        if completion == Completion::Stale {
            return Ok(completion);
        }
        self.grid.settle();
        let result = match (reset, completion) {
            (Some(Err(reset)), Completion::Failed(query)) => Err(AssistError::EngineResetFailed {
                reset,
                query: Some(query),
            }),
            (Some(Err(reset)), _) => Err(AssistError::EngineResetFailed { reset, query: None }),
            (_, Completion::Failed(query)) => Err(AssistError::EngineQueryFailed(query)),
            (_, completion) => Ok(completion),
        };
        self.record(result)
    }

    fn issue_query(&mut self) -> Result<EngineCall<E>, AssistError> {
        match self.gateway.prepare(self.grid.history()) {
            Ok(pending) => Ok(EngineCall::query(Rc::clone(&self.engine), pending)),
            Err(err) => {
                self.grid.settle();
                Err(AssistError::InternalInvariantViolation(err))
            }
        }
    }

    fn record<T>(&mut self, result: Result<T, AssistError>) -> Result<T, AssistError> {
        if let Err(err) = &result {
            debug!(error = %err, "action failed");
        }
        self.message = result.as_ref().err().cloned();
        result
    }
}
