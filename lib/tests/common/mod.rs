#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use wordle_assistant::*;

/// A call received by a [`ScriptedEngine`].
#[derive(Debug, PartialEq, Clone)]
pub enum Call {
    Query(Vec<WireGuess>),
    Reset,
}

/// An in-memory engine that replays canned answers and records every call.
///
/// Once the script runs out, queries answer with no suggestions and resets succeed.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    queries: RefCell<VecDeque<Result<Vec<Suggestion>, EngineError>>>,
    resets: RefCell<VecDeque<Result<(), EngineError>>>,
    calls: RefCell<Vec<Call>>,
}

impl ScriptedEngine {
    pub fn new() -> ScriptedEngine {
        ScriptedEngine::default()
    }

    pub fn then_suggest(self, words: &[&str]) -> ScriptedEngine {
        self.queries.borrow_mut().push_back(Ok(suggestions(words)));
        self
    }

    pub fn then_fail_query(self, error: EngineError) -> ScriptedEngine {
        self.queries.borrow_mut().push_back(Err(error));
        self
    }

    pub fn then_fail_reset(self, error: EngineError) -> ScriptedEngine {
        self.resets.borrow_mut().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// The requests of every query received so far.
    pub fn queries(&self) -> Vec<Vec<WireGuess>> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Query(request) => Some(request.clone()),
                Call::Reset => None,
            })
            .collect()
    }
}

impl SolverEngine for ScriptedEngine {
    async fn query(&self, history: &[WireGuess]) -> Result<Vec<Suggestion>, EngineError> {
        self.calls.borrow_mut().push(Call::Query(history.to_vec()));
        self.queries
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn reset(&self) -> Result<(), EngineError> {
        self.calls.borrow_mut().push(Call::Reset);
        self.resets.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

/// Builds suggestions with descending scores, in the given order.
pub fn suggestions(words: &[&str]) -> Vec<Suggestion> {
    words
        .iter()
        .enumerate()
        .map(|(rank, word)| Suggestion {
            word: word.to_string(),
            score: -(rank as f64),
        })
        .collect()
}

/// Types the word into the assistant and marks each letter with the given colors.
pub fn enter_guess<E: SolverEngine>(
    assistant: &mut Assistant<E>,
    word: &str,
    colors: [CellColor; WORD_LENGTH],
) -> Result<(), AssistError> {
    assistant.enter_text(word)?;
    for (index, color) in colors.into_iter().enumerate() {
        assistant.mark(index, color)?;
    }
    Ok(())
}
