use crate::error::EngineError;
use crate::protocol::{Suggestion, WireGuess};
use std::future::Future;

/// The external solving engine.
///
/// Each query carries the complete history, so from the caller's side every call stands alone.
/// The engine may still keep session state of its own, which [`SolverEngine::reset`] discards.
pub trait SolverEngine {
    /// Returns the engine's suggestions for the given history, best first.
    fn query(
        &self,
        history: &[WireGuess],
    ) -> impl Future<Output = Result<Vec<Suggestion>, EngineError>>;

    /// Asks the engine to forget its session state. Best effort.
    fn reset(&self) -> impl Future<Output = Result<(), EngineError>>;
}
