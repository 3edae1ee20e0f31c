use crate::engine::SolverEngine;
use crate::error::{EncodeError, EngineError};
use crate::protocol::{encode_history, Suggestion, WireGuess};
use crate::row::GuessRow;
use std::rc::Rc;
use tracing::{error, info, warn};

/// A query that has been issued but whose answer has not been applied yet.
#[derive(Debug, PartialEq, Clone)]
pub struct PendingQuery {
    seq: u64,
    request: Vec<WireGuess>,
}

impl PendingQuery {
    /// The sequence number of this query. Later queries have larger numbers.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The encoded history to send to the engine.
    pub fn request(&self) -> &[WireGuess] {
        &self.request
    }
}

/// What happened to an engine answer handed to [`SolverGateway::complete`].
#[derive(Debug, PartialEq, Clone)]
pub enum Completion {
    /// The suggestions were replaced.
    Applied,
    /// The engine failed. The previous suggestions are kept.
    Failed(EngineError),
    /// A newer query has been issued since, so this answer was dropped.
    Stale,
}

/// An engine call that owns everything it needs, so it can run while the grid keeps changing.
///
/// Hand the [`EngineAnswer`] it produces back to the gateway that issued it.
#[derive(Debug)]
pub struct EngineCall<E> {
    engine: Rc<E>,
    pending: PendingQuery,
    reset_first: bool,
}

impl<E: SolverEngine> EngineCall<E> {
    /// Sends the pending query as it is.
    pub fn query(engine: Rc<E>, pending: PendingQuery) -> EngineCall<E> {
        EngineCall {
            engine,
            pending,
            reset_first: false,
        }
    }

    /// Asks the engine to drop its session, then sends the pending query. The query is sent
    /// even if the engine fails to reset.
    pub fn reset_then_query(engine: Rc<E>, pending: PendingQuery) -> EngineCall<E> {
        EngineCall {
            engine,
            pending,
            reset_first: true,
        }
    }

    pub fn seq(&self) -> u64 {
        self.pending.seq
    }

    pub async fn run(self) -> EngineAnswer {
        let reset = if self.reset_first {
            let reset = self.engine.reset().await;
            if let Err(err) = &reset {
                warn!(error = %err, "engine reset failed");
            }
            Some(reset)
        } else {
            None
        };
        info!(
            seq = self.pending.seq,
            guesses = self.pending.request.len(),
            "querying engine"
        );
        let outcome = self.engine.query(self.pending.request()).await;
        EngineAnswer {
            seq: self.pending.seq,
            reset,
            outcome,
        }
    }
}

/// What the engine said in response to an [`EngineCall`].
#[derive(Debug, PartialEq, Clone)]
pub struct EngineAnswer {
    pub seq: u64,
    /// The result of the session reset, if one was requested.
    pub reset: Option<Result<(), EngineError>>,
    pub outcome: Result<Vec<Suggestion>, EngineError>,
}

/// Talks to the solving engine on behalf of the grid, and owns the current suggestions.
///
/// Every query gets a sequence number. Only the answer to the most recently issued query is ever
/// applied, so answers arriving out of order can never overwrite newer suggestions.
#[derive(Debug, Clone, Default)]
pub struct SolverGateway {
    suggestions: Vec<Suggestion>,
    last_issued: u64,
}

impl SolverGateway {
    pub fn new() -> SolverGateway {
        SolverGateway::default()
    }

    /// The latest suggestions, in the engine's order.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Returns `true` iff the query with the given sequence number is the latest one issued.
    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.last_issued
    }

    /// Encodes the given history and issues a new query for it.
    ///
    /// Issuing a query makes every earlier one stale. Fails without issuing anything if a row
    /// is not fully specified.
    pub fn prepare(&mut self, history: &[GuessRow]) -> Result<PendingQuery, EncodeError> {
        let request = encode_history(history).map_err(|err| {
            error!(error = %err, "refusing to send a malformed history");
            err
        })?;
        Ok(self.issue(request))
    }

    /// Drops the current suggestions and issues a query for the empty history.
    pub fn begin_reset(&mut self) -> PendingQuery {
        self.suggestions.clear();
        self.issue(Vec::new())
    }

    fn issue(&mut self, request: Vec<WireGuess>) -> PendingQuery {
        self.last_issued += 1;
        PendingQuery {
            seq: self.last_issued,
            request,
        }
    }

    /// Applies the engine's answer to the query with the given sequence number.
    pub fn complete(
        &mut self,
        seq: u64,
        outcome: Result<Vec<Suggestion>, EngineError>,
    ) -> Completion {
        if !self.is_latest(seq) {
            warn!(seq, latest = self.last_issued, "discarding stale engine response");
            return Completion::Stale;
        }
        match outcome {
            Ok(suggestions) => {
                info!(seq, count = suggestions.len(), "received suggestions");
                self.suggestions = suggestions;
                Completion::Applied
            }
            Err(err) => {
                warn!(seq, error = %err, "engine query failed");
                Completion::Failed(err)
            }
        }
    }
}
