use crate::row::WORD_LENGTH;
use thiserror::Error;

/// Indicates that an edit or submission of the in-progress row was rejected.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GridError {
    /// Submit was attempted before all letters were entered.
    #[error("Enter all {} letters before submitting", WORD_LENGTH)]
    IncompleteWord,
    /// Submit was attempted while at least one letter has no feedback.
    #[error("Mark the feedback for every letter before submitting")]
    IncompleteFeedback,
    /// The given index is not a letter slot.
    #[error("There is no letter slot at index {0}")]
    IndexOutOfRange(usize),
    /// Only the letters `A` to `Z` may be entered.
    #[error("'{0}' is not a supported letter")]
    UnsupportedCharacter(char),
}

/// Indicates that the solving engine could not answer.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum EngineError {
    /// The engine could not be reached, or did not answer in time.
    #[error("could not reach the solver: {0}")]
    Transport(String),
    /// The engine refused the request.
    #[error("the solver rejected the request: {0}")]
    Rejected(String),
    /// The engine answered with something that could not be understood.
    #[error("the solver sent an invalid response: {0}")]
    Malformed(String),
}

/// A committed row could not be encoded because it is not fully specified.
///
/// This can only happen through a bug in the grid, never through player input.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum EncodeError {
    #[error("committed row {row} has a blank letter at index {index}")]
    BlankLetter { row: usize, index: usize },
    #[error("committed row {row} has no feedback at index {index}")]
    MissingFeedback { row: usize, index: usize },
}

/// Any failure that is surfaced to the player as the current message.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum AssistError {
    #[error(transparent)]
    Grid(#[from] GridError),
    /// Querying the engine failed. Earlier suggestions are still shown.
    #[error("Could not fetch suggestions: {0}")]
    EngineQueryFailed(EngineError),
    /// The engine could not discard its session. The follow-up query is reported alongside.
    #[error("{}", describe_reset_failure(.reset, .query.as_ref()))]
    EngineResetFailed {
        reset: EngineError,
        query: Option<EngineError>,
    },
    /// The grid produced a row that cannot be sent. Nothing was sent to the engine.
    #[error("Internal error: {0}")]
    InternalInvariantViolation(#[from] EncodeError),
}

fn describe_reset_failure(reset: &EngineError, query: Option<&EngineError>) -> String {
    match query {
        Some(query) => format!(
            "Could not reset the solver: {}; could not fetch suggestions either: {}",
            reset, query
        ),
        None => format!(
            "Could not reset the solver: {}; suggestions may be stale",
            reset
        ),
    }
}
