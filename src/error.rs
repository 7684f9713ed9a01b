pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors surfaced outside the search itself.
///
/// An unsolvable problem is *not* an error: the search reports it as a
/// `None` result. Only configuration mistakes and malformed input reach
/// this type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An unrecognized strategy name was supplied, e.g. on the command line.
    /// Detected before any search starts.
    #[error("unknown {kind} strategy {name:?} (expected one of: {expected})")]
    UnknownStrategy {
        kind: &'static str,
        name: String,
        expected: &'static str,
    },

    /// A board line that does not describe a well-formed puzzle.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
