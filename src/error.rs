use thiserror::Error;

/// Convenience result type for cleaning and summarizing operations.
pub type CleanResult<T> = Result<T, CleanError>;

/// Error type returned by this crate.
///
/// The cleaner never fails per item (malformed entries are dropped, not
/// rejected), so this enum only covers the summarizer precondition and the
/// document-level JSON boundary.
#[derive(Debug, Error)]
pub enum CleanError {
    /// Summarization was requested over zero elements.
    #[error("cannot summarize an empty sequence")]
    EmptyInput,

    /// The input handed to [`crate::clean::clean_json_str`] is not a valid
    /// JSON array.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
