//! Errors surfaced by a submission.

use thiserror::Error;

use crate::service::ServiceError;

/// Message shown when the phrase is empty or whitespace only.
pub const EMPTY_PHRASE_MESSAGE: &str = "Try to write something!";

/// Errors that can end a submission.
///
/// Transport failures are carried unchanged from the service layer so the
/// front end can render the underlying cause as `Error: {details}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Blank input. Raised before any network call.
    #[error("{}", EMPTY_PHRASE_MESSAGE)]
    Validation,

    /// Any failure of a misspelling check or correction lookup.
    #[error(transparent)]
    Transport(#[from] ServiceError),

    /// A lookup task panicked or was aborted.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PipelineError {
    pub fn is_validation(&self) -> bool {
        matches!(self, PipelineError::Validation)
    }
}
