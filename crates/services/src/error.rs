//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::SummaryError;

/// Errors emitted by session state transitions.
///
/// These all describe calls made out of order, not broken state. The engine
/// facade swallows them and re-exposes the unchanged snapshot; callers that
/// drive a `QuizSession` directly can inspect them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session already completed")]
    Completed,
    #[error("current question already has an answer")]
    AlreadyAnswered,
    #[error("cannot advance before an answer is submitted")]
    NotAnswered,
    #[error("choice index {index} is out of range")]
    InvalidChoice { index: usize },
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
