//! Session error types.
//!
//! These cover the few conditions the session engine treats as hard errors;
//! everything else (answering a completed session, ticking an untimed
//! session) is a documented no-op rather than a failure.

use thiserror::Error;

/// Errors from creating or finalizing an assessment session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The catalog has no questions. An empty catalog is a configuration
    /// mistake and must never become an active session.
    #[error("catalog '{0}' has no questions")]
    EmptyCatalog(String),

    /// The per-question time limit must be at least one second.
    #[error("per-question time limit must be at least 1 second, got {0}")]
    InvalidTimeLimit(u32),

    /// Scoring or reporting was requested on a session that is still in
    /// progress.
    #[error("session is not completed")]
    NotCompleted,

    /// The exam engine task ended abnormally.
    #[error("exam task failed: {0}")]
    TaskFailed(String),
}
