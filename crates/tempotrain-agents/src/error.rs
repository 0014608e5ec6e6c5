//! Advisor error types.

use thiserror::Error;

/// Errors when looking up or querying an advisor.
#[derive(Debug, Error)]
pub enum AgentError {
    /// No advisor is registered under this name.
    #[error("unknown agent: {0}")]
    UnknownAgent(String),
}
