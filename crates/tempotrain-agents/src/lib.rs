//! tempotrain-agents — Specialized advisor abstraction.
//!
//! Advisors answer free-form questions on a speciality (CP, RTT, TransGP,
//! ...). There is no model or network behind them: the only implementation
//! is [`canned::CannedAdvisor`], which replies from a fixed response table
//! after a simulated typing delay.

pub mod canned;
pub mod error;
pub mod registry;

pub use canned::CannedAdvisor;
pub use error::AgentError;
pub use registry::AdvisorRegistry;

use async_trait::async_trait;

/// A question sent to an advisor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceRequest {
    /// The candidate's question, verbatim.
    pub question: String,
}

/// An advisor's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceResponse {
    /// Name of the advisor that answered.
    pub agent: String,
    /// The reply text.
    pub content: String,
}

/// Trait for advisors that answer candidate questions.
#[async_trait]
pub trait Advisor: Send + Sync + std::fmt::Debug {
    /// Human-readable advisor name (e.g. "Agent CP").
    fn name(&self) -> &str;

    /// Answer a question.
    async fn respond(&self, request: &AdviceRequest) -> Result<AdviceResponse, AgentError>;
}
