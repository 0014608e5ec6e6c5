//! Canned advisor backed by a fixed response table.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::{AdviceRequest, AdviceResponse, Advisor, AgentError};

/// An offline advisor that replies from a fixed table.
///
/// Resolution order: the first topic whose pattern appears in the question,
/// then the advisor's standing reply, then a templated acknowledgement. A
/// configurable typing delay is awaited before answering, to mimic a live
/// assistant.
#[derive(Debug)]
pub struct CannedAdvisor {
    name: String,
    /// Standing reply used when no topic pattern matches.
    reply: Option<String>,
    /// Question-substring → reply overrides.
    topics: Vec<(String, String)>,
    typing_delay: Duration,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Last request received.
    last_request: Mutex<Option<AdviceRequest>>,
}

impl CannedAdvisor {
    /// Create an advisor with no replies configured; it will answer with the
    /// templated acknowledgement.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reply: None,
            topics: Vec::new(),
            typing_delay: Duration::ZERO,
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Set the standing reply.
    #[must_use]
    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = Some(reply.into());
        self
    }

    /// Add a reply for questions containing `pattern`.
    #[must_use]
    pub fn with_topic(mut self, pattern: impl Into<String>, reply: impl Into<String>) -> Self {
        self.topics.push((pattern.into(), reply.into()));
        self
    }

    /// Simulate typing for `delay` before every reply.
    #[must_use]
    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = delay;
        self
    }

    /// Get the number of calls made to this advisor.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last request made to this advisor.
    pub fn last_request(&self) -> Option<AdviceRequest> {
        self.last_request.lock().unwrap().clone()
    }

    fn fallback(&self) -> String {
        format!(
            "En tant que {}, je peux vous confirmer que votre demande a bien été prise en \
             compte. N'hésitez pas à préciser votre question pour obtenir une réponse plus \
             détaillée.",
            self.name
        )
    }
}

#[async_trait]
impl Advisor for CannedAdvisor {
    fn name(&self) -> &str {
        &self.name
    }

    async fn respond(&self, request: &AdviceRequest) -> Result<AdviceResponse, AgentError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock().unwrap() = Some(request.clone());

        if !self.typing_delay.is_zero() {
            tokio::time::sleep(self.typing_delay).await;
        }

        let content = self
            .topics
            .iter()
            .find(|(pattern, _)| request.question.contains(pattern.as_str()))
            .map(|(_, reply)| reply.clone())
            .or_else(|| self.reply.clone())
            .unwrap_or_else(|| self.fallback());

        tracing::debug!(agent = %self.name, "advisor replied");

        Ok(AdviceResponse {
            agent: self.name.clone(),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(question: &str) -> AdviceRequest {
        AdviceRequest {
            question: question.into(),
        }
    }

    #[tokio::test]
    async fn standing_reply() {
        let advisor = CannedAdvisor::new("Agent CP").with_reply("2,5 jours ouvrables par mois.");

        let response = advisor.respond(&ask("Combien de CP ?")).await.unwrap();
        assert_eq!(response.agent, "Agent CP");
        assert_eq!(response.content, "2,5 jours ouvrables par mois.");
        assert_eq!(advisor.call_count(), 1);
    }

    #[tokio::test]
    async fn topic_overrides_standing_reply() {
        let advisor = CannedAdvisor::new("Agent RTT")
            .with_reply("Réponse générale RTT.")
            .with_topic("forfait jours", "Environ 9 jours de RTT pour 2024.");

        let general = advisor.respond(&ask("Comment ça marche ?")).await.unwrap();
        assert_eq!(general.content, "Réponse générale RTT.");

        let specific = advisor
            .respond(&ask("RTT pour un cadre au forfait jours ?"))
            .await
            .unwrap();
        assert_eq!(specific.content, "Environ 9 jours de RTT pour 2024.");
        assert_eq!(advisor.call_count(), 2);
    }

    #[tokio::test]
    async fn fallback_mentions_the_advisor() {
        let advisor = CannedAdvisor::new("Agent Astreinte");
        let response = advisor.respond(&ask("Une question")).await.unwrap();
        assert!(response.content.contains("Agent Astreinte"));
        assert!(response.content.contains("prise en compte"));
    }

    #[tokio::test]
    async fn records_the_last_request() {
        let advisor = CannedAdvisor::new("Agent CP");
        assert!(advisor.last_request().is_none());

        advisor.respond(&ask("Première")).await.unwrap();
        advisor.respond(&ask("Seconde")).await.unwrap();
        assert_eq!(advisor.last_request().unwrap().question, "Seconde");
    }

    #[tokio::test(start_paused = true)]
    async fn typing_delay_is_awaited() {
        let advisor = CannedAdvisor::new("Agent CP")
            .with_typing_delay(Duration::from_millis(1500));

        let start = tokio::time::Instant::now();
        advisor.respond(&ask("Question")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }
}
