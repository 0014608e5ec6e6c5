//! Name-keyed advisor registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{Advisor, AgentError};

/// Advisors keyed by name, iterated in name order.
#[derive(Default)]
pub struct AdvisorRegistry {
    advisors: BTreeMap<String, Arc<dyn Advisor>>,
}

impl AdvisorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an advisor under its own name. A later registration with the
    /// same name replaces the earlier one.
    pub fn register(&mut self, advisor: Arc<dyn Advisor>) {
        self.advisors.insert(advisor.name().to_string(), advisor);
    }

    /// Look up an advisor by name.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::UnknownAgent`] if no advisor carries this name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Advisor>, AgentError> {
        self.advisors
            .get(name)
            .cloned()
            .ok_or_else(|| AgentError::UnknownAgent(name.to_string()))
    }

    /// All registered advisor names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.advisors.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.advisors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advisors.is_empty()
    }
}
