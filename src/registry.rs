//! Template and prompt registry
//!
//! Static catalog of the assistant's canonical system prompt, the supported
//! quick actions, and the follow-up question set. Built once at startup and
//! shared read-only via `Arc`; the engine never mutates it.

use crate::models::{QueryIntent, QuickAction};

const SYSTEM_PROMPT: &str = "You are a portfolio analysis assistant. You answer \
questions about the user's trading portfolio using only the provided snapshot \
figures. You never give personalized investment advice and every answer ends \
with the regulatory disclaimer.";

const FOLLOW_UP_QUESTIONS: [&str; 3] = [
    "What is my maximum drawdown?",
    "How is my portfolio diversified?",
    "What happens if interest rates rise?",
];

/// Quick-action labels, in catalog order (matches `QueryIntent::ALL`).
const QUICK_ACTION_LABELS: [(QueryIntent, &str); 6] = [
    (QueryIntent::Mdd, "Max drawdown"),
    (QueryIntent::Var, "Value at risk"),
    (QueryIntent::Sharpe, "Sharpe ratio"),
    (QueryIntent::MonteCarlo, "Monte Carlo projection"),
    (QueryIntent::Diversification, "Diversification check"),
    (QueryIntent::WhatIf, "What-if scenario"),
];

/// Registry of static prompt and catalog data
pub struct TemplateRegistry {
    quick_actions: Vec<QuickAction>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        let quick_actions = QUICK_ACTION_LABELS
            .iter()
            .map(|(id, label)| QuickAction {
                id: *id,
                label: (*label).to_string(),
            })
            .collect();

        Self { quick_actions }
    }

    pub fn system_prompt(&self) -> &'static str {
        SYSTEM_PROMPT
    }

    /// Supported quick actions, consumed verbatim by the catalog endpoint.
    pub fn quick_actions(&self) -> &[QuickAction] {
        &self.quick_actions
    }

    /// Fixed, ordered follow-up suggestions. Cardinality and order are part
    /// of the observable contract.
    pub fn follow_ups(&self) -> Vec<String> {
        FOLLOW_UP_QUESTIONS.iter().map(|q| q.to_string()).collect()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_intent_once() {
        let registry = TemplateRegistry::new();
        let actions = registry.quick_actions();
        assert_eq!(actions.len(), QueryIntent::ALL.len());
        for (action, intent) in actions.iter().zip(QueryIntent::ALL) {
            assert_eq!(action.id, intent);
            assert!(!action.label.is_empty());
        }
    }

    #[test]
    fn test_follow_ups_fixed_and_ordered() {
        let registry = TemplateRegistry::new();
        let first = registry.follow_ups();
        let second = registry.follow_ups();
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_system_prompt_non_empty() {
        assert!(!TemplateRegistry::new().system_prompt().is_empty());
    }
}
