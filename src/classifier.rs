//! Query intent classifier
//!
//! Resolves an inbound query to one of the supported analysis intents:
//! - Explicit: a recognized `queryType` id always wins, no text matching
//! - Keyword: the message is matched against an ordered rule table
//! - Neither: `None`, which triggers the default portfolio overview

use crate::models::QueryIntent;

/// Ordered rule table — evaluated top-to-bottom, first match wins.
///
/// Order matters: later categories are semantically broader and would
/// shadow the earlier, more specific ones if evaluated first. Each set
/// carries English and Korean spellings of the same concept; matching is
/// plain substring containment on the lower-cased message.
const INTENT_RULES: &[(QueryIntent, &[&str])] = &[
    (
        QueryIntent::Mdd,
        &["drawdown", "mdd", "낙폭", "최대 낙폭", "하락폭"],
    ),
    (
        QueryIntent::Var,
        &["var", "value at risk", "최대 손실", "손실 위험"],
    ),
    (
        QueryIntent::Sharpe,
        &["sharpe", "risk-adjusted", "샤프", "위험 조정"],
    ),
    (
        QueryIntent::MonteCarlo,
        &["monte carlo", "simulation", "simulate", "몬테카를로", "시뮬레이션"],
    ),
    (
        QueryIntent::Diversification,
        &["diversif", "correlation", "concentration", "분산", "상관관계", "집중"],
    ),
    (
        QueryIntent::WhatIf,
        &["what if", "what-if", "hypothetical", "interest rate", "rate hike", "rate cut", "만약", "금리"],
    ),
];

/// Intent classifier
pub struct IntentClassifier;

impl IntentClassifier {
    /// Resolve an intent from an explicit id or the message text.
    ///
    /// Returns `None` when nothing resolves; that is the overview trigger,
    /// not an error.
    pub fn classify(explicit: Option<QueryIntent>, message: Option<&str>) -> Option<QueryIntent> {
        if let Some(intent) = explicit {
            return Some(intent);
        }

        let message = message?.to_lowercase();

        INTENT_RULES
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| message.contains(p)))
            .map(|(intent, _)| *intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_intent_wins_over_keywords() {
        // Message alone would resolve to Mdd; explicit Sharpe must win.
        let resolved =
            IntentClassifier::classify(Some(QueryIntent::Sharpe), Some("show my max drawdown"));
        assert_eq!(resolved, Some(QueryIntent::Sharpe));
    }

    #[test]
    fn test_keyword_match_per_intent() {
        let cases = vec![
            ("what is my max drawdown?", QueryIntent::Mdd),
            ("show value at risk please", QueryIntent::Var),
            ("what is my sharpe ratio", QueryIntent::Sharpe),
            ("run a monte carlo projection", QueryIntent::MonteCarlo),
            ("is my portfolio diversified enough?", QueryIntent::Diversification),
            ("what if interest rates rise?", QueryIntent::WhatIf),
        ];

        for (message, expected) in cases {
            assert_eq!(
                IntentClassifier::classify(None, Some(message)),
                Some(expected),
                "message: {message}"
            );
        }
    }

    #[test]
    fn test_korean_keywords_resolve() {
        let cases = vec![
            ("최대 낙폭이 얼마나 되나요", QueryIntent::Mdd),
            ("샤프 비율 알려줘", QueryIntent::Sharpe),
            ("몬테카를로 돌려줘", QueryIntent::MonteCarlo),
            ("금리가 오르면 어떻게 되나요", QueryIntent::WhatIf),
        ];

        for (message, expected) in cases {
            assert_eq!(
                IntentClassifier::classify(None, Some(message)),
                Some(expected),
                "message: {message}"
            );
        }
    }

    #[test]
    fn test_rule_order_first_match_wins() {
        // Contains both a drawdown and a diversification keyword; rule 1
        // precedes rule 5, so Mdd must win.
        let resolved = IntentClassifier::classify(
            None,
            Some("does my drawdown mean I should diversify more?"),
        );
        assert_eq!(resolved, Some(QueryIntent::Mdd));
    }

    #[test]
    fn test_no_match_returns_none() {
        assert_eq!(IntentClassifier::classify(None, Some("hello")), None);
        assert_eq!(IntentClassifier::classify(None, None), None);
    }
}
