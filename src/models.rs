//! Core data models for the portfolio advisor engine

use serde::{Deserialize, Serialize};
use std::fmt;

//
// ================= Query Intents =================
//

/// Closed set of supported analysis topics.
///
/// The absent-intent fallback (portfolio overview) is represented as
/// `Option::<QueryIntent>::None` rather than a variant, so every variant
/// here maps 1:1 to a concrete analysis template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    Mdd,
    Var,
    Sharpe,
    MonteCarlo,
    Diversification,
    WhatIf,
}

impl QueryIntent {
    /// All intents, in catalog order.
    pub const ALL: [QueryIntent; 6] = [
        QueryIntent::Mdd,
        QueryIntent::Var,
        QueryIntent::Sharpe,
        QueryIntent::MonteCarlo,
        QueryIntent::Diversification,
        QueryIntent::WhatIf,
    ];

    /// Machine id used on the wire (`queryType` values).
    pub fn id(&self) -> &'static str {
        match self {
            QueryIntent::Mdd => "mdd",
            QueryIntent::Var => "var",
            QueryIntent::Sharpe => "sharpe",
            QueryIntent::MonteCarlo => "monte_carlo",
            QueryIntent::Diversification => "diversification",
            QueryIntent::WhatIf => "what_if",
        }
    }

    /// Parse a wire id. Case-sensitive; unknown ids return `None` and are
    /// treated upstream as "no explicit intent", never as an error.
    pub fn from_id(id: &str) -> Option<QueryIntent> {
        QueryIntent::ALL.iter().copied().find(|i| i.id() == id)
    }
}

impl fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

//
// ================= Chat Request / Response =================
//

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub query_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub query_type: Option<QueryIntent>,
    pub follow_up_questions: Vec<String>,
    pub portfolio: PortfolioProjection,
}

/// Denormalized slice of the snapshot returned with every chat response so
/// clients can render headline figures without a second round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProjection {
    pub total_value: f64,
    pub metrics: RiskMetrics,
    pub master_market_view: MarketView,
}

//
// ================= Portfolio Snapshot =================
//

/// Read-only valuation aggregate supplied by the snapshot provider.
/// The engine never mutates or caches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub total_value: f64,
    pub total_return_pct: f64,
    pub metrics: RiskMetrics,
    pub holdings: Vec<Holding>,
    pub master_market_view: MarketView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskMetrics {
    /// Maximum drawdown in percent, stored negative (e.g. -8.2).
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
    /// 95% value at risk, in account currency.
    pub var_95: f64,
    pub beta: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketView {
    pub sentiment: String,
    /// Confidence in percent (0..=100).
    pub confidence: f64,
}

//
// ================= Quick Action Catalog =================
//

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    pub id: QueryIntent,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub quick_actions: Vec<QuickAction>,
    pub portfolio_summary: PortfolioSummary,
    /// Canonical assistant prompt, supplied verbatim by the registry.
    pub system_prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_return: f64,
    /// Number of holdings, not the holdings themselves.
    pub holdings: usize,
    pub top_holding: String,
    pub master_market_view: MarketView,
}
