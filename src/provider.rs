//! Portfolio snapshot provider
//!
//! The engine consumes valuation data through this trait so transports and
//! tests can inject synthetic snapshots. The engine treats every snapshot as
//! an immutable value for the duration of one request; it never caches or
//! mutates provider data.

use crate::models::{Holding, MarketView, PortfolioSnapshot, RiskMetrics};
use crate::Result;

/// Source of read-only portfolio snapshots.
#[async_trait::async_trait]
pub trait PortfolioProvider: Send + Sync {
    async fn snapshot(&self) -> Result<PortfolioSnapshot>;
}

/// In-process provider serving a fixed snapshot. Stands in for the external
/// valuation service in local runs and tests.
pub struct StaticPortfolioProvider {
    snapshot: PortfolioSnapshot,
}

impl StaticPortfolioProvider {
    pub fn new(snapshot: PortfolioSnapshot) -> Self {
        Self { snapshot }
    }

    /// Demo portfolio used by the API binary.
    pub fn sample() -> Self {
        Self::new(PortfolioSnapshot {
            total_value: 245_780.5,
            total_return_pct: 12.4,
            metrics: RiskMetrics {
                max_drawdown: -8.2,
                sharpe_ratio: 1.34,
                var_95: 4_820.75,
                beta: 1.12,
            },
            holdings: vec![
                Holding {
                    symbol: "AAPL".to_string(),
                    name: "Apple Inc.".to_string(),
                    value: 61_200.0,
                },
                Holding {
                    symbol: "MSFT".to_string(),
                    name: "Microsoft Corp.".to_string(),
                    value: 48_900.0,
                },
                Holding {
                    symbol: "NVDA".to_string(),
                    name: "NVIDIA Corp.".to_string(),
                    value: 43_450.5,
                },
                Holding {
                    symbol: "SPY".to_string(),
                    name: "SPDR S&P 500 ETF".to_string(),
                    value: 52_130.0,
                },
                Holding {
                    symbol: "TLT".to_string(),
                    name: "iShares 20+ Year Treasury ETF".to_string(),
                    value: 40_100.0,
                },
            ],
            master_market_view: MarketView {
                sentiment: "Cautiously Optimistic".to_string(),
                confidence: 72.0,
            },
        })
    }
}

#[async_trait::async_trait]
impl PortfolioProvider for StaticPortfolioProvider {
    async fn snapshot(&self) -> Result<PortfolioSnapshot> {
        Ok(self.snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_snapshot_is_well_formed() {
        let provider = StaticPortfolioProvider::sample();
        let snapshot = provider.snapshot().await.unwrap();

        assert!(snapshot.total_value > 0.0);
        assert!(!snapshot.holdings.is_empty());
        assert!(snapshot.metrics.max_drawdown < 0.0);
        assert!((0.0..=100.0).contains(&snapshot.master_market_view.confidence));
    }
}
