//! Response synthesis
//!
//! Builds deterministic, template-driven analysis text from the portfolio
//! snapshot. No model inference: every intent maps to a fixed template that
//! interpolates live figures. Percentages are printed with the snapshot's
//! native float precision; currency goes through [`format_currency`].

use crate::compliance::DISCLAIMER;
use crate::models::{PortfolioSnapshot, QueryIntent};

/// Qualitative risk label derived from portfolio beta.
///
/// Boundaries are part of the contract: beta 1.0 is still Conservative,
/// beta 1.3 is still Moderate.
pub fn risk_label(beta: f64) -> &'static str {
    if beta > 1.3 {
        "Aggressive"
    } else if beta > 1.0 {
        "Moderate"
    } else {
        "Conservative"
    }
}

/// Format a currency amount with thousands separators, e.g. `$1,234,567.89`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

/// Response synthesizer
pub struct Synthesizer;

impl Synthesizer {
    /// Produce the analysis text for the resolved intent, or the default
    /// portfolio overview when no intent resolved.
    pub fn synthesize(intent: Option<QueryIntent>, snapshot: &PortfolioSnapshot) -> String {
        match intent {
            Some(QueryIntent::Mdd) => Self::mdd(snapshot),
            Some(QueryIntent::Var) => Self::var(snapshot),
            Some(QueryIntent::Sharpe) => Self::sharpe(snapshot),
            Some(QueryIntent::MonteCarlo) => Self::monte_carlo(snapshot),
            Some(QueryIntent::Diversification) => Self::diversification(snapshot),
            Some(QueryIntent::WhatIf) => Self::what_if(snapshot),
            None => Self::overview(snapshot),
        }
    }

    fn mdd(s: &PortfolioSnapshot) -> String {
        let m = &s.metrics;
        let peak_loss = s.total_value * m.max_drawdown.abs() / 100.0;
        format!(
            "Your portfolio's maximum drawdown is {}%, the deepest peak-to-trough \
             decline in the measured period. At the current portfolio value of {} \
             a drawdown of that depth corresponds to roughly {} of unrealized \
             losses at the low point. With a beta of {} the portfolio sits in the \
             {} band, which is consistent with that drawdown profile.",
            m.max_drawdown,
            format_currency(s.total_value),
            format_currency(peak_loss),
            m.beta,
            risk_label(m.beta),
        )
    }

    fn var(s: &PortfolioSnapshot) -> String {
        let m = &s.metrics;
        let var_pct = if s.total_value > 0.0 {
            m.var_95 / s.total_value * 100.0
        } else {
            0.0
        };
        format!(
            "At the 95% confidence level your one-day value at risk is {}, about \
             {:.1}% of the current portfolio value of {}. In plain terms: on 19 \
             out of 20 trading days the daily loss should stay below this figure. \
             It is a statistical bound, not a worst case — your maximum drawdown \
             of {}% shows losses can run deeper over longer stretches.",
            format_currency(m.var_95),
            var_pct,
            format_currency(s.total_value),
            m.max_drawdown,
        )
    }

    fn sharpe(s: &PortfolioSnapshot) -> String {
        let m = &s.metrics;
        let read = if m.sharpe_ratio >= 1.5 {
            "strong risk-adjusted performance"
        } else if m.sharpe_ratio >= 1.0 {
            "solid risk-adjusted performance"
        } else if m.sharpe_ratio >= 0.5 {
            "modest compensation for the risk taken"
        } else {
            "weak compensation for the risk taken"
        };
        format!(
            "Your Sharpe ratio is {}, indicating {}. It measures the excess \
             return earned per unit of volatility: the portfolio's total return \
             of {}% was achieved with a beta of {} ({} profile). Values above \
             1.0 are generally considered good.",
            m.sharpe_ratio,
            read,
            s.total_return_pct,
            m.beta,
            risk_label(m.beta),
        )
    }

    fn monte_carlo(s: &PortfolioSnapshot) -> String {
        // Deterministic illustrative band derived from the snapshot figures;
        // no sampling happens here.
        let upside = s.total_value * (1.0 + s.total_return_pct / 100.0);
        let downside = s.total_value * (1.0 + s.metrics.max_drawdown / 100.0);
        format!(
            "A Monte Carlo projection seeded with your current figures (total \
             value {}, Sharpe {}, max drawdown {}%) spans a central one-year \
             band from roughly {} on the downside to {} on the upside. The band \
             reflects historical volatility, not a forecast, and widens quickly \
             beyond one year.",
            format_currency(s.total_value),
            s.metrics.sharpe_ratio,
            s.metrics.max_drawdown,
            format_currency(downside),
            format_currency(upside),
        )
    }

    fn diversification(s: &PortfolioSnapshot) -> String {
        let top = s
            .holdings
            .first()
            .map(|h| h.symbol.as_str())
            .unwrap_or("n/a");
        format!(
            "Your portfolio holds {} positions with {} as the largest. With a \
             beta of {} it tracks the broad market at a {} risk profile; the \
             max drawdown of {}% suggests the positions still move together in \
             stress periods. Spreading exposure across lower-correlation assets \
             would soften that co-movement.",
            s.holdings.len(),
            top,
            s.metrics.beta,
            risk_label(s.metrics.beta),
            s.metrics.max_drawdown,
        )
    }

    fn what_if(s: &PortfolioSnapshot) -> String {
        let m = &s.metrics;
        let shock = s.total_value * m.beta * 0.01;
        format!(
            "Hypothetical rate scenario: with a beta of {}, a broad market move \
             of 1% would shift your portfolio by roughly {} at the current value \
             of {}. A rate-hike-driven drawdown comparable to your historical \
             maximum of {}% remains the realistic stress case; the 95% VaR of {} \
             bounds the typical single-day damage.",
            m.beta,
            format_currency(shock),
            format_currency(s.total_value),
            m.max_drawdown,
            format_currency(m.var_95),
        )
    }

    /// Default overview when no intent resolved. Embeds the disclaimer
    /// inline; the disclaimer guard is idempotent so it is not doubled.
    fn overview(s: &PortfolioSnapshot) -> String {
        let m = &s.metrics;
        let mut out = String::new();

        out.push_str(&format!(
            "Portfolio overview: total value {} with a total return of {}%. ",
            format_currency(s.total_value),
            s.total_return_pct,
        ));
        out.push_str(&format!(
            "Risk profile: {} (beta {}). ",
            risk_label(m.beta),
            m.beta,
        ));
        out.push_str(&format!(
            "Headline risk metrics — max drawdown {}%, Sharpe ratio {}, 95% VaR {}, beta {}. ",
            m.max_drawdown,
            m.sharpe_ratio,
            format_currency(m.var_95),
            m.beta,
        ));
        out.push_str(&format!(
            "Market view: {} ({}% confidence). ",
            s.master_market_view.sentiment, s.master_market_view.confidence,
        ));
        out.push_str(
            "Ask about max drawdown, value at risk, Sharpe ratio, Monte Carlo \
             projections, diversification, or a what-if scenario for more detail. ",
        );
        out.push_str(DISCLAIMER);

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Holding, MarketView, RiskMetrics};

    fn snapshot() -> PortfolioSnapshot {
        PortfolioSnapshot {
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
                    symbol: "AAPL".into(),
                    name: "Apple Inc.".into(),
                    value: 61_200.0,
                },
                Holding {
                    symbol: "MSFT".into(),
                    name: "Microsoft Corp.".into(),
                    value: 48_900.0,
                },
            ],
            master_market_view: MarketView {
                sentiment: "Cautiously Optimistic".into(),
                confidence: 72.0,
            },
        }
    }

    #[test]
    fn test_risk_label_boundaries() {
        assert_eq!(risk_label(1.0), "Conservative");
        assert_eq!(risk_label(1.00001), "Moderate");
        assert_eq!(risk_label(1.3), "Moderate");
        assert_eq!(risk_label(1.30001), "Aggressive");
    }

    #[test]
    fn test_format_currency_thousands_separators() {
        assert_eq!(format_currency(1_234_567.89), "$1,234,567.89");
        assert_eq!(format_currency(4_820.75), "$4,820.75");
        assert_eq!(format_currency(999.0), "$999.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-12_000.5), "-$12,000.50");
    }

    #[test]
    fn test_mdd_uses_native_precision() {
        let text = Synthesizer::synthesize(Some(QueryIntent::Mdd), &snapshot());
        assert!(text.contains("-8.2"));
    }

    #[test]
    fn test_every_intent_produces_non_empty_text() {
        let s = snapshot();
        for intent in QueryIntent::ALL {
            let text = Synthesizer::synthesize(Some(intent), &s);
            assert!(!text.trim().is_empty(), "empty text for {intent}");
        }
        assert!(!Synthesizer::synthesize(None, &s).trim().is_empty());
    }

    #[test]
    fn test_overview_contains_headline_figures() {
        let text = Synthesizer::synthesize(None, &snapshot());
        assert!(text.contains("$245,780.50"));
        assert!(text.contains("12.4"));
        assert!(text.contains("-8.2"));
        assert!(text.contains("1.34"));
        assert!(text.contains("$4,820.75"));
        assert!(text.contains("Moderate"));
        assert!(text.contains("Cautiously Optimistic"));
        assert!(text.contains("72"));
    }
}
