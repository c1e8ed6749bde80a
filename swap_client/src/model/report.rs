//! Quote and rate reports.
//!
//! Amounts and rates are kept as the six-decimal strings users see, so the JSON
//! output matches the text output digit for digit.
use serde::Serialize;
use std::fmt;
use swap_common::Quote;

/// Result of the `quote` subcommand.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteReport {
    /// Source token symbol.
    pub from: String,
    /// Destination token symbol.
    pub to: String,
    /// Source amount as parsed.
    pub amount_in: f64,
    /// Estimated destination amount.
    pub amount_out: String,
    /// Destination units per source unit.
    pub rate: String,
    /// Slippage applied, in percent.
    pub slippage_pct: f64,
    /// USD value of the source amount.
    pub value_in_usd: f64,
}

impl From<&Quote> for QuoteReport {
    fn from(q: &Quote) -> Self {
        QuoteReport {
            from: q.from.clone(),
            to: q.to.clone(),
            amount_in: q.amount_in,
            amount_out: q.amount_out_display(),
            rate: q.rate_display(),
            slippage_pct: q.slippage_pct,
            value_in_usd: q.value_in_usd,
        }
    }
}

impl fmt::Display for QuoteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {} (rate {}, slippage {}%, value ${:.2})",
            self.amount_in, self.from, self.amount_out, self.to, self.rate, self.slippage_pct, self.value_in_usd
        )
    }
}

/// Result of the `rate` subcommand.
#[derive(Debug, Clone, Serialize)]
pub struct RateReport {
    /// Source token symbol.
    pub from: String,
    /// Destination token symbol.
    pub to: String,
    /// Destination units per source unit.
    pub rate: String,
}

impl fmt::Display for RateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1 {} = {} {}", self.from, self.rate, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swap_common::{Catalog, QuoteRequest};

    #[test]
    fn report_text_and_json_agree() {
        let q = Quote::compute(&QuoteRequest::new("1", "ETH", "USDC", 1.0), &Catalog::default())
            .unwrap();
        let report = QuoteReport::from(&q);
        assert_eq!(
            report.to_string(),
            "1 ETH -> 2432.212200 USDC (rate 2456.780000, slippage 1%, value $2456.78)"
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["amount_out"], "2432.212200");
        assert_eq!(json["rate"], "2456.780000");
    }

    #[test]
    fn rate_text() {
        let r = RateReport {
            from: "ETH".into(),
            to: "ETH".into(),
            rate: "1.000000".into(),
        };
        assert_eq!(r.to_string(), "1 ETH = 1.000000 ETH");
    }
}
