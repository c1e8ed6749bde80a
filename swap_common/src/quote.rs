//! Swap quote calculation.
//!
//! A quote converts a source amount into the destination token at the
//! catalog's current prices, then applies the slippage tolerance as a flat
//! discount:
//!
//! ```text
//! rate       = price(source) / price(dest)
//! amount_out = amount_in * rate * (1 - slippage / 100)
//! ```
//!
//! Amounts are displayed with six fractional digits using Rust's float
//! formatting, which rounds the exact binary value half-to-even.
//!
//! Everything here is pure: no logging, no clock, no shared state.

use serde::{Deserialize, Serialize};

use crate::error::SwapError;
use crate::result::Result;
use crate::tokens::Catalog;

/// Number of fractional digits shown for amounts and rates.
pub const DISPLAY_DECIMALS: usize = 6;

/// Inputs of a quote as they arrive from a form or the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Source token symbol.
    pub from: String,
    /// Destination token symbol.
    pub to: String,
    /// Source amount as typed by the user.
    pub amount: String,
    /// Slippage tolerance in percent, already clamped by the caller.
    pub slippage_pct: f64,
}

impl QuoteRequest {
    /// Creates a new request.
    pub fn new(amount: &str, from: &str, to: &str, slippage_pct: f64) -> Self {
        QuoteRequest {
            from: String::from(from),
            to: String::from(to),
            amount: String::from(amount),
            slippage_pct,
        }
    }
}

/// A priced quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Source token symbol.
    pub from: String,
    /// Destination token symbol.
    pub to: String,
    /// Parsed source amount.
    pub amount_in: f64,
    /// Destination units per source unit, before slippage.
    pub rate: f64,
    /// Slippage tolerance applied, in percent.
    pub slippage_pct: f64,
    /// Estimated destination amount after the slippage discount.
    pub amount_out: f64,
    /// USD value of the source amount.
    pub value_in_usd: f64,
}

impl Quote {
    /// Prices `request` against `catalog`.
    ///
    /// Tokens are resolved first, then checked for identity, then the amount
    /// is parsed, so a same-token request is rejected whatever its amount.
    pub fn compute(request: &QuoteRequest, catalog: &Catalog) -> Result<Quote> {
        let from = catalog.resolve(&request.from)?;
        let to = catalog.resolve(&request.to)?;
        if from.symbol == to.symbol {
            return Err(SwapError::IdenticalTokens(from.symbol.clone()));
        }
        let amount_in = parse_amount(&request.amount)?;

        let rate = from.price / to.price;
        let amount_out = amount_in * rate * (1.0 - request.slippage_pct / 100.0);
        if !amount_out.is_finite() {
            return Err(SwapError::InvalidAmount(request.amount.clone()));
        }

        Ok(Quote {
            from: from.symbol.clone(),
            to: to.symbol.clone(),
            amount_in,
            rate,
            slippage_pct: request.slippage_pct,
            amount_out,
            value_in_usd: amount_in * from.price,
        })
    }

    /// Destination amount with six decimals.
    pub fn amount_out_display(&self) -> String {
        format_decimal(self.amount_out)
    }

    /// Exchange rate with six decimals.
    pub fn rate_display(&self) -> String {
        format_decimal(self.rate)
    }
}

/// Prices a swap and returns the destination amount as a six-decimal string.
///
/// `slippage_pct` is used as given; callers clamp it with
/// [`crate::settings::Slippage`].
pub fn quote(
    source_amount: &str,
    source: &str,
    dest: &str,
    slippage_pct: f64,
    catalog: &Catalog,
) -> Result<String> {
    let request = QuoteRequest::new(source_amount, source, dest, slippage_pct);
    Quote::compute(&request, catalog).map(|q| q.amount_out_display())
}

/// Destination units per source unit, six decimals.
///
/// Equal symbols yield `1.000000` without touching prices.
pub fn exchange_rate(source: &str, dest: &str, catalog: &Catalog) -> Result<String> {
    let from = catalog.resolve(source)?;
    let to = catalog.resolve(dest)?;
    if from.symbol == to.symbol {
        return Ok(format_decimal(1.0));
    }
    Ok(format_decimal(from.price / to.price))
}

/// Parses a user-typed amount, accepting only finite values above zero.
pub fn parse_amount(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(SwapError::InvalidAmount(text.to_string())),
    }
}

/// Formats `value` with [`DISPLAY_DECIMALS`] fractional digits.
pub fn format_decimal(value: f64) -> String {
    format!("{:.*}", DISPLAY_DECIMALS, value)
}
