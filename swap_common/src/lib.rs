//!
//! Common types and the quote calculator shared by the dashboard and the client.
//!
//! This crate aggregates:
//! - `error` — unified error type `SwapError` used across the workspace.
//! - `result` — handy `Result<T, SwapError>` alias.
//! - `tokens` — token reference data and the pricing `Catalog`.
//! - `quote` — the pure swap quote calculator.
//! - `settings` — slippage tolerance, deadline, theme and toggles.
#![warn(missing_docs)]
pub mod error;
pub mod quote;
pub mod result;
pub mod settings;
pub mod tokens;

pub use error::SwapError;
pub use quote::{Quote, QuoteRequest, exchange_rate, quote};
pub use result::Result;
pub use settings::{Settings, Slippage, Theme};
pub use tokens::{Catalog, Token};
