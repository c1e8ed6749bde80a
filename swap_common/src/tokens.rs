//! Token reference data and the catalog used for pricing.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::SwapError;

/// A tradable token with its current mock market data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Ticker symbol, unique within a catalog (e.g. `ETH`).
    pub symbol: String,
    /// Human-readable name.
    pub name: String,
    /// Current unit price in USD.
    pub price: f64,
    /// Recent price change in percent.
    pub change_24h: f64,
    /// Display glyph.
    pub icon: String,
}

impl Token {
    /// Creates a new token entry.
    pub fn new(symbol: &str, name: &str, price: f64, change_24h: f64, icon: &str) -> Self {
        Token {
            symbol: String::from(symbol),
            name: String::from(name),
            price,
            change_24h,
            icon: String::from(icon),
        }
    }
}

/// Trait providing catalog parsing from a JSON source.
pub trait CatalogParser: Sized {
    /// Parses a JSON array of tokens from `reader`.
    ///
    /// Fails if the JSON is malformed, a symbol repeats, or a price is not a
    /// finite positive number.
    fn parse_from_reader<R: Read>(reader: R) -> Result<Self, SwapError>;
}

/// Ordered, immutable list of tokens with lookup by symbol.
///
/// Only built through [`Catalog::new`] or [`CatalogParser`], so every listed
/// token has a unique symbol and a positive price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    tokens: Vec<Token>,
}

impl Catalog {
    /// Builds a catalog, validating symbols and prices.
    pub fn new(tokens: Vec<Token>) -> Result<Self, SwapError> {
        let mut seen = HashSet::new();
        for token in &tokens {
            if token.symbol.trim().is_empty() {
                return Err(SwapError::Catalog("empty token symbol".to_string()));
            }
            if !seen.insert(token.symbol.as_str()) {
                return Err(SwapError::Catalog(format!(
                    "duplicate token symbol: {}",
                    token.symbol
                )));
            }
            if !token.price.is_finite() || token.price <= 0.0 {
                return Err(SwapError::Catalog(format!(
                    "price of {} must be a positive number, got {}",
                    token.symbol, token.price
                )));
            }
        }
        Ok(Catalog { tokens })
    }

    /// Loads a catalog from a JSON file, or the built-in listing when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, SwapError> {
        match path {
            Some(path) => {
                let file = File::open(path)?;
                Catalog::parse_from_reader(BufReader::new(file))
            }
            None => Ok(Catalog::default()),
        }
    }

    /// Resolves `symbol` to a token. Symbols are matched exactly.
    pub fn get(&self, symbol: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.symbol == symbol)
    }

    /// Maps typed text to the listed spelling of a symbol.
    ///
    /// An exact match wins. Otherwise the first ASCII case-insensitive match is
    /// used, and text matching nothing is returned trimmed but unchanged.
    pub fn canonical_symbol(&self, typed: &str) -> String {
        let typed = typed.trim();
        self.get(typed)
            .or_else(|| {
                self.tokens
                    .iter()
                    .find(|t| t.symbol.eq_ignore_ascii_case(typed))
            })
            .map_or_else(|| typed.to_string(), |t| t.symbol.clone())
    }

    /// Like [`Self::get`] but fails with `UnknownToken`.
    pub fn resolve(&self, symbol: &str) -> Result<&Token, SwapError> {
        self.get(symbol)
            .ok_or_else(|| SwapError::UnknownToken(symbol.to_string()))
    }

    /// Returns `true` if `symbol` is listed.
    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    /// Iterates over tokens in listing order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Number of listed tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if nothing is listed.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for Catalog {
    /// The fixed six-token listing shown by the dashboard.
    fn default() -> Self {
        Catalog {
            tokens: vec![
                Token::new("ETH", "Ethereum", 2456.78, 3.24, "⟠"),
                Token::new("USDC", "USD Coin", 1.00, 0.01, "💵"),
                Token::new("USDT", "Tether", 0.999, -0.02, "₮"),
                Token::new("BTC", "Bitcoin", 67890.12, 2.15, "₿"),
                Token::new("LINK", "Chainlink", 14.56, 5.67, "🔗"),
                Token::new("UNI", "Uniswap", 8.34, -1.23, "🦄"),
            ],
        }
    }
}

impl CatalogParser for Catalog {
    fn parse_from_reader<R: Read>(reader: R) -> Result<Self, SwapError> {
        let tokens: Vec<Token> = serde_json::from_reader(reader)?;
        Catalog::new(tokens)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
