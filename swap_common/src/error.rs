//! Error types shared between the dashboard and the client.
//!
//! The `SwapError` enum covers both the advisory rejections a user can trigger
//! from the swap form and the plumbing failures (I/O, JSON, bad commands) that
//! the binaries may hit, so every crate can propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the dashboard and the client.
#[derive(Error, Debug)]
pub enum SwapError {
    /// Source amount is missing, non-numeric, zero, negative or not finite.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// A token symbol could not be resolved in the catalog.
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    /// Source and destination tokens are the same.
    #[error("Cannot swap {0} for itself")]
    IdenticalTokens(String),

    /// A swap was submitted before the mock wallet was connected.
    #[error("Please connect your wallet first")]
    WalletNotConnected,

    /// The token catalog file is well-formed JSON but violates catalog rules.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A dashboard command line could not be understood.
    #[error("Command error: {0}")]
    Command(String),

    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl SwapError {
    /// Returns `true` for the rejections a user can fix from the swap form.
    pub fn is_advisory(&self) -> bool {
        matches!(
            self,
            SwapError::InvalidAmount(_)
                | SwapError::UnknownToken(_)
                | SwapError::IdenticalTokens(_)
                | SwapError::WalletNotConnected
        )
    }
}
