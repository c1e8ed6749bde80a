//! Command-line arguments for the swap client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON file with the token catalog. The built-in six tokens are used when omitted.
    #[clap(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Print results as JSON instead of text.
    #[clap(long, global = true)]
    pub json: bool,

    /// What to compute.
    #[command(subcommand)]
    pub command: Command,
}

/// Client subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate how much `to` a swap of `amount` `from` yields.
    Quote {
        /// Source token symbol.
        #[clap(long)]
        from: String,
        /// Destination token symbol.
        #[clap(long)]
        to: String,
        /// Amount of the source token.
        #[clap(long, allow_hyphen_values = true)]
        amount: String,
        /// Slippage tolerance in percent, clamped to 0..=50.
        #[clap(long, default_value_t = 0.5, allow_hyphen_values = true)]
        slippage: f64,
    },
    /// Show how many `to` one `from` buys.
    Rate {
        /// Source token symbol.
        #[clap(long)]
        from: String,
        /// Destination token symbol.
        #[clap(long)]
        to: String,
    },
    /// List the token catalog.
    Tokens,
}
