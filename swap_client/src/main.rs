//! Swap Client — prices token swaps against the mock catalog from the command line.
//!
//! Usage example (CLI):
//! ```bash
//! swap_client quote --from ETH --to USDC --amount 1 --slippage 1
//! swap_client rate --from BTC --to ETH --json
//! swap_client tokens --catalog ./tokens.json
//! ```
//!
//! Rejections (bad amount, unknown or identical tokens) are printed as plain
//! text on stderr and the process exits with status 1.
#![warn(missing_docs)]
mod args;
mod model;

use crate::args::{Args, Command};
use crate::model::report::{QuoteReport, RateReport};
use clap::Parser;
use log::{debug, error, info};
use serde::Serialize;
use std::fmt::Display;
use std::process::ExitCode;
use swap_common::{Catalog, Quote, QuoteRequest, Result, Slippage, exchange_rate};

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();
    debug!("Args: {:?}", args);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_advisory() {
                info!("Request rejected: {:?}", e);
            } else {
                error!("Client failed: {:?}", e);
            }
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let catalog = Catalog::load(args.catalog.as_deref())?;

    match args.command {
        Command::Quote {
            from,
            to,
            amount,
            slippage,
        } => {
            let slippage = Slippage::new(slippage);
            let request = QuoteRequest::new(&amount, &from, &to, slippage.pct());
            let quote = Quote::compute(&request, &catalog)?;
            print(&QuoteReport::from(&quote), args.json)
        }
        Command::Rate { from, to } => {
            let rate = exchange_rate(&from, &to, &catalog)?;
            print(&RateReport { from, to, rate }, args.json)
        }
        Command::Tokens => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                for t in &catalog {
                    println!(
                        "{} {:<5} {:<10} ${:>10.2} {:>+6.2}%",
                        t.icon, t.symbol, t.name, t.price, t.change_24h
                    );
                }
            }
            Ok(())
        }
    }
}

fn print<T: Serialize + Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
