//! Mock DEX dashboard driven from the terminal.
//!
//! The binary keeps one explicit `DashboardState` and redraws it as text after
//! every command typed on stdin. It wires together:
//!
//! - `CommandReceiver` — reads stdin on its own thread, parses each line into a
//!   `UiEvent` and forwards it over a `crossbeam_channel`.
//! - `Dashboard` — owns the state, the token catalog, mock market data and the
//!   notification center; applies events one at a time.
//! - A periodic tick — fires pending notification dismissals.
//!
//! Everything that touches state runs on the main thread: a `select!` loop
//! multiplexes incoming events and ticks, so no state is shared across threads.
//! Rejections (bad command, unconnected wallet, invalid quote) become error
//! notifications and never end the session. The loop ends on `quit` or EOF.
#![warn(missing_docs)]
use crate::args::Args;
use crate::model::dashboard::{Dashboard, Flow};
use crate::model::notifications::{NotificationCenter, SystemClock};
use crate::receiver::CommandReceiver;
use crate::view::DashboardView;
use chrono::Utc;
use clap::Parser;
use crossbeam_channel::{select, tick, unbounded};
use log::{debug, error, info};
use swap_common::{Catalog, Result, SwapError};
use std::io::{self, BufReader};
use std::thread;
use std::time::Duration;

mod args;
pub mod model;
mod receiver;
mod view;

fn main() -> Result<(), SwapError> {
    init_logger();
    let args = Args::parse();

    let catalog = Catalog::load(args.catalog.as_deref())?;
    info!("Catalog loaded with {} tokens", catalog.len());

    let notifications = NotificationCenter::new(
        SystemClock::new(),
        Duration::from_secs(args.notification_secs),
    );
    let mut dashboard = Dashboard::new(catalog, notifications);
    dashboard.state.set_theme(args.theme);

    let (cmd_tx, cmd_rx) = unbounded();
    thread::spawn(move || {
        let receiver = CommandReceiver::new(BufReader::new(io::stdin()));
        if let Err(e) = receiver.receive_loop_with_channel(cmd_tx) {
            error!("Receiver loop failed: {:?}", e);
        }
    });
    let ticker = tick(Duration::from_millis(args.tick_ms.max(1)));

    println!("{}", DashboardView::new(&dashboard));
    loop {
        select! {
            recv(cmd_rx) -> msg => match msg {
                Ok(Ok(event)) => match dashboard.apply(event, Utc::now()) {
                    Ok(Flow::Render) => println!("{}", DashboardView::new(&dashboard)),
                    Ok(Flow::PrintState) => println!("{}", serde_json::to_string_pretty(&dashboard.state)?),
                    Ok(Flow::Quit) => break,
                    Err(e) if e.is_advisory() => {
                        debug!("Event rejected: {}", e);
                        println!("{}", DashboardView::new(&dashboard));
                    }
                    Err(e) => {
                        error!("Event failed: {}", e);
                        println!("{}", DashboardView::new(&dashboard));
                    }
                },
                Ok(Err(e)) => {
                    dashboard.reject(e);
                    println!("{}", DashboardView::new(&dashboard));
                }
                Err(_) => {
                    info!("Input closed");
                    break;
                }
            },
            recv(ticker) -> _ => {
                let expired = dashboard.notifications.expire();
                if !expired.is_empty() {
                    debug!(
                        "Dismissed {:?}, next due in {:?}",
                        expired,
                        dashboard.notifications.next_due_in()
                    );
                }
            }
        }
    }
    info!("Dashboard closed");
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
