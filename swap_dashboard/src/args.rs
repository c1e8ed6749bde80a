//! Command-line arguments for the dashboard.
use clap::Parser;
use std::path::PathBuf;
use swap_common::Theme;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON file with the token catalog. The built-in six tokens are used when omitted.
    #[clap(long)]
    pub catalog: Option<PathBuf>,

    /// How often pending notification dismissals are checked, in milliseconds.
    #[clap(long, default_value_t = 250)]
    pub tick_ms: u64,

    /// How long a notification stays visible, in seconds.
    #[clap(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..=86_400))]
    pub notification_secs: u64,

    /// Initial colour theme.
    #[clap(long, value_enum, default_value_t = Theme::Dark)]
    pub theme: Theme,
}
