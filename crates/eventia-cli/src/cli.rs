//! CLI argument definitions.

use clap::Parser;

use eventia_http::DEFAULT_API_URL;

use crate::commands::Commands;

/// Eventia management API client.
#[derive(Parser, Debug)]
#[command(name = "eventia")]
#[command(author, version = env!("EVENTIA_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// API base URL
    #[arg(long, env = "EVENTIA_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}
