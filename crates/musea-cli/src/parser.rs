//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use musea_core::CatalogProvider;

use crate::commands::Commands;

/// Command-line interface for browsing museum collections.
///
/// Global options pick the upstream collection and tune the client; the
/// subcommand decides what is rendered.
#[derive(Parser)]
#[command(name = "musea")]
#[command(about = "Browse public museum collections from the terminal")]
#[command(version)]
pub struct Cli {
    /// Collection to browse: "met" or "aic"
    #[arg(long, global = true, env = "MUSEA_PROVIDER", default_value = "met")]
    pub provider: CatalogProvider,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "MUSEA_TIMEOUT_SECS", default_value_t = 20)]
    pub timeout: u64,

    /// Disable response caching for this invocation
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Detail fetches allowed in flight at once
    #[arg(
        long,
        global = true,
        env = "MUSEA_DETAIL_CONCURRENCY",
        default_value_t = 1,
        value_parser = clap::value_parser!(u16).range(1..=24)
    )]
    pub concurrency: u16,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
