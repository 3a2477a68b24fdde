//! CLI entry point - the composition root.
//!
//! Parses arguments, installs logging, bootstraps the context and
//! dispatches to a handler.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use musea_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// Log to stderr so rendered pages on stdout stay clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(&config)?;

    match command {
        Commands::Search {
            query,
            page,
            view,
            json,
        } => handlers::search::execute(&ctx, query, page, &view, json).await,
        Commands::Show { id, json } => handlers::show::execute(&ctx, id, json).await,
        Commands::Browse { query, view } => handlers::browse::execute(&ctx, query, &view).await,
    }
}

#[tokio::main]
async fn main() {
    // Before parsing, so env-backed options see values from .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        eprintln!("Error: {err}");
        std::process::exit(code);
    }
}
