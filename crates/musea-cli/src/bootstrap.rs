//! CLI bootstrap - the composition root.
//!
//! The only place where the HTTP client is built and wired into the core
//! browse service. Handlers receive a ready [`CliContext`].

use std::sync::Arc;
use std::time::Duration;

use musea_api::{MuseumClientConfig, build_catalog};
use musea_core::{ArtworkCatalogPort, BrowseService, CatalogProvider};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Collection to talk to.
    pub provider: CatalogProvider,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Memoize responses for the lifetime of the process.
    pub cache: bool,
    /// Detail fetches allowed in flight at once.
    pub detail_concurrency: usize,
}

impl CliConfig {
    /// Derive the configuration from parsed global options.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            provider: cli.provider,
            timeout: Duration::from_secs(cli.timeout),
            cache: !cli.no_cache,
            detail_concurrency: usize::from(cli.concurrency),
        }
    }

    fn client_config(&self) -> MuseumClientConfig {
        MuseumClientConfig::for_provider(self.provider)
            .with_timeout(self.timeout)
            .with_cache(self.cache)
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Browse orchestration over the configured catalog.
    pub browse: BrowseService,
    /// Collection behind `browse`.
    pub provider: CatalogProvider,
}

impl CliContext {
    /// Compose a context around an existing catalog.
    pub fn with_catalog(catalog: Arc<dyn ArtworkCatalogPort>, detail_concurrency: usize) -> Self {
        let provider = catalog.provider();
        Self {
            browse: BrowseService::new(catalog).with_detail_concurrency(detail_concurrency),
            provider,
        }
    }

    /// Access the browse service.
    pub const fn browse(&self) -> &BrowseService {
        &self.browse
    }
}

/// Bootstrap the CLI: build the HTTP client and the browse service.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    debug!(
        provider = %config.provider,
        timeout_secs = config.timeout.as_secs(),
        cache = config.cache,
        detail_concurrency = config.detail_concurrency,
        "bootstrapping"
    );
    let catalog = build_catalog(&config.client_config())?;
    Ok(CliContext::with_catalog(catalog, config.detail_concurrency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::parse_from([
            "musea",
            "--provider",
            "aic",
            "--timeout",
            "7",
            "--no-cache",
            "--concurrency",
            "4",
            "browse",
        ]);
        let config = CliConfig::from_cli(&cli);

        assert_eq!(config.provider, CatalogProvider::ArtInstitute);
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert!(!config.cache);
        assert_eq!(config.detail_concurrency, 4);
    }

    #[test]
    fn test_bootstrap_wires_provider() {
        let cli = Cli::parse_from(["musea", "--provider", "aic", "browse"]);
        let ctx = bootstrap(&CliConfig::from_cli(&cli)).unwrap();

        assert_eq!(ctx.provider, CatalogProvider::ArtInstitute);
        assert_eq!(ctx.browse().provider(), CatalogProvider::ArtInstitute);
    }
}
