//! Subcommands and their shared view options.

use clap::{Args, Subcommand};
use musea_core::{ArtworkId, DEFAULT_QUERY, FilterOptions, PageSize};

/// Options that shape a result page.
///
/// Both filters are on unless switched off.
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Results per page: 9, 12, 15, 18, 21 or 24
    #[arg(long = "per-page", default_value = "12")]
    pub per_page: PageSize,

    /// Also show items without an image
    #[arg(long)]
    pub include_imageless: bool,

    /// Also show items not marked public domain
    #[arg(long)]
    pub include_restricted: bool,
}

impl ViewArgs {
    /// Filters implied by the flags.
    pub const fn filters(&self) -> FilterOptions {
        FilterOptions {
            require_image: !self.include_imageless,
            require_public_domain: !self.include_restricted,
        }
    }
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Render one page of search results
    Search {
        /// Keyword query
        query: String,
        /// Page to show, starting at 1
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        #[command(flatten)]
        view: ViewArgs,
        /// Print the page as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Show every known field of one artwork
    Show {
        /// Artwork identifier in the selected collection
        id: ArtworkId,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse interactively, one page at a time
    Browse {
        /// Initial keyword query
        #[arg(default_value = DEFAULT_QUERY)]
        query: String,
        #[command(flatten)]
        view: ViewArgs,
    },
}
