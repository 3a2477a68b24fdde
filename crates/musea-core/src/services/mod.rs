//! Application services built on the catalog port.

mod browse;
mod outcome;

pub use browse::{BrowsePage, BrowseService};
pub use outcome::{FetchFailure, FetchOperation, FetchOutcome};
