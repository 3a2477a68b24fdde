#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultMuseumClient is meant to be used through ArtworkCatalogPort, not
// through its generic structure
#![allow(private_interfaces)]

mod cache;
mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultMuseumClient, build_catalog};

// Configuration
pub use config::{DEFAULT_TIMEOUT, MuseumClientConfig};

// Errors
pub use error::{MuseumError, MuseumResult};
