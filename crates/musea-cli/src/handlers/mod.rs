//! Command handlers.
//!
//! Handlers are thin: build the page state from arguments, call the
//! browse service, print what the presentation layer renders. They hold no
//! business logic and never touch the HTTP client directly.

pub mod browse;
pub mod search;
pub mod show;
