//! # farewatch - TUI flight-fare watcher
//!
//! This library exposes internal components for testing purposes.
//! The public API is primarily intended for integration tests and is not
//! guaranteed to be stable.

pub mod app;
pub mod core;
pub mod fuzzy;
pub mod store;
pub mod ui;

// Re-export commonly used types for testing
pub use app::{Action, App, FareEntry, SearchStep, Tab};
pub use core::flight_url::FlightQuery;
