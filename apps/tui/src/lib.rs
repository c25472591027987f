// Export our modules for use by the binary and tests
pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod event;
pub mod format;
pub mod geo;
pub mod logging;
pub mod terminal;
pub mod ui;
pub mod view;

pub use domain::{CountrySummary, Snapshot};
