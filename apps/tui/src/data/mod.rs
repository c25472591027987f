// Data module for covid_dashboard
// Fetches the summary payload and caches the parsed snapshot

pub mod cache;
pub mod error;
pub mod fetcher;
pub mod loader;

pub use error::LoadError;
pub use loader::{DataLoader, LoadReport};
