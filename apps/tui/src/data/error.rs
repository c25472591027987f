use thiserror::Error;

/// Everything that can go wrong while producing a snapshot.
/// None of these abort the dashboard; they turn into an empty snapshot.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to fetch data: HTTP {0}")]
    Status(u16),

    #[error("Failed to fetch data: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unsupported data source: {0} (expected http(s):// or file://)")]
    UnsupportedSource(String),
}
