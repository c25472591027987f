use std::sync::Arc;
use std::time::Duration;

use crate::data::cache::TtlCache;
use crate::data::error::LoadError;
use crate::data::fetcher::{fetcher_for, Fetch};
use crate::domain::{Snapshot, SummaryPayload};

/// Result of one `load_data` call. On failure `snapshot` is empty and
/// `error` carries the message to show.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub snapshot: Arc<Snapshot>,
    pub error: Option<String>,
    pub from_cache: bool,
}

impl LoadReport {
    fn fetched(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            error: None,
            from_cache: false,
        }
    }

    fn failed(error: &LoadError) -> Self {
        Self {
            snapshot: Arc::new(Snapshot::empty()),
            error: Some(error.to_string()),
            from_cache: false,
        }
    }
}

pub struct DataLoader {
    fetcher: Box<dyn Fetch>,
    cache: TtlCache<LoadReport>,
}

impl std::fmt::Debug for DataLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataLoader")
            .field("source", &self.fetcher.describe())
            .field("cache", &self.cache)
            .finish()
    }
}

impl DataLoader {
    pub fn new(fetcher: Box<dyn Fetch>, ttl: Duration) -> Self {
        Self {
            fetcher,
            cache: TtlCache::new(ttl),
        }
    }

    /// Builds a loader for an `http(s)://` or `file://` source
    pub fn from_source(source: &str, ttl: Duration) -> Result<Self, LoadError> {
        Ok(Self::new(fetcher_for(source)?, ttl))
    }

    pub fn source(&self) -> &str {
        self.fetcher.describe()
    }

    pub fn cache_remaining(&self) -> Option<Duration> {
        self.cache.remaining()
    }

    /// Returns the cached report while it is fresh, otherwise fetches again.
    /// A failed fetch yields an empty snapshot; older data is never reused.
    pub async fn load_data(&mut self) -> LoadReport {
        if let Some(cached) = self.cache.get() {
            tracing::debug!(rows = cached.snapshot.len(), "serving snapshot from cache");
            let mut report = cached.clone();
            report.from_cache = true;
            return report;
        }

        let report = match self.fetch_snapshot().await {
            Ok(snapshot) => {
                tracing::info!(
                    source = self.fetcher.describe(),
                    rows = snapshot.len(),
                    "fetched snapshot"
                );
                LoadReport::fetched(snapshot)
            }
            Err(e) => {
                tracing::error!(source = self.fetcher.describe(), error = %e, "fetch failed");
                LoadReport::failed(&e)
            }
        };

        self.cache.insert(report.clone());
        report
    }

    /// Drops the cached report so the next `load_data` goes to the source
    pub fn invalidate(&mut self) {
        tracing::debug!("cache invalidated");
        self.cache.invalidate();
    }

    async fn fetch_snapshot(&self) -> Result<Snapshot, LoadError> {
        let body = self.fetcher.fetch().await?;
        let payload: SummaryPayload = serde_json::from_str(&body)?;
        Ok(Snapshot::new(payload.countries))
    }
}
