//! In-memory feed returning a fixed record.

use std::time::Duration;

use async_trait::async_trait;
use hazard_core::{FeedError, HazardFeed};
use tracing::debug;

/// A feed that always answers with the same record (or the same error).
///
/// An optional latency is applied before every answer so callers can
/// exercise their timeout handling against realistic upstream delays.
#[derive(Debug, Clone)]
pub struct StaticFeed<T> {
    name: String,
    record: Result<T, FeedError>,
    latency: Duration,
}

impl<T: Clone + Send + Sync> StaticFeed<T> {
    /// Create a feed answering with `record` immediately.
    pub fn new(name: impl Into<String>, record: T) -> Self {
        Self {
            name: name.into(),
            record: Ok(record),
            latency: Duration::ZERO,
        }
    }

    /// Create a feed that always fails with `error`.
    pub fn failing(name: impl Into<String>, error: FeedError) -> Self {
        Self {
            name: name.into(),
            record: Err(error),
            latency: Duration::ZERO,
        }
    }

    /// Delay every answer by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> HazardFeed<T> for StaticFeed<T> {
    async fn fetch(&self) -> Result<T, FeedError> {
        if !self.latency.is_zero() {
            debug!(feed = %self.name, latency_ms = self.latency.as_millis() as u64, "Simulating feed latency");
            tokio::time::sleep(self.latency).await;
        }
        self.record.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
