//! Opt-in freshness cache for hazard feeds.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use hazard_core::{FeedError, HazardFeed, HazardFeeds};
use tokio::sync::RwLock;
use tracing::debug;

/// Wraps a feed and reuses its last successful record for `ttl`.
///
/// A record older than `ttl` is never served; the next call refetches.
/// Errors pass straight through and are not remembered.
pub struct CachedFeed<T> {
    inner: Arc<dyn HazardFeed<T>>,
    ttl: Duration,
    name: String,
    entry: RwLock<Option<(Instant, T)>>,
}

impl<T> CachedFeed<T> {
    pub fn new(inner: Arc<dyn HazardFeed<T>>, ttl: Duration) -> Self {
        let name = format!("cached:{}", inner.name());
        Self {
            inner,
            ttl,
            name,
            entry: RwLock::new(None),
        }
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> HazardFeed<T> for CachedFeed<T> {
    async fn fetch(&self) -> Result<T, FeedError> {
        if let Some((fetched_at, record)) = self.entry.read().await.as_ref() {
            if fetched_at.elapsed() < self.ttl {
                debug!(feed = %self.name, "Serving cached record");
                return Ok(record.clone());
            }
        }

        let record = self.inner.fetch().await?;
        *self.entry.write().await = Some((Instant::now(), record.clone()));
        Ok(record)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Wrap every feed in the bundle with a [`CachedFeed`].
pub fn cache_feeds(feeds: HazardFeeds, ttl: Duration) -> HazardFeeds {
    HazardFeeds {
        earthquake: Arc::new(CachedFeed::new(feeds.earthquake, ttl)),
        landslide: Arc::new(CachedFeed::new(feeds.landslide, ttl)),
        fire: Arc::new(CachedFeed::new(feeds.fire, ttl)),
        volcano: Arc::new(CachedFeed::new(feeds.volcano, ttl)),
        whirlwind: Arc::new(CachedFeed::new(feeds.whirlwind, ttl)),
        flood: Arc::new(CachedFeed::new(feeds.flood, ttl)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts fetches and fails when told to.
    struct CountingFeed {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingFeed {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }
    }

    #[async_trait]
    impl HazardFeed<usize> for CountingFeed {
        async fn fetch(&self) -> Result<usize, FeedError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail {
                Err(FeedError::Unavailable("down".to_string()))
            } else {
                Ok(n)
            }
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    #[tokio::test]
    async fn test_fresh_record_reused() {
        let inner = CountingFeed::new(false);
        let cached = CachedFeed::new(inner.clone(), Duration::from_secs(60));

        assert_eq!(cached.fetch().await.unwrap(), 1);
        assert_eq!(cached.fetch().await.unwrap(), 1);
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
        assert_eq!(cached.name(), "cached:counting");
    }

    #[tokio::test]
    async fn test_stale_record_refetched() {
        let inner = CountingFeed::new(false);
        let cached = CachedFeed::new(inner.clone(), Duration::from_millis(30));

        assert_eq!(cached.fetch().await.unwrap(), 1);
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(cached.fetch().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_failures_not_cached() {
        let inner = CountingFeed::new(true);
        let cached = CachedFeed::new(inner.clone(), Duration::from_secs(60));

        assert!(cached.fetch().await.is_err());
        assert!(cached.fetch().await.is_err());
        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }
}
