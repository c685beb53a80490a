//! Feed that reads the latest record from a JSON endpoint.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hazard_core::{
    EarthquakeReport, FeedError, FireReport, FloodReport, HazardFeed, HazardFeeds, HazardKind,
    LandslideReport, VolcanoReport, WhirlwindReport,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// User agent sent with every feed request.
pub const DEFAULT_USER_AGENT: &str = concat!("siaga-bogor/", env!("CARGO_PKG_VERSION"));

/// A feed backed by `GET {base_url}/{kind}` returning one JSON record.
///
/// The endpoint must answer with a single record in the same camelCase
/// shape the built-in data uses. Status strings are decoded on arrival, so
/// an unrecognized status surfaces as [`FeedError::Decode`].
pub struct HttpFeed<T> {
    client: reqwest::Client,
    url: Url,
    name: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> HttpFeed<T> {
    /// Create a feed for `kind` under `base_url` with its own client.
    pub fn new(base_url: &str, kind: HazardKind, timeout: Duration) -> Result<Self, FeedError> {
        let client = build_client(timeout)?;
        let base = parse_base(base_url)?;
        Self::with_client(client, &base, kind)
    }

    /// Create a feed for `kind` sharing an existing client.
    pub fn with_client(
        client: reqwest::Client,
        base_url: &Url,
        kind: HazardKind,
    ) -> Result<Self, FeedError> {
        let url = base_url
            .join(kind.slug())
            .map_err(|e| FeedError::Unavailable(format!("invalid feed url: {}", e)))?;

        Ok(Self {
            client,
            url,
            name: format!("http:{}", kind.slug()),
            _record: PhantomData,
        })
    }

    /// The resolved endpoint.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl<T: DeserializeOwned + Send + Sync> HazardFeed<T> for HttpFeed<T> {
    async fn fetch(&self) -> Result<T, FeedError> {
        debug!(url = %self.url, "Fetching hazard record");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FeedError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "Feed returned error status");
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::Http(e.to_string()))?;

        Ok(serde_json::from_str(&body)?)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Build all six feeds against one base URL, sharing a single client.
pub fn http_feeds(base_url: &str, timeout: Duration) -> Result<HazardFeeds, FeedError> {
    let client = build_client(timeout)?;
    let base = parse_base(base_url)?;

    Ok(HazardFeeds {
        earthquake: Arc::new(HttpFeed::<EarthquakeReport>::with_client(
            client.clone(),
            &base,
            HazardKind::Earthquake,
        )?),
        landslide: Arc::new(HttpFeed::<LandslideReport>::with_client(
            client.clone(),
            &base,
            HazardKind::Landslide,
        )?),
        fire: Arc::new(HttpFeed::<FireReport>::with_client(
            client.clone(),
            &base,
            HazardKind::Fire,
        )?),
        volcano: Arc::new(HttpFeed::<VolcanoReport>::with_client(
            client.clone(),
            &base,
            HazardKind::Volcano,
        )?),
        whirlwind: Arc::new(HttpFeed::<WhirlwindReport>::with_client(
            client.clone(),
            &base,
            HazardKind::Whirlwind,
        )?),
        flood: Arc::new(HttpFeed::<FloodReport>::with_client(
            client,
            &base,
            HazardKind::Flood,
        )?),
    })
}

fn build_client(timeout: Duration) -> Result<reqwest::Client, FeedError> {
    reqwest::Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| FeedError::Http(format!("failed to build client: {}", e)))
}

/// Parse the base URL, making sure it ends in a slash so `join` appends.
fn parse_base(base_url: &str) -> Result<Url, FeedError> {
    let trimmed = base_url.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    Url::parse(&normalized)
        .map_err(|e| FeedError::Unavailable(format!("invalid feed url '{}': {}", base_url, e)))
}
