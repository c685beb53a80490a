//! Hazard data source trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::FeedError;
use crate::hazard::{
    EarthquakeReport, FireReport, FloodReport, LandslideReport, VolcanoReport, WhirlwindReport,
};

/// A source of the latest record for one hazard kind.
///
/// Feeds are stateless from the caller's point of view: every call returns
/// the current record. Caching, if any, is layered on explicitly.
#[async_trait]
pub trait HazardFeed<T>: Send + Sync {
    /// Fetch the current record.
    async fn fetch(&self) -> Result<T, FeedError>;

    /// Human-readable name for logs.
    fn name(&self) -> &str;
}

/// The six feeds consulted by an alert check.
#[derive(Clone)]
pub struct HazardFeeds {
    pub earthquake: Arc<dyn HazardFeed<EarthquakeReport>>,
    pub landslide: Arc<dyn HazardFeed<LandslideReport>>,
    pub fire: Arc<dyn HazardFeed<FireReport>>,
    pub volcano: Arc<dyn HazardFeed<VolcanoReport>>,
    pub whirlwind: Arc<dyn HazardFeed<WhirlwindReport>>,
    pub flood: Arc<dyn HazardFeed<FloodReport>>,
}
