//! Hazard data sources for the nearby-alert engine.
//!
//! Every source implements [`HazardFeed`] for one record type:
//!
//! - [`StaticFeed`] - A fixed record with optional simulated latency
//! - [`HttpFeed`] - The latest record from a JSON endpoint
//! - [`bogor`] - The built-in Bogor demonstration data set
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hazard_feeds::FeedError> {
//!     let feeds = hazard_feeds::bogor::feeds(Duration::ZERO);
//!     let fire = feeds.fire.fetch().await?;
//!     println!("{} ({})", fire.location, fire.status);
//!     Ok(())
//! }
//! ```

pub mod bogor;
mod http_feed;
mod static_feed;

pub use hazard_core::{FeedError, HazardFeed, HazardFeeds};
pub use http_feed::{http_feeds, HttpFeed, DEFAULT_USER_AGENT};
pub use static_feed::StaticFeed;
