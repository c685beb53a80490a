//! Built-in Bogor demonstration data.
//!
//! One representative record per hazard kind for the Bogor area. Records
//! are served through [`StaticFeed`], so the engine runs end to end with no
//! upstream services.

use std::sync::Arc;
use std::time::Duration;

use hazard_core::{
    EarthquakeReport, FireReport, FireStatus, FloodReport, FloodStatus, GeoPoint, HazardFeeds,
    HazardSnapshot, LandslideReport, RiskLevel, VolcanoLevel, VolcanoReport, WhirlwindReport,
};

use crate::StaticFeed;

/// Bogor city centre, a convenient default user location.
pub const BOGOR_CENTER: GeoPoint = GeoPoint {
    latitude: -6.595,
    longitude: 106.816,
};

/// Simulated upstream delay used by the demo server.
pub const DEMO_LATENCY: Duration = Duration::from_millis(500);

pub fn earthquake() -> EarthquakeReport {
    EarthquakeReport {
        magnitude: 4.8,
        location: "Java Sea, 90 km North of Jakarta".to_string(),
        epicenter_coords: GeoPoint::new(-5.4, 106.8),
        depth_km: Some(22.0),
        time: Some("2026-10-18T03:12:00Z".to_string()),
    }
}

pub fn landslide() -> LandslideReport {
    LandslideReport {
        location: "Cisarua, Bogor Regency".to_string(),
        risk_level: RiskLevel::Moderate,
        coords: GeoPoint::new(-6.68, 106.94),
        trigger: Some("High intensity rainfall".to_string()),
        time: Some("2026-10-18T02:00:00Z".to_string()),
    }
}

pub fn fire() -> FireReport {
    FireReport {
        location: "Sentul Industrial Area, Bogor".to_string(),
        status: FireStatus::UnderControl,
        coords: GeoPoint::new(-6.55, 106.85),
        cause: Some("Electrical short circuit".to_string()),
        time: Some("2026-10-18T01:45:00Z".to_string()),
    }
}

pub fn volcano() -> VolcanoReport {
    VolcanoReport {
        name: "Mount Salak".to_string(),
        status: VolcanoLevel::Normal,
        coords: GeoPoint::new(-6.71, 106.73),
        last_eruption: Some("1938".to_string()),
    }
}

pub fn whirlwind() -> WhirlwindReport {
    WhirlwindReport {
        location: "Southern Waters of West Java".to_string(),
        category: "Tropical Cyclone \"Cempaka\"".to_string(),
        epicenter_coords: GeoPoint::new(-8.5, 107.0),
        wind_speed_kmh: Some(95.0),
        time: Some("2026-10-18T00:30:00Z".to_string()),
    }
}

pub fn flood() -> FloodReport {
    FloodReport {
        location: "Katulampa Dam, Bogor".to_string(),
        status: FloodStatus::Siaga4,
        water_level_cm: Some(70.0),
        time: Some("2026-10-18T03:00:00Z".to_string()),
    }
}

/// All six records at once.
pub fn snapshot() -> HazardSnapshot {
    HazardSnapshot {
        earthquake: earthquake(),
        landslide: landslide(),
        fire: fire(),
        volcano: volcano(),
        whirlwind: whirlwind(),
        flood: flood(),
    }
}

/// Feeds serving the Bogor records, each delayed by `latency`.
pub fn feeds(latency: Duration) -> HazardFeeds {
    HazardFeeds {
        earthquake: Arc::new(StaticFeed::new("bogor:earthquake", earthquake()).with_latency(latency)),
        landslide: Arc::new(StaticFeed::new("bogor:landslide", landslide()).with_latency(latency)),
        fire: Arc::new(StaticFeed::new("bogor:fire", fire()).with_latency(latency)),
        volcano: Arc::new(StaticFeed::new("bogor:volcano", volcano()).with_latency(latency)),
        whirlwind: Arc::new(StaticFeed::new("bogor:whirlwind", whirlwind()).with_latency(latency)),
        flood: Arc::new(StaticFeed::new("bogor:flood", flood()).with_latency(latency)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazard_core::{enrich, HazardKind, DEFAULT_UNSAFE_RADIUS_KM};

    #[tokio::test]
    async fn test_feeds_serve_snapshot() {
        let feeds = feeds(Duration::ZERO);
        let expected = snapshot();

        assert_eq!(feeds.earthquake.fetch().await.unwrap(), expected.earthquake);
        assert_eq!(feeds.landslide.fetch().await.unwrap(), expected.landslide);
        assert_eq!(feeds.fire.fetch().await.unwrap(), expected.fire);
        assert_eq!(feeds.volcano.fetch().await.unwrap(), expected.volcano);
        assert_eq!(feeds.whirlwind.fetch().await.unwrap(), expected.whirlwind);
        assert_eq!(feeds.flood.fetch().await.unwrap(), expected.flood);
    }

    #[test]
    fn test_demo_data_is_calm_at_city_centre() {
        let entries = enrich(BOGOR_CENTER, DEFAULT_UNSAFE_RADIUS_KM, &snapshot());

        assert_eq!(entries.len(), 6);
        assert!(entries.iter().all(|e| !e.is_high_risk));

        let fire = entries.iter().find(|e| e.kind == HazardKind::Fire).unwrap();
        assert!(fire.distance_km.unwrap() < DEFAULT_UNSAFE_RADIUS_KM);
    }

    #[test]
    fn test_flood_wire_format() {
        let json = serde_json::to_value(flood()).unwrap();
        assert_eq!(json["status"], "Siaga 4 (Normal)");
        assert_eq!(json["waterLevel"], 70.0);
    }
}
