//! Hazard risk enrichment.
//!
//! Turns the raw hazard snapshot into six [`EnrichedDisaster`] entries, each
//! with a human-readable summary, the distance from the user (where the
//! hazard has a location) and a high-risk flag. Every hazard is evaluated on
//! its own; no flag depends on another hazard.

use serde::{Deserialize, Serialize};

use crate::geo::{distance_km, GeoPoint};
use crate::hazard::{
    EarthquakeReport, FireReport, FireStatus, FloodReport, FloodStatus, HazardKind,
    HazardSnapshot, LandslideReport, RiskLevel, VolcanoLevel, VolcanoReport, WhirlwindReport,
};

/// Earthquakes must be strictly stronger than this to count as a risk.
pub const EARTHQUAKE_MAGNITUDE_THRESHOLD: f64 = 4.5;

/// Unsafe radius used by the Bogor deployment.
pub const DEFAULT_UNSAFE_RADIUS_KM: f64 = 20.0;

/// A hazard with its computed distance and risk flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedDisaster {
    #[serde(rename = "type")]
    pub kind: HazardKind,
    /// Summary of the key facts (location plus status, magnitude or level).
    pub details: String,
    /// Distance from the user, rounded to whole kilometres. Absent for floods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub is_high_risk: bool,
}

/// Enrich all six hazards for a user location.
///
/// Entries are always returned in [`HazardKind::ENRICHMENT_ORDER`].
pub fn enrich(
    user: GeoPoint,
    unsafe_radius_km: f64,
    hazards: &HazardSnapshot,
) -> Vec<EnrichedDisaster> {
    vec![
        enrich_flood(&hazards.flood),
        enrich_earthquake(user, unsafe_radius_km, &hazards.earthquake),
        enrich_landslide(user, unsafe_radius_km, &hazards.landslide),
        enrich_fire(user, unsafe_radius_km, &hazards.fire),
        enrich_volcano(user, unsafe_radius_km, &hazards.volcano),
        enrich_whirlwind(user, unsafe_radius_km, &hazards.whirlwind),
    ]
}

/// Distance to a hazard and whether it falls inside the unsafe radius.
///
/// The comparison uses the exact distance; only the reported value is rounded.
struct Proximity {
    rounded_km: f64,
    within_radius: bool,
}

impl Proximity {
    fn measure(user: GeoPoint, target: GeoPoint, unsafe_radius_km: f64) -> Self {
        let exact = distance_km(user, target);
        Self {
            rounded_km: exact.round(),
            within_radius: exact <= unsafe_radius_km,
        }
    }
}

/// Flood risk is status-only: Siaga 1, 2 and 3 are high risk.
pub fn enrich_flood(flood: &FloodReport) -> EnrichedDisaster {
    let is_high_risk = matches!(
        flood.status,
        FloodStatus::Siaga1 | FloodStatus::Siaga2 | FloodStatus::Siaga3
    );

    let mut details = format!("Flood status '{}' at {}", flood.status, flood.location);
    if let Some(level) = flood.water_level_cm {
        details.push_str(&format!(", water level {:.0} cm", level));
    }

    EnrichedDisaster {
        kind: HazardKind::Flood,
        details,
        distance_km: None,
        is_high_risk,
    }
}

pub fn enrich_earthquake(
    user: GeoPoint,
    unsafe_radius_km: f64,
    quake: &EarthquakeReport,
) -> EnrichedDisaster {
    let proximity = Proximity::measure(user, quake.epicenter_coords, unsafe_radius_km);

    let mut details = format!(
        "Magnitude {:.1} earthquake at {}",
        quake.magnitude, quake.location
    );
    if let Some(depth) = quake.depth_km {
        details.push_str(&format!(", depth {:.0} km", depth));
    }

    EnrichedDisaster {
        kind: HazardKind::Earthquake,
        details,
        distance_km: Some(proximity.rounded_km),
        is_high_risk: proximity.within_radius
            && quake.magnitude > EARTHQUAKE_MAGNITUDE_THRESHOLD,
    }
}

pub fn enrich_landslide(
    user: GeoPoint,
    unsafe_radius_km: f64,
    landslide: &LandslideReport,
) -> EnrichedDisaster {
    let proximity = Proximity::measure(user, landslide.coords, unsafe_radius_km);

    EnrichedDisaster {
        kind: HazardKind::Landslide,
        details: format!(
            "{} landslide risk at {}",
            landslide.risk_level, landslide.location
        ),
        distance_km: Some(proximity.rounded_km),
        is_high_risk: proximity.within_radius && landslide.risk_level == RiskLevel::High,
    }
}

pub fn enrich_fire(user: GeoPoint, unsafe_radius_km: f64, fire: &FireReport) -> EnrichedDisaster {
    let proximity = Proximity::measure(user, fire.coords, unsafe_radius_km);

    EnrichedDisaster {
        kind: HazardKind::Fire,
        details: format!("{} fire at {}", fire.status, fire.location),
        distance_km: Some(proximity.rounded_km),
        is_high_risk: proximity.within_radius && fire.status == FireStatus::Active,
    }
}

pub fn enrich_volcano(
    user: GeoPoint,
    unsafe_radius_km: f64,
    volcano: &VolcanoReport,
) -> EnrichedDisaster {
    let proximity = Proximity::measure(user, volcano.coords, unsafe_radius_km);

    EnrichedDisaster {
        kind: HazardKind::Volcano,
        details: format!("{} at alert {}", volcano.name, volcano.status),
        distance_km: Some(proximity.rounded_km),
        is_high_risk: proximity.within_radius && volcano.status != VolcanoLevel::Normal,
    }
}

/// Whirlwinds have no secondary condition: being inside the radius is enough.
pub fn enrich_whirlwind(
    user: GeoPoint,
    unsafe_radius_km: f64,
    whirlwind: &WhirlwindReport,
) -> EnrichedDisaster {
    let proximity = Proximity::measure(user, whirlwind.epicenter_coords, unsafe_radius_km);

    let mut details = format!("{} at {}", whirlwind.category, whirlwind.location);
    if let Some(speed) = whirlwind.wind_speed_kmh {
        details.push_str(&format!(", winds {:.0} km/h", speed));
    }

    EnrichedDisaster {
        kind: HazardKind::Whirlwind,
        details,
        distance_km: Some(proximity.rounded_km),
        is_high_risk: proximity.within_radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: GeoPoint = GeoPoint {
        latitude: -6.6,
        longitude: 106.8,
    };

    /// A point roughly `km` kilometres due north of the user.
    fn north_of_user(km: f64) -> GeoPoint {
        GeoPoint::new(USER.latitude + km / 111.195, USER.longitude)
    }

    fn quiet_snapshot() -> HazardSnapshot {
        HazardSnapshot {
            earthquake: EarthquakeReport {
                magnitude: 3.0,
                location: "Indian Ocean".to_string(),
                epicenter_coords: north_of_user(500.0),
                depth_km: None,
                time: None,
            },
            landslide: LandslideReport {
                location: "Cisarua, Bogor Regency".to_string(),
                risk_level: RiskLevel::Low,
                coords: north_of_user(5.0),
                trigger: None,
                time: None,
            },
            fire: FireReport {
                location: "Sentul Industrial Area, Bogor".to_string(),
                status: FireStatus::Contained,
                coords: north_of_user(2.0),
                cause: None,
                time: None,
            },
            volcano: VolcanoReport {
                name: "Mount Salak".to_string(),
                status: VolcanoLevel::Normal,
                coords: north_of_user(10.0),
                last_eruption: None,
            },
            whirlwind: WhirlwindReport {
                location: "Southern Waters of West Java".to_string(),
                category: "Tropical Cyclone \"Cempaka\"".to_string(),
                epicenter_coords: north_of_user(1000.0),
                wind_speed_kmh: Some(95.0),
                time: None,
            },
            flood: FloodReport {
                location: "Katulampa Dam, Bogor".to_string(),
                status: "Siaga 4 (Normal)".parse().unwrap(),
                water_level_cm: Some(70.0),
                time: None,
            },
        }
    }

    fn flood(status: &str) -> FloodReport {
        FloodReport {
            location: "Katulampa Dam, Bogor".to_string(),
            status: status.parse().unwrap(),
            water_level_cm: None,
            time: None,
        }
    }

    fn quake(magnitude: f64, coords: GeoPoint) -> EarthquakeReport {
        EarthquakeReport {
            magnitude,
            location: "Java Sea".to_string(),
            epicenter_coords: coords,
            depth_km: Some(22.0),
            time: None,
        }
    }

    fn fire(status: FireStatus, coords: GeoPoint) -> FireReport {
        FireReport {
            location: "Sentul".to_string(),
            status,
            coords,
            cause: None,
            time: None,
        }
    }

    #[test]
    fn test_fixed_order_and_count() {
        let enriched = enrich(USER, DEFAULT_UNSAFE_RADIUS_KM, &quiet_snapshot());
        let kinds: Vec<HazardKind> = enriched.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, HazardKind::ENRICHMENT_ORDER.to_vec());
    }

    #[test]
    fn test_no_risk_scenario() {
        let enriched = enrich(USER, DEFAULT_UNSAFE_RADIUS_KM, &quiet_snapshot());
        assert_eq!(enriched.len(), 6);
        assert!(enriched.iter().all(|e| !e.is_high_risk));
    }

    #[test]
    fn test_single_fire_risk() {
        let mut snapshot = quiet_snapshot();
        snapshot.fire.status = FireStatus::Active;

        let enriched = enrich(USER, DEFAULT_UNSAFE_RADIUS_KM, &snapshot);
        let flagged: Vec<&EnrichedDisaster> = enriched.iter().filter(|e| e.is_high_risk).collect();

        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].kind, HazardKind::Fire);
        assert_eq!(flagged[0].distance_km, Some(2.0));
    }

    #[test]
    fn test_flood_ignores_location_and_radius() {
        for status in ["Siaga 1 (Awas)", "Siaga 2", "Siaga 3 (Waspada)"] {
            let entry = enrich_flood(&flood(status));
            assert!(entry.is_high_risk, "{} should be high risk", status);
            assert!(entry.distance_km.is_none());
        }
        assert!(!enrich_flood(&flood("Siaga 4 (Normal)")).is_high_risk);

        let mut snapshot = quiet_snapshot();
        snapshot.flood = flood("Siaga 2");
        let far_user = GeoPoint::new(51.5, -0.12);
        for (user, radius) in [(USER, 20.0), (far_user, 0.5), (USER, 10_000.0)] {
            let entry = &enrich(user, radius, &snapshot)[0];
            assert_eq!(entry.kind, HazardKind::Flood);
            assert!(entry.is_high_risk);
        }
    }

    #[test]
    fn test_fire_radius_boundary_inclusive() {
        let coords = north_of_user(12.0);
        let exact = distance_km(USER, coords);
        let report = fire(FireStatus::Active, coords);

        assert!(enrich_fire(USER, exact, &report).is_high_risk);
        // hazard sits 0.001 km beyond the radius
        assert!(!enrich_fire(USER, exact - 0.001, &report).is_high_risk);
    }

    #[test]
    fn test_fire_needs_active_status() {
        let coords = north_of_user(2.0);
        for status in [FireStatus::Contained, FireStatus::UnderControl] {
            assert!(!enrich_fire(USER, 20.0, &fire(status, coords)).is_high_risk);
        }
        assert!(enrich_fire(USER, 20.0, &fire(FireStatus::Active, coords)).is_high_risk);
    }

    #[test]
    fn test_earthquake_dual_condition() {
        let near = north_of_user(10.0);
        let far = north_of_user(80.0);

        assert!(!enrich_earthquake(USER, 20.0, &quake(4.5, near)).is_high_risk);
        assert!(enrich_earthquake(USER, 20.0, &quake(4.6, near)).is_high_risk);
        assert!(!enrich_earthquake(USER, 20.0, &quake(4.6, far)).is_high_risk);
    }

    #[test]
    fn test_landslide_needs_high_level() {
        let mut report = quiet_snapshot().landslide;
        assert!(!enrich_landslide(USER, 20.0, &report).is_high_risk);

        report.risk_level = "Tinggi".parse().unwrap();
        assert!(enrich_landslide(USER, 20.0, &report).is_high_risk);

        report.coords = north_of_user(30.0);
        assert!(!enrich_landslide(USER, 20.0, &report).is_high_risk);
    }

    #[test]
    fn test_volcano_any_level_above_normal() {
        let mut report = quiet_snapshot().volcano;
        assert!(!enrich_volcano(USER, 20.0, &report).is_high_risk);

        for level in [VolcanoLevel::Waspada, VolcanoLevel::Siaga, VolcanoLevel::Awas] {
            report.status = level;
            assert!(enrich_volcano(USER, 20.0, &report).is_high_risk);
        }

        report.coords = north_of_user(35.0);
        for level in [VolcanoLevel::Waspada, VolcanoLevel::Awas] {
            report.status = level;
            let entry = enrich_volcano(USER, 20.0, &report);
            assert!(!entry.is_high_risk);
            assert_eq!(entry.distance_km, Some(35.0));
        }
    }

    #[test]
    fn test_whirlwind_distance_only() {
        let mut report = quiet_snapshot().whirlwind;
        assert!(!enrich_whirlwind(USER, 20.0, &report).is_high_risk);

        report.epicenter_coords = north_of_user(15.0);
        let entry = enrich_whirlwind(USER, 20.0, &report);
        assert!(entry.is_high_risk);
        assert_eq!(entry.distance_km, Some(15.0));
    }

    #[test]
    fn test_distance_is_rounded() {
        let entry = enrich_fire(USER, 20.0, &fire(FireStatus::Active, north_of_user(7.4)));
        assert_eq!(entry.distance_km, Some(7.0));
    }

    #[test]
    fn test_details_carry_key_facts() {
        let enriched = enrich(USER, DEFAULT_UNSAFE_RADIUS_KM, &quiet_snapshot());

        assert!(enriched[0].details.contains("Katulampa Dam"));
        assert!(enriched[0].details.contains("Siaga 4 (Normal)"));
        assert!(enriched[1].details.contains("3.0"));
        assert!(enriched[2].details.contains("Low"));
        assert!(enriched[2].details.contains("Cisarua"));
        assert!(enriched[3].details.contains("Contained"));
        assert!(enriched[4].details.contains("Mount Salak"));
        assert!(enriched[4].details.contains("Level I (Normal)"));
        assert!(enriched[5].details.contains("Cempaka"));
    }

    #[test]
    fn test_serialized_shape() {
        let entry = enrich_flood(&flood("Siaga 2"));
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["type"], "Flood");
        assert_eq!(json["isHighRisk"], true);
        assert!(json.get("distanceKm").is_none());
    }
}
