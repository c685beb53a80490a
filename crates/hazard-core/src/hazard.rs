//! Hazard records as delivered by the data feeds.
//!
//! Feeds publish status values as display strings in English or Indonesian
//! ("High" / "Tinggi", "Siaga 2 (Siaga)", ...). They are decoded once, here,
//! into language-independent enums. Risk predicates only ever see the enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assessment::Language;
use crate::geo::GeoPoint;

/// A status string that does not map to any known level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised {field} value: {value:?}")]
pub struct UnknownStatus {
    pub field: &'static str,
    pub value: String,
}

impl UnknownStatus {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// The six monitored hazard categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardKind {
    Flood,
    Earthquake,
    Landslide,
    Fire,
    Volcano,
    Whirlwind,
}

impl HazardKind {
    /// Order in which enriched entries are always emitted.
    pub const ENRICHMENT_ORDER: [HazardKind; 6] = [
        HazardKind::Flood,
        HazardKind::Earthquake,
        HazardKind::Landslide,
        HazardKind::Fire,
        HazardKind::Volcano,
        HazardKind::Whirlwind,
    ];

    /// English display name.
    pub fn label(&self) -> &'static str {
        match self {
            HazardKind::Flood => "Flood",
            HazardKind::Earthquake => "Earthquake",
            HazardKind::Landslide => "Landslide",
            HazardKind::Fire => "Fire",
            HazardKind::Volcano => "Volcano",
            HazardKind::Whirlwind => "Whirlwind",
        }
    }

    /// Indonesian display name.
    pub fn indonesian_label(&self) -> &'static str {
        match self {
            HazardKind::Flood => "Banjir",
            HazardKind::Earthquake => "Gempa Bumi",
            HazardKind::Landslide => "Tanah Longsor",
            HazardKind::Fire => "Kebakaran",
            HazardKind::Volcano => "Gunung Api",
            HazardKind::Whirlwind => "Angin Puting Beliung",
        }
    }

    /// Display name in the alert language.
    pub fn label_in(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.label(),
            Language::Indonesian => self.indonesian_label(),
        }
    }

    /// Resolve a display name in either language, ignoring case.
    pub fn from_label(label: &str) -> Option<HazardKind> {
        let label = label.trim();
        Self::ENRICHMENT_ORDER.into_iter().find(|kind| {
            label.eq_ignore_ascii_case(kind.label())
                || label.eq_ignore_ascii_case(kind.indonesian_label())
        })
    }

    /// Lowercase slug, used for feed URLs and log fields.
    pub fn slug(&self) -> &'static str {
        match self {
            HazardKind::Flood => "flood",
            HazardKind::Earthquake => "earthquake",
            HazardKind::Landslide => "landslide",
            HazardKind::Fire => "fire",
            HazardKind::Volcano => "volcano",
            HazardKind::Whirlwind => "whirlwind",
        }
    }
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Landslide risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RiskLevel {
    High,
    Moderate,
    Low,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::Low => "Low",
        }
    }
}

impl FromStr for RiskLevel {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" | "tinggi" => Ok(RiskLevel::High),
            "moderate" | "medium" | "sedang" => Ok(RiskLevel::Moderate),
            "low" | "rendah" => Ok(RiskLevel::Low),
            _ => Err(UnknownStatus::new("risk level", s)),
        }
    }
}

/// Fire incident status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FireStatus {
    Active,
    Contained,
    UnderControl,
}

impl FireStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FireStatus::Active => "Active",
            FireStatus::Contained => "Contained",
            FireStatus::UnderControl => "Under Control",
        }
    }
}

impl FromStr for FireStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" | "aktif" => Ok(FireStatus::Active),
            "contained" | "terkendali" => Ok(FireStatus::Contained),
            "under control" | "undercontrol" | "under_control" | "dalam pengendalian" => {
                Ok(FireStatus::UnderControl)
            }
            _ => Err(UnknownStatus::new("fire status", s)),
        }
    }
}

/// Volcano alert level, Level I (Normal) through Level IV (Awas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VolcanoLevel {
    Normal,
    Waspada,
    Siaga,
    Awas,
}

impl VolcanoLevel {
    pub fn label(&self) -> &'static str {
        match self {
            VolcanoLevel::Normal => "Level I (Normal)",
            VolcanoLevel::Waspada => "Level II (Waspada)",
            VolcanoLevel::Siaga => "Level III (Siaga)",
            VolcanoLevel::Awas => "Level IV (Awas)",
        }
    }
}

impl FromStr for VolcanoLevel {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();

        // "Level IV (Awas)" contains "Level I", so read the numeral as a token.
        let numeral = lower.strip_prefix("level").and_then(|rest| {
            rest.trim_start()
                .split(|c: char| c.is_whitespace() || c == '(' || c == '-')
                .next()
        });

        match numeral {
            Some("i") | Some("1") => return Ok(VolcanoLevel::Normal),
            Some("ii") | Some("2") => return Ok(VolcanoLevel::Waspada),
            Some("iii") | Some("3") => return Ok(VolcanoLevel::Siaga),
            Some("iv") | Some("4") => return Ok(VolcanoLevel::Awas),
            _ => {}
        }

        if lower.contains("awas") {
            Ok(VolcanoLevel::Awas)
        } else if lower.contains("siaga") {
            Ok(VolcanoLevel::Siaga)
        } else if lower.contains("waspada") {
            Ok(VolcanoLevel::Waspada)
        } else if lower.contains("normal") {
            Ok(VolcanoLevel::Normal)
        } else {
            Err(UnknownStatus::new("volcano level", s))
        }
    }
}

/// Katulampa-style flood gauge status, Siaga 1 (most severe) to Siaga 4 (normal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FloodStatus {
    Siaga1,
    Siaga2,
    Siaga3,
    Siaga4,
}

impl FloodStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FloodStatus::Siaga1 => "Siaga 1 (Awas)",
            FloodStatus::Siaga2 => "Siaga 2 (Siaga)",
            FloodStatus::Siaga3 => "Siaga 3 (Waspada)",
            FloodStatus::Siaga4 => "Siaga 4 (Normal)",
        }
    }
}

/// Matches "siaga" followed by a level digit anywhere in the string, with or
/// without whitespace in between, so "Siaga 1" and "SIAGA1" both read as
/// level 1. Without a digit the Indonesian keyword decides, and a bare
/// "Siaga" reads as level 2.
impl FromStr for FloodStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();

        for (idx, _) in lower.match_indices("siaga") {
            let digit = lower[idx + "siaga".len()..].trim_start().chars().next();
            match digit {
                Some('1') => return Ok(FloodStatus::Siaga1),
                Some('2') => return Ok(FloodStatus::Siaga2),
                Some('3') => return Ok(FloodStatus::Siaga3),
                Some('4') => return Ok(FloodStatus::Siaga4),
                _ => {}
            }
        }

        if lower.contains("awas") {
            Ok(FloodStatus::Siaga1)
        } else if lower.contains("waspada") {
            Ok(FloodStatus::Siaga3)
        } else if lower.contains("normal") {
            Ok(FloodStatus::Siaga4)
        } else if lower.contains("siaga") {
            Ok(FloodStatus::Siaga2)
        } else {
            Err(UnknownStatus::new("flood status", s))
        }
    }
}

macro_rules! string_codec {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = UnknownStatus;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.label().to_string()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

string_codec!(RiskLevel, FireStatus, VolcanoLevel, FloodStatus);

/// Latest earthquake event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarthquakeReport {
    pub magnitude: f64,
    pub location: String,
    pub epicenter_coords: GeoPoint,
    /// Hypocentre depth in km.
    #[serde(default, rename = "depth", skip_serializing_if = "Option::is_none")]
    pub depth_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Landslide risk assessment for an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandslideReport {
    pub location: String,
    pub risk_level: RiskLevel,
    pub coords: GeoPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Current fire incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FireReport {
    pub location: String,
    pub status: FireStatus,
    pub coords: GeoPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Volcano activity bulletin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolcanoReport {
    pub name: String,
    pub status: VolcanoLevel,
    pub coords: GeoPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_eruption: Option<String>,
}

/// Whirlwind or tropical cyclone report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhirlwindReport {
    pub location: String,
    pub category: String,
    pub epicenter_coords: GeoPoint,
    #[serde(default, rename = "windSpeed", skip_serializing_if = "Option::is_none")]
    pub wind_speed_kmh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Flood gauge reading. Risk is status-driven, so there is no coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloodReport {
    pub location: String,
    pub status: FloodStatus,
    #[serde(default, rename = "waterLevel", skip_serializing_if = "Option::is_none")]
    pub water_level_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// One record per hazard kind, as fetched for a single alert check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardSnapshot {
    pub earthquake: EarthquakeReport,
    pub landslide: LandslideReport,
    pub fire: FireReport,
    pub volcano: VolcanoReport,
    pub whirlwind: WhirlwindReport,
    pub flood: FloodReport,
}
