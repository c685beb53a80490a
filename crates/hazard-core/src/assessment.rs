//! Alert synthesis request and the assessment response contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enrich::EnrichedDisaster;
use crate::error::SynthesisError;
use crate::geo::GeoPoint;
use crate::hazard::HazardKind;

/// Minimum number of safety recommendations in an at-risk assessment.
pub const MIN_RECOMMENDATIONS: usize = 3;

/// Language the alert text must be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Indonesian,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => f.write_str("English"),
            Language::Indonesian => f.write_str("Indonesian"),
        }
    }
}

/// Everything a synthesizer needs to write an alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSynthesisRequest {
    pub user_location: GeoPoint,
    pub language: Language,
    pub enriched_disasters: Vec<EnrichedDisaster>,
}

impl AlertSynthesisRequest {
    /// Entries flagged as high risk, in enrichment order.
    pub fn high_risk(&self) -> impl Iterator<Item = &EnrichedDisaster> {
        self.enriched_disasters.iter().filter(|e| e.is_high_risk)
    }

    /// Whether any hazard is flagged.
    pub fn has_high_risk(&self) -> bool {
        self.high_risk().next().is_some()
    }
}

/// Assemble the request handed to the synthesizer.
pub fn build_request(
    user_location: GeoPoint,
    language: Language,
    enriched_disasters: Vec<EnrichedDisaster>,
) -> AlertSynthesisRequest {
    AlertSynthesisRequest {
        user_location,
        language,
        enriched_disasters,
    }
}

/// The user-facing outcome of an alert check.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertAssessment {
    pub is_at_risk: bool,
    #[serde(default)]
    pub risk_type: String,
    #[serde(default)]
    pub alert_title: String,
    #[serde(default)]
    pub alert_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_distance_km: Option<f64>,
    #[serde(default)]
    pub safety_recommendations: Vec<String>,
}

impl AlertAssessment {
    /// The "no risk" assessment: every field empty.
    pub fn not_at_risk() -> Self {
        Self::default()
    }

    /// Check this assessment against the request it answers.
    ///
    /// `riskType` must name a flagged hazard in English or Indonesian, and
    /// `riskDistanceKm` must be that hazard's precomputed distance.
    pub fn validate(&self, request: &AlertSynthesisRequest) -> Result<(), SynthesisError> {
        if !self.is_at_risk {
            let empty = self.risk_type.is_empty()
                && self.alert_title.is_empty()
                && self.alert_message.is_empty()
                && self.safety_recommendations.is_empty()
                && self.risk_distance_km.is_none();
            if !empty {
                return Err(invalid("isAtRisk is false but alert fields are populated"));
            }
            return Ok(());
        }

        if !request.has_high_risk() {
            return Err(invalid("isAtRisk is true but no hazard is flagged high risk"));
        }

        for (name, value) in [
            ("riskType", &self.risk_type),
            ("alertTitle", &self.alert_title),
            ("alertMessage", &self.alert_message),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(&format!("{} is empty", name)));
            }
        }

        let recommendations = self
            .safety_recommendations
            .iter()
            .filter(|r| !r.trim().is_empty())
            .count();
        if recommendations < MIN_RECOMMENDATIONS {
            return Err(invalid(&format!(
                "expected at least {} safety recommendations, got {}",
                MIN_RECOMMENDATIONS, recommendations
            )));
        }

        let kind = HazardKind::from_label(&self.risk_type).ok_or_else(|| {
            invalid(&format!("riskType {:?} does not name a hazard", self.risk_type))
        })?;
        let entry = request
            .high_risk()
            .find(|e| e.kind == kind)
            .ok_or_else(|| invalid(&format!("{} is not flagged high risk", kind)))?;

        if self.risk_distance_km != entry.distance_km {
            return Err(invalid(&format!(
                "riskDistanceKm {:?} does not match {} distance {:?}",
                self.risk_distance_km, kind, entry.distance_km
            )));
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> SynthesisError {
    SynthesisError::InvalidResponse(reason.to_string())
}
