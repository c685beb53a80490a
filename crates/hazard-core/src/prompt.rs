//! Prompt text for text-generation synthesizers.

use sha2::{Digest, Sha256};

use crate::assessment::AlertSynthesisRequest;

/// Instructions given to a text-generation backend for every alert check.
pub const DEFAULT_ALERT_SYSTEM_PROMPT: &str = r#"You are a "Safety First" disaster alert system for Bogor, Indonesia. Decide whether the user is in immediate danger and, if so, write one alert.

The input lists six hazards (Flood, Earthquake, Landslide, Fire, Volcano, Whirlwind). Each has a summary, a distance from the user in km (none for Flood) and an isHighRisk flag that has already been computed for you.

Rules:
1. isHighRisk is the only trigger. Never report a hazard whose isHighRisk is false, however serious its summary sounds.
2. If several hazards have isHighRisk=true, report exactly one: the most urgent. Direct-proximity hazards (Fire, Landslide) outrank regional hazards (a distant Earthquake or Whirlwind) unless the regional event is exceptionally severe.
3. riskDistanceKm must be copied exactly from the chosen hazard's distanceKm. Do not recompute it. Omit it when the hazard has no distance.
4. When reporting, write a concise, urgent alertTitle, an alertMessage explaining the threat and why the user is at risk, a riskType, and at least 3 actionable safetyRecommendations.
5. If no hazard has isHighRisk=true, set isAtRisk to false and leave riskType, alertTitle and alertMessage as empty strings and safetyRecommendations as an empty array.
6. riskType is the chosen hazard's name: Flood, Earthquake, Landslide, Fire, Volcano or Whirlwind in English; Banjir, Gempa Bumi, Tanah Longsor, Kebakaran, Gunung Api or Angin Puting Beliung in Indonesian. No other wording is accepted.
7. Write every text field in the requested language.

Respond with a single JSON object only, no explanation:
{"isAtRisk": bool, "riskType": string, "alertTitle": string, "alertMessage": string, "riskDistanceKm": number (optional), "safetyRecommendations": [string]}"#;

/// Lowercase hex SHA-256 of a prompt, logged so operators can tell which
/// alert instructions a running synthesizer was started with.
pub fn hash_prompt(prompt: &str) -> String {
    format!("{:x}", Sha256::digest(prompt.as_bytes()))
}

/// Render the request as the user turn of a chat exchange.
pub fn render_request(request: &AlertSynthesisRequest) -> String {
    let mut parts = vec![
        format!("[LANGUAGE: {}]", request.language),
        format!(
            "[USER LOCATION: latitude {}, longitude {}]",
            request.user_location.latitude, request.user_location.longitude
        ),
    ];

    for entry in &request.enriched_disasters {
        let distance = entry
            .distance_km
            .map(|d| d.to_string())
            .unwrap_or_else(|| "none".to_string());
        parts.push(format!(
            "[HAZARD: type={}, isHighRisk={}, distanceKm={}, details={}]",
            entry.kind, entry.is_high_risk, distance, entry.details
        ));
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{build_request, Language};
    use crate::enrich::EnrichedDisaster;
    use crate::geo::GeoPoint;
    use crate::hazard::HazardKind;

    #[test]
    fn test_hash_prompt_known_digest() {
        assert_eq!(
            hash_prompt(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hash_prompt_tracks_prompt_edits() {
        let builtin = hash_prompt(DEFAULT_ALERT_SYSTEM_PROMPT);
        assert_eq!(builtin, hash_prompt(DEFAULT_ALERT_SYSTEM_PROMPT));
        assert_eq!(builtin.len(), 64);

        let edited = DEFAULT_ALERT_SYSTEM_PROMPT.replace("at least 3", "at least 4");
        assert_ne!(builtin, hash_prompt(&edited));
    }

    #[test]
    fn test_render_request() {
        let request = build_request(
            GeoPoint::new(-6.6, 106.8),
            Language::Indonesian,
            vec![
                EnrichedDisaster {
                    kind: HazardKind::Flood,
                    details: "Flood status 'Siaga 2 (Siaga)' at Katulampa Dam".to_string(),
                    distance_km: None,
                    is_high_risk: true,
                },
                EnrichedDisaster {
                    kind: HazardKind::Fire,
                    details: "Active fire at Sentul".to_string(),
                    distance_km: Some(2.0),
                    is_high_risk: true,
                },
            ],
        );

        let rendered = render_request(&request);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "[LANGUAGE: Indonesian]");
        assert_eq!(lines[1], "[USER LOCATION: latitude -6.6, longitude 106.8]");
        assert_eq!(
            lines[2],
            "[HAZARD: type=Flood, isHighRisk=true, distanceKm=none, details=Flood status 'Siaga 2 (Siaga)' at Katulampa Dam]"
        );
        assert_eq!(
            lines[3],
            "[HAZARD: type=Fire, isHighRisk=true, distanceKm=2, details=Active fire at Sentul]"
        );
    }
}
