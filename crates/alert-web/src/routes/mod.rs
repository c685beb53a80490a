//! Route handlers for the alert web interface.

pub mod health;
pub mod nearby_alert;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/nearby-alert", post(nearby_alert::check))
}

/// The full application with request tracing and state attached.
pub fn app(state: AppState) -> Router {
    router().layer(TraceLayer::new_for_http()).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use hazard_core::{AlertSynthesizer, FeedError, FireReport, FireStatus};
    use hazard_feeds::{bogor, StaticFeed};
    use mock_synth::RuleBasedSynthesizer;
    use ::nearby_alert::{AlertCheckConfig, AlertChecker};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    async fn serve(feeds: hazard_core::HazardFeeds) -> String {
        let synthesizer: Arc<dyn AlertSynthesizer> = Arc::new(RuleBasedSynthesizer::new());
        let checker = AlertChecker::new(feeds, synthesizer, AlertCheckConfig::default()).unwrap();
        let app = app(AppState::new(checker));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn active_fire_feeds() -> hazard_core::HazardFeeds {
        let mut feeds = bogor::feeds(Duration::ZERO);
        feeds.fire = Arc::new(StaticFeed::new(
            "fire",
            FireReport {
                status: FireStatus::Active,
                ..bogor::fire()
            },
        ));
        feeds
    }

    #[tokio::test]
    async fn test_health() {
        let base = serve(bogor::feeds(Duration::ZERO)).await;

        let body: Value = reqwest::get(format!("{}/health", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["status"], "ok");
        assert_eq!(body["synthesizer"], "RuleBasedSynthesizer");
        assert_eq!(body["ready"], true);
    }

    #[tokio::test]
    async fn test_not_at_risk() {
        let base = serve(bogor::feeds(Duration::ZERO)).await;

        let response = reqwest::Client::new()
            .post(format!("{}/api/nearby-alert", base))
            .json(&json!({
                "userLocation": {"latitude": -6.595, "longitude": 106.816},
                "language": "English"
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["isAtRisk"], false);
        assert_eq!(body["alertTitle"], "");
        assert!(body.get("riskDistanceKm").is_none());
    }

    #[tokio::test]
    async fn test_at_risk() {
        let base = serve(active_fire_feeds()).await;

        let response = reqwest::Client::new()
            .post(format!("{}/api/nearby-alert", base))
            .json(&json!({
                "userLocation": {"latitude": -6.56, "longitude": 106.85},
                "language": "Indonesian"
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["isAtRisk"], true);
        assert_eq!(body["riskType"], "Kebakaran");
        assert_eq!(body["riskDistanceKm"], 1.0);
        assert!(body["safetyRecommendations"].as_array().unwrap().len() >= 3);
    }

    #[tokio::test]
    async fn test_bad_input() {
        let base = serve(bogor::feeds(Duration::ZERO)).await;
        let client = reqwest::Client::new();

        let out_of_range = client
            .post(format!("{}/api/nearby-alert", base))
            .json(&json!({
                "userLocation": {"latitude": 95.0, "longitude": 106.8},
                "language": "English"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(out_of_range.status(), 400);
        let body: Value = out_of_range.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("latitude"));

        let malformed = client
            .post(format!("{}/api/nearby-alert", base))
            .header("content-type", "application/json")
            .body("{\"userLocation\": ")
            .send()
            .await
            .unwrap();
        assert_eq!(malformed.status(), 400);

        let missing_field = client
            .post(format!("{}/api/nearby-alert", base))
            .json(&json!({"language": "English"}))
            .send()
            .await
            .unwrap();
        assert_eq!(missing_field.status(), 400);

        let missing_language = client
            .post(format!("{}/api/nearby-alert", base))
            .json(&json!({"userLocation": {"latitude": -6.6, "longitude": 106.8}}))
            .send()
            .await
            .unwrap();
        assert_eq!(missing_language.status(), 400);
        let body: Value = missing_language.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("language"));
    }

    #[tokio::test]
    async fn test_feed_failure_is_unavailable() {
        let mut feeds = bogor::feeds(Duration::ZERO);
        feeds.earthquake = Arc::new(StaticFeed::failing(
            "earthquake",
            FeedError::Http("connection refused".to_string()),
        ));
        let base = serve(feeds).await;

        let response = reqwest::Client::new()
            .post(format!("{}/api/nearby-alert", base))
            .json(&json!({
                "userLocation": {"latitude": -6.595, "longitude": 106.816},
                "language": "English"
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 503);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "no assessment available");
        assert!(body["reason"].as_str().unwrap().contains("Earthquake"));
    }
}
