//! Emotion Map REST API
//!
//! HTTP API layer for Emotion Map, built with Axum.
//!
//! # Endpoints
//!
//! ## Entries
//! - `GET /api/v1/entries` - List all entries, most-recent-first
//! - `GET /api/v1/entries/mine` - List the persisted journal
//! - `GET /api/v1/entries/:id` - Get a single entry
//! - `POST /api/v1/entries` - Create an entry
//! - `POST /api/v1/entries/:id/replies` - Add a reply to an entry
//!
//! ## Markers
//! - `GET /api/v1/markers` - Entries as a GeoJSON FeatureCollection
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use emotion_map::api::{serve, ApiConfig, AppState};
//! use emotion_map::geocode::{GeocodeClient, GeocodeConfig};
//! use emotion_map::store::{EntryStore, StoreConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(EntryStore::new(StoreConfig::default())?);
//!     let geocode = Arc::new(GeocodeClient::new(GeocodeConfig::default()));
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(store, geocode, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Entry routes
        .route("/entries", get(routes::entries::list_entries))
        .route("/entries", post(routes::entries::create_entry))
        .route("/entries/mine", get(routes::entries::list_my_entries))
        .route("/entries/:id", get(routes::entries::get_entry))
        .route("/entries/:id/replies", post(routes::entries::create_reply))
        // Marker routes
        .route("/markers", get(routes::markers::get_markers));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Emotion Map API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Emotion Map API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::{GeocodeClient, GeocodeConfig};
    use crate::store::{EntryStore, StoreConfig};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = Arc::new(EntryStore::new(StoreConfig::new(dir.path())).unwrap());
        let geocode = Arc::new(GeocodeClient::new(GeocodeConfig::default()));
        let api_config = ApiConfig::default();

        let state = AppState::new(store, geocode, api_config);
        let router = build_router(state);

        (router, dir)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // Creating with both coordinates and a city skips geocoding, so
    // tests never touch the network
    const CREATE_BODY: &str = r#"{
        "emotion": "Happy",
        "text": "Found a great coffee place",
        "name": "Ana",
        "city": "Lisbon",
        "lat": 38.7223,
        "lng": -9.1393
    }"#;

    #[tokio::test]
    async fn test_health_endpoints() {
        let (app, _dir) = create_test_app();

        for uri in ["/health/live", "/health/ready", "/health"] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_list_entries_seeded() {
        let (app, _dir) = create_test_app();

        let response = app.oneshot(get("/api/v1/entries")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["total"], 10);
        assert_eq!(json["entries"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_create_entry() {
        let (app, _dir) = create_test_app();

        let response = app
            .clone()
            .oneshot(post_json("/api/v1/entries", CREATE_BODY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = body_json(response).await;
        assert_eq!(created["emotion"], "Happy");
        assert_eq!(created["name"], "Ana");
        assert_eq!(created["city"], "Lisbon");
        assert_eq!(created["time_ago"], "just now");

        // The new entry is first in the global list
        let response = app.clone().oneshot(get("/api/v1/entries")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["total"], 11);
        assert_eq!(json["entries"][0]["id"], created["id"]);

        // And in the journal
        let response = app.oneshot(get("/api/v1/entries/mine")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["total"], 1);
        assert_eq!(json["entries"][0]["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_create_entry_missing_emotion_is_rejected() {
        let (app, _dir) = create_test_app();

        let body = r#"{"emotion": "", "text": "Hi", "city": "Lisbon", "lat": 38.7, "lng": -9.1}"#;
        let response = app
            .clone()
            .oneshot(post_json("/api/v1/entries", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // No store mutation
        let response = app.oneshot(get("/api/v1/entries")).await.unwrap();
        assert_eq!(body_json(response).await["total"], 10);
    }

    #[tokio::test]
    async fn test_create_entry_empty_text_is_rejected() {
        let (app, _dir) = create_test_app();

        let body = r#"{"emotion": "Sad", "text": "  ", "city": "Lisbon", "lat": 38.7, "lng": -9.1}"#;
        let response = app
            .clone()
            .oneshot(post_json("/api/v1/entries", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app.oneshot(get("/api/v1/entries")).await.unwrap();
        assert_eq!(body_json(response).await["total"], 10);
    }

    #[tokio::test]
    async fn test_get_entry_by_id() {
        let (app, _dir) = create_test_app();

        let response = app
            .clone()
            .oneshot(post_json("/api/v1/entries", CREATE_BODY))
            .await
            .unwrap();
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(get(&format!("/api/v1/entries/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["id"], id.as_str());

        let response = app
            .oneshot(get(&format!("/api/v1/entries/{}", uuid::Uuid::new_v4())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_reply_flow_and_limit() {
        let (app, _dir) = create_test_app();

        let response = app
            .clone()
            .oneshot(post_json("/api/v1/entries", CREATE_BODY))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_str().unwrap().to_string();
        let uri = format!("/api/v1/entries/{}/replies", id);

        for i in 0..3 {
            let body = format!(r#"{{"text": "You got this #{}"}}"#, i);
            let response = app.clone().oneshot(post_json(&uri, &body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);

            let reply = body_json(response).await;
            assert_eq!(reply["name"], "Anonymous");
        }

        // The fourth reply is an explicit conflict
        let response = app
            .clone()
            .oneshot(post_json(&uri, r#"{"text": "One more"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "REPLY_LIMIT_REACHED");

        // The entry still holds exactly three replies
        let response = app
            .oneshot(get(&format!("/api/v1/entries/{}", id)))
            .await
            .unwrap();
        let entry = body_json(response).await;
        assert_eq!(entry["replies"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_reply_to_missing_entry() {
        let (app, _dir) = create_test_app();

        let uri = format!("/api/v1/entries/{}/replies", uuid::Uuid::new_v4());
        let response = app
            .oneshot(post_json(&uri, r#"{"text": "Anyone there?"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_empty_reply_is_rejected() {
        let (app, _dir) = create_test_app();

        let response = app
            .clone()
            .oneshot(post_json("/api/v1/entries", CREATE_BODY))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(post_json(
                &format!("/api/v1/entries/{}/replies", id),
                r#"{"text": "   "}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_markers_are_geojson() {
        let (app, _dir) = create_test_app();

        let response = app.oneshot(get("/api/v1/markers")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"].as_array().unwrap().len(), 10);

        let feature = &json["features"][0];
        assert_eq!(feature["type"], "Feature");
        assert!(feature["properties"]["color"].as_str().unwrap().starts_with('#'));
    }

    #[tokio::test]
    async fn test_create_entry_invalid_json() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(post_json("/api/v1/entries", "not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
