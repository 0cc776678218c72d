//! Entry Routes
//!
//! Endpoints for creating and listing emotion entries and their replies.
//!
//! - GET  /api/v1/entries - Global list, most-recent-first
//! - GET  /api/v1/entries/mine - The persisted journal
//! - GET  /api/v1/entries/:id - Entry detail
//! - POST /api/v1/entries - Create an entry
//! - POST /api/v1/entries/:id/replies - Add a reply

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::dto::{
    CreateEntryRequest, CreateReplyRequest, EntryListResponse, EntryResponse, ReplyResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::geocode::UNKNOWN_LOCATION;
use crate::store::{Emotion, NewEntry};

const MAX_TEXT_LEN: usize = 500;
const MAX_NAME_LEN: usize = 50;
const MAX_CITY_LEN: usize = 100;

/// GET /api/v1/entries
///
/// List all entries, most-recent-first.
pub async fn list_entries(State(state): State<Arc<AppState>>) -> Json<EntryListResponse> {
    let entries = state.store.entries().await;
    Json(to_list_response(&entries))
}

/// GET /api/v1/entries/mine
///
/// List the journal: entries created through this server, persisted
/// across restarts.
pub async fn list_my_entries(State(state): State<Arc<AppState>>) -> Json<EntryListResponse> {
    let entries = state.store.my_entries().await;
    Json(to_list_response(&entries))
}

/// GET /api/v1/entries/:id
///
/// Get a single entry by identifier.
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<EntryResponse>> {
    let entry = state
        .store
        .entry(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Entry {} not found", id)))?;

    Ok(Json(EntryResponse::from(&entry)))
}

/// POST /api/v1/entries
///
/// Create an entry. Requires an emotion and non-empty text, plus either
/// coordinates or a city name for the location.
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateEntryRequest>,
) -> ApiResult<(StatusCode, Json<EntryResponse>)> {
    let emotion = validate_entry_request(&req)?;
    let (city, lat, lng) = resolve_location(&state, &req).await?;

    let entry = state
        .store
        .add_entry(NewEntry {
            emotion,
            text: req.text.trim().to_string(),
            name: req.name,
            city,
            lat,
            lng,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(EntryResponse::from(&entry))))
}

/// POST /api/v1/entries/:id/replies
///
/// Add a supportive reply to an entry. A missing entry is 404; an entry
/// already holding the maximum number of replies is 409.
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateReplyRequest>,
) -> ApiResult<(StatusCode, Json<ReplyResponse>)> {
    if req.text.trim().is_empty() {
        return Err(ApiError::Validation("Reply text cannot be empty".to_string()));
    }
    if req.text.len() > MAX_TEXT_LEN {
        return Err(ApiError::Validation(format!(
            "Reply text exceeds maximum length of {} characters",
            MAX_TEXT_LEN
        )));
    }

    let reply = state
        .store
        .add_reply(id, req.name, req.text.trim().to_string())
        .await?;

    Ok((StatusCode::CREATED, Json(ReplyResponse::from(&reply))))
}

/// Validate a create-entry request and parse its emotion label
fn validate_entry_request(req: &CreateEntryRequest) -> ApiResult<Emotion> {
    let emotion = Emotion::parse(&req.emotion).ok_or_else(|| {
        ApiError::Validation(format!(
            "Invalid emotion '{}'. Use one of: {}",
            req.emotion,
            Emotion::all()
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })?;

    if req.text.trim().is_empty() {
        return Err(ApiError::Validation("Entry text cannot be empty".to_string()));
    }
    if req.text.len() > MAX_TEXT_LEN {
        return Err(ApiError::Validation(format!(
            "Entry text exceeds maximum length of {} characters",
            MAX_TEXT_LEN
        )));
    }

    if let Some(name) = &req.name {
        if name.len() > MAX_NAME_LEN {
            return Err(ApiError::Validation(format!(
                "Name exceeds maximum length of {} characters",
                MAX_NAME_LEN
            )));
        }
    }

    if let Some(city) = &req.city {
        if city.len() > MAX_CITY_LEN {
            return Err(ApiError::Validation(format!(
                "City exceeds maximum length of {} characters",
                MAX_CITY_LEN
            )));
        }
    }

    if let (Some(lat), Some(lng)) = (req.lat, req.lng) {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ApiError::Validation(
                "Latitude must be between -90 and 90".to_string(),
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(ApiError::Validation(
                "Longitude must be between -180 and 180".to_string(),
            ));
        }
    }

    Ok(emotion)
}

/// Resolve the entry location from the request
///
/// Coordinates win over a city name. A missing city is reverse geocoded
/// from the coordinates, falling back to "Unknown location" when the
/// lookup fails. A city without coordinates is forward geocoded, and an
/// unknown city rejects the request.
async fn resolve_location(
    state: &AppState,
    req: &CreateEntryRequest,
) -> ApiResult<(String, f64, f64)> {
    let provided_city = req
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    if let (Some(lat), Some(lng)) = (req.lat, req.lng) {
        let city = match provided_city {
            Some(city) => city.to_string(),
            None => match state.geocode.reverse(lat, lng).await {
                Ok(city) => city,
                Err(e) => {
                    tracing::warn!(lat, lng, "Reverse geocoding failed: {}", e);
                    UNKNOWN_LOCATION.to_string()
                }
            },
        };
        return Ok((city, lat, lng));
    }

    let city = provided_city.ok_or_else(|| {
        ApiError::Validation("Either coordinates or a city name is required".to_string())
    })?;

    let coords = state
        .geocode
        .forward(city)
        .await?
        .ok_or_else(|| ApiError::Validation(format!("City '{}' not found", city)))?;

    Ok((city.to_string(), coords.lat, coords.lng))
}

/// Convert entries to the list response shape
fn to_list_response(entries: &[crate::store::EmotionEntry]) -> EntryListResponse {
    EntryListResponse {
        total: entries.len(),
        entries: entries.iter().map(EntryResponse::from).collect(),
    }
}
