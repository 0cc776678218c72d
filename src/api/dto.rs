//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{EmotionEntry, Reply};
use crate::timeago::format_timestamp;

// ============================================
// ENTRY DTOs
// ============================================

/// Create entry request
///
/// Location comes either as coordinates (map click) or as a city name
/// (manual form). With coordinates and no city, the server resolves the
/// city by reverse geocoding; with a city and no coordinates, it
/// resolves them by forward geocoding.
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    /// Emotion label (one of the nine fixed categories)
    pub emotion: String,
    /// Message text
    pub text: String,
    /// Optional display name, defaults to "Anonymous"
    #[serde(default)]
    pub name: Option<String>,
    /// Optional city label
    #[serde(default)]
    pub city: Option<String>,
    /// Optional latitude
    #[serde(default)]
    pub lat: Option<f64>,
    /// Optional longitude
    #[serde(default)]
    pub lng: Option<f64>,
}

/// Entry in API responses
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub id: Uuid,
    pub emotion: String,
    pub text: String,
    pub name: String,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
    /// Creation time, ms since epoch
    pub timestamp: i64,
    /// Relative creation time ("just now", "2h ago", ...)
    pub time_ago: String,
    pub replies: Vec<ReplyResponse>,
}

impl From<&EmotionEntry> for EntryResponse {
    fn from(entry: &EmotionEntry) -> Self {
        Self {
            id: entry.id,
            emotion: entry.emotion.to_string(),
            text: entry.text.clone(),
            name: entry.name.clone(),
            city: entry.city.clone(),
            lat: entry.lat,
            lng: entry.lng,
            timestamp: entry.timestamp,
            time_ago: format_timestamp(entry.timestamp),
            replies: entry.replies.iter().map(ReplyResponse::from).collect(),
        }
    }
}

/// List entries response
#[derive(Debug, Serialize)]
pub struct EntryListResponse {
    pub entries: Vec<EntryResponse>,
    pub total: usize,
}

// ============================================
// REPLY DTOs
// ============================================

/// Create reply request
#[derive(Debug, Deserialize)]
pub struct CreateReplyRequest {
    /// Optional display name, defaults to "Anonymous"
    #[serde(default)]
    pub name: Option<String>,
    /// Message text
    pub text: String,
}

/// Reply in API responses
#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub id: Uuid,
    pub name: String,
    pub text: String,
    /// Creation time, ms since epoch
    pub timestamp: i64,
    /// Relative creation time
    pub time_ago: String,
}

impl From<&Reply> for ReplyResponse {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id,
            name: reply.name.clone(),
            text: reply.text.clone(),
            timestamp: reply.timestamp,
            time_ago: format_timestamp(reply.timestamp),
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Entry store status
    pub store: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
