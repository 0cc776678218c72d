//! Map marker rendering
//!
//! Projects the entry list onto the map as a GeoJSON FeatureCollection,
//! one point feature per entry. Each feature carries the properties the
//! map popup needs: emotion, marker color, author, city, message,
//! relative time, and the reply affordance. The collection is rebuilt in
//! full from the current entry list on every render.

use crate::store::EmotionEntry;
use crate::timeago::format_timestamp;
use serde::Serialize;
use uuid::Uuid;

/// A GeoJSON FeatureCollection of entry markers
#[derive(Debug, Serialize)]
pub struct MarkerCollection {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub features: Vec<MarkerFeature>,
}

/// One GeoJSON point feature for an entry
#[derive(Debug, Serialize)]
pub struct MarkerFeature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: PointGeometry,
    pub properties: MarkerProperties,
}

/// GeoJSON point geometry, coordinates ordered [lng, lat]
#[derive(Debug, Serialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub coordinates: [f64; 2],
}

/// Popup content and styling for a marker
#[derive(Debug, Serialize)]
pub struct MarkerProperties {
    /// Entry identifier, used to open the detail/reply view
    pub entry_id: Uuid,
    /// Emotion label
    pub emotion: String,
    /// Marker color from the fixed per-emotion lookup table
    pub color: &'static str,
    /// Emoji icon for the emotion
    pub icon: &'static str,
    /// Author display name
    pub name: String,
    /// City label
    pub city: String,
    /// Message text
    pub text: String,
    /// Relative creation time ("just now", "2h ago", ...)
    pub time_ago: String,
    /// Number of replies on the entry
    pub reply_count: usize,
    /// Whether the entry still accepts replies (drives the
    /// "Reply" vs "View Details" affordance)
    pub accepts_replies: bool,
}

/// Render the entry list as markers
pub fn render_markers(entries: &[EmotionEntry]) -> MarkerCollection {
    MarkerCollection {
        kind: "FeatureCollection",
        features: entries.iter().map(render_marker).collect(),
    }
}

/// Render a single entry as a marker feature
fn render_marker(entry: &EmotionEntry) -> MarkerFeature {
    MarkerFeature {
        kind: "Feature",
        geometry: PointGeometry {
            kind: "Point",
            coordinates: [entry.lng, entry.lat],
        },
        properties: MarkerProperties {
            entry_id: entry.id,
            emotion: entry.emotion.to_string(),
            color: entry.emotion.color(),
            icon: entry.emotion.icon(),
            name: entry.name.clone(),
            city: entry.city.clone(),
            text: entry.text.clone(),
            time_ago: format_timestamp(entry.timestamp),
            reply_count: entry.replies.len(),
            accepts_replies: entry.accepts_replies(),
        },
    }
}
