//! Core data types for the Emotion Map entry store
//!
//! This module defines the fundamental types used throughout the store:
//! - `EmotionEntry`: A single geolocated emotion post
//! - `Reply`: A supportive response attached to an entry
//! - `Emotion`: The closed set of emotion categories
//! - `NewEntry`: Input for creating an entry

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of replies an entry can hold
pub const MAX_REPLIES: usize = 3;

/// Display name used when the author leaves the name field empty
pub const ANONYMOUS: &str = "Anonymous";

/// The closed set of emotion categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Emotion {
    Happy,
    Sad,
    Calm,
    Anxious,
    Tired,
    Excited,
    Proud,
    Lonely,
    Grateful,
}

impl Emotion {
    /// Get all emotions for iteration
    pub fn all() -> &'static [Emotion] {
        &[
            Emotion::Happy,
            Emotion::Sad,
            Emotion::Calm,
            Emotion::Anxious,
            Emotion::Tired,
            Emotion::Excited,
            Emotion::Proud,
            Emotion::Lonely,
            Emotion::Grateful,
        ]
    }

    /// Marker color for this emotion (hex)
    pub fn color(&self) -> &'static str {
        match self {
            Emotion::Happy => "#f59e0b",
            Emotion::Sad => "#3b82f6",
            Emotion::Calm => "#14b8a6",
            Emotion::Anxious => "#a855f7",
            Emotion::Tired => "#6b7280",
            Emotion::Excited => "#ec4899",
            Emotion::Proud => "#10b981",
            Emotion::Lonely => "#6366f1",
            Emotion::Grateful => "#84cc16",
        }
    }

    /// Emoji icon for this emotion
    pub fn icon(&self) -> &'static str {
        match self {
            Emotion::Happy => "\u{1F60A}",
            Emotion::Sad => "\u{1F622}",
            Emotion::Calm => "\u{1F60C}",
            Emotion::Anxious => "\u{1F630}",
            Emotion::Tired => "\u{1F634}",
            Emotion::Excited => "\u{1F929}",
            Emotion::Proud => "\u{1F4AA}",
            Emotion::Lonely => "\u{1F97A}",
            Emotion::Grateful => "\u{1F64F}",
        }
    }

    /// Parse an emotion label, case-insensitively
    pub fn parse(s: &str) -> Option<Emotion> {
        match s.to_lowercase().as_str() {
            "happy" => Some(Emotion::Happy),
            "sad" => Some(Emotion::Sad),
            "calm" => Some(Emotion::Calm),
            "anxious" => Some(Emotion::Anxious),
            "tired" => Some(Emotion::Tired),
            "excited" => Some(Emotion::Excited),
            "proud" => Some(Emotion::Proud),
            "lonely" => Some(Emotion::Lonely),
            "grateful" => Some(Emotion::Grateful),
            _ => None,
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Emotion::Happy => write!(f, "Happy"),
            Emotion::Sad => write!(f, "Sad"),
            Emotion::Calm => write!(f, "Calm"),
            Emotion::Anxious => write!(f, "Anxious"),
            Emotion::Tired => write!(f, "Tired"),
            Emotion::Excited => write!(f, "Excited"),
            Emotion::Proud => write!(f, "Proud"),
            Emotion::Lonely => write!(f, "Lonely"),
            Emotion::Grateful => write!(f, "Grateful"),
        }
    }
}

/// A supportive reply attached to an entry
///
/// Owned exclusively by its parent entry; replies are append-only
/// and never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reply {
    /// Unique identifier
    pub id: Uuid,
    /// Display name of the author
    pub name: String,
    /// Message text
    pub text: String,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
}

impl Reply {
    /// Create a new reply with a fresh identifier and current timestamp
    pub fn new(name: Option<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: display_name(name),
            text: text.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

/// A single geolocated emotion post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmotionEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Emotion category
    pub emotion: Emotion,
    /// Message text
    pub text: String,
    /// Display name of the author
    pub name: String,
    /// City label for the location
    pub city: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Replies in insertion order, at most [`MAX_REPLIES`]
    #[serde(default)]
    pub replies: Vec<Reply>,
}

impl EmotionEntry {
    /// Create an entry with a fresh identifier and current timestamp
    pub fn new(input: NewEntry) -> Self {
        Self {
            id: Uuid::new_v4(),
            emotion: input.emotion,
            text: input.text,
            name: display_name(input.name),
            city: input.city,
            lat: input.lat,
            lng: input.lng,
            timestamp: Utc::now().timestamp_millis(),
            replies: Vec::new(),
        }
    }

    /// Whether this entry still accepts replies
    pub fn accepts_replies(&self) -> bool {
        self.replies.len() < MAX_REPLIES
    }
}

/// Input for creating an entry
///
/// Identifier, timestamp, and the empty reply list are assigned by the
/// store, not the caller.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub emotion: Emotion,
    pub text: String,
    pub name: Option<String>,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
}

/// Resolve an optional display name, defaulting to "Anonymous"
fn display_name(name: Option<String>) -> String {
    match name {
        Some(n) if !n.trim().is_empty() => n,
        _ => ANONYMOUS.to_string(),
    }
}
