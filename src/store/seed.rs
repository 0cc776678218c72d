//! Seed data for the global entry list
//!
//! Hardcoded initial entries shown before any user interaction. The
//! global list is in-memory only, so these are recreated on every
//! startup with timestamps relative to the current clock.

use crate::store::types::{Emotion, EmotionEntry, Reply, ANONYMOUS};
use chrono::Utc;
use uuid::Uuid;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;

/// Build the seed entries, most-recent-first
pub fn seed_entries() -> Vec<EmotionEntry> {
    let now = Utc::now().timestamp_millis();

    let mut entries = vec![
        seed(
            Emotion::Happy,
            "Just got my dream job! Feeling on top of the world.",
            "Sarah",
            "New York",
            40.7128,
            -74.006,
            now - 30 * MINUTE_MS,
        ),
        seed(
            Emotion::Calm,
            "Watching the sunset by the beach. Pure peace.",
            ANONYMOUS,
            "Sydney",
            -33.8688,
            151.2093,
            now - 2 * HOUR_MS,
        ),
        seed(
            Emotion::Anxious,
            "Big presentation tomorrow. Heart racing but trying to stay positive.",
            "Alex",
            "London",
            51.5074,
            -0.1278,
            now - 5 * HOUR_MS,
        ),
        seed(
            Emotion::Grateful,
            "My family surprised me for my birthday. Feeling so loved.",
            "Maria",
            "Barcelona",
            41.3851,
            2.1734,
            now - 8 * HOUR_MS,
        ),
        seed(
            Emotion::Excited,
            "Moving to a new city next week! Adventure awaits!",
            "James",
            "Toronto",
            43.6532,
            -79.3832,
            now - 12 * HOUR_MS,
        ),
        seed(
            Emotion::Sad,
            "Missing my best friend who moved away. Distance is hard.",
            ANONYMOUS,
            "Tokyo",
            35.6762,
            139.6503,
            now - 15 * HOUR_MS,
        ),
        seed(
            Emotion::Proud,
            "Finished my first marathon today! Never giving up pays off.",
            "Emma",
            "Berlin",
            52.52,
            13.405,
            now - 18 * HOUR_MS,
        ),
        seed(
            Emotion::Lonely,
            "New in town and finding it hard to connect. Hope it gets easier.",
            ANONYMOUS,
            "Singapore",
            1.3521,
            103.8198,
            now - 20 * HOUR_MS,
        ),
        seed(
            Emotion::Tired,
            "Long week at work. Looking forward to rest and recharge.",
            "David",
            "San Francisco",
            37.7749,
            -122.4194,
            now - 24 * HOUR_MS,
        ),
        seed(
            Emotion::Happy,
            "My garden is blooming! Small joys make life beautiful.",
            "Lisa",
            "Amsterdam",
            52.3676,
            4.9041,
            now - 30 * HOUR_MS,
        ),
    ];

    // The Sydney entry ships with one supportive reply
    entries[1].replies.push(Reply {
        id: Uuid::new_v4(),
        name: "Mike".to_string(),
        text: "Sounds beautiful! Enjoy the moment.".to_string(),
        timestamp: now - 45 * MINUTE_MS,
    });

    entries
}

fn seed(
    emotion: Emotion,
    text: &str,
    name: &str,
    city: &str,
    lat: f64,
    lng: f64,
    timestamp: i64,
) -> EmotionEntry {
    EmotionEntry {
        id: Uuid::new_v4(),
        emotion,
        text: text.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        lat,
        lng,
        timestamp,
        replies: Vec::new(),
    }
}
