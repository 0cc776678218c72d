//! # Emotion Map
//!
//! A REST API service for sharing geolocated emotions and supportive
//! replies on a world map.
//!
//! ## Features
//!
//! - **Entry store**: In-memory global list plus a persisted per-server
//!   journal of entries created here
//! - **Bounded replies**: Up to three supportive replies per entry,
//!   enforced atomically
//! - **Map markers**: Entries rendered as a GeoJSON FeatureCollection
//! - **Geocoding**: Forward and reverse lookups against a
//!   Nominatim-compatible endpoint
//!
//! ## Modules
//!
//! - [`store`]: Core entry store and data types
//! - [`map`]: Marker rendering
//! - [`geocode`]: Geocoding client
//! - [`timeago`]: Relative-time formatting
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use emotion_map::store::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Initialize the store (seeds the global list, loads the journal)
//!     let store = EntryStore::new(StoreConfig::default())?;
//!
//!     // Share an emotion
//!     let entry = store
//!         .add_entry(NewEntry {
//!             emotion: Emotion::Excited,
//!             text: "First day at the new job!".to_string(),
//!             name: Some("Sam".to_string()),
//!             city: "Toronto".to_string(),
//!             lat: 43.6532,
//!             lng: -79.3832,
//!         })
//!         .await?;
//!
//!     // Send support
//!     store.add_reply(entry.id, None, "Good luck!").await?;
//!
//!     println!("{} entries on the map", store.entry_count().await);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod geocode;
pub mod map;
pub mod store;
pub mod timeago;

// Re-export top-level types for convenience
pub use store::{
    Emotion, EmotionEntry, EntryStore, NewEntry, Reply, StoreConfig, StoreError, StoreResult,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use geocode::{Coordinates, GeocodeClient, GeocodeConfig, GeocodeError};

pub use map::{render_markers, MarkerCollection, MarkerFeature, MarkerProperties};

pub use config::{Config, ConfigError, LoggingConfig};

pub use timeago::{format_elapsed, format_timestamp};
