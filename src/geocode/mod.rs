//! Geocoding Integration
//!
//! Talks to a Nominatim-compatible endpoint to translate between
//! city labels and coordinates.
//!
//! ## Data Flow
//!
//! 1. An entry created from a map click carries coordinates; reverse
//!    geocoding resolves the city label, falling back to
//!    "Unknown location" when the lookup fails.
//! 2. An entry created from a city name has no coordinates; forward
//!    geocoding resolves them, and an unknown city rejects the entry.

mod client;

pub use client::{Coordinates, GeocodeClient, GeocodeConfig, GeocodeError, UNKNOWN_LOCATION};
