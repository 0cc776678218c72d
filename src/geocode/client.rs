//! Nominatim REST API client
//!
//! HTTP client for forward and reverse geocoding against a
//! Nominatim-compatible endpoint.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// City label used when reverse geocoding yields no usable address
pub const UNKNOWN_LOCATION: &str = "Unknown location";

/// Geocoding client
pub struct GeocodeClient {
    client: Client,
    config: GeocodeConfig,
}

/// Configuration for the geocoding client
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Base URL of the Nominatim-compatible endpoint
    pub base_url: String,
    /// User-Agent header, required by the public Nominatim usage policy
    pub user_agent: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: format!("emotion-map/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_ms: 5000,
        }
    }
}

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl GeocodeClient {
    /// Create a new geocoding client with the given configuration
    pub fn new(config: GeocodeConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.as_str())
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &GeocodeConfig {
        &self.config
    }

    /// Resolve coordinates to a city label
    ///
    /// Walks the address fallback chain city → town → village → county
    /// and returns [`UNKNOWN_LOCATION`] when none is present.
    pub async fn reverse(&self, lat: f64, lng: f64) -> Result<String, GeocodeError> {
        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}",
            self.config.base_url, lat, lng
        );

        let response = self.send_get(&url).await?;
        let body: ReverseResponse = response.json().await.map_err(GeocodeError::Request)?;

        Ok(body
            .address
            .map(|a| a.city_label())
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()))
    }

    /// Resolve a city name to coordinates
    ///
    /// Returns `None` when the search yields no results.
    pub async fn forward(&self, city: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let url = format!(
            "{}/search?format=json&q={}&limit=1",
            self.config.base_url,
            urlencoding::encode(city)
        );

        let response = self.send_get(&url).await?;
        let results: Vec<SearchResult> = response.json().await.map_err(GeocodeError::Request)?;

        match results.into_iter().next() {
            Some(result) => Ok(Some(result.coordinates()?)),
            None => Ok(None),
        }
    }

    /// Send a GET request, mapping transport failures to error variants
    async fn send_get(&self, url: &str) -> Result<reqwest::Response, GeocodeError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                GeocodeError::Timeout
            } else if e.is_connect() {
                GeocodeError::Unavailable
            } else {
                GeocodeError::Request(e)
            }
        })?;

        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(GeocodeError::ApiError {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

// ============================================
// Response DTOs
// ============================================

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Option<Address>,
}

/// Address fields from a reverse geocoding response
#[derive(Debug, Default, Deserialize)]
struct Address {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    town: Option<String>,
    #[serde(default)]
    village: Option<String>,
    #[serde(default)]
    county: Option<String>,
}

impl Address {
    /// Pick the most specific populated place label
    fn city_label(self) -> String {
        self.city
            .or(self.town)
            .or(self.village)
            .or(self.county)
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string())
    }
}

/// One result from a forward geocoding search
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

impl SearchResult {
    /// Parse the string coordinates Nominatim returns
    fn coordinates(&self) -> Result<Coordinates, GeocodeError> {
        let lat = self
            .lat
            .parse()
            .map_err(|_| GeocodeError::InvalidResponse(format!("bad latitude: {}", self.lat)))?;
        let lng = self
            .lon
            .parse()
            .map_err(|_| GeocodeError::InvalidResponse(format!("bad longitude: {}", self.lon)))?;
        Ok(Coordinates { lat, lng })
    }
}

// ============================================
// Errors
// ============================================

/// Errors that can occur when talking to the geocoding endpoint
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("Geocoding endpoint unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
