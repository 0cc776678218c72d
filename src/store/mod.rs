//! Emotion Map entry store
//!
//! This module provides the core entry storage functionality:
//!
//! - **types**: Core data structures (EmotionEntry, Reply, Emotion)
//! - **engine**: The entry store holding the global list and the journal
//! - **seed**: Hardcoded initial entries
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use emotion_map::store::{EntryStore, StoreConfig, NewEntry, Emotion};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = EntryStore::new(StoreConfig::new("./data"))?;
//!
//!     let entry = store
//!         .add_entry(NewEntry {
//!             emotion: Emotion::Happy,
//!             text: "Sunny day".to_string(),
//!             name: None,
//!             city: "Lisbon".to_string(),
//!             lat: 38.72,
//!             lng: -9.14,
//!         })
//!         .await?;
//!
//!     let reply = store.add_reply(entry.id, None, "Enjoy it!").await?;
//!     println!("Reply {} added", reply.id);
//!
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod seed;
pub mod types;

// Re-export commonly used types
pub use engine::{EntryStore, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use seed::seed_entries;
pub use types::{Emotion, EmotionEntry, NewEntry, Reply, ANONYMOUS, MAX_REPLIES};
