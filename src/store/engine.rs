//! Emotion Map entry store
//!
//! Holds the global entry list and the user-scoped journal:
//! - The global list lives in memory only and reseeds on restart.
//! - The journal ("my entries") is persisted to a JSON file in the data
//!   directory and reloaded on startup.
//!
//! Thread-safe via Tokio's async RwLock for concurrent access. The
//! reply-limit check and the append happen under a single write lock,
//! so the limit can never be exceeded by concurrent replies.

use crate::store::error::{StoreError, StoreResult};
use crate::store::seed::seed_entries;
use crate::store::types::{EmotionEntry, NewEntry, Reply};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Configuration for the entry store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Root directory for persisted state
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("emotion_map_data"),
        }
    }
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get path to the journal file
    pub fn journal_path(&self) -> PathBuf {
        self.data_dir.join("journal.json")
    }
}

/// The Emotion Map entry store
pub struct EntryStore {
    /// Configuration
    config: StoreConfig,
    /// Global entry list, most-recent-first
    entries: RwLock<Vec<EmotionEntry>>,
    /// User-scoped journal, most-recent-first, persisted across restarts
    journal: RwLock<Vec<EmotionEntry>>,
}

impl EntryStore {
    /// Create a new entry store
    ///
    /// Seeds the global list and loads the journal from disk. A missing
    /// journal file starts an empty journal; an unreadable one is logged
    /// and discarded rather than failing startup.
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let journal = Self::load_journal(&config.journal_path());
        let entries = seed_entries();

        tracing::info!(
            seeded = entries.len(),
            journal = journal.len(),
            "Entry store initialized"
        );

        Ok(Self {
            config,
            entries: RwLock::new(entries),
            journal: RwLock::new(journal),
        })
    }

    /// Load the journal file, tolerating absence and corruption
    fn load_journal(path: &Path) -> Vec<EmotionEntry> {
        if !path.exists() {
            return Vec::new();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Failed to parse journal {:?}: {}", path, e);
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read journal {:?}: {}", path, e);
                Vec::new()
            }
        }
    }

    /// Save the journal to disk
    fn save_journal(&self, journal: &[EmotionEntry]) -> StoreResult<()> {
        let path = self.config.journal_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(journal)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Add a new entry
    ///
    /// Assigns a fresh identifier and timestamp, prepends the entry to
    /// both the global list and the journal, and persists the journal.
    pub async fn add_entry(&self, input: NewEntry) -> StoreResult<EmotionEntry> {
        let entry = EmotionEntry::new(input);

        {
            let mut entries = self.entries.write().await;
            entries.insert(0, entry.clone());
        }

        {
            let mut journal = self.journal.write().await;
            journal.insert(0, entry.clone());
            self.save_journal(&journal)?;
        }

        tracing::info!(
            entry_id = %entry.id,
            emotion = %entry.emotion,
            city = %entry.city,
            "Entry added"
        );

        Ok(entry)
    }

    /// Add a reply to an entry
    ///
    /// Fails with [`StoreError::EntryNotFound`] when the entry does not
    /// exist and [`StoreError::ReplyLimitReached`] when it already holds
    /// the maximum number of replies.
    pub async fn add_reply(
        &self,
        entry_id: Uuid,
        name: Option<String>,
        text: impl Into<String>,
    ) -> StoreResult<Reply> {
        let mut entries = self.entries.write().await;

        let entry = entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or(StoreError::EntryNotFound(entry_id))?;

        if !entry.accepts_replies() {
            return Err(StoreError::ReplyLimitReached(entry_id));
        }

        let reply = Reply::new(name, text);
        entry.replies.push(reply.clone());

        tracing::info!(
            entry_id = %entry_id,
            reply_id = %reply.id,
            reply_count = entry.replies.len(),
            "Reply added"
        );

        Ok(reply)
    }

    /// Snapshot of the global entry list, most-recent-first
    pub async fn entries(&self) -> Vec<EmotionEntry> {
        self.entries.read().await.clone()
    }

    /// Snapshot of the journal, most-recent-first
    pub async fn my_entries(&self) -> Vec<EmotionEntry> {
        self.journal.read().await.clone()
    }

    /// Look up a single entry by identifier
    pub async fn entry(&self, entry_id: Uuid) -> Option<EmotionEntry> {
        self.entries
            .read()
            .await
            .iter()
            .find(|e| e.id == entry_id)
            .cloned()
    }

    /// Number of entries in the global list
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::{Emotion, ANONYMOUS, MAX_REPLIES};
    use tempfile::tempdir;

    fn sample_input() -> NewEntry {
        NewEntry {
            emotion: Emotion::Happy,
            text: "Just got my dream job!".to_string(),
            name: Some("Sarah".to_string()),
            city: "New York".to_string(),
            lat: 40.7128,
            lng: -74.006,
        }
    }

    #[tokio::test]
    async fn test_add_entry_prepends_to_both_lists() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(StoreConfig::new(dir.path())).unwrap();

        let global_before = store.entry_count().await;
        assert!(store.my_entries().await.is_empty());

        let entry = store.add_entry(sample_input()).await.unwrap();

        let entries = store.entries().await;
        assert_eq!(entries.len(), global_before + 1);
        assert_eq!(entries[0].id, entry.id);

        let journal = store.my_entries().await;
        assert_eq!(journal.len(), 1);
        assert_eq!(journal[0].id, entry.id);
    }

    #[tokio::test]
    async fn test_reply_limit_is_enforced() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(StoreConfig::new(dir.path())).unwrap();

        let entry = store.add_entry(sample_input()).await.unwrap();

        for i in 0..MAX_REPLIES {
            store
                .add_reply(entry.id, None, format!("Support {}", i))
                .await
                .unwrap();
        }

        let before = store.entry(entry.id).await.unwrap();
        assert_eq!(before.replies.len(), MAX_REPLIES);

        let err = store
            .add_reply(entry.id, None, "One too many")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ReplyLimitReached(_)));

        // The entry is unchanged
        let after = store.entry(entry.id).await.unwrap();
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn test_reply_to_missing_entry() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(StoreConfig::new(dir.path())).unwrap();

        let err = store
            .add_reply(Uuid::new_v4(), None, "Hello?")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::EntryNotFound(_)));
    }

    #[tokio::test]
    async fn test_reply_defaults_name_to_anonymous() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(StoreConfig::new(dir.path())).unwrap();

        let entry = store.add_entry(sample_input()).await.unwrap();
        let reply = store
            .add_reply(entry.id, None, "Sending good vibes")
            .await
            .unwrap();
        assert_eq!(reply.name, ANONYMOUS);
    }

    #[tokio::test]
    async fn test_journal_survives_restart_global_reseeds() {
        let dir = tempdir().unwrap();
        let config = StoreConfig::new(dir.path());

        let first_id;
        let seed_count;
        {
            let store = EntryStore::new(config.clone()).unwrap();
            seed_count = store.entry_count().await;
            first_id = store.add_entry(sample_input()).await.unwrap().id;
        }

        let store = EntryStore::new(config).unwrap();

        // Journal restored unchanged
        let journal = store.my_entries().await;
        assert_eq!(journal.len(), 1);
        assert_eq!(journal[0].id, first_id);
        assert_eq!(journal[0].text, "Just got my dream job!");

        // Global list reset to seed data, the added entry is gone
        assert_eq!(store.entry_count().await, seed_count);
        assert!(store.entry(first_id).await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_journal_starts_empty() {
        let dir = tempdir().unwrap();
        let config = StoreConfig::new(dir.path());
        std::fs::write(config.journal_path(), "not json").unwrap();

        let store = EntryStore::new(config).unwrap();
        assert!(store.my_entries().await.is_empty());
    }

    #[tokio::test]
    async fn test_seed_data_present() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(StoreConfig::new(dir.path())).unwrap();

        let entries = store.entries().await;
        assert_eq!(entries.len(), 10);

        // Seed entries are ordered most-recent-first
        for pair in entries.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }
}
