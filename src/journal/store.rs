use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::models::JournalEntry;

/// Where journal entries come from and go to. Mirrors the call shape of a
/// hosted backend: fetch returns newest-first, save replaces the journal.
#[async_trait]
pub trait JournalStore: Send + Sync {
    /// All entries, most recent first.
    async fn fetch_entries(&mut self) -> Result<Vec<JournalEntry>>;
    async fn save_entries(&mut self, entries: &[JournalEntry]) -> Result<()>;
}

/// Journal persisted as a single JSON file on disk. A missing file is an
/// empty journal, not an error.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl JournalStore for JsonFileStore {
    async fn fetch_entries(&mut self) -> Result<Vec<JournalEntry>> {
        if !self.path.exists() {
            warn!(
                "Journal file {} not found, starting with an empty journal",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let mut entries: Vec<JournalEntry> = serde_json::from_str(&content)?;
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        info!(
            "Loaded {} journal entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }

    async fn save_entries(&mut self, entries: &[JournalEntry]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json)?;

        info!(
            "Saved {} journal entries to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-memory journal for fixtures and tests.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Vec<JournalEntry>,
}

impl InMemoryStore {
    pub fn new(entries: Vec<JournalEntry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl JournalStore for InMemoryStore {
    async fn fetch_entries(&mut self) -> Result<Vec<JournalEntry>> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    async fn save_entries(&mut self, entries: &[JournalEntry]) -> Result<()> {
        self.entries = entries.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TradeResult;
    use crate::test_helpers::{closed_trade, simple_entry};

    fn temp_journal(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("nexus_journal_{}_{}.json", name, std::process::id()))
    }

    #[tokio::test]
    async fn missing_file_is_an_empty_journal() {
        let mut store = JsonFileStore::new(temp_journal("missing"));
        let entries = store.fetch_entries().await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn file_roundtrip_preserves_entries() {
        let path = temp_journal("roundtrip");
        let entries = vec![
            closed_trade(TradeResult::Win, 100.0, 0),
            simple_entry("No setups today", 30),
        ];

        let mut store = JsonFileStore::new(path.clone());
        store.save_entries(&entries).await.unwrap();
        let loaded = store.fetch_entries().await.unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].result, Some(TradeResult::Win));
        assert_eq!(loaded[1].title, "No setups today");

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn fetch_orders_newest_first() {
        let entries = vec![
            closed_trade(TradeResult::Loss, -10.0, 60),
            closed_trade(TradeResult::Win, 20.0, 0),
            closed_trade(TradeResult::Breakeven, 0.0, 30),
        ];
        let mut store = InMemoryStore::new(entries);
        let loaded = store.fetch_entries().await.unwrap();

        assert_eq!(loaded[0].result, Some(TradeResult::Win));
        assert_eq!(loaded[1].result, Some(TradeResult::Breakeven));
        assert_eq!(loaded[2].result, Some(TradeResult::Loss));
    }
}
