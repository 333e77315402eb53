use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{SecondsFormat, Utc};

use crate::error::StoreError;
use crate::models::{NewPaste, PasteEntry};
use crate::source::PasteSource;

/// In-memory PasteSource for testing and offline fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryPasteSource {
    pastes: Arc<Mutex<Vec<PasteEntry>>>,
    next_hash: Arc<AtomicU64>,
}

impl MemoryPasteSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an entry, replacing any entry with the same hash.
    pub fn insert(&self, entry: PasteEntry) -> Result<(), StoreError> {
        let mut pastes = self.lock()?;
        match pastes.iter_mut().find(|p| **p == entry) {
            Some(slot) => *slot = entry,
            None => pastes.push(entry),
        }
        Ok(())
    }

    /// Sequential hashes, skipping any already taken by inserted entries.
    fn fresh_hash(&self, pastes: &[PasteEntry]) -> String {
        loop {
            let n = self.next_hash.fetch_add(1, Ordering::Relaxed);
            let hash = format!("{n:07x}");
            if !pastes.iter().any(|p| p.hash() == hash) {
                return hash;
            }
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<PasteEntry>>, StoreError> {
        self.pastes
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

impl PasteSource for MemoryPasteSource {
    /// Returns the paste as stored, then counts the view.
    async fn get_paste(&self, hash: &str) -> Result<PasteEntry, StoreError> {
        let mut pastes = self.lock()?;
        let slot = pastes
            .iter_mut()
            .find(|p| p.hash() == hash)
            .ok_or_else(|| StoreError::NotFound(hash.to_string()))?;
        let found = slot.clone();
        *slot = found.with_click_count(found.click_count().saturating_add(1));
        Ok(found)
    }

    async fn list_pastes(&self) -> Result<Vec<PasteEntry>, StoreError> {
        let pastes = self.lock()?;
        let mut listed: Vec<PasteEntry> = pastes.iter().map(PasteEntry::without_body).collect();
        listed.sort_by_key(|p| p.created_at().ok());
        Ok(listed)
    }

    /// Stores the paste under a fresh hash, answering like the backend: no body, no views.
    async fn create_paste(&self, paste: &NewPaste) -> Result<PasteEntry, StoreError> {
        let mut pastes = self.lock()?;
        let hash = self.fresh_hash(&pastes);
        let created = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let entry = PasteEntry::new(hash, paste.title.as_str(), paste.body.as_str(), created, 0)?;
        let response = entry.without_body();
        pastes.push(entry);
        Ok(response)
    }
}
