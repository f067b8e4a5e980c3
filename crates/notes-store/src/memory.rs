//! In-memory backend for tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use notes_core::NoteCollection;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::repository::NoteRepository;

/// Collection document kept in process memory.
///
/// `None` models a missing document so the bootstrap step behaves the same
/// as against a file. `set_failing(true)` makes every operation return
/// `StoreError::Unavailable`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RwLock<Option<NoteCollection>>,
    failing: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryStore {
    /// Create a store with no document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `notes`.
    pub fn with_notes(notes: NoteCollection) -> Self {
        Self {
            document: RwLock::new(Some(notes)),
            ..Self::default()
        }
    }

    /// Toggle failure injection.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Current document, `None` if never initialized.
    pub async fn snapshot(&self) -> Option<NoteCollection> {
        self.document.read().await.clone()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store set to fail".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl NoteRepository for MemoryStore {
    async fn ensure_initialized(&self) -> StoreResult<()> {
        self.check()?;
        let mut document = self.document.write().await;
        if document.is_none() {
            *document = Some(NoteCollection::new());
        }
        Ok(())
    }

    async fn load(&self) -> StoreResult<NoteCollection> {
        self.check()?;
        Ok(self.document.read().await.clone().unwrap_or_default())
    }

    async fn save(&self, notes: &NoteCollection) -> StoreResult<()> {
        self.check()?;
        *self.document.write().await = Some(notes.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
