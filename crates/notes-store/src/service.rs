//! Note operations over a `NoteRepository`.
//!
//! Every operation runs the bootstrap step, loads the whole collection and,
//! for mutations, writes the whole collection back. Mutations hold a single
//! writer lock across their load-modify-save cycle so that overlapping
//! requests in this process cannot overwrite each other's changes.

use std::sync::Arc;

use notes_core::{Note, NoteCollection};
use tokio::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::repository::NoteRepository;

/// Read-modify-write operations on the note collection.
pub struct NoteService {
    repo: Arc<dyn NoteRepository>,
    write_lock: Mutex<()>,
}

impl NoteService {
    /// Create a service over the given repository.
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
        }
    }

    /// Run the bootstrap step on its own.
    ///
    /// Takes the writer lock since initialization may write the document.
    pub async fn bootstrap(&self) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        self.repo.ensure_initialized().await
    }

    /// All notes in insertion order.
    pub async fn list(&self) -> StoreResult<NoteCollection> {
        self.bootstrap().await?;
        self.repo.load().await
    }

    /// The note named `name`.
    pub async fn get(&self, name: &str) -> StoreResult<Note> {
        self.bootstrap().await?;
        let notes = self.repo.load().await?;
        notes
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NoteNotFound(name.to_string()))
    }

    /// Append a new note. Fails with `DuplicateNote` if the name is taken.
    pub async fn create(&self, name: &str, text: &str) -> StoreResult<Note> {
        let _guard = self.write_lock.lock().await;
        self.repo.ensure_initialized().await?;

        let mut notes = self.repo.load().await?;
        let note = Note::new(name, text);
        if !notes.insert(note.clone()) {
            return Err(StoreError::DuplicateNote(name.to_string()));
        }
        self.repo.save(&notes).await?;

        tracing::info!(name = %name, total = notes.len(), "Note created");
        Ok(note)
    }

    /// Replace the text of an existing note.
    pub async fn update(&self, name: &str, text: &str) -> StoreResult<Note> {
        let _guard = self.write_lock.lock().await;
        self.repo.ensure_initialized().await?;

        let mut notes = self.repo.load().await?;
        if !notes.set_text(name, text) {
            return Err(StoreError::NoteNotFound(name.to_string()));
        }
        self.repo.save(&notes).await?;

        tracing::info!(name = %name, "Note updated");
        Ok(Note::new(name, text))
    }

    /// Remove a note, returning it.
    pub async fn delete(&self, name: &str) -> StoreResult<Note> {
        let _guard = self.write_lock.lock().await;
        self.repo.ensure_initialized().await?;

        let mut notes = self.repo.load().await?;
        let removed = notes
            .remove(name)
            .ok_or_else(|| StoreError::NoteNotFound(name.to_string()))?;
        self.repo.save(&notes).await?;

        tracing::info!(name = %name, total = notes.len(), "Note deleted");
        Ok(removed)
    }
}

impl std::fmt::Debug for NoteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::JsonFileStore;
    use crate::memory::MemoryStore;

    fn memory_service() -> (Arc<MemoryStore>, NoteService) {
        let store = Arc::new(MemoryStore::new());
        let service = NoteService::new(store.clone());
        (store, service)
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let (_, service) = memory_service();
        service.create("a", "hello").await.unwrap();
        assert_eq!(service.get("a").await.unwrap().text, "hello");
    }

    #[tokio::test]
    async fn test_duplicate_create_is_rejected() {
        let (_, service) = memory_service();
        service.create("a", "first").await.unwrap();

        let err = service.create("a", "second").await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateNote(ref n) if n == "a"));

        let notes = service.list().await.unwrap();
        assert_eq!(notes.iter().filter(|n| n.name == "a").count(), 1);
        assert_eq!(notes.get("a").unwrap().text, "first");
    }

    #[tokio::test]
    async fn test_list_is_stable_without_mutations() {
        let (_, service) = memory_service();
        service.create("a", "1").await.unwrap();
        service.create("b", "2").await.unwrap();

        assert_eq!(service.list().await.unwrap(), service.list().await.unwrap());
    }

    #[tokio::test]
    async fn test_update_replaces_text_only() {
        let (_, service) = memory_service();
        service.create("a", "hello").await.unwrap();
        service.create("b", "other").await.unwrap();

        service.update("a", "world").await.unwrap();

        assert_eq!(service.get("a").await.unwrap().text, "world");
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_missing_note_does_not_save() {
        let (store, service) = memory_service();
        let err = service.update("missing", "x").await.unwrap_err();
        assert!(matches!(err, StoreError::NoteNotFound(_)));
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let (_, service) = memory_service();
        service.create("a", "1").await.unwrap();
        service.create("b", "2").await.unwrap();

        let removed = service.delete("a").await.unwrap();
        assert_eq!(removed.name, "a");
        assert!(matches!(
            service.get("a").await,
            Err(StoreError::NoteNotFound(_))
        ));

        let before = service.list().await.unwrap();
        assert!(matches!(
            service.delete("a").await,
            Err(StoreError::NoteNotFound(_))
        ));
        assert_eq!(service.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_list_bootstraps_empty_document() {
        let (store, service) = memory_service();
        assert!(service.list().await.unwrap().is_empty());
        assert_eq!(store.snapshot().await, Some(NoteCollection::new()));
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_as_internal() {
        let (store, service) = memory_service();
        store.set_failing(true);

        let err = service.list().await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_not_lost() {
        let dir = tempfile::TempDir::new().unwrap();
        let service = Arc::new(NoteService::new(Arc::new(JsonFileStore::new(
            dir.path().join("notes.json"),
        ))));

        let tasks = (0..20).map(|i| {
            let service = service.clone();
            tokio::spawn(async move { service.create(&format!("note-{i}"), "text").await })
        });
        for result in futures::future::join_all(tasks).await {
            result.unwrap().unwrap();
        }

        assert_eq!(service.list().await.unwrap().len(), 20);
    }
}
