//! The storage seam between request handling and the collection document.

use async_trait::async_trait;
use notes_core::NoteCollection;

use crate::error::StoreResult;

/// Whole-document access to the note collection.
///
/// Implementations hold no cache: every `load` observes the current
/// document and every `save` replaces it entirely.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Bootstrap step: create an empty collection if the document is
    /// missing or contains only whitespace. Existing content is untouched.
    async fn ensure_initialized(&self) -> StoreResult<()>;

    /// Load the full collection.
    async fn load(&self) -> StoreResult<NoteCollection>;

    /// Replace the full collection.
    async fn save(&self, notes: &NoteCollection) -> StoreResult<()>;
}
