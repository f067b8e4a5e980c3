//! JSON file backend.
//!
//! The whole collection lives in one pretty-printed JSON array. Writes go
//! to a sibling `*.tmp` file which is then renamed over the document, so a
//! failed write leaves the previous document in place.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use notes_core::NoteCollection;
use tokio::fs;

use crate::error::StoreResult;
use crate::repository::NoteRepository;

/// Default location of the collection document.
pub const DEFAULT_NOTES_PATH: &str = "notes.json";

/// Collection document stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`.
    ///
    /// Nothing is touched on disk until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the collection document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(DEFAULT_NOTES_PATH));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Read the raw document, `None` if the file does not exist.
    async fn read_document(&self) -> StoreResult<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_document(&self, contents: &str) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let temp = self.temp_path();
        let written = match fs::write(&temp, contents).await {
            Ok(()) => fs::rename(&temp, &self.path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = fs::remove_file(&temp).await;
            return Err(e.into());
        }
        Ok(())
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_NOTES_PATH)
    }
}

#[async_trait]
impl NoteRepository for JsonFileStore {
    async fn ensure_initialized(&self) -> StoreResult<()> {
        let blank = match self.read_document().await? {
            Some(contents) => contents.trim().is_empty(),
            None => true,
        };

        if blank {
            tracing::info!(path = %self.path.display(), "Initializing empty note collection");
            self.write_document("[]").await?;
        }
        Ok(())
    }

    async fn load(&self) -> StoreResult<NoteCollection> {
        match self.read_document().await? {
            Some(contents) if !contents.trim().is_empty() => {
                Ok(serde_json::from_str(&contents)?)
            }
            _ => Ok(NoteCollection::new()),
        }
    }

    async fn save(&self, notes: &NoteCollection) -> StoreResult<()> {
        let contents = serde_json::to_string_pretty(notes)?;
        self.write_document(&contents).await?;
        tracing::debug!(path = %self.path.display(), count = notes.len(), "Saved note collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use notes_core::Note;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("notes.json"))
    }

    #[tokio::test]
    async fn test_bootstrap_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.ensure_initialized().await.unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "[]");
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_replaces_whitespace_only_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "  \n\t ").unwrap();

        store.ensure_initialized().await.unwrap();

        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_bootstrap_leaves_existing_content() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let original = r#"[{"name":"a","text":"hello"}]"#;
        std::fs::write(store.path(), original).unwrap();

        store.ensure_initialized().await.unwrap();

        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), original);
    }

    #[tokio::test]
    async fn test_bootstrap_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("data").join("notes.json"));

        store.ensure_initialized().await.unwrap();

        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_save_writes_pretty_array() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let notes = NoteCollection::from(vec![Note::new("a", "hello")]);

        store.save(&notes).await.unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "[\n  {\n    \"name\": \"a\",\n    \"text\": \"hello\"\n  }\n]");
        assert_eq!(store.load().await.unwrap(), notes);
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn test_load_reports_malformed_document() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not json").unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.load().await.unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_failed_rename_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir(store.path()).unwrap();
        std::fs::write(store.path().join("occupied"), "x").unwrap();

        let err = store.save(&NoteCollection::new()).await.unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn test_failed_temp_write_keeps_document() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let original = r#"[{"name":"a","text":"hello"}]"#;
        std::fs::write(store.path(), original).unwrap();
        std::fs::create_dir(store.temp_path()).unwrap();

        let err = store.save(&NoteCollection::new()).await.unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), original);
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let store = JsonFileStore::new("/var/lib/notes/notes.json");
        assert_eq!(store.temp_path(), PathBuf::from("/var/lib/notes/notes.json.tmp"));
    }
}
