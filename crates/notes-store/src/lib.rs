//! notes-store: Storage layer for the NoteStore service
//!
//! This crate provides:
//! - The `NoteRepository` trait, the injected storage seam
//! - `JsonFileStore`, which keeps the collection in one JSON file
//! - `MemoryStore`, an in-process backend for tests
//! - `NoteService`, the read-modify-write operations behind each route
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use notes_store::{JsonFileStore, NoteService};
//!
//! let service = NoteService::new(Arc::new(JsonFileStore::new("notes.json")));
//! service.create("a", "hello").await?;
//! assert_eq!(service.get("a").await?.text, "hello");
//! ```

pub mod error;
pub mod file;
pub mod memory;
pub mod repository;
pub mod service;

pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use repository::NoteRepository;
pub use service::NoteService;

// Re-export notes-core for downstream crates
pub use notes_core;
