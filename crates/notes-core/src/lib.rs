//! notes-core: Core types for the NoteStore service
//!
//! This crate provides:
//! - `Note`, a named unit of text identified by its name
//! - `NoteCollection`, the ordered document holding every note
//!
//! The collection is persisted as a single JSON array, so both types
//! serialize exactly to that wire shape.

pub mod types;

pub use types::{Note, NoteCollection};
