//! Core data types for the NoteStore service.
//!
//! A note is identified by its `name`; there is no separate id. The
//! collection keeps insertion order and holds at most one note per name.

use serde::{Deserialize, Serialize};

// ============================================================================
// Note
// ============================================================================

/// A named unit of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique name of the note.
    pub name: String,
    /// Note body.
    pub text: String,
}

impl Note {
    /// Creates a note from a name and its text.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

// ============================================================================
// NoteCollection
// ============================================================================

/// The collection document: every note, in insertion order.
///
/// Serializes transparently as a JSON array of `{name, text}` objects.
/// Lookups are linear scans; there is no secondary index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteCollection(Vec<Note>);

impl NoteCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of notes in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection holds no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates notes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.0.iter()
    }

    /// Returns the first note with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Note> {
        self.0.iter().find(|note| note.name == name)
    }

    /// Whether a note with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Appends a note unless one with the same name already exists.
    ///
    /// Returns `false` and leaves the collection untouched on a duplicate.
    pub fn insert(&mut self, note: Note) -> bool {
        if self.contains(&note.name) {
            return false;
        }
        self.0.push(note);
        true
    }

    /// Replaces the text of the named note.
    ///
    /// Returns `false` if no such note exists.
    pub fn set_text(&mut self, name: &str, text: impl Into<String>) -> bool {
        match self.0.iter_mut().find(|note| note.name == name) {
            Some(note) => {
                note.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Removes the named note, returning it if it was present.
    pub fn remove(&mut self, name: &str) -> Option<Note> {
        let index = self.0.iter().position(|note| note.name == name)?;
        Some(self.0.remove(index))
    }
}

impl From<Vec<Note>> for NoteCollection {
    fn from(notes: Vec<Note>) -> Self {
        Self(notes)
    }
}

// ============================================================================
// Tests
// ============================================================================
