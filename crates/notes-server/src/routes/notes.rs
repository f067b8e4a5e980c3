//! Note routes.
//!
//! This module implements the note HTTP endpoints:
//! - GET /notes - List all notes
//! - GET /notes/{name} - Fetch a note's text
//! - PUT /notes/{name} - Replace a note's text with the raw request body
//! - DELETE /notes/{name} - Delete a note
//!
//! Path and body extractors are taken as `Result` so their rejections are
//! rendered through `ApiError` like every other failure.

use axum::{
    extract::{
        rejection::{PathRejection, StringRejection},
        Path, State,
    },
    routing::get,
    Json, Router,
};
use notes_core::NoteCollection;

use crate::error::ApiResult;
use crate::state::AppState;

/// Acknowledgement body for an updated note.
pub const UPDATED_MESSAGE: &str = "Note updated";
/// Acknowledgement body for a deleted note.
pub const DELETED_MESSAGE: &str = "Note deleted";

/// GET /notes - List all notes.
///
/// # Response
///
/// - 200 OK: `[{ "name": "...", "text": "..." }, ...]`
/// - 500 Internal Server Error: storage failure
async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<NoteCollection>> {
    let notes = state.notes().list().await?;
    tracing::debug!(count = notes.len(), "Listed notes");
    Ok(Json(notes))
}

/// GET /notes/{name} - Fetch a note's text as `text/plain`.
///
/// # Response
///
/// - 200 OK: the note text
/// - 404 Not Found: no note with this name
async fn get_note(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> ApiResult<String> {
    let Path(name) = name?;
    let note = state.notes().get(&name).await?;
    Ok(note.text)
}

/// PUT /notes/{name} - Replace a note's text.
///
/// The request body is taken verbatim as the new text.
///
/// # Response
///
/// - 200 OK: plain-text acknowledgement
/// - 400 Bad Request: body is not valid UTF-8
/// - 404 Not Found: no note with this name
/// - 413 Payload Too Large: body exceeds the request body limit
async fn update_note(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
    text: Result<String, StringRejection>,
) -> ApiResult<&'static str> {
    let Path(name) = name?;
    let text = text?;
    state.notes().update(&name, &text).await?;
    Ok(UPDATED_MESSAGE)
}

/// DELETE /notes/{name} - Delete a note.
///
/// # Response
///
/// - 200 OK: plain-text acknowledgement
/// - 404 Not Found: no note with this name; nothing is written
async fn delete_note(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> ApiResult<&'static str> {
    let Path(name) = name?;
    state.notes().delete(&name).await?;
    Ok(DELETED_MESSAGE)
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes))
        .route(
            "/notes/{name}",
            get(get_note).put(update_note).delete(delete_note),
        )
}
