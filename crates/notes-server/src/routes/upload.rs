//! Note creation through the upload form.

use axum::{extract::State, http::StatusCode, routing::post, Router};

use crate::error::ApiResult;
use crate::extract::NoteForm;
use crate::state::AppState;

/// Acknowledgement body for a created note.
pub const CREATED_MESSAGE: &str = "Note created";

/// POST /upload - Create a note from form fields `note_name` and `note`.
///
/// # Response
///
/// - 201 Created: plain-text acknowledgement
/// - 400 Bad Request: malformed form or missing `note_name`
/// - 409 Conflict: a note with this name already exists
/// - 500 Internal Server Error: storage failure
async fn upload_note(
    State(state): State<AppState>,
    form: NoteForm,
) -> ApiResult<(StatusCode, &'static str)> {
    state.notes().create(&form.name, &form.text).await?;
    Ok((StatusCode::CREATED, CREATED_MESSAGE))
}

/// Build upload routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/upload", post(upload_note))
}
