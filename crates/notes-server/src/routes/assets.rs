//! Static upload form.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeFile;

use crate::state::AppState;

/// File name of the bundled upload form.
pub const UPLOAD_FORM: &str = "UploadForm.html";

/// GET /UploadForm.html - the HTML form that posts to `/upload`.
pub fn routes(static_dir: &Path) -> Router<AppState> {
    Router::new().route_service(
        &format!("/{UPLOAD_FORM}"),
        ServeFile::new(static_dir.join(UPLOAD_FORM)),
    )
}
