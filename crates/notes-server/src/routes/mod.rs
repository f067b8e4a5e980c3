//! Route definitions for the HTTP API.

pub mod assets;
pub mod notes;
pub mod upload;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the complete router with all routes.
///
/// Paths not matched by an API route fall through to the static directory.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .merge(notes::routes())
        .merge(upload::routes())
        .merge(assets::routes(&static_dir))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}
