//! notes-server: HTTP API server for the NoteStore service
//!
//! This crate provides:
//! - REST endpoints to list, read, create, update, and delete notes
//! - The upload form and other static assets
//! - JSON error responses with consistent status codes
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request ID generation and propagation
//! - Request tracing and logging
//! - CORS handling
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use notes_server::{build_app, AppState, ServerConfig};
//! use notes_store::{JsonFileStore, NoteService};
//!
//! let config = ServerConfig::from_env()?;
//! let service = NoteService::new(Arc::new(JsonFileStore::new(&config.notes_path)));
//! let app = build_app(AppState::new(service, config));
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

// Re-exports for convenience
pub use config::{ConfigError, CorsOrigins, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;

/// Build the router with the full middleware stack applied.
pub fn build_app(state: AppState) -> Router {
    let cors = middleware::cors::cors_layer(&state.config().cors_allowed_origins);

    routes::build_router(state).layer(
        ServiceBuilder::new()
            .layer(middleware::request_id::set_request_id_layer())
            .layer(middleware::request_id::propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(middleware::request_id::request_span))
            .layer(cors),
    )
}
