pub mod events;
pub mod gallery;
pub mod pages;

use axum::{
    Json, Router,
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::error;
use trailforward_core::CoreError;

use crate::state::AppState;

/// Every route plus static files for anything unmatched.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(state.config.static_dir());

    Router::new()
        .merge(events::router())
        .merge(gallery::router())
        .merge(pages::router())
        .fallback_service(static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert errors to HTTP responses
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0.downcast_ref::<CoreError>() {
            Some(CoreError::NotFound(_) | CoreError::ImagesNotFound) => StatusCode::NOT_FOUND,
            Some(CoreError::InvalidDate(_)) => StatusCode::BAD_REQUEST,
            // Unparseable request bodies, bad dates included
            _ if self.0.is::<JsonRejection>() || self.0.is::<FormRejection>() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
