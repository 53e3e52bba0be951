mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use handlers::{ask, index, not_found};
pub use models::{AskRequest, AskResponse, ErrorResponse};

/// `/` answers GET only and `/ask` answers POST only; every other
/// method or path falls through to a 404.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).fallback(not_found))
        .route("/ask", post(ask).fallback(not_found))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
