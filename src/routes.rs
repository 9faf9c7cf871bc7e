use axum::{http::Uri, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::api::controller::root::RootController;
use crate::app_state::AppState;
use crate::errors::AppError;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    Router::new()
        // Root route, doubles as liveness check
        .route("/", get(RootController::hello))
        // Adobe Sign webhook endpoints
        .merge(crate::api::routes::agreement_routes::agreement_routes())
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
}

/// Router with state attached, ready to serve.
pub fn create_app(state: AppState) -> Router {
    app_router().with_state(state)
}

// Handler for 404 Not Found
async fn handler_404(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
