//! Agreement webhook routes (e.g., /agreement_all_events)

use axum::{routing::get, Router};

use crate::api::controller::agreement::AgreementController;
use crate::app_state::AppState;

pub fn agreement_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/agreement_all_events",
            get(AgreementController::verify_webhook).post(AgreementController::all_events),
        )
        .route(
            "/agreement_workflow_completed",
            get(AgreementController::verify_webhook).post(AgreementController::workflow_completed),
        )
}
