//! Agreement controller: connects webhook routes to the agreement event service

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::dto::webhook_dto::{ClientIdEchoResponse, EmptyResponse};
use crate::api::util::client_id::AdobeSignClientId;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct AgreementController;

impl AgreementController {
    /// Webhook verification handshake: echo the client id back.
    pub async fn verify_webhook(
        AdobeSignClientId(client_id): AdobeSignClientId,
    ) -> Json<ClientIdEchoResponse> {
        Json(ClientIdEchoResponse { client_id })
    }

    pub async fn all_events(
        State(state): State<AppState>,
        Json(body): Json<Value>,
    ) -> Result<Json<EmptyResponse>, AppError> {
        to_json(
            state
                .agreement_event_service
                .handle_all_events(body)
                .map(|_| EmptyResponse::default()),
        )
    }

    pub async fn workflow_completed(
        State(state): State<AppState>,
        Json(body): Json<Value>,
    ) -> Result<Json<EmptyResponse>, AppError> {
        let service = state.agreement_event_service.clone();

        // decoding and the file write are blocking work
        let result = tokio::task::spawn_blocking(move || service.handle_workflow_completed(body))
            .await
            .map_err(anyhow::Error::from)
            .and_then(|inner| inner);

        to_json(result.map(|_| EmptyResponse::default()))
    }
}
