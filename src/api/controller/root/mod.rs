use axum::Json;

use crate::api::dto::webhook_dto::GreetingResponse;

pub struct RootController;

impl RootController {
    /// Liveness check; proves requests and responses are flowing.
    pub async fn hello() -> Json<GreetingResponse> {
        Json(GreetingResponse::default())
    }
}
