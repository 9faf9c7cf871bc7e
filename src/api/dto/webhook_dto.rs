//! Webhook API DTOs
use serde::Serialize;

/// Body of `GET /`.
#[derive(Serialize, Debug)]
pub struct GreetingResponse {
    #[serde(rename = "Hello")]
    pub hello: &'static str,
}

impl Default for GreetingResponse {
    fn default() -> Self {
        Self { hello: "World" }
    }
}

/// Reply to the provider's webhook verification GET.
#[derive(Serialize, Debug)]
pub struct ClientIdEchoResponse {
    #[serde(rename = "xAdobeSignClientId")]
    pub client_id: String,
}

/// Serializes as `{}`.
#[derive(Serialize, Debug, Default)]
pub struct EmptyResponse {}
