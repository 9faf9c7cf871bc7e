use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::errors::AppError;

pub const CLIENT_ID_HEADER: &str = "x-adobesign-clientid";

/// Value of the `x-adobesign-clientid` header sent with webhook verification requests.
///
/// Rejects with 400 when the header is absent. Non-ASCII bytes are decoded
/// as UTF-8, lossily, and echoed rather than rejected.
#[derive(Debug, Clone)]
pub struct AdobeSignClientId(pub String);

impl<S> FromRequestParts<S> for AdobeSignClientId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(CLIENT_ID_HEADER)
            .ok_or(AppError::MissingHeader(CLIENT_ID_HEADER))?;

        Ok(Self(String::from_utf8_lossy(value.as_bytes()).into_owned()))
    }
}
