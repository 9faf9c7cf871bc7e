use anyhow::Result;
use axum::Json;
use tracing::error;

use crate::errors::{internal_error, AppError};

/// Map a domain Result<T> into Json<T>, logging and converting failures to AppError.
pub fn to_json<T: serde::Serialize>(result: Result<T>) -> Result<Json<T>, AppError> {
    match result {
        Ok(value) => Ok(Json(value)),
        Err(err) => {
            error!("{:#}", err);
            Err(internal_error(err))
        }
    }
}
