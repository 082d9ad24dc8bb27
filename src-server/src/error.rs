use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use ratefeed_core::errors::Error as CoreError;
use ratefeed_core::quotes::QuoteError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Not Found")]
    NotFound,
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(CoreError::Quote(e)) => (quote_status(e), self.to_string()),
            ApiError::Core(CoreError::Feed(_)) => (StatusCode::BAD_GATEWAY, self.to_string()),
            ApiError::Core(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Internal(reason) => (StatusCode::INTERNAL_SERVER_ERROR, reason.clone()),
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

fn quote_status(err: &QuoteError) -> StatusCode {
    match err {
        QuoteError::CurrencyNotFound(_) => StatusCode::NOT_FOUND,
        QuoteError::InvalidPayloadFormat
        | QuoteError::ValueParse { .. }
        | QuoteError::EmptyCurrencyId
        | QuoteError::InvalidCurrencyValue { .. }
        | QuoteError::InvalidDay { .. }
        | QuoteError::NoData => StatusCode::BAD_REQUEST,
        QuoteError::Import { source, .. } => quote_status(source),
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
