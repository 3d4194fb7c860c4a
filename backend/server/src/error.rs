use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Menu item not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    MalformedQuery(String),
}

impl AppError {
    pub fn invalid_number(param: &str, value: &str) -> Self {
        AppError::MalformedQuery(format!(
            "Invalid value {value:?} for {param}: expected an integer"
        ))
    }

    pub fn out_of_range(param: &str, value: &str) -> Self {
        AppError::MalformedQuery(format!(
            "Value {value:?} for {param} is out of range"
        ))
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MalformedQuery { .. } => StatusCode::BAD_REQUEST,
        };

        debug!("Request failed with {status}: {self}");

        let body = ErrorBody {
            success: false,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
