use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Missing device token (body.token, query.token, or APNS_DEVICE_TOKEN)")]
    MissingDeviceToken,
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Gateway rejected the push ({status}): {body}")]
    Gateway { status: u16, body: String },
    #[error("Gateway did not respond within the configured timeout")]
    Timeout,
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MethodNotAllowed => {
                tracing::debug!("Disallowed method");
                StatusCode::METHOD_NOT_ALLOWED
            }
            AppError::MissingDeviceToken => {
                tracing::debug!("Missing device token");
                StatusCode::BAD_REQUEST
            }
            AppError::Config(msg) => {
                tracing::error!(message = %msg, "Configuration error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Signing(e) => {
                tracing::error!(error = %e, "Provider token signing failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Transport(msg) => {
                tracing::error!(message = %msg, "Transport error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Gateway { status, body } => {
                tracing::warn!(gateway_status = *status, body = %body, "Gateway error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Timeout => {
                tracing::warn!("Push timed out");
                StatusCode::GATEWAY_TIMEOUT
            }
        };

        let body = Json(json!({
            "ok": false,
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
