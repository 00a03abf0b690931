use crate::api::AppState;
use crate::api::schemas::push::{PushQuery, PushRequest, PushResponse};
use crate::error::{AppError, Result};
use crate::services::push_service::AlertContent;
use crate::services::transport::PushResult;
use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

/// Relays one push to one device token.
///
/// POST takes an optional JSON body, GET an optional query string; the
/// configured fallback token covers unattended invocations. HEAD and OPTIONS
/// are answered immediately so uptime monitors never trigger a push.
pub async fn relay(
    State(state): State<AppState>,
    method: Method,
    Query(query): Query<PushQuery>,
    body: Bytes,
) -> Response {
    if method == Method::HEAD || method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    match handle(&state, &method, query, &body).await {
        Ok(result) => (StatusCode::OK, Json(PushResponse::accepted(result))).into_response(),
        Err(err) if state.config.server.soft_errors => {
            tracing::warn!(error = %err, "push failed (soft error mode)");
            (StatusCode::OK, Json(PushResponse::rejected(&err))).into_response()
        }
        Err(err) => err.into_response(),
    }
}

async fn handle(
    state: &AppState,
    method: &Method,
    query: PushQuery,
    body: &[u8],
) -> Result<PushResult> {
    let (explicit_token, push_type, content) = if *method == Method::POST {
        let request = PushRequest::from_body(body);
        (
            request.token,
            request.push_type,
            AlertContent { title: request.title, body: request.body, badge: request.badge },
        )
    } else if *method == Method::GET {
        (query.token, query.push_type, AlertContent::default())
    } else {
        return Err(AppError::MethodNotAllowed);
    };

    let device_token = state.push_service.resolve_device_token(explicit_token.as_deref())?;
    state.push_service.send_push(&device_token, push_type, content).await
}
