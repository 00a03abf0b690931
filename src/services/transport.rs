use crate::domain::notification::{NotificationPayload, PushType};
use crate::error::{AppError, Result};
use std::time::Duration;

/// Outcome of one delivery attempt, as reported by the gateway.
#[derive(Clone, Debug)]
pub struct PushResult {
    pub status: u16,
    /// Provider-assigned identifier from the `apns-id` response header.
    pub apns_id: Option<String>,
    /// Empty on success, error-detail JSON on failure.
    pub body: String,
}

impl PushResult {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Issues one HTTP/2 exchange with the push gateway per call.
///
/// A fresh client is built for every send, so the connection is released on
/// every exit path and invocations never share transport state.
#[derive(Clone, Debug)]
pub struct PushTransport {
    base_url: String,
    timeout: Duration,
}

impl PushTransport {
    pub const fn new(base_url: String, timeout: Duration) -> Self {
        Self { base_url, timeout }
    }

    /// Delivers one push and collects the gateway's verdict.
    ///
    /// # Errors
    /// Returns `AppError::Timeout` if the gateway does not answer within the
    /// configured window, `AppError::Transport` on connection failures.
    /// A non-2xx gateway status is reported inside `PushResult`, not here.
    #[tracing::instrument(skip_all, fields(push_type = push_type.header_value()))]
    pub async fn send(
        &self,
        provider_token: &str,
        topic: &str,
        device_token: &str,
        push_type: PushType,
        payload: &NotificationPayload,
    ) -> Result<PushResult> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let url = format!("{}/3/device/{device_token}", self.base_url);

        let response = client
            .post(url)
            .header("apns-topic", topic)
            .header("apns-push-type", push_type.header_value())
            .header("apns-priority", push_type.priority())
            .bearer_auth(provider_token)
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status().as_u16();
        let apns_id = response
            .headers()
            .get("apns-id")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let body = response.text().await.map_err(map_request_error)?;

        tracing::info!(
            status,
            apns_id = apns_id.as_deref().unwrap_or(""),
            token_prefix = device_token.chars().take(8).collect::<String>(),
            "gateway responded"
        );

        Ok(PushResult { status, apns_id, body })
    }
}

fn map_request_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::Timeout
    } else {
        AppError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_result_success_range() {
        let ok = PushResult { status: 200, apns_id: None, body: String::new() };
        assert!(ok.is_success());

        let gone = PushResult { status: 410, apns_id: None, body: "{\"reason\":\"Unregistered\"}".into() };
        assert!(!gone.is_success());
    }
}
