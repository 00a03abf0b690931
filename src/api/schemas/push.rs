use crate::domain::notification::PushType;
use crate::error::AppError;
use crate::services::transport::PushResult;
use serde::{Deserialize, Serialize};

/// Body of a POST relay request. Every field is optional; an empty or
/// non-JSON body is treated the same as `{}`, matching the lenient body
/// parsing of the trigger surface.
#[derive(Debug, Default, Deserialize)]
pub struct PushRequest {
    pub token: Option<String>,
    pub push_type: Option<PushType>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub badge: Option<u32>,
}

impl PushRequest {
    pub fn from_body(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::default();
        }
        serde_json::from_slice(bytes).unwrap_or_default()
    }
}

/// Query parameters accepted on GET relay requests.
#[derive(Debug, Default, Deserialize)]
pub struct PushQuery {
    pub token: Option<String>,
    pub push_type: Option<PushType>,
}

/// What the original caller gets back. Always carries `ok`; never echoes the
/// device token.
#[derive(Debug, Serialize)]
pub struct PushResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PushResponse {
    pub fn accepted(result: PushResult) -> Self {
        let response = if result.body.is_empty() { "accepted".to_string() } else { result.body };
        Self {
            ok: true,
            status: Some(result.status),
            apns_id: result.apns_id,
            response: Some(response),
            error: None,
        }
    }

    pub fn rejected(error: &AppError) -> Self {
        let (status, response) = match error {
            AppError::Gateway { status, body } => (Some(*status), Some(body.clone())),
            _ => (None, None),
        };
        Self {
            ok: false,
            status,
            apns_id: None,
            response,
            error: Some(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_parses_token() {
        let req = PushRequest::from_body(br#"{"token":"abc123","push_type":"alert"}"#);
        assert_eq!(req.token.as_deref(), Some("abc123"));
        assert_eq!(req.push_type, Some(PushType::Alert));
    }

    #[test]
    fn test_from_body_tolerates_empty_and_junk() {
        assert!(PushRequest::from_body(b"").token.is_none());
        assert!(PushRequest::from_body(b"not json at all").token.is_none());
    }

    #[test]
    fn test_accepted_substitutes_empty_gateway_body() {
        let resp = PushResponse::accepted(PushResult { status: 200, apns_id: None, body: String::new() });
        assert!(resp.ok);
        assert_eq!(resp.response.as_deref(), Some("accepted"));
    }

    #[test]
    fn test_rejected_carries_gateway_diagnostics() {
        let err = AppError::Gateway { status: 410, body: "{\"reason\":\"Unregistered\"}".into() };
        let resp = PushResponse::rejected(&err);
        assert!(!resp.ok);
        assert_eq!(resp.status, Some(410));
        assert_eq!(resp.response.as_deref(), Some("{\"reason\":\"Unregistered\"}"));
    }
}
