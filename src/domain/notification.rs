use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Delivery classification required by the gateway. Controls whether the OS
/// shows the push or silently wakes the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PushType {
    Alert,
    Background,
}

impl PushType {
    /// Value for the `apns-push-type` header field.
    pub const fn header_value(self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Background => "background",
        }
    }

    /// Value for the `apns-priority` header field: immediate delivery for
    /// alerts, power-friendly delivery for background wakes.
    pub const fn priority(self) -> &'static str {
        match self {
            Self::Alert => "10",
            Self::Background => "5",
        }
    }
}

/// The JSON body delivered to the device.
#[derive(Debug, Serialize)]
pub struct NotificationPayload {
    aps: Aps,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta: Option<Meta>,
}

#[derive(Debug, Default, Serialize)]
struct Aps {
    #[serde(skip_serializing_if = "Option::is_none")]
    alert: Option<Alert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    badge: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sound: Option<String>,
    #[serde(rename = "content-available", skip_serializing_if = "Option::is_none")]
    content_available: Option<u8>,
}

#[derive(Debug, Serialize)]
struct Alert {
    title: String,
    body: String,
}

#[derive(Debug, Serialize)]
struct Meta {
    source: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    at: OffsetDateTime,
}

impl NotificationPayload {
    /// Silent push: wakes the app without any UI, tagged with send metadata.
    pub fn background(at: OffsetDateTime) -> Self {
        Self {
            aps: Aps { content_available: Some(1), ..Aps::default() },
            meta: Some(Meta { source: env!("CARGO_PKG_NAME"), at }),
        }
    }

    /// Visible push with a title, body, sound, and optional badge count.
    pub fn alert(title: String, body: String, sound: String, badge: Option<u32>) -> Self {
        Self {
            aps: Aps {
                alert: Some(Alert { title, body }),
                badge,
                sound: Some(sound),
                ..Aps::default()
            },
            meta: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_push_type_header_fields() {
        assert_eq!(PushType::Alert.header_value(), "alert");
        assert_eq!(PushType::Alert.priority(), "10");
        assert_eq!(PushType::Background.header_value(), "background");
        assert_eq!(PushType::Background.priority(), "5");
    }

    #[test]
    fn test_background_payload_shape() {
        let payload = NotificationPayload::background(datetime!(2025-06-01 12:00:00 UTC));
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["aps"]["content-available"], 1);
        assert!(value["aps"].get("alert").is_none());
        assert!(value["aps"].get("sound").is_none());
        assert_eq!(value["meta"]["source"], "apns-relay");
        assert_eq!(value["meta"]["at"], "2025-06-01T12:00:00Z");
    }

    #[test]
    fn test_alert_payload_shape() {
        let payload =
            NotificationPayload::alert("Title".into(), "Body".into(), "default".into(), Some(5));
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["aps"]["alert"]["title"], "Title");
        assert_eq!(value["aps"]["alert"]["body"], "Body");
        assert_eq!(value["aps"]["sound"], "default");
        assert_eq!(value["aps"]["badge"], 5);
        assert!(value["aps"].get("content-available").is_none());
        assert!(value.get("meta").is_none());
    }

    #[test]
    fn test_alert_payload_without_badge() {
        let payload = NotificationPayload::alert("T".into(), "B".into(), "default".into(), None);
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["aps"].get("badge").is_none());
    }
}
