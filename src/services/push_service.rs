use crate::config::Config;
use crate::domain::credentials::PushCredentials;
use crate::domain::notification::{NotificationPayload, PushType};
use crate::error::{AppError, Result};
use crate::services::signer;
use crate::services::transport::{PushResult, PushTransport};
use std::time::Duration;
use time::OffsetDateTime;

/// Per-request overrides for alert content; anything unset falls back to the
/// configured defaults.
#[derive(Debug, Default)]
pub struct AlertContent {
    pub title: Option<String>,
    pub body: Option<String>,
    pub badge: Option<u32>,
}

/// One invocation, one push: resolves credentials, signs a provider token,
/// and performs a single transport exchange. Nothing is shared or retried
/// across calls.
#[derive(Clone, Debug)]
pub struct PushService {
    config: Config,
}

impl PushService {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Resolves the target device token: explicit caller value first, then
    /// the configured fallback for unattended invocations. Blank values are
    /// treated as absent in both positions.
    ///
    /// # Errors
    /// Returns `AppError::MissingDeviceToken` when neither is present.
    pub fn resolve_device_token(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .into_iter()
            .chain(self.config.apns.device_token.as_deref())
            .map(str::trim)
            .find(|t| !t.is_empty())
            .map(ToString::to_string)
            .ok_or(AppError::MissingDeviceToken)
    }

    /// Sends one push to `device_token` and returns the gateway's verdict.
    ///
    /// # Errors
    /// Configuration, signing, transport, timeout, and gateway-rejection
    /// errors all surface here; see `AppError`.
    #[tracing::instrument(skip_all, err(level = "warn"))]
    pub async fn send_push(
        &self,
        device_token: &str,
        push_type: Option<PushType>,
        content: AlertContent,
    ) -> Result<PushResult> {
        let credentials = PushCredentials::resolve(&self.config.apns)?;
        let now = OffsetDateTime::now_utc();
        let provider_token = signer::sign_provider_token(&credentials, now)?;

        let push_type = push_type.unwrap_or(self.config.notification.push_type);
        let payload = match push_type {
            PushType::Background => NotificationPayload::background(now),
            PushType::Alert => NotificationPayload::alert(
                content.title.unwrap_or_else(|| self.config.notification.alert_title.clone()),
                content.body.unwrap_or_else(|| self.config.notification.alert_body.clone()),
                self.config.notification.alert_sound.clone(),
                content.badge.or(self.config.notification.alert_badge),
            ),
        };

        let base_url = self
            .config
            .apns
            .gateway_url
            .clone()
            .unwrap_or_else(|| credentials.environment.base_url().to_string());
        let transport = PushTransport::new(base_url, Duration::from_secs(self.config.apns.timeout_secs));

        let result = transport
            .send(&provider_token, &credentials.bundle_id, device_token, push_type, &payload)
            .await?;

        if result.is_success() {
            Ok(result)
        } else {
            Err(AppError::Gateway { status: result.status, body: result.body })
        }
    }
}
