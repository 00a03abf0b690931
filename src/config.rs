use crate::domain::notification::PushType;
use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub apns: ApnsConfig,

    #[command(flatten)]
    pub notification: NotificationConfig,

    /// Log output format
    #[arg(long, env = "RELAY_LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "RELAY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "RELAY_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Answer every relay failure with HTTP 200 and an `ok:false` body
    /// instead of a 4xx/5xx status (keeps uptime monitors quiet)
    #[arg(long, env = "RELAY_SOFT_ERRORS", default_value_t = false, action = clap::ArgAction::Set)]
    pub soft_errors: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ApnsConfig {
    /// APNs signing key (.p8 contents, PEM; pasted `\n`-escaped form is accepted)
    #[arg(long, env = "APNS_KEY")]
    pub key: Option<String>,

    /// Apple developer team identifier (token issuer)
    #[arg(long, env = "APNS_TEAM_ID")]
    pub team_id: Option<String>,

    /// Identifier of the signing key
    #[arg(long, env = "APNS_KEY_ID")]
    pub key_id: Option<String>,

    /// Application bundle identifier (apns-topic)
    #[arg(long, env = "APNS_BUNDLE_ID")]
    pub bundle_id: Option<String>,

    /// Use the sandbox gateway instead of production
    #[arg(long, env = "APNS_USE_SANDBOX", default_value_t = true, action = clap::ArgAction::Set)]
    pub use_sandbox: bool,

    /// Fallback device token for unattended invocations
    #[arg(long, env = "APNS_DEVICE_TOKEN")]
    pub device_token: Option<String>,

    /// Overrides the gateway URL (used to point tests at a local mock)
    #[arg(long, env = "APNS_GATEWAY_URL")]
    pub gateway_url: Option<String>,

    /// Time to wait for the gateway before aborting the push
    #[arg(long, env = "APNS_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, Args)]
pub struct NotificationConfig {
    /// Push classification used when the request does not specify one
    #[arg(long, env = "RELAY_PUSH_TYPE", value_enum, default_value = "background")]
    pub push_type: PushType,

    /// Alert title used when the request does not supply one
    #[arg(long, env = "RELAY_ALERT_TITLE", default_value = "Notification")]
    pub alert_title: String,

    /// Alert body used when the request does not supply one
    #[arg(long, env = "RELAY_ALERT_BODY", default_value = "")]
    pub alert_body: String,

    /// Sound attached to alert pushes
    #[arg(long, env = "RELAY_ALERT_SOUND", default_value = "default")]
    pub alert_sound: String,

    /// Badge count attached to alert pushes
    #[arg(long, env = "RELAY_ALERT_BADGE")]
    pub alert_badge: Option<u32>,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }
}
