use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Upper bound on any single delivery attempt. Applied to both the SMTP
/// session and the HTTP API call.
pub const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// One fully composed message, ready for any transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Which path actually carried a delivered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportPath {
    /// SMTP submission port with an in-band TLS upgrade.
    StartTls,
    /// Implicit-TLS fallback on the standard secure port.
    Smtps,
    /// Transactional-email HTTP API.
    HttpApi,
}

impl fmt::Display for TransportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportPath::StartTls => write!(f, "starttls"),
            TransportPath::Smtps => write!(f, "smtps"),
            TransportPath::HttpApi => write!(f, "http-api"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The relay rejected our credentials (SMTP 535). The only transport
    /// failure that is surfaced to the submitter.
    #[error("smtp credentials rejected: {0}")]
    AuthRejected(String),

    #[error("smtp delivery failed: {0}")]
    Smtp(String),

    #[error("smtp transport could not be configured: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("email api returned {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("email api request failed: {0}")]
    ApiRequest(#[from] reqwest::Error),

    #[error("invalid mailbox: {0}")]
    Mailbox(#[from] lettre::address::AddressError),

    #[error("could not build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("could not render notification body: {0}")]
    Render(#[from] askama::Error),

    #[error("send task aborted: {0}")]
    Join(String),
}

impl DispatchError {
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, DispatchError::AuthRejected(_))
    }
}

/// A way of getting one [`OutboundEmail`] to one recipient.
///
/// Implementations own their fallback policy; `deliver` reports the path
/// that ended up carrying the message.
#[async_trait]
pub trait NotificationTransport: Send + Sync {
    /// Short transport label for logs.
    fn name(&self) -> &'static str;

    async fn deliver(&self, email: &OutboundEmail) -> Result<TransportPath, DispatchError>;
}
