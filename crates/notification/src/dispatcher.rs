use std::fmt;
use std::sync::Arc;

use globaltrade_contact::ContactRequest;
use tracing::{info, warn};

use crate::composer::compose;
use crate::profile::CompanyProfile;
use crate::transport::{DispatchError, NotificationTransport, OutboundEmail, TransportPath};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    Visitor,
    Business,
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recipient::Visitor => write!(f, "visitor"),
            Recipient::Business => write!(f, "business"),
        }
    }
}

#[derive(Debug)]
pub enum DeliveryStatus {
    Delivered { path: TransportPath },
    /// No transport credential configured; the lead is recorded without a
    /// notification and the submission still succeeds.
    Skipped,
    Failed { error: DispatchError },
}

/// What happened to one recipient's notification. Request-scoped, never
/// persisted; exists to decide the response payload and what to log.
#[derive(Debug)]
pub struct NotificationOutcome {
    pub recipient: Recipient,
    pub status: DeliveryStatus,
}

impl NotificationOutcome {
    pub fn delivered(&self) -> bool {
        matches!(self.status, DeliveryStatus::Delivered { .. })
    }

    pub fn auth_failure(&self) -> bool {
        matches!(&self.status, DeliveryStatus::Failed { error } if error.is_auth_failure())
    }
}

/// Aggregated outcome for one dispatched lead.
#[derive(Debug)]
pub struct DispatchReport {
    pub visitor: NotificationOutcome,
    pub business: NotificationOutcome,
}

impl DispatchReport {
    pub fn skipped(&self) -> bool {
        matches!(self.visitor.status, DeliveryStatus::Skipped)
            && matches!(self.business.status, DeliveryStatus::Skipped)
    }

    /// The one transport failure that is surfaced to the submitter.
    pub fn auth_failure(&self) -> bool {
        self.visitor.auth_failure() || self.business.auth_failure()
    }
}

/// Sends the visitor confirmation and the business lead alert through the
/// configured transport, tolerating delivery failure.
///
/// The two sends are independently awaited: a failure on one side never
/// blocks or rolls back the other, and there is no queued retry.
pub struct Dispatcher {
    transport: Option<Arc<dyn NotificationTransport>>,
    profile: CompanyProfile,
    business_address: String,
}

impl Dispatcher {
    pub fn new(
        transport: Arc<dyn NotificationTransport>,
        profile: CompanyProfile,
        business_address: String,
    ) -> Self {
        Self {
            transport: Some(transport),
            profile,
            business_address,
        }
    }

    /// Dispatcher without a transport: every dispatch is a soft skip.
    pub fn disabled(profile: CompanyProfile, business_address: String) -> Self {
        Self {
            transport: None,
            profile,
            business_address,
        }
    }

    pub fn transport_name(&self) -> Option<&'static str> {
        self.transport.as_ref().map(|t| t.name())
    }

    /// Compose and deliver both notifications for a validated request.
    ///
    /// `Err` is reserved for composition failures; transport failures are
    /// reported inside the `DispatchReport` so the caller can apply the
    /// log-and-swallow policy.
    pub async fn dispatch(&self, request: &ContactRequest) -> Result<DispatchReport, DispatchError> {
        let Some(transport) = &self.transport else {
            info!(
                email = %request.email,
                "no email transport configured, recording lead without notification"
            );
            return Ok(DispatchReport {
                visitor: NotificationOutcome {
                    recipient: Recipient::Visitor,
                    status: DeliveryStatus::Skipped,
                },
                business: NotificationOutcome {
                    recipient: Recipient::Business,
                    status: DeliveryStatus::Skipped,
                },
            });
        };

        let content = compose(request, &self.profile)?;

        let visitor_email = OutboundEmail {
            to: request.email.clone(),
            subject: content.visitor.subject,
            html: content.visitor.html,
            text: content.visitor.text,
        };
        let business_email = OutboundEmail {
            to: self.business_address.clone(),
            subject: content.business.subject,
            html: content.business.html,
            text: content.business.text,
        };

        let (visitor_sent, business_sent) = tokio::join!(
            transport.deliver(&visitor_email),
            transport.deliver(&business_email),
        );

        Ok(DispatchReport {
            visitor: outcome(Recipient::Visitor, visitor_sent, transport.name()),
            business: outcome(Recipient::Business, business_sent, transport.name()),
        })
    }
}

fn outcome(
    recipient: Recipient,
    result: Result<TransportPath, DispatchError>,
    transport: &'static str,
) -> NotificationOutcome {
    let status = match result {
        Ok(path) => {
            info!(%recipient, %path, transport, "notification delivered");
            DeliveryStatus::Delivered { path }
        }
        Err(error) => {
            warn!(%recipient, %error, transport, "notification delivery failed");
            DeliveryStatus::Failed { error }
        }
    };
    NotificationOutcome { recipient, status }
}
