use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::warn;

use crate::transport::{
    DispatchError, NotificationTransport, OutboundEmail, SEND_TIMEOUT, TransportPath,
};

/// Implicit-TLS fallback port when the submission attempt fails.
const SMTPS_PORT: u16 = 465;

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    /// Submission port for the STARTTLS attempt, normally 587.
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// SMTP relay transport.
///
/// Tries an encrypted submission session (STARTTLS) first and retries once
/// over implicit TLS on port 465 with the same credentials and an
/// identically built message. The error of the last attempt is the one
/// surfaced.
pub struct SmtpMailer {
    sessions: Vec<(TransportPath, SmtpTransport)>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings, from: Mailbox) -> Result<Self, DispatchError> {
        let credentials = Credentials::new(settings.username.clone(), settings.password.clone());

        let submission = SmtpTransport::starttls_relay(&settings.host)?
            .port(settings.port)
            .credentials(credentials.clone())
            .timeout(Some(SEND_TIMEOUT))
            .build();

        let smtps = SmtpTransport::relay(&settings.host)?
            .port(SMTPS_PORT)
            .credentials(credentials)
            .timeout(Some(SEND_TIMEOUT))
            .build();

        Ok(Self {
            sessions: vec![
                (TransportPath::StartTls, submission),
                (TransportPath::Smtps, smtps),
            ],
            from,
        })
    }

    /// One delivery attempt over the given session. The blocking lettre
    /// send runs on the worker pool so a slow relay cannot stall the
    /// runtime.
    async fn attempt(
        &self,
        transport: SmtpTransport,
        email: &OutboundEmail,
    ) -> Result<(), DispatchError> {
        let message = build_message(&self.from, email)?;
        let sent = tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .map_err(|err| DispatchError::Join(err.to_string()))?;

        match sent {
            Ok(_) => Ok(()),
            Err(err) => Err(classify_smtp_failure(err.is_permanent(), err.to_string())),
        }
    }
}

#[async_trait]
impl NotificationTransport for SmtpMailer {
    fn name(&self) -> &'static str {
        "smtp"
    }

    async fn deliver(&self, email: &OutboundEmail) -> Result<TransportPath, DispatchError> {
        let mut failure = DispatchError::Smtp("no smtp session configured".into());
        for (path, transport) in &self.sessions {
            match self.attempt(transport.clone(), email).await {
                Ok(()) => return Ok(*path),
                Err(err) => {
                    warn!(%path, error = %err, to = %email.to, "smtp attempt failed");
                    failure = err;
                }
            }
        }
        Err(failure)
    }
}

fn build_message(from: &Mailbox, email: &OutboundEmail) -> Result<Message, DispatchError> {
    Ok(Message::builder()
        .from(from.clone())
        .to(email.to.parse::<Mailbox>()?)
        .subject(email.subject.clone())
        .multipart(MultiPart::alternative_plain_html(
            email.text.clone(),
            email.html.clone(),
        ))?)
}

/// A permanent 535 response means the relay rejected our credentials; every
/// other failure stays a plain transport error.
fn classify_smtp_failure(permanent: bool, detail: String) -> DispatchError {
    if permanent && detail.contains("535") {
        DispatchError::AuthRejected(detail)
    } else {
        DispatchError::Smtp(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SmtpSettings {
        SmtpSettings {
            host: "smtp.example.com".into(),
            port: 587,
            username: "noreply@globaltechtrade.com".into(),
            password: "secret".into(),
        }
    }

    fn sender() -> Mailbox {
        "GlobalTech&Trade <noreply@globaltechtrade.com>"
            .parse()
            .unwrap()
    }

    fn email() -> OutboundEmail {
        OutboundEmail {
            to: "jane@x.com".into(),
            subject: "Thank you".into(),
            html: "<p>Hello Jane</p>".into(),
            text: "Hello Jane".into(),
        }
    }

    #[test]
    fn starttls_is_attempted_before_the_implicit_tls_fallback() {
        let mailer = SmtpMailer::new(&settings(), sender()).unwrap();
        let order: Vec<_> = mailer.sessions.iter().map(|(path, _)| *path).collect();
        assert_eq!(order, vec![TransportPath::StartTls, TransportPath::Smtps]);
    }

    #[test]
    fn builds_a_multipart_message() {
        let message = build_message(&sender(), &email()).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: Thank you"));
        assert!(raw.contains("multipart/alternative"));
    }

    #[test]
    fn rejects_an_unparseable_recipient() {
        let bad = OutboundEmail {
            to: "not a mailbox".into(),
            ..email()
        };
        assert!(matches!(
            build_message(&sender(), &bad),
            Err(DispatchError::Mailbox(_))
        ));
    }

    #[test]
    fn permanent_535_maps_to_auth_rejection() {
        let err = classify_smtp_failure(
            true,
            "permanent error (535): authentication credentials invalid".into(),
        );
        assert!(err.is_auth_failure());
    }

    #[test]
    fn other_permanent_failures_stay_transport_errors() {
        let err = classify_smtp_failure(true, "permanent error (550): mailbox unavailable".into());
        assert!(!err.is_auth_failure());
    }

    #[test]
    fn transient_failures_stay_transport_errors() {
        let err = classify_smtp_failure(false, "transient error (421): try again later".into());
        assert!(!err.is_auth_failure());
    }
}
