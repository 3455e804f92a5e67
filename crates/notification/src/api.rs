use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

use crate::transport::{
    DispatchError, NotificationTransport, OutboundEmail, SEND_TIMEOUT, TransportPath,
};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Base URL of the transactional-email provider, no trailing slash.
    pub base_url: String,
    pub api_key: String,
}

/// Transactional-email HTTP transport: one `POST {base_url}/email` per
/// recipient, bearer-authenticated, JSON body. No retry beyond what the
/// provider does itself.
pub struct ApiMailer {
    client: reqwest::Client,
    settings: ApiSettings,
    from: String,
}

#[derive(Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}

impl ApiMailer {
    pub fn new(settings: ApiSettings, from: String) -> Result<Self, DispatchError> {
        let client = reqwest::Client::builder().timeout(SEND_TIMEOUT).build()?;
        Ok(Self {
            client,
            settings,
            from,
        })
    }
}

#[async_trait]
impl NotificationTransport for ApiMailer {
    fn name(&self) -> &'static str {
        "api"
    }

    async fn deliver(&self, email: &OutboundEmail) -> Result<TransportPath, DispatchError> {
        let response = self
            .client
            .post(format!("{}/email", self.settings.base_url))
            .bearer_auth(&self.settings.api_key)
            .json(&SendEmailBody {
                from: &self.from,
                to: &email.to,
                subject: &email.subject,
                html_body: &email.html,
                text_body: &email.text,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        info!(
            status = status.as_u16(),
            body = %body,
            to = %email.to,
            "email api responded"
        );

        if status.is_success() {
            Ok(TransportPath::HttpApi)
        } else {
            Err(DispatchError::ApiStatus {
                status: status.as_u16(),
                body,
            })
        }
    }
}
