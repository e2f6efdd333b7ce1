//! Delivery through the EmailJS REST API

use portfolio_shared::{EmailPayload, EmailSender};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct EmailJsConfig {
    #[serde(default = "default_endpoint")]
    #[validate(length(min = 1))]
    pub endpoint: String,
    #[validate(length(min = 1))]
    pub service_id: String,
    #[validate(length(min = 1))]
    pub template_id: String,
    #[validate(length(min = 1))]
    pub public_key: String,
}

fn default_endpoint() -> String {
    DEFAULT_EMAILJS_ENDPOINT.to_string()
}

/// Body of a `POST /email/send` call. Credentials are forwarded as configured.
#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a EmailPayload,
}

#[derive(Clone)]
pub struct EmailJsSender {
    client: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsSender {
    pub fn new(config: EmailJsConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("portfolio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        tracing::info!(
            endpoint = %config.endpoint,
            service_id = %config.service_id,
            template_id = %config.template_id,
            "EmailJS sender initialized"
        );

        Ok(Self { client, config })
    }

    pub fn request<'a>(&'a self, payload: &'a EmailPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: payload,
        }
    }
}

#[async_trait::async_trait]
impl EmailSender for EmailJsSender {
    async fn send(&self, payload: &EmailPayload) -> anyhow::Result<()> {
        tracing::info!(
            service_id = %self.config.service_id,
            template_id = %self.config.template_id,
            "Sending email through EmailJS"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&self.request(payload))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("EmailJS responded with {status}: {body}");
        }

        Ok(())
    }
}
