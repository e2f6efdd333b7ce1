//! Email delivery over SMTP using lettre

use askama::Template;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header},
    transport::smtp::authentication::Credentials,
};
use portfolio_shared::{EmailPayload, EmailSender};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct SmtpConfig {
    #[validate(length(min = 1))]
    pub smtp_host: String,
    #[validate(range(min = 1))]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[validate(email)]
    pub from_address: String,
    #[validate(email)]
    pub contact_address: String,
}

#[derive(Template)]
#[template(path = "contact-message.txt")]
pub struct ContactMessagePlainTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

impl<'a> From<&'a EmailPayload> for ContactMessagePlainTemplate<'a> {
    fn from(payload: &'a EmailPayload) -> Self {
        Self {
            name: &payload.name,
            email: &payload.email,
            phone: &payload.phone,
            subject: &payload.subject,
            message: &payload.message,
        }
    }
}

/// Delivers contact messages to the site owner's inbox
#[derive(Clone)]
pub struct SmtpSender {
    mailer: SmtpTransport,
    from: String,
    to: String,
}

impl SmtpSender {
    /// Create a new SMTP sender from configuration
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "SMTP sender initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
            to: config.contact_address.clone(),
        })
    }

    /// Replies go to the visitor when their address is a valid mailbox. The
    /// form accepts some addresses lettre does not, those are sent without
    /// a Reply-To header.
    pub fn build_message(&self, payload: &EmailPayload) -> anyhow::Result<Message> {
        let plain = ContactMessagePlainTemplate::from(payload).render()?;

        let mut builder = Message::builder()
            .from(self.from.parse()?)
            .to(self.to.parse()?)
            .subject(format!("New message from contact page: {}", payload.subject))
            .header(header::ContentType::TEXT_PLAIN);

        match payload.email.parse::<Mailbox>() {
            Ok(reply_to) => builder = builder.reply_to(reply_to),
            Err(e) => tracing::warn!(
                error = %e,
                email = %payload.email,
                "Visitor email is not a valid mailbox, sending without Reply-To"
            ),
        }

        Ok(builder.body(plain)?)
    }
}

#[async_trait::async_trait]
impl EmailSender for SmtpSender {
    async fn send(&self, payload: &EmailPayload) -> anyhow::Result<()> {
        tracing::info!(to = %self.to, subject = %payload.subject, "Sending email text plain");

        let message = self.build_message(payload)?;
        let mailer = self.mailer.clone();

        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}
