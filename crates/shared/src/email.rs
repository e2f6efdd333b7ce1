use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Parameters handed to the email-delivery API for one contact message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Opaque delivery collaborator. Resolves exactly once, either `Ok` or `Err`.
///
/// Credentials (service id, template id, auth key) are static configuration
/// owned by the implementation and forwarded unchanged.
#[async_trait::async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, payload: &EmailPayload) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
impl<T: EmailSender + ?Sized> EmailSender for Arc<T> {
    async fn send(&self, payload: &EmailPayload) -> anyhow::Result<()> {
        (**self).send(payload).await
    }
}

#[async_trait::async_trait]
impl<T: EmailSender + ?Sized> EmailSender for Box<T> {
    async fn send(&self, payload: &EmailPayload) -> anyhow::Result<()> {
        (**self).send(payload).await
    }
}
