use portfolio_shared::{EmailSender, Notifier};
use strum::{AsRefStr, Display};
use tokio::sync::Mutex;

use crate::{FieldName, FormErrors, FormState, FormValues};

pub const REJECTED_MESSAGE: &str = "Please fill all the fields in the form";
pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Sending,
}

/// How a single `submit()` call ended. Every variant leaves the controller idle.
#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed, nothing was sent.
    Rejected,
    Sent,
    /// The sender reported a failure; the form is left as it was.
    SendFailed,
    /// Another submission was still in flight.
    AlreadySending,
}

/// Owns the form and drives validate -> send -> reset/notify.
pub struct SubmissionController<S, N> {
    form: Mutex<FormState>,
    in_flight: Mutex<()>,
    sender: S,
    notifier: N,
}

impl<S: EmailSender, N: Notifier> SubmissionController<S, N> {
    pub fn new(sender: S, notifier: N) -> Self {
        Self::with_form(FormState::new(), sender, notifier)
    }

    pub fn with_form(form: FormState, sender: S, notifier: N) -> Self {
        Self {
            form: Mutex::new(form),
            in_flight: Mutex::new(()),
            sender,
            notifier,
        }
    }

    /// `Sending` from the moment `submit()` takes the in-flight guard, which
    /// includes the validation pass that precedes the send.
    pub fn state(&self) -> SubmissionState {
        match self.in_flight.try_lock() {
            Ok(_) => SubmissionState::Idle,
            Err(_) => SubmissionState::Sending,
        }
    }

    pub async fn set_field(&self, field: FieldName, value: impl Into<String>) {
        self.form.lock().await.set_field(field, value);
    }

    pub async fn validate_all(&self) -> bool {
        self.form.lock().await.validate_all()
    }

    pub async fn values(&self) -> FormValues {
        self.form.lock().await.values().clone()
    }

    pub async fn errors(&self) -> FormErrors {
        self.form.lock().await.errors().clone()
    }

    pub async fn snapshot(&self) -> FormState {
        self.form.lock().await.clone()
    }

    /// Validates the whole form and, when valid, sends it exactly once.
    ///
    /// The form lock is released while the sender is awaited, so edits made
    /// during that time are kept on failure and discarded by the reset on
    /// success.
    #[tracing::instrument(skip_all)]
    pub async fn submit(&self) -> SubmitOutcome {
        let Ok(_in_flight) = self.in_flight.try_lock() else {
            tracing::warn!("Contact form submission already in progress, ignoring");
            return SubmitOutcome::AlreadySending;
        };

        let payload = {
            let mut form = self.form.lock().await;
            if !form.validate_all() {
                self.notifier.error(REJECTED_MESSAGE);
                return SubmitOutcome::Rejected;
            }

            form.payload()
        };

        tracing::info!(
            email = %payload.email,
            subject = %payload.subject,
            "Sending contact form message"
        );

        match self.sender.send(&payload).await {
            Ok(()) => {
                tracing::info!(email = %payload.email, "Contact form message sent");
                self.notifier.success(SENT_MESSAGE);
                self.form.lock().await.reset();

                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::error!(error = %e, email = %payload.email, "Failed to send contact form message");
                self.notifier.error(SEND_FAILED_MESSAGE);

                SubmitOutcome::SendFailed
            }
        }
    }
}
