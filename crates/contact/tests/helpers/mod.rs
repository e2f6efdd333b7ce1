use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use portfolio_contact::{FieldName, SubmissionController};
use portfolio_shared::{EmailPayload, EmailSender, NotificationKind, Notifier};
use tokio::sync::Notify;

#[derive(Default)]
pub struct RecordingSender {
    pub calls: Mutex<Vec<EmailPayload>>,
    fail: AtomicBool,
    gated: bool,
    started: Notify,
    release: Notify,
}

#[allow(dead_code)]
impl RecordingSender {
    pub fn failing() -> Self {
        let sender = Self::default();
        sender.fail.store(true, Ordering::SeqCst);
        sender
    }

    /// Every `send` waits for [`RecordingSender::release`] before resolving.
    pub fn gated() -> Self {
        Self {
            gated: true,
            ..Default::default()
        }
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }

    pub fn calls(&self) -> Vec<EmailPayload> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, payload: &EmailPayload) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(payload.clone());
        self.started.notify_one();

        if self.gated {
            self.release.notified().await;
        }

        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("delivery service unavailable");
        }

        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notifications: Mutex<Vec<(NotificationKind, String)>>,
}

#[allow(dead_code)]
impl RecordingNotifier {
    pub fn all(&self) -> Vec<(NotificationKind, String)> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn count(&self, kind: NotificationKind) -> usize {
        self.all().iter().filter(|(k, _)| *k == kind).count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.notifications
            .lock()
            .unwrap()
            .push((kind, message.to_owned()));
    }
}

pub type Controller = SubmissionController<Arc<RecordingSender>, Arc<RecordingNotifier>>;

#[allow(dead_code)]
pub fn setup(sender: RecordingSender) -> (Controller, Arc<RecordingSender>, Arc<RecordingNotifier>) {
    let sender = Arc::new(sender);
    let notifier = Arc::new(RecordingNotifier::default());
    let controller = SubmissionController::new(sender.clone(), notifier.clone());

    (controller, sender, notifier)
}

#[allow(dead_code)]
pub async fn fill(controller: &Controller, values: [(FieldName, &str); 5]) {
    for (field, value) in values {
        controller.set_field(field, value).await;
    }
}

#[allow(dead_code)]
pub fn ada() -> [(FieldName, &'static str); 5] {
    [
        (FieldName::FullName, "Ada Lovelace"),
        (FieldName::Email, "ada@x.com"),
        (FieldName::PhoneNumber, ""),
        (FieldName::Subject, "Project Inquiry"),
        (FieldName::Message, "Let's build something."),
    ]
}
