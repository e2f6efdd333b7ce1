use portfolio_shared::{NotificationKind, Notifier};

/// Prints notifications the way a toast would show them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        tracing::debug!(kind = %kind, text = message, "Notification");

        match kind {
            NotificationKind::Success => println!("✓ {message}"),
            NotificationKind::Error => eprintln!("✗ {message}"),
        }
    }
}
