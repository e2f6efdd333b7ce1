mod error;
pub mod email;
pub mod notification;

pub use error::*;
pub use email::{EmailPayload, EmailSender};
pub use notification::{NotificationKind, Notifier};
