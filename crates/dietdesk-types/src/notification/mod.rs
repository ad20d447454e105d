mod display;
mod kind;
mod raw;

pub use display::Notification;
pub use kind::NotificationKind;
pub use raw::{NotificationEnvelope, RawNotification};
