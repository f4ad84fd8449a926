//! Notification channels and recipient routing.

pub mod channel;

pub use channel::{EmailNotifier, Notifier, NotifyChannel, NotifyChoice, SmsNotifier};
