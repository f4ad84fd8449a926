//! Notifier contracts and shipped channels.
//!
//! # Responsibility
//! - Turn a change event into one rendered notification per channel.
//! - Build a subscription's notifier set from the user's contact info.
//!
//! # Invariants
//! - Delivery is infallible: channels render a record, they do not talk to
//!   real gateways. A production gateway adapter would replace the channel
//!   implementations, not this contract.
//! - Notifiers are stateless beyond the recipient captured at construction.

use crate::model::event::{ChangeEvent, Delivery};
use crate::model::user::ContactInfo;
use serde::{Deserialize, Serialize};

/// Delivery route for one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyChannel {
    Email,
    Sms,
}

/// A delivery channel turning change events into rendered notifications.
pub trait Notifier {
    fn channel(&self) -> NotifyChannel;

    /// Recipient address or number this notifier was built for.
    fn recipient(&self) -> &str;

    /// Renders one notification for `event`.
    fn deliver(&self, event: &ChangeEvent) -> Delivery;
}

/// Email channel bound to one address.
#[derive(Debug, Clone)]
pub struct EmailNotifier {
    email: String,
}

impl EmailNotifier {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl Notifier for EmailNotifier {
    fn channel(&self) -> NotifyChannel {
        NotifyChannel::Email
    }

    fn recipient(&self) -> &str {
        &self.email
    }

    fn deliver(&self, event: &ChangeEvent) -> Delivery {
        Delivery {
            channel: NotifyChannel::Email,
            recipient: self.email.clone(),
            line: format!(
                "[EMAIL to {}] Website '{}' update: {}",
                self.email, event.url, event.message
            ),
        }
    }
}

/// SMS channel bound to one phone number.
#[derive(Debug, Clone)]
pub struct SmsNotifier {
    phone: String,
}

impl SmsNotifier {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
        }
    }
}

impl Notifier for SmsNotifier {
    fn channel(&self) -> NotifyChannel {
        NotifyChannel::Sms
    }

    fn recipient(&self) -> &str {
        &self.phone
    }

    fn deliver(&self, event: &ChangeEvent) -> Delivery {
        Delivery {
            channel: NotifyChannel::Sms,
            recipient: self.phone.clone(),
            line: format!(
                "[SMS to {}] Website '{}' update: {}",
                self.phone, event.url, event.message
            ),
        }
    }
}

/// Channel selection taken during the subscribe flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyChoice {
    Email,
    Sms,
    Both,
}

impl NotifyChoice {
    /// Maps a 1-based menu choice; out-of-range values map to nothing,
    /// which leaves the subscription without notifiers.
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Email),
            2 => Some(Self::Sms),
            3 => Some(Self::Both),
            _ => None,
        }
    }

    /// Builds the notifier set for this choice from `contact`.
    pub fn build(self, contact: &ContactInfo) -> Vec<Box<dyn Notifier>> {
        let mut notifiers: Vec<Box<dyn Notifier>> = Vec::new();
        if matches!(self, Self::Email | Self::Both) {
            notifiers.push(Box::new(EmailNotifier::new(contact.email.clone())));
        }
        if matches!(self, Self::Sms | Self::Both) {
            notifiers.push(Box::new(SmsNotifier::new(contact.phone.clone())));
        }
        notifiers
    }
}
