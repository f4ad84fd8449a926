//! Registered user model.
//!
//! # Responsibility
//! - Hold contact channels captured at registration.
//! - Own the subscription collection in registration order.
//!
//! # Invariants
//! - Contact info is immutable after registration.
//! - Subscriptions are append-only; nothing ever removes one.
//! - `subscriptions()` hands out owned copies; callers cannot reach the
//!   live collection through it.

use crate::model::subscription::{Subscription, SubscriptionInfo};
use serde::{Deserialize, Serialize};

/// Contact channels a notification can be routed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

/// One registered user with an append-only subscription list.
#[derive(Debug)]
pub struct User {
    name: String,
    contact: ContactInfo,
    subscriptions: Vec<Subscription>,
}

impl User {
    /// Registers a user with fixed contact channels.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contact: ContactInfo {
                email: email.into(),
                phone: phone.into(),
            },
            subscriptions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    /// Appends a subscription; registration order is preserved.
    pub fn add_subscription(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Returns descriptive copies of all subscriptions.
    ///
    /// The returned Vec is a snapshot: mutating it has no effect on the
    /// user's live collection or on later calls.
    pub fn subscriptions(&self) -> Vec<SubscriptionInfo> {
        self.subscriptions.iter().map(Subscription::info).collect()
    }

    /// Mutable access for check loops; iteration order is registration order.
    pub fn subscriptions_mut(&mut self) -> &mut [Subscription] {
        &mut self.subscriptions
    }
}
