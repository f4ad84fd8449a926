//! Change event and delivery records.
//!
//! # Responsibility
//! - Carry the fact that a subscription's content changed.
//! - Keep the notification signal separate from its console presentation:
//!   the core produces records, callers decide what to print.

use crate::model::subscription::SubscriptionId;
use crate::notify::NotifyChannel;
use serde::{Deserialize, Serialize};

/// The fact that a subscription's content changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Stable ID of the subscription that changed.
    pub subscription_id: SubscriptionId,
    /// Monitored URL.
    pub url: String,
    /// Strategy-derived description of the detection.
    pub message: String,
}

/// One rendered notification produced for a change event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// Channel the notification was routed through.
    pub channel: NotifyChannel,
    /// Recipient address or number captured at subscription time.
    pub recipient: String,
    /// Fully rendered notification line.
    pub line: String,
}

/// Outcome of one detected change: the event plus every delivery made for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeReport {
    pub event: ChangeEvent,
    pub deliveries: Vec<Delivery>,
}
