//! Subscription model and single-check algorithm.
//!
//! # Responsibility
//! - Bind a URL, a comparison strategy, a notifier set and the last-known
//!   content snapshot.
//! - Drive one check against a pluggable content source.
//!
//! # Invariants
//! - `snapshot` always equals the content last reported as current; a check
//!   either replaces it wholesale or leaves it untouched.
//! - The notifier set is fixed at creation and never mutated afterwards.
//! - `check_once` never fails; it reports a change or nothing.

use crate::compare::ComparisonStrategy;
use crate::fetch::ContentSource;
use crate::model::event::{ChangeEvent, ChangeReport};
use crate::notify::Notifier;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use uuid::Uuid;

/// Stable identifier for a subscription.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type SubscriptionId = Uuid;

/// Cloneable descriptive record for listing and receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionInfo {
    pub id: SubscriptionId,
    pub url: String,
    /// Strategy name as reported by `ComparisonStrategy::describe`.
    pub strategy: String,
}

/// One monitored URL with its policy, notifiers and cached content.
pub struct Subscription {
    id: SubscriptionId,
    url: String,
    strategy: Box<dyn ComparisonStrategy>,
    notifiers: Vec<Box<dyn Notifier>>,
    snapshot: String,
}

impl Subscription {
    /// Creates a subscription around an already-fetched initial snapshot.
    pub fn new(
        url: impl Into<String>,
        strategy: Box<dyn ComparisonStrategy>,
        notifiers: Vec<Box<dyn Notifier>>,
        initial_snapshot: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
            strategy,
            notifiers,
            snapshot: initial_snapshot,
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Strategy name for display and audit lines.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.describe()
    }

    /// Last-known content for this URL.
    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }

    pub fn notifier_count(&self) -> usize {
        self.notifiers.len()
    }

    /// Returns an owned descriptive record.
    pub fn info(&self) -> SubscriptionInfo {
        SubscriptionInfo {
            id: self.id,
            url: self.url.clone(),
            strategy: self.strategy.describe().to_string(),
        }
    }

    /// Runs one check against `source`.
    ///
    /// # Contract
    /// - Fetches a candidate snapshot, asks the bound strategy whether it
    ///   differs from the cached one.
    /// - On change: replaces the cached snapshot, notifies every attached
    ///   channel, returns the report.
    /// - On no change: returns `None` and leaves the snapshot untouched.
    ///   Presentation of "no update" is the caller's concern.
    pub fn check_once(&mut self, source: &mut dyn ContentSource) -> Option<ChangeReport> {
        let candidate = source.fetch(&self.url, &self.snapshot);
        if !self.strategy.changed(&self.snapshot, &candidate) {
            return None;
        }

        self.snapshot = candidate;
        let event = ChangeEvent {
            subscription_id: self.id,
            url: self.url.clone(),
            message: format!(
                "Change detected using strategy: {}",
                self.strategy.describe()
            ),
        };
        let deliveries = self
            .notifiers
            .iter()
            .map(|notifier| notifier.deliver(&event))
            .collect();

        Some(ChangeReport { event, deliveries })
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("strategy", &self.strategy.describe())
            .field("notifiers", &self.notifiers.len())
            .field("snapshot_len", &self.snapshot.len())
            .finish()
    }
}
