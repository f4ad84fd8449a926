//! Monitor use-case service.
//!
//! # Responsibility
//! - Own the registered user and the content source.
//! - Provide subscribe / check-all / list entry points for shells.
//!
//! # Invariants
//! - Checks run serially in registration order.
//! - "No change" is an observable signal (`report: None`), never only a
//!   printed side effect; presentation belongs to the caller.
//! - The service never removes subscriptions.

use crate::compare::StrategyKind;
use crate::fetch::ContentSource;
use crate::model::event::ChangeReport;
use crate::model::subscription::{Subscription, SubscriptionId, SubscriptionInfo};
use crate::model::user::User;
use crate::notify::NotifyChoice;
use log::info;

/// Subscribe-flow input as captured by an interactive shell.
///
/// Choices are raw 1-based menu positions; the service applies the
/// documented fallbacks itself so every shell gets identical behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeRequest {
    pub url: String,
    /// 1 = size, 2 = exact, 3 = text-only; anything else falls back to exact.
    pub strategy_choice: u32,
    /// 1 = email, 2 = SMS, 3 = both; anything else attaches no notifiers.
    pub notify_choice: u32,
}

/// Result of checking one subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub subscription_id: SubscriptionId,
    pub url: String,
    /// `Some` when a change was detected and notified, `None` otherwise.
    pub report: Option<ChangeReport>,
}

/// Application service wiring user, subscriptions and content source.
pub struct MonitorService<S: ContentSource> {
    user: User,
    source: S,
}

impl<S: ContentSource> MonitorService<S> {
    /// Registers the user; construction is registration.
    pub fn register(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        source: S,
    ) -> Self {
        let user = User::new(name, email, phone);
        info!(
            "event=user_registered module=service status=ok name={}",
            user.name()
        );
        Self { user, source }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Creates a subscription from raw menu input and appends it to the user.
    ///
    /// # Contract
    /// - Strategy choice falls back to exact comparison when out of range.
    /// - Notifier choice out of range attaches no notifiers, mirroring the
    ///   interactive flow this service was built for.
    /// - The initial snapshot is taken from the content source immediately.
    pub fn subscribe(&mut self, request: SubscribeRequest) -> SubscriptionInfo {
        let kind = StrategyKind::from_menu_choice(request.strategy_choice);
        let notifiers = match NotifyChoice::from_menu_choice(request.notify_choice) {
            Some(choice) => choice.build(self.user.contact()),
            None => Vec::new(),
        };
        let initial = self.source.initial_content(&request.url);
        let subscription = Subscription::new(request.url, kind.instantiate(), notifiers, initial);
        let receipt = subscription.info();

        info!(
            "event=subscription_created module=service status=ok id={} url={} strategy={:?} notifiers={}",
            receipt.id,
            receipt.url,
            kind,
            subscription.notifier_count()
        );
        self.user.add_subscription(subscription);
        receipt
    }

    /// Checks every subscription once, in registration order.
    ///
    /// Never fails: each row carries either a change report or `None`.
    pub fn check_all(&mut self) -> Vec<CheckOutcome> {
        let mut outcomes = Vec::with_capacity(self.user.subscription_count());
        for subscription in self.user.subscriptions_mut() {
            let report = subscription.check_once(&mut self.source);
            match &report {
                Some(change) => info!(
                    "event=check_performed module=service status=changed id={} url={} deliveries={}",
                    subscription.id(),
                    subscription.url(),
                    change.deliveries.len()
                ),
                None => info!(
                    "event=check_performed module=service status=unchanged id={} url={}",
                    subscription.id(),
                    subscription.url()
                ),
            }
            outcomes.push(CheckOutcome {
                subscription_id: subscription.id(),
                url: subscription.url().to_string(),
                report,
            });
        }
        outcomes
    }

    /// Returns descriptive copies of the user's subscriptions.
    pub fn subscriptions(&self) -> Vec<SubscriptionInfo> {
        self.user.subscriptions()
    }
}

#[cfg(test)]
mod tests {
    use super::{MonitorService, SubscribeRequest};
    use crate::fetch::ContentSource;
    use crate::notify::NotifyChannel;

    /// Source that always reports fresh content.
    struct AlwaysChanged {
        counter: u64,
    }

    impl ContentSource for AlwaysChanged {
        fn initial_content(&mut self, _url: &str) -> String {
            "seed".to_string()
        }

        fn fetch(&mut self, _url: &str, _current: &str) -> String {
            self.counter += 1;
            format!("fresh {}", self.counter)
        }
    }

    /// Source that always returns the cached snapshot.
    struct NeverChanged;

    impl ContentSource for NeverChanged {
        fn initial_content(&mut self, _url: &str) -> String {
            "seed".to_string()
        }

        fn fetch(&mut self, _url: &str, current: &str) -> String {
            current.to_string()
        }
    }

    fn request(url: &str, strategy: u32, notify: u32) -> SubscribeRequest {
        SubscribeRequest {
            url: url.to_string(),
            strategy_choice: strategy,
            notify_choice: notify,
        }
    }

    #[test]
    fn subscribe_applies_strategy_fallback_and_builds_notifiers() {
        let mut service =
            MonitorService::register("A", "a@x.com", "555", AlwaysChanged { counter: 0 });

        let receipt = service.subscribe(request("http://e.com", 9, 3));
        assert_eq!(receipt.strategy, "Exact HTML content comparison");
        assert_eq!(service.subscriptions().len(), 1);

        let outcomes = service.check_all();
        let report = outcomes[0].report.as_ref().expect("content always changes");
        assert_eq!(report.deliveries.len(), 2);
        assert_eq!(report.deliveries[0].channel, NotifyChannel::Email);
        assert_eq!(report.deliveries[1].channel, NotifyChannel::Sms);
    }

    #[test]
    fn invalid_notifier_choice_attaches_nothing() {
        let mut service =
            MonitorService::register("A", "a@x.com", "555", AlwaysChanged { counter: 0 });
        service.subscribe(request("http://e.com", 2, 42));

        let outcomes = service.check_all();
        let report = outcomes[0].report.as_ref().expect("content always changes");
        assert!(report.deliveries.is_empty());
    }

    #[test]
    fn check_all_reports_unchanged_rows_without_reports() {
        let mut service = MonitorService::register("A", "a@x.com", "555", NeverChanged);
        service.subscribe(request("http://one.example", 2, 1));
        service.subscribe(request("http://two.example", 1, 2));

        let outcomes = service.check_all();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].url, "http://one.example");
        assert_eq!(outcomes[1].url, "http://two.example");
        assert!(outcomes.iter().all(|outcome| outcome.report.is_none()));
    }

    #[test]
    fn check_all_preserves_registration_order() {
        let mut service =
            MonitorService::register("A", "a@x.com", "555", AlwaysChanged { counter: 0 });
        let first = service.subscribe(request("http://one.example", 2, 1));
        let second = service.subscribe(request("http://two.example", 2, 1));

        let outcomes = service.check_all();
        assert_eq!(outcomes[0].subscription_id, first.id);
        assert_eq!(outcomes[1].subscription_id, second.id);
    }
}
