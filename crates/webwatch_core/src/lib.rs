//! Core domain logic for WebWatch.
//! This crate is the single source of truth for monitoring invariants.

pub mod compare;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod notify;
pub mod service;

pub use compare::{ComparisonStrategy, ExactCompare, SizeCompare, StrategyKind, TextOnlyCompare};
pub use fetch::{ContentSource, SimulatedSource};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{ChangeEvent, ChangeReport, Delivery};
pub use model::subscription::{Subscription, SubscriptionId, SubscriptionInfo};
pub use model::user::{ContactInfo, User};
pub use notify::{EmailNotifier, Notifier, NotifyChannel, NotifyChoice, SmsNotifier};
pub use service::monitor_service::{CheckOutcome, MonitorService, SubscribeRequest};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
