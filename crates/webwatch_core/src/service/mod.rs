//! Use-case services over the domain models.

pub mod monitor_service;

pub use monitor_service::{CheckOutcome, MonitorService, SubscribeRequest};
