//! Domain models: users, subscriptions, change events.

pub mod event;
pub mod subscription;
pub mod user;
