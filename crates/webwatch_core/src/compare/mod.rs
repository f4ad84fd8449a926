//! Content comparison policies.

pub mod strategy;

pub use strategy::{ComparisonStrategy, ExactCompare, SizeCompare, StrategyKind, TextOnlyCompare};
