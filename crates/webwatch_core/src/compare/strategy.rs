//! Comparison strategy contracts and implementations.
//!
//! # Responsibility
//! - Decide whether two content snapshots differ.
//! - Map interactive menu choices to concrete strategies.
//!
//! # Invariants
//! - Strategies are pure functions over two strings; they never fail.
//! - `TextOnlyCompare` keeps its naive tag stripping: it is not an HTML
//!   parser and must not become one. Malformed or nested markup can produce
//!   false positives, which is a documented limitation of the policy.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Pluggable policy deciding whether a snapshot changed.
pub trait ComparisonStrategy {
    /// Returns `true` when `old` and `new` should be treated as different.
    fn changed(&self, old: &str, new: &str) -> bool;

    /// Human-readable policy name, used for display and audit lines.
    fn describe(&self) -> &'static str;
}

/// Closed set of shipped strategies, keyed by interactive menu position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Compare content lengths only.
    Size,
    /// Compare raw content byte-for-byte.
    Exact,
    /// Strip tag-like markup, then compare the remaining text.
    TextOnly,
}

impl StrategyKind {
    /// Maps a 1-based menu choice to a strategy kind.
    ///
    /// Out-of-range values fall back to `Exact`, matching the interactive
    /// shell's documented default.
    pub fn from_menu_choice(choice: u32) -> Self {
        match choice {
            1 => Self::Size,
            3 => Self::TextOnly,
            _ => Self::Exact,
        }
    }

    /// Builds the strategy implementation for this kind.
    pub fn instantiate(self) -> Box<dyn ComparisonStrategy> {
        match self {
            Self::Size => Box::new(SizeCompare),
            Self::Exact => Box::new(ExactCompare),
            Self::TextOnly => Box::new(TextOnlyCompare),
        }
    }

    /// Returns the same name the built strategy reports via `describe`.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Size => "Content size comparison",
            Self::Exact => "Exact HTML content comparison",
            Self::TextOnly => "Extracted text content comparison",
        }
    }
}

/// Flags a change when content lengths differ.
///
/// Rearranged content of equal length is reported as unchanged. That is a
/// known limitation of the policy, not a bug.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeCompare;

impl ComparisonStrategy for SizeCompare {
    fn changed(&self, old: &str, new: &str) -> bool {
        old.len() != new.len()
    }

    fn describe(&self) -> &'static str {
        StrategyKind::Size.describe()
    }
}

/// Flags a change on any byte-level difference.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactCompare;

impl ComparisonStrategy for ExactCompare {
    fn changed(&self, old: &str, new: &str) -> bool {
        old != new
    }

    fn describe(&self) -> &'static str {
        StrategyKind::Exact.describe()
    }
}

/// Strips tag-like substrings, trims, then compares the remaining text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOnlyCompare;

impl ComparisonStrategy for TextOnlyCompare {
    fn changed(&self, old: &str, new: &str) -> bool {
        extract_text(old) != extract_text(new)
    }

    fn describe(&self) -> &'static str {
        StrategyKind::TextOnly.describe()
    }
}

fn extract_text(content: &str) -> String {
    TAG_RE.replace_all(content, "").trim().to_string()
}
