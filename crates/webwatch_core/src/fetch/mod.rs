//! Content sources feeding the check loop.

pub mod simulated;

pub use simulated::SimulatedSource;

/// Supplies page content for subscribed URLs.
///
/// The check loop only ever talks to this trait, so a real HTTP fetcher can
/// replace the simulation without touching comparison or notification code.
pub trait ContentSource {
    /// Content captured when a subscription is created.
    fn initial_content(&mut self, url: &str) -> String;

    /// Candidate content for one check. `current` is the caller's cached
    /// snapshot; sources may return it unchanged.
    fn fetch(&mut self, url: &str, current: &str) -> String;
}
