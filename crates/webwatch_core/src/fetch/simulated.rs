//! Coin-flip content simulation.
//!
//! # Responsibility
//! - Stand in for a real fetcher: half the time the cached snapshot comes
//!   back unchanged, half the time a synthetic updated body appears.
//!
//! # Invariants
//! - A given seed always replays the same change/no-change sequence.
//! - Synthetic bodies are pairwise distinct within one source instance.

use crate::fetch::ContentSource;
use std::time::{SystemTime, UNIX_EPOCH};

const INITIAL_CONTENT: &str = "<html><body>Initial content</body></html>";
const FALLBACK_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Simulated content source with a deterministic, seedable coin flip.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    state: u64,
    ticks: u64,
}

impl SimulatedSource {
    /// Creates a source seeded from wall-clock entropy.
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(FALLBACK_SEED)
            ^ u64::from(std::process::id());
        Self::with_seed(seed)
    }

    /// Creates a source with a fixed seed; the fetch sequence is then
    /// fully deterministic, which tests rely on.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            // xorshift state must never be zero.
            state: if seed == 0 { FALLBACK_SEED } else { seed },
            ticks: 0,
        }
    }

    // xorshift64* step.
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    // The multiplier only mixes upward, so the top bit is the trustworthy
    // one; the raw low bits of the state are visibly patterned.
    fn coin_flip(&mut self) -> bool {
        self.next_u64() >> 63 == 0
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSource for SimulatedSource {
    fn initial_content(&mut self, _url: &str) -> String {
        INITIAL_CONTENT.to_string()
    }

    fn fetch(&mut self, _url: &str, current: &str) -> String {
        self.ticks += 1;
        if self.coin_flip() {
            format!("<html><body>Updated content {}</body></html>", self.ticks)
        } else {
            current.to_string()
        }
    }
}
