//! Stale-fetch protection for screen-level callers.
//!
//! Each screen owns a [`RefreshGate`]; a fetch grabs a [`Generation`]
//! before awaiting and applies its result only if the generation is
//! still current. Unmounting or starting a newer refresh invalidates
//! older generations, so late results are discarded instead of being
//! applied to stale UI state.

use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Monotonic generation counter.
#[derive(Debug, Default)]
pub struct RefreshGate {
    current: AtomicU64,
}

impl RefreshGate {
    /// Creates a gate with no outstanding fetches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new fetch, invalidating all earlier generations.
    pub fn begin(&self) -> Generation {
        Generation(self.current.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Returns true if the generation's result may still be applied.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.current.load(Ordering::Acquire) == generation.0
    }

    /// Invalidates every outstanding generation (e.g., on unmount).
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_generation_is_current() {
        let gate = RefreshGate::new();
        let generation = gate.begin();
        assert!(gate.is_current(generation));
    }

    #[test]
    fn newer_fetch_invalidates_older_generation() {
        let gate = RefreshGate::new();
        let first = gate.begin();
        let second = gate.begin();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn invalidate_discards_all_outstanding_fetches() {
        let gate = RefreshGate::new();
        let generation = gate.begin();
        gate.invalidate();
        assert!(!gate.is_current(generation));
    }
}
