//! One-shot reveal bookkeeping and the animations the revealers drive.
//!
//! An element moves from unrevealed to revealed exactly once. Skill bars fill
//! to a parsed percentage; counters step from zero to an integer target.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;
use std::hash::Hash;

/// Monotonic set of revealed keys.
#[derive(Clone, Debug)]
pub struct RevealTracker<K> {
    revealed: HashSet<K>,
}

impl<K> Default for RevealTracker<K> {
    fn default() -> Self {
        Self { revealed: HashSet::new() }
    }
}

impl<K: Eq + Hash> RevealTracker<K> {
    /// Mark `key` revealed. Returns `true` only the first time.
    pub fn reveal(&mut self, key: K) -> bool {
        self.revealed.insert(key)
    }
}

/// Target fill of a skill bar, in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillLevel(u8);

impl SkillLevel {
    /// Parse a `data-skill` value. Values above 100 clamp to 100.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim().trim_end_matches('%').parse::<u32>().ok()?;
        Some(Self(u8::try_from(value.min(100)).unwrap_or(100)))
    }

    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    /// CSS width value, e.g. `85%`.
    #[must_use]
    pub fn width(self) -> String {
        format!("{}%", self.0)
    }
}

/// Parse a counter's `data-target` value.
#[must_use]
pub fn parse_counter_target(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}

/// Displayed value for one counter step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub done: bool,
}

/// Discrete count-up from zero to `target`.
///
/// Step `k` of `steps` shows `floor(target * k / steps)`; the final step shows
/// `target` exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u64,
    steps: u32,
    step: u32,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: u64, steps: u32) -> Self {
        Self { target, steps: steps.max(1), step: 0 }
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.step >= self.steps
    }

    /// Advance one step. Returns `None` once the final frame was produced.
    pub fn tick(&mut self) -> Option<CounterFrame> {
        if self.is_done() {
            return None;
        }
        self.step += 1;
        let done = self.step >= self.steps;
        let value = if done {
            self.target
        } else {
            let scaled = u128::from(self.target) * u128::from(self.step) / u128::from(self.steps);
            u64::try_from(scaled).unwrap_or(self.target)
        };
        Some(CounterFrame { value, done })
    }
}

impl Iterator for CounterAnimation {
    type Item = CounterFrame;

    fn next(&mut self) -> Option<Self::Item> {
        self.tick()
    }
}
