//! Process-wide command sequence counter.

use std::sync::atomic::{AtomicU32, Ordering};

/// Monotonic sequence number prefixed to every command.
///
/// Each call to [`next`](Self::next) hands out a distinct value, even under
/// concurrent callers. Values wrap at `u32::MAX`. The hub does not read
/// them back, so ordering between concurrently sent datagrams is still
/// decided by the network.
#[derive(Debug, Default)]
pub struct SequenceCounter(AtomicU32);

impl SequenceCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `value` instead of zero.
    #[must_use]
    pub fn starting_at(value: u32) -> Self {
        Self(AtomicU32::new(value))
    }

    /// Take the current value and advance the counter.
    pub fn next(&self) -> u32 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }

    /// The value the next call to [`next`](Self::next) will return.
    #[must_use]
    pub fn peek(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }
}
