//! Free-running time base shared between the tick interrupt and the loop.

use core::sync::atomic::{AtomicU32, Ordering};

/// Frequency in which `Ticker::tick` is expected to be called.
pub const TICK_RATE_HZ: u32 = 25_000;

/// Monotonic tick counter.
///
/// The counter is meant to be incremented from a fixed-rate interrupt and
/// read from the control loop. Both operations are single atomic accesses,
/// so a reader never observes a half-written value. The counter wraps on
/// overflow; durations must be derived through `elapsed`.
#[derive(Debug, Default)]
pub struct Ticker {
    count: AtomicU32,
}

impl Ticker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: AtomicU32::new(0),
        }
    }

    #[must_use]
    pub const fn starting_at(count: u32) -> Self {
        Self {
            count: AtomicU32::new(count),
        }
    }

    pub fn tick(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn now(&self) -> u32 {
        self.count.load(Ordering::Relaxed)
    }
}

/// Number of ticks passed between `since` and `now`, across wraparound.
#[must_use]
pub fn elapsed(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
