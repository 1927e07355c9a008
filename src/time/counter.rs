//! Raw counters sampled by the clock

use std::time::Instant;

/// A high-resolution tick counter
pub trait PerformanceCounter {
    /// Ticks per second, or `None` when the platform has no high-resolution timer
    fn frequency(&self) -> Option<u64>;

    /// Current raw tick count
    fn ticks(&self) -> u64;
}

/// A coarse 32-bit millisecond counter that wraps around
pub trait MillisecondCounter {
    /// Current millisecond count
    fn millis(&self) -> u32;
}

/// Nanosecond counter backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicCounter {
    origin: Instant,
}

impl MonotonicCounter {
    /// Create a counter starting at zero now
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceCounter for MonotonicCounter {
    fn frequency(&self) -> Option<u64> {
        Some(1_000_000_000)
    }

    fn ticks(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}

/// Millisecond counter backed by [`Instant`], truncated to 32 bits
#[derive(Debug, Clone, Copy)]
pub struct MonotonicMillis {
    origin: Instant,
}

impl MonotonicMillis {
    /// Create a counter starting at zero now
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicMillis {
    fn default() -> Self {
        Self::new()
    }
}

impl MillisecondCounter for MonotonicMillis {
    fn millis(&self) -> u32 {
        self.origin.elapsed().as_millis() as u32
    }
}

/// A performance counter that is never available.
///
/// Forces [`Clock`](super::Clock) onto its millisecond fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableCounter;

impl PerformanceCounter for UnavailableCounter {
    fn frequency(&self) -> Option<u64> {
        None
    }

    fn ticks(&self) -> u64 {
        0
    }
}

/// Hand-driven counter for tests. Clones share the same tick value.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ManualCounter {
    ticks: std::rc::Rc<std::cell::Cell<u64>>,
    frequency: Option<u64>,
}

#[cfg(test)]
impl ManualCounter {
    pub(crate) fn new(frequency: Option<u64>) -> Self {
        Self {
            ticks: std::rc::Rc::default(),
            frequency,
        }
    }

    pub(crate) fn set(&self, ticks: u64) {
        self.ticks.set(ticks);
    }

    pub(crate) fn advance(&self, ticks: u64) {
        self.ticks.set(self.ticks.get().wrapping_add(ticks));
    }
}

#[cfg(test)]
impl PerformanceCounter for ManualCounter {
    fn frequency(&self) -> Option<u64> {
        self.frequency
    }

    fn ticks(&self) -> u64 {
        self.ticks.get()
    }
}

#[cfg(test)]
impl MillisecondCounter for ManualCounter {
    fn millis(&self) -> u32 {
        self.ticks.get() as u32
    }
}
