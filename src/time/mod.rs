//! Time sources
//!
//! Everything the pacer knows about wall-clock time comes through the
//! [`TimeSource`] trait. Three implementations are provided:
//!
//! - [`Clock`] over a high-resolution [`PerformanceCounter`]
//! - [`Clock`] in degraded mode over a [`MillisecondCounter`], used when the
//!   platform reports no high-resolution timer
//! - [`HostClock`], the wall clock an embedding host exposes
//!
//! All of them report fractional seconds that never decrease between reads.

mod clock;
mod counter;
mod host_clock;

pub use clock::{Clock, JITTER_THRESHOLD, PLATEAU_ADVANCE, PLATEAU_LIMIT, frequency_shift};
pub use counter::{
    MillisecondCounter, MonotonicCounter, MonotonicMillis, PerformanceCounter, UnavailableCounter,
};
pub use host_clock::HostClock;

#[cfg(test)]
pub(crate) use counter::ManualCounter;

/// A monotonic source of elapsed seconds
pub trait TimeSource {
    /// Sample the source and return the elapsed time in seconds.
    ///
    /// Successive calls never return a smaller value.
    fn now(&mut self) -> f64;

    /// Whether the source is running on a coarse fallback timer
    fn is_degraded(&self) -> bool {
        false
    }
}
