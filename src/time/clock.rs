//! High-resolution clock with a millisecond fallback

use std::fmt;

use super::TimeSource;
use super::counter::{MillisecondCounter, MonotonicCounter, MonotonicMillis, PerformanceCounter};

/// Largest tick frequency kept after shifting (about 2 ticks per microsecond)
const MAX_SHIFTED_FREQUENCY: u64 = 2_000_000;

/// Backward steps smaller than this are jitter rather than a wrap
pub const JITTER_THRESHOLD: u32 = 0x1000_0000;

/// Consecutive identical readings tolerated before time is forced forward
pub const PLATEAU_LIMIT: u32 = 100_000;

/// Seconds added when the plateau limit is exceeded
pub const PLATEAU_ADVANCE: f64 = 1.0;

/// Number of bits to drop from a counter running at `frequency` ticks per second
/// so that a 32-bit sample keeps roughly microsecond resolution.
pub fn frequency_shift(frequency: u64) -> u32 {
    let mut shift = 0;
    while (frequency >> shift) > MAX_SHIFTED_FREQUENCY {
        shift += 1;
    }
    shift
}

fn sample(ticks: u64, shift: u32) -> u32 {
    (ticks >> shift) as u32
}

enum Source {
    Precision {
        counter: Box<dyn PerformanceCounter>,
        shift: u32,
        /// Seconds per shifted tick
        scale: f64,
        last_sample: u32,
    },
    Fallback {
        counter: Box<dyn MillisecondCounter>,
        last_millis: u32,
        /// Milliseconds accumulated since initialization
        elapsed_ms: u64,
    },
}

/// Process clock reporting non-decreasing elapsed seconds.
///
/// Built once at startup with [`Clock::initialize`]. When the performance
/// counter reports no frequency the clock runs in degraded mode on the
/// millisecond counter instead.
pub struct Clock {
    source: Source,
    /// Accumulated seconds
    current: f64,
    /// Value returned by the previous call
    last_reported: f64,
    /// Consecutive calls that reported the same value
    same_count: u32,
}

impl Clock {
    /// Pick a counter and take the baseline sample
    pub fn initialize<P, M>(performance: P, fallback: M) -> Self
    where
        P: PerformanceCounter + 'static,
        M: MillisecondCounter + 'static,
    {
        let source = match performance.frequency().filter(|&f| f > 0) {
            Some(frequency) => {
                let shift = frequency_shift(frequency);
                let last_sample = sample(performance.ticks(), shift);
                log::debug!(
                    "high-resolution timer at {frequency} Hz, dropping {shift} low bits"
                );
                Source::Precision {
                    counter: Box::new(performance),
                    shift,
                    scale: 1.0 / (frequency >> shift) as f64,
                    last_sample,
                }
            }
            None => {
                log::warn!("no high-resolution timer available, using millisecond fallback");
                Source::Fallback {
                    last_millis: fallback.millis(),
                    elapsed_ms: 0,
                    counter: Box::new(fallback),
                }
            }
        };

        Self {
            source,
            current: 0.0,
            last_reported: 0.0,
            same_count: 0,
        }
    }

    /// Clock over the process's monotonic timer
    pub fn system() -> Self {
        Self::initialize(MonotonicCounter::new(), MonotonicMillis::new())
    }

    /// Whether the clock fell back to the millisecond counter
    pub fn is_degraded(&self) -> bool {
        matches!(self.source, Source::Fallback { .. })
    }

    /// Sample the counter and return accumulated seconds
    pub fn now(&mut self) -> f64 {
        let precise = match &mut self.source {
            Source::Precision {
                counter,
                shift,
                scale,
                last_sample,
            } => {
                let sample = sample(counter.ticks(), *shift);
                if sample <= *last_sample && *last_sample - sample < JITTER_THRESHOLD {
                    // Backward jitter: rebase and report no elapsed time.
                    *last_sample = sample;
                } else {
                    let delta = sample.wrapping_sub(*last_sample);
                    *last_sample = sample;
                    self.current += f64::from(delta) * *scale;
                }
                true
            }
            Source::Fallback {
                counter,
                last_millis,
                elapsed_ms,
            } => {
                // Accumulate per-read steps so a full counter wrap keeps counting.
                let millis = counter.millis();
                *elapsed_ms += u64::from(millis.wrapping_sub(*last_millis));
                *last_millis = millis;
                self.current = self.current.max(*elapsed_ms as f64 / 1000.0);
                false
            }
        };
        if precise {
            self.guard_plateau();
        }
        self.current
    }

    fn guard_plateau(&mut self) {
        if self.current.to_bits() == self.last_reported.to_bits() {
            self.same_count += 1;
            if self.same_count > PLATEAU_LIMIT {
                self.current += PLATEAU_ADVANCE;
                self.same_count = 0;
            }
        } else {
            self.same_count = 0;
        }
        self.last_reported = self.current;
    }
}

impl TimeSource for Clock {
    fn now(&mut self) -> f64 {
        Clock::now(self)
    }

    fn is_degraded(&self) -> bool {
        Clock::is_degraded(self)
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clock")
            .field("degraded", &self.is_degraded())
            .field("current", &self.current)
            .finish()
    }
}
