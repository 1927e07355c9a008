//! Wall clock as exposed by an embedding host

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::TimeSource;

/// Seconds since the first read of the system wall clock.
///
/// The whole second of the first reading becomes the base, so the first
/// value returned is its sub-second part. Backward steps of the system
/// clock are held at the last reported value.
#[derive(Debug, Clone, Default)]
pub struct HostClock {
    base_secs: Option<u64>,
    last: f64,
}

impl HostClock {
    /// Create a clock that has not been read yet
    pub fn new() -> Self {
        Self::default()
    }

    fn reading(&mut self, since_epoch: Duration) -> f64 {
        let base = *self.base_secs.get_or_insert(since_epoch.as_secs());
        let secs = since_epoch.as_secs().saturating_sub(base) as f64
            + f64::from(since_epoch.subsec_micros()) / 1_000_000.0;
        self.last = self.last.max(secs);
        self.last
    }
}

impl TimeSource for HostClock {
    fn now(&mut self) -> f64 {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        self.reading(since_epoch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_reading_is_subsecond() {
        let mut clock = HostClock::new();
        let t = clock.reading(Duration::from_millis(100_250));
        assert!((t - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_readings_relative_to_base() {
        let mut clock = HostClock::new();
        clock.reading(Duration::from_millis(100_250));
        let t = clock.reading(Duration::from_millis(101_500));
        assert!((t - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_backward_wall_clock_is_held() {
        let mut clock = HostClock::new();
        clock.reading(Duration::from_millis(100_000));
        let ahead = clock.reading(Duration::from_millis(102_000));
        let behind = clock.reading(Duration::from_millis(100_900));
        assert_eq!(behind, ahead);
    }

    #[test]
    fn test_system_reading_advances() {
        let mut clock = HostClock::new();
        let a = clock.now();
        std::thread::sleep(Duration::from_millis(5));
        assert!(clock.now() >= a);
    }
}
