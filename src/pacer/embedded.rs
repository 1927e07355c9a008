//! Pacing inside a host that owns the frame cadence

use log::debug;

use super::{Engine, Frame};
use crate::time::TimeSource;

/// Per-call pacing for an engine embedded in an external runtime.
///
/// The host calls [`EmbeddedPacer::run_frame`] on its own schedule. In the
/// headless sub-mode the simulation advances in fixed ticks: calls that
/// arrive before a full tick has accumulated are declined and the time is
/// kept for the next call. A gap of more than two ticks is treated as a
/// host stall and the backlog is dropped. In the interactive sub-mode
/// every call runs a frame with the measured elapsed time.
#[derive(Debug)]
pub struct EmbeddedPacer<T> {
    clock: T,
    tick: f64,
    headless: bool,
    /// Clock reading up to which time has been simulated
    baseline: f64,
    frame_index: u64,
}

impl<T: TimeSource> EmbeddedPacer<T> {
    /// Create a pacer measuring from now
    pub fn new(mut clock: T, tick: f64, headless: bool) -> Self {
        let baseline = clock.now();
        Self {
            clock,
            tick,
            headless,
            baseline,
            frame_index: 0,
        }
    }

    /// Backdate the baseline by one tick so the next call runs a frame.
    ///
    /// Called once after the host has loaded content.
    pub fn prime(&mut self) {
        self.baseline = self.clock.now() - self.tick;
    }

    /// Clock reading up to which time has been simulated
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Seconds per fixed step
    pub fn tick(&self) -> f64 {
        self.tick
    }

    /// Handle one host frame. Returns the frame run, or `None` if declined.
    pub fn run_frame<E: Engine + ?Sized>(&mut self, engine: &mut E) -> Option<Frame> {
        let now = self.clock.now();
        let elapsed = now - self.baseline;

        let delta = if self.headless {
            if elapsed < self.tick {
                return None;
            }
            if elapsed > self.tick * 2.0 {
                debug!("host stalled for {elapsed:.3}s, dropping backlog");
                self.baseline = now;
            } else {
                self.baseline += self.tick;
            }
            self.tick
        } else {
            self.baseline = now;
            elapsed
        };

        let frame = Frame {
            index: self.frame_index,
            delta,
            skip_redraw: false,
        };
        self.frame_index += 1;
        engine.frame(&frame);
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacer::testing::ManualTime;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_accumulates_until_a_full_tick() {
        let time = ManualTime::default();
        let mut pacer = EmbeddedPacer::new(time.clone(), 0.1, true);
        let mut deltas = Vec::new();
        let mut engine = |frame: &Frame| deltas.push(frame.delta);

        time.advance(0.03);
        assert!(pacer.run_frame(&mut engine).is_none());
        time.advance(0.03);
        assert!(pacer.run_frame(&mut engine).is_none());
        time.advance(0.05);
        let frame = pacer.run_frame(&mut engine).unwrap();

        assert_eq!(frame.delta, 0.1);
        assert_eq!(deltas, vec![0.1]);
        // 0.01s remains unsimulated.
        assert!(approx(time.get() - pacer.baseline(), 0.01));
    }

    #[test]
    fn test_remainder_carries_into_next_call() {
        let time = ManualTime::default();
        let mut pacer = EmbeddedPacer::new(time.clone(), 0.1, true);
        let mut engine = |_: &Frame| {};

        time.set(0.11);
        assert!(pacer.run_frame(&mut engine).is_some());
        time.set(0.205);
        assert!(pacer.run_frame(&mut engine).is_some());
        assert!(approx(pacer.baseline(), 0.2));
    }

    #[test]
    fn test_stall_drops_backlog() {
        let time = ManualTime::default();
        let mut pacer = EmbeddedPacer::new(time.clone(), 0.1, true);
        let mut engine = |_: &Frame| {};

        time.set(0.35);
        let frame = pacer.run_frame(&mut engine).unwrap();
        assert_eq!(frame.delta, 0.1);
        assert_eq!(pacer.baseline(), 0.35);

        time.set(0.40);
        assert!(pacer.run_frame(&mut engine).is_none());
    }

    #[test]
    fn test_exactly_two_ticks_is_not_a_stall() {
        let time = ManualTime::default();
        let mut pacer = EmbeddedPacer::new(time.clone(), 0.125, true);
        let mut engine = |_: &Frame| {};

        time.set(0.25);
        assert!(pacer.run_frame(&mut engine).is_some());
        assert_eq!(pacer.baseline(), 0.125);
        assert!(pacer.run_frame(&mut engine).is_some());
        assert_eq!(pacer.baseline(), 0.25);
    }

    #[test]
    fn test_prime_runs_first_call() {
        let time = ManualTime::default();
        time.set(5.0);
        let mut pacer = EmbeddedPacer::new(time.clone(), 0.125, true);
        assert!(pacer.run_frame(&mut |_: &Frame| {}).is_none());
        pacer.prime();

        let frame = pacer.run_frame(&mut |_: &Frame| {}).unwrap();
        assert_eq!(frame.index, 0);
        assert_eq!(frame.delta, 0.125);
    }

    #[test]
    fn test_interactive_forwards_measured_time() {
        let time = ManualTime::default();
        let mut pacer = EmbeddedPacer::new(time.clone(), 0.1, false);
        let mut engine = |_: &Frame| {};

        time.advance(0.016);
        let frame = pacer.run_frame(&mut engine).unwrap();
        assert!(approx(frame.delta, 0.016));

        time.advance(0.5);
        let frame = pacer.run_frame(&mut engine).unwrap();
        assert!(approx(frame.delta, 0.5));
        assert_eq!(frame.index, 1);
    }
}
