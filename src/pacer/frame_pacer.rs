//! The pacing loop

use log::{debug, info};

use super::{Engine, Frame, Host, Pacing, ShutdownSignal, SurfaceState, Throttle};
use crate::core::FrameStats;
use crate::time::TimeSource;

/// Runs the engine one frame per iteration.
///
/// The mode is picked fresh every iteration from [`Host::surface`]:
///
/// - no surface: yield in short sleeps until a full tick has passed, then
///   run a frame with the measured elapsed time
/// - a surface: idle on host input according to [`Throttle::decide`], then
///   run a frame with whatever time has actually elapsed
pub struct FramePacer<T, H> {
    clock: T,
    host: H,
    pacing: Pacing,
    /// Clock reading at the last engine frame
    last: f64,
    frame_index: u64,
    stats: FrameStats,
    next_report: f64,
}

impl<T: TimeSource, H: Host> FramePacer<T, H> {
    /// Create a pacer; the first frame measures from now
    pub fn new(mut clock: T, host: H, pacing: Pacing) -> Self {
        let last = clock.now();
        Self {
            clock,
            host,
            pacing,
            last,
            frame_index: 0,
            stats: FrameStats::new(),
            next_report: last + pacing.stats_interval,
        }
    }

    /// The host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Statistics over every frame run so far
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Timing parameters
    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    /// Run one iteration: throttle, then one engine frame.
    ///
    /// Returns `None` without running the engine if `shutdown` is raised
    /// while waiting for the next tick.
    pub fn step<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
        shutdown: &ShutdownSignal,
    ) -> Option<Frame> {
        self.host.poll();

        let (now, skip_redraw) = match self.host.surface() {
            None => (self.wait_for_tick(shutdown)?, false),
            Some(surface) => self.throttle(&surface),
        };

        let frame = Frame {
            index: self.frame_index,
            delta: now - self.last,
            skip_redraw,
        };
        self.last = now;
        self.frame_index += 1;

        engine.frame(&frame);
        self.stats.record_frame(frame.delta);
        self.report(now);

        Some(frame)
    }

    /// Step until `shutdown` is raised; returns the number of frames run
    pub fn run<E: Engine + ?Sized>(&mut self, engine: &mut E, shutdown: &ShutdownSignal) -> u64 {
        info!(
            "frame loop started (tick {:.3}s, degraded timer: {})",
            self.pacing.tick,
            self.clock.is_degraded()
        );

        let first = self.frame_index;
        while !shutdown.is_raised() {
            self.step(engine, shutdown);
        }

        let frames = self.frame_index - first;
        info!("frame loop stopped after {frames} frames");
        info!("{}", self.stats.format_stats());
        frames
    }

    fn wait_for_tick(&mut self, shutdown: &ShutdownSignal) -> Option<f64> {
        loop {
            let now = self.clock.now();
            if now - self.last >= self.pacing.tick {
                return Some(now);
            }
            if shutdown.is_raised() {
                return None;
            }
            self.host.sleep(self.pacing.yield_interval);
        }
    }

    fn throttle(&mut self, surface: &SurfaceState) -> (f64, bool) {
        let skip_redraw = match Throttle::decide(surface) {
            Throttle::Idle => !self.host.wait_for_input(self.pacing.idle_wait),
            Throttle::Unfocused => {
                self.host.wait_for_input(self.pacing.unfocused_wait);
                false
            }
            Throttle::None => false,
        };
        (self.clock.now(), skip_redraw)
    }

    fn report(&mut self, now: f64) {
        if self.pacing.stats_interval > 0.0 && now >= self.next_report {
            debug!("{}", self.stats.format_stats());
            self.next_report = now + self.pacing.stats_interval;
        }
    }
}
