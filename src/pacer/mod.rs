//! Frame pacing
//!
//! Decides, every iteration, how much time has passed, whether to give the
//! CPU back, and when to run the engine for one frame.
//!
//! - [`FramePacer`] owns the loop: fixed tick rate when the host has no
//!   display surface, input-driven idling when it does.
//! - [`EmbeddedPacer`] is driven by an external runtime that calls it once
//!   per output frame; it only decides whether and how far to advance.

mod embedded;
mod frame_pacer;
mod host;
mod shutdown;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

pub use embedded::EmbeddedPacer;
pub use frame_pacer::FramePacer;
pub use host::{Host, SurfaceState, Throttle};
pub use shutdown::ShutdownSignal;

/// One engine step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Sequential frame number, starting at zero
    pub index: u64,
    /// Seconds of simulated time this step covers
    pub delta: f64,
    /// Nothing needs drawing this frame (surface idle and no input arrived)
    pub skip_redraw: bool,
}

/// The engine being paced
pub trait Engine {
    /// Run one step covering `frame.delta` seconds
    fn frame(&mut self, frame: &Frame);
}

impl<F: FnMut(&Frame)> Engine for F {
    fn frame(&mut self, frame: &Frame) {
        self(frame);
    }
}

/// Timing parameters shared by the pacers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    /// Seconds per simulation step in headless and fixed-step modes
    pub tick: f64,
    /// Headless sleep between clock samples
    pub yield_interval: Duration,
    /// Input wait while paused, hidden or blocked
    pub idle_wait: Duration,
    /// Input wait while in the background
    pub unfocused_wait: Duration,
    /// Seconds between statistics log lines (0 disables)
    pub stats_interval: f64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            tick: 0.05,
            yield_interval: Duration::from_millis(1),
            idle_wait: Duration::from_millis(50),
            unfocused_wait: Duration::from_millis(20),
            stats_interval: 0.0,
        }
    }
}
