//! Frame pacing and host integration for a real-time engine
//!
//! This crate provides:
//! - Monotonic time sources that smooth over counter jitter and wraparound
//! - A frame pacer for dedicated (headless) and interactive hosts
//! - A fixed-step pacer for engines embedded in an external runtime
//! - Console and winit window hosts

pub mod core;
pub mod host;
pub mod pacer;
pub mod time;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::core::{FrameStats, HostMode, PacerConfig, init_logging};
    pub use crate::host::ConsoleHost;
    pub use crate::pacer::{
        EmbeddedPacer, Engine, Frame, FramePacer, Host, Pacing, ShutdownSignal, SurfaceState,
    };
    pub use crate::time::{Clock, HostClock, TimeSource};
}
