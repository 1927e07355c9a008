//! Host for dedicated servers

use std::thread;
use std::time::Duration;

use crate::pacer::{Host, SurfaceState};

/// Headless host: no display surface, sleeps on the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleHost;

impl ConsoleHost {
    /// Create a headless host
    pub fn new() -> Self {
        Self
    }
}

impl Host for ConsoleHost {
    fn surface(&self) -> Option<SurfaceState> {
        None
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }

    fn wait_for_input(&mut self, timeout: Duration) -> bool {
        // No input source to wake on.
        thread::sleep(timeout);
        false
    }
}
