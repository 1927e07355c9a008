//! Deterministic time and host doubles for pacer tests

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::{Host, ShutdownSignal, SurfaceState};
use crate::time::TimeSource;

/// Hand-driven time source. Clones share the same reading.
#[derive(Debug, Clone, Default)]
pub(crate) struct ManualTime(Rc<Cell<f64>>);

impl ManualTime {
    pub(crate) fn set(&self, secs: f64) {
        self.0.set(secs);
    }

    pub(crate) fn advance(&self, secs: f64) {
        self.0.set(self.0.get() + secs);
    }

    pub(crate) fn get(&self) -> f64 {
        self.0.get()
    }
}

impl TimeSource for ManualTime {
    fn now(&mut self) -> f64 {
        self.0.get()
    }
}

/// Host whose sleeps and waits advance a [`ManualTime`]
#[derive(Debug)]
pub(crate) struct ScriptedHost {
    pub(crate) time: ManualTime,
    pub(crate) surface: Option<SurfaceState>,
    /// Input shows up this many seconds into the next wait
    pub(crate) input_after: Option<f64>,
    /// Raise this signal once the given number of sleeps has happened
    pub(crate) raise_after_sleeps: Option<(usize, ShutdownSignal)>,
    pub(crate) polls: u32,
    pub(crate) sleeps: Vec<Duration>,
    pub(crate) waits: Vec<Duration>,
}

impl ScriptedHost {
    pub(crate) fn headless(time: ManualTime) -> Self {
        Self {
            time,
            surface: None,
            input_after: None,
            raise_after_sleeps: None,
            polls: 0,
            sleeps: Vec::new(),
            waits: Vec::new(),
        }
    }

    pub(crate) fn windowed(time: ManualTime, surface: SurfaceState) -> Self {
        Self {
            surface: Some(surface),
            ..Self::headless(time)
        }
    }
}

impl Host for ScriptedHost {
    fn surface(&self) -> Option<SurfaceState> {
        self.surface
    }

    fn poll(&mut self) {
        self.polls += 1;
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
        self.time.advance(duration.as_secs_f64());
        if let Some((count, signal)) = &self.raise_after_sleeps {
            if self.sleeps.len() >= *count {
                signal.raise();
            }
        }
    }

    fn wait_for_input(&mut self, timeout: Duration) -> bool {
        self.waits.push(timeout);
        match self.input_after.take() {
            Some(after) if after < timeout.as_secs_f64() => {
                self.time.advance(after);
                true
            }
            _ => {
                self.time.advance(timeout.as_secs_f64());
                false
            }
        }
    }
}
