//! Host environment seen by the pacer

use std::time::Duration;

/// What the windowing layer reports about the display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceState {
    /// The window is the foreground window
    pub active: bool,
    /// The window owns the display in exclusive fullscreen
    pub exclusive_fullscreen: bool,
    /// The window is on screen (not minimized or fully occluded)
    pub visible: bool,
    /// Drawing has been switched off by the host
    pub drawing_blocked: bool,
    /// The simulation is paused
    pub paused: bool,
}

impl SurfaceState {
    /// The window has the foreground, either focused or fullscreen
    pub fn is_foreground(&self) -> bool {
        self.active || self.exclusive_fullscreen
    }
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            active: true,
            exclusive_fullscreen: false,
            visible: true,
            drawing_blocked: false,
            paused: false,
        }
    }
}

/// How long the interactive loop may idle before the next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Throttle {
    /// Nothing to draw: wait for input with the long timeout
    Idle,
    /// In the background: wait for input with the short timeout
    Unfocused,
    /// Run the next frame immediately
    None,
}

impl Throttle {
    /// Pick the throttle for a surface
    pub fn decide(surface: &SurfaceState) -> Self {
        let foreground = surface.is_foreground();
        if (surface.paused && !foreground) || !surface.visible || surface.drawing_blocked {
            Self::Idle
        } else if !foreground {
            Self::Unfocused
        } else {
            Self::None
        }
    }
}

/// Platform services the pacer calls out to
pub trait Host {
    /// Current display surface, or `None` when running without one
    fn surface(&self) -> Option<SurfaceState>;

    /// Dispatch pending events without blocking
    fn poll(&mut self) {}

    /// Give up the CPU for a short, bounded time
    fn sleep(&mut self, duration: Duration);

    /// Block until input arrives or `timeout` elapses.
    ///
    /// Returns `true` if input arrived.
    fn wait_for_input(&mut self, timeout: Duration) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(active: bool, visible: bool, blocked: bool, paused: bool) -> SurfaceState {
        SurfaceState {
            active,
            exclusive_fullscreen: false,
            visible,
            drawing_blocked: blocked,
            paused,
        }
    }

    #[test]
    fn test_focused_surface_runs_freely() {
        assert_eq!(Throttle::decide(&SurfaceState::default()), Throttle::None);
    }

    #[test]
    fn test_paused_in_foreground_keeps_running() {
        assert_eq!(
            Throttle::decide(&surface(true, true, false, true)),
            Throttle::None
        );
    }

    #[test]
    fn test_idle_cases() {
        assert_eq!(
            Throttle::decide(&surface(false, true, false, true)),
            Throttle::Idle
        );
        assert_eq!(
            Throttle::decide(&surface(true, false, false, false)),
            Throttle::Idle
        );
        assert_eq!(
            Throttle::decide(&surface(true, true, true, false)),
            Throttle::Idle
        );
    }

    #[test]
    fn test_background_surface() {
        assert_eq!(
            Throttle::decide(&surface(false, true, false, false)),
            Throttle::Unfocused
        );
    }

    #[test]
    fn test_exclusive_fullscreen_counts_as_foreground() {
        let state = SurfaceState {
            active: false,
            exclusive_fullscreen: true,
            paused: true,
            ..SurfaceState::default()
        };
        assert_eq!(Throttle::decide(&state), Throttle::None);
    }
}
