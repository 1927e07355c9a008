//! Concrete hosts
//!
//! [`ConsoleHost`] serves dedicated servers with no display. [`WindowHost`]
//! drives a desktop window through winit's event pump, so an input wait is
//! a real wait on the platform's event queue.

mod console;
#[cfg(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "android",
    target_os = "linux",
    target_os = "dragonfly",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
))]
mod window;

pub use console::ConsoleHost;
#[cfg(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "android",
    target_os = "linux",
    target_os = "dragonfly",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
))]
pub use window::WindowHost;

/// Errors setting up a host
#[derive(Debug)]
pub enum HostError {
    /// The platform event loop could not be created
    EventLoop(String),
    /// The window could not be created
    Window(String),
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoop(e) => write!(f, "Event loop error: {e}"),
            Self::Window(e) => write!(f, "Window error: {e}"),
        }
    }
}

impl std::error::Error for HostError {}
