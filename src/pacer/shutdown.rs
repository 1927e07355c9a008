//! Loop termination

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Request to stop a running loop.
///
/// Clones share the same flag; the loop checks it once per iteration.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal(Arc<AtomicBool>);

impl ShutdownSignal {
    /// Create a lowered signal
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to stop after the current iteration
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether a stop was requested
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_flag() {
        let signal = ShutdownSignal::new();
        let other = signal.clone();
        assert!(!signal.is_raised());

        other.raise();
        assert!(signal.is_raised());
    }
}
