//! Core support module
//!
//! Configuration, frame statistics and logger setup shared by the pacers
//! and the binary.

mod config;
mod logging;
mod stats;

pub use config::{ConfigError, HostMode, PacerConfig};
pub use logging::init_logging;
pub use stats::FrameStats;
