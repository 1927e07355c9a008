//! Demo host running a counting engine under the configured mode

use std::error::Error;
use std::thread;
use std::time::Duration;

use hostloop::prelude::*;

/// Simulated seconds the headless and embedded demos run for
const DEMO_SECONDS: f64 = 10.0;

/// Engine stand-in that integrates time and reports once per simulated second
struct DemoEngine {
    simulated: f64,
    next_report: f64,
    skipped_redraws: u64,
    run_for: Option<f64>,
    shutdown: ShutdownSignal,
}

impl DemoEngine {
    fn new(run_for: Option<f64>, shutdown: ShutdownSignal) -> Self {
        Self {
            simulated: 0.0,
            next_report: 1.0,
            skipped_redraws: 0,
            run_for,
            shutdown,
        }
    }
}

impl Engine for DemoEngine {
    fn frame(&mut self, frame: &Frame) {
        self.simulated += frame.delta;
        if frame.skip_redraw {
            self.skipped_redraws += 1;
        }
        log::trace!("frame {} dt {:.4}", frame.index, frame.delta);

        if self.simulated >= self.next_report {
            log::info!(
                "simulated {:.2}s in {} frames ({} redraws skipped)",
                self.simulated,
                frame.index + 1,
                self.skipped_redraws
            );
            self.next_report += 1.0;
        }

        if self.run_for.is_some_and(|limit| self.simulated >= limit) {
            self.shutdown.raise();
        }
    }
}

fn run_headless(config: &PacerConfig) {
    let shutdown = ShutdownSignal::new();
    let mut engine = DemoEngine::new(Some(DEMO_SECONDS), shutdown.clone());
    let mut pacer = FramePacer::new(Clock::system(), ConsoleHost::new(), config.pacing());
    pacer.run(&mut engine, &shutdown);
}

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
fn run_windowed(config: &PacerConfig) -> Result<(), Box<dyn Error>> {
    let shutdown = ShutdownSignal::new();
    let host = hostloop::host::WindowHost::new(config, shutdown.clone())?;
    let mut engine = DemoEngine::new(None, shutdown.clone());
    let mut pacer = FramePacer::new(Clock::system(), host, config.pacing());
    pacer.run(&mut engine, &shutdown);
    Ok(())
}

#[cfg(not(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "android",
    target_os = "linux",
    target_os = "dragonfly",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
)))]
fn run_windowed(_config: &PacerConfig) -> Result<(), Box<dyn Error>> {
    Err("windowed mode is not supported on this platform".into())
}

/// Stand-in for an external runtime calling us once per output frame
fn run_embedded(config: &PacerConfig, headless: bool) {
    let shutdown = ShutdownSignal::new();
    let mut engine = DemoEngine::new(Some(DEMO_SECONDS), shutdown.clone());
    let mut pacer = EmbeddedPacer::new(HostClock::new(), config.tick_rate, headless);
    pacer.prime();

    let frame_interval = Duration::from_secs_f64(1.0 / config.host_fps);
    let mut host_frames: u64 = 0;
    let mut declined: u64 = 0;
    while !shutdown.is_raised() {
        host_frames += 1;
        if pacer.run_frame(&mut engine).is_none() {
            declined += 1;
        }
        thread::sleep(frame_interval);
    }
    log::info!("host ran {host_frames} frames, {declined} declined by the pacer");
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => PacerConfig::load(path)?,
        None => PacerConfig::default(),
    };
    config.validate()?;
    init_logging(config.log_filter.as_deref());
    log::info!("Starting {} in {:?} mode", config.title, config.mode);

    match config.mode {
        HostMode::Headless => run_headless(&config),
        HostMode::Windowed => run_windowed(&config)?,
        HostMode::Embedded { headless } => run_embedded(&config, headless),
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("hostloop error: {e}");
        std::process::exit(1);
    }
}
