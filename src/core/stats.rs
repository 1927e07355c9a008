//! Frame statistics

use std::collections::VecDeque;

/// Frames kept in the rolling window
const WINDOW: usize = 120;

/// Rolling statistics over the deltas handed to the engine, in seconds
#[derive(Debug)]
pub struct FrameStats {
    /// Most recent deltas, oldest first
    window: VecDeque<f64>,
    fps: f32,
    avg_frame_time_ms: f32,
    min_frame_time_ms: f32,
    max_frame_time_ms: f32,
    total_frames: u64,
    /// Seconds of simulated time over every frame
    total_time: f64,
}

impl FrameStats {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self {
            window: VecDeque::with_capacity(WINDOW),
            fps: 0.0,
            avg_frame_time_ms: 0.0,
            min_frame_time_ms: 0.0,
            max_frame_time_ms: 0.0,
            total_frames: 0,
            total_time: 0.0,
        }
    }

    /// Record a frame delta in seconds. Non-finite or negative deltas count as zero.
    pub fn record_frame(&mut self, delta: f64) {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.total_frames += 1;
        self.total_time += delta;

        if self.window.len() == WINDOW {
            self.window.pop_front();
        }
        self.window.push_back(delta);

        let (sum, min, max) = self.window.iter().fold(
            (0.0_f64, f64::INFINITY, 0.0_f64),
            |(sum, lo, hi), &dt| (sum + dt, lo.min(dt), hi.max(dt)),
        );
        let count = self.window.len() as f64;

        if sum > 0.0 {
            self.avg_frame_time_ms = (sum / count * 1000.0) as f32;
            self.fps = (count / sum) as f32;
        } else {
            self.avg_frame_time_ms = 0.0;
            self.fps = 0.0;
        }
        self.min_frame_time_ms = (min * 1000.0) as f32;
        self.max_frame_time_ms = (max * 1000.0) as f32;
    }

    /// Frames per second over the window
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Average frame time in milliseconds
    pub fn avg_frame_time_ms(&self) -> f32 {
        self.avg_frame_time_ms
    }

    /// Minimum frame time in milliseconds
    pub fn min_frame_time_ms(&self) -> f32 {
        self.min_frame_time_ms
    }

    /// Maximum frame time in milliseconds
    pub fn max_frame_time_ms(&self) -> f32 {
        self.max_frame_time_ms
    }

    /// Total frames recorded
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Sum of every recorded delta
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// One-line summary for the log
    pub fn format_stats(&self) -> String {
        format!(
            "FPS: {:.1} | Frame: {:.2}ms (min: {:.2}, max: {:.2}) | {} frames, {:.1}s",
            self.fps,
            self.avg_frame_time_ms,
            self.min_frame_time_ms,
            self.max_frame_time_ms,
            self.total_frames,
            self.total_time
        )
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = FrameStats::new();
        assert_eq!(stats.total_frames(), 0);
        assert_eq!(stats.fps(), 0.0);
    }

    #[test]
    fn test_record_frames() {
        let mut stats = FrameStats::new();
        stats.record_frame(0.010);
        stats.record_frame(0.030);

        assert_eq!(stats.total_frames(), 2);
        assert!((stats.total_time() - 0.040).abs() < 1e-9);
        assert!((stats.avg_frame_time_ms() - 20.0).abs() < 0.01);
        assert!((stats.min_frame_time_ms() - 10.0).abs() < 0.01);
        assert!((stats.max_frame_time_ms() - 30.0).abs() < 0.01);
        assert!((stats.fps() - 50.0).abs() < 0.1);
    }

    #[test]
    fn test_window_is_bounded() {
        let mut stats = FrameStats::new();
        for _ in 0..200 {
            stats.record_frame(0.5);
        }
        for _ in 0..120 {
            stats.record_frame(0.01);
        }
        assert_eq!(stats.total_frames(), 320);
        assert!((stats.max_frame_time_ms() - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_non_finite_delta_is_ignored() {
        let mut stats = FrameStats::new();
        stats.record_frame(0.02);
        stats.record_frame(f64::NAN);
        stats.record_frame(f64::INFINITY);
        stats.record_frame(-1.0);

        assert_eq!(stats.total_frames(), 4);
        assert!((stats.total_time() - 0.02).abs() < 1e-9);
        assert!((stats.max_frame_time_ms() - 20.0).abs() < 0.01);
        assert_eq!(stats.min_frame_time_ms(), 0.0);
    }

    #[test]
    fn test_format_stats() {
        let mut stats = FrameStats::new();
        stats.record_frame(0.05);
        let line = stats.format_stats();
        assert!(line.starts_with("FPS: 20.0"));
        assert!(line.contains("1 frames"));
    }
}
