//! Frame timing: delta-time measurement and a smoothed FPS estimate.

use std::time::{Duration, Instant};

/// Interval between FPS log lines.
const REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Per-frame timer. Call [`FrameTiming::tick`] once per frame to get the
/// delta time; a smoothed FPS estimate is logged periodically at debug
/// level.
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Last FPS report timestamp
    last_report: Instant,
}

impl FrameTiming {
    /// Create a frame timer starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
            last_report: Instant::now(),
        }
    }

    /// Seconds elapsed since the previous tick. Also updates the smoothed
    /// FPS estimate and emits the periodic report.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        if now.duration_since(self.last_report) >= REPORT_INTERVAL {
            log::debug!("{:.1} fps", self.smoothed_fps);
            self.last_report = now;
        }

        dt
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}
