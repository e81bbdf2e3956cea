use std::time::{Duration, Instant};

/// Frames-per-second counter, refreshed once per second.
pub struct FrameStats {
    last_update: Instant,
    frame_count: u32,
    accumulated_time: Duration,
    total_frames: u64,
    pub current_fps: f32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats {
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    #[must_use]
    pub fn starting_at(now: Instant) -> Self {
        Self {
            last_update: now,
            frame_count: 0,
            accumulated_time: Duration::ZERO,
            total_frames: 0,
            current_fps: 0.0,
        }
    }

    /// Counts a frame. Returns the new FPS value once per second.
    pub fn update(&mut self) -> Option<f32> {
        self.update_at(Instant::now())
    }

    pub fn update_at(&mut self, now: Instant) -> Option<f32> {
        self.frame_count += 1;
        self.total_frames += 1;
        self.accumulated_time += now.saturating_duration_since(self.last_update);
        self.last_update = now;

        if self.accumulated_time.as_secs_f32() >= 1.0 {
            self.current_fps = self.frame_count as f32 / self.accumulated_time.as_secs_f32();

            self.accumulated_time = Duration::ZERO;
            self.frame_count = 0;

            return Some(self.current_fps);
        }

        None
    }

    #[must_use]
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}
