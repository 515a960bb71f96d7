use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces the simulation to a fixed frame interval.
pub struct FrameTimer {
    interval: Duration,
    frame_start: Instant,
    last_frametime: Duration,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(super::Config::FRAME_DELAY)
    }
}

impl FrameTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frame_start: Instant::now(),
            last_frametime: interval,
        }
    }

    pub fn target_frametime(&self) -> Duration {
        self.interval
    }

    /// Rate implied by the length of the last completed frame.
    pub fn fps(&self) -> f64 {
        1. / self.last_frametime.as_secs_f64()
    }

    /// Sleeps until the frame that started at the previous call has lasted `interval`.
    pub fn delay(&mut self) {
        let deadline = self.frame_start + self.interval;
        if let Some(rest) = deadline.checked_duration_since(Instant::now()) {
            sleep(rest);
        }

        let now = Instant::now();
        self.last_frametime = now - self.frame_start;
        self.frame_start = now;
    }
}
