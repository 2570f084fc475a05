//! Time management utilities

use std::time::Instant;

/// High-precision timer for frame timing
///
/// The simulation consumes elapsed time in milliseconds, so the timer
/// reports millisecond deltas.
pub struct Timer {
    start: Instant,
    last_frame: Instant,
    delta_ms: f64,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            delta_ms: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_ms = now.duration_since(self.last_frame).as_secs_f64() * 1000.0;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Time since the last frame in milliseconds
    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }

    /// Milliseconds elapsed since timer creation
    pub fn total_ms(&self) -> f64 {
        self.last_frame.duration_since(self.start).as_secs_f64() * 1000.0
    }

    /// Number of frames observed so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
