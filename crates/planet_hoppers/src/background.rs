//! Starfield background
//!
//! Purely cosmetic: a fixed field of stars that twinkle by stepping through
//! brightness phases a few times a second. Drawn before the universe so
//! everything else layers over it.

use orbit_engine::prelude::*;
use rand::Rng;

/// Number of stars in the field
pub const STAR_COUNT: usize = 100;
/// Milliseconds between twinkle steps
const TWINKLE_INTERVAL_MS: f64 = 200.0;
/// Brightness cycle each star steps through
const PHASES: [&str; 4] = ["#fff", "#bbb", "#777", "#bbb"];
/// Star radius in pixels
const STAR_RADIUS: f64 = 1.0;

struct Star {
    position: Vec2,
    phase: usize,
}

/// Twinkling star field
pub struct Background {
    stars: Vec<Star>,
    timestamp_ms: f64,
}

impl Background {
    /// Scatter stars over a `width` x `height` playfield
    pub fn new(width: f64, height: f64, rng: &mut impl Rng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                position: vec(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
                phase: rng.gen_range(0..PHASES.len()),
            })
            .collect();
        Self {
            stars,
            timestamp_ms: 0.0,
        }
    }

    /// Advance the twinkle clock to the host's frame timestamp
    pub fn update(&mut self, timestamp_ms: f64) {
        self.timestamp_ms = timestamp_ms;
    }

    /// Draw every star at its current brightness
    pub fn draw(&self, sink: &mut dyn RenderSink) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let step = (self.timestamp_ms / TWINKLE_INTERVAL_MS).max(0.0) as usize;
        for star in &self.stars {
            let color = PHASES[(star.phase + step) % PHASES.len()];
            sink.fill_circle(star.position, STAR_RADIUS, 0.0, color, color);
        }
    }
}
