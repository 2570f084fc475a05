//! Asteroid spawner state
//!
//! A spawner accumulates elapsed time and emits one asteroid per full spawn
//! interval. Accumulation carries across frames, so a large delta (a pause,
//! a dropped frame) is caught up exactly: zero, one, or several asteroids
//! in a single tick, never more or fewer than elapsed real time calls for.

use crate::foundation::math::{from_angle_and_scale, Vec2};

/// Default asteroid speed on creation, in pixels per millisecond
pub const DEFAULT_SPAWN_SPEED: f64 = 0.1;

/// Periodic asteroid emission state
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnerState {
    /// Milliseconds between spawns
    pub spawn_interval_ms: f64,
    /// Direction spawned asteroids travel, in radians
    pub spawn_direction: f64,
    /// Speed of spawned asteroids, in pixels per millisecond
    pub spawn_speed: f64,
    time_since_last_spawn_ms: f64,
}

impl SpawnerState {
    /// Create a spawner emitting `spawn_rate_per_second` asteroids along
    /// `spawn_direction`
    pub fn new(spawn_rate_per_second: f64, spawn_direction: f64) -> Self {
        Self {
            spawn_interval_ms: 1000.0 / spawn_rate_per_second,
            spawn_direction,
            spawn_speed: DEFAULT_SPAWN_SPEED,
            time_since_last_spawn_ms: 0.0,
        }
    }

    /// Set the speed of emitted asteroids
    #[must_use]
    pub fn with_spawn_speed(mut self, spawn_speed: f64) -> Self {
        self.spawn_speed = spawn_speed;
        self
    }

    /// Advance the spawner by `dt_ms`, returning the number of asteroids due
    pub fn tick(&mut self, dt_ms: f64) -> u32 {
        self.time_since_last_spawn_ms += dt_ms;
        let mut due = 0;
        while self.time_since_last_spawn_ms > self.spawn_interval_ms {
            self.time_since_last_spawn_ms -= self.spawn_interval_ms;
            due += 1;
        }
        due
    }

    /// Velocity vector given to emitted asteroids
    pub fn spawn_velocity(&self) -> Vec2 {
        from_angle_and_scale(self.spawn_direction, self.spawn_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn does_not_spawn_before_the_interval_elapses() {
        let mut spawner = SpawnerState::new(2.0, 0.0); // every 500ms
        assert_eq!(spawner.tick(400.0), 0);
        assert_eq!(spawner.tick(99.0), 0);
    }

    #[test]
    fn spawns_once_per_interval() {
        let mut spawner = SpawnerState::new(2.0, 0.0);
        assert_eq!(spawner.tick(501.0), 1);
        assert_eq!(spawner.tick(500.0), 1);
    }

    #[test]
    fn catches_up_after_a_large_delta() {
        // A 2.6s delta at 2/s owes five asteroids at once
        let mut spawner = SpawnerState::new(2.0, 0.0);
        assert_eq!(spawner.tick(2600.0), 5);
        // and the 100ms remainder still counts towards the next one
        assert_eq!(spawner.tick(401.0), 1);
    }

    #[test]
    fn total_spawned_is_independent_of_delta_granularity() {
        let mut coarse = SpawnerState::new(4.0, 0.0);
        let mut fine = SpawnerState::new(4.0, 0.0);

        let coarse_count = coarse.tick(3000.0);
        let fine_count: u32 = (0..300).map(|_| fine.tick(10.0)).sum();

        assert_eq!(coarse_count, fine_count);
    }

    #[test]
    fn spawn_velocity_points_along_the_spawn_direction() {
        let spawner = SpawnerState::new(1.0, std::f64::consts::FRAC_PI_2).with_spawn_speed(0.2);
        let v = spawner.spawn_velocity();
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 0.2);
    }
}
