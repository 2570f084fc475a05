//! Math utilities and types
//!
//! Provides the 2D vector type and angle helpers the simulation is built on.
//! All simulation scalars are `f64`.

pub use nalgebra::Vector2;

/// 2D vector type used for positions, velocities, and accelerations
pub type Vec2 = Vector2<f64>;

/// Create a 2D vector
pub fn vec(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

/// Euclidean distance between two points
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    (a - b).norm()
}

/// Angle of the displacement from `b` to `a`, in radians
///
/// Note the sign convention: this is `atan2(a.y - b.y, a.x - b.x)`, the
/// direction pointing *from `b` towards `a`*.
pub fn angle_between(a: Vec2, b: Vec2) -> f64 {
    (a.y - b.y).atan2(a.x - b.x)
}

/// Unit direction for `radians`, scaled by `scale`
pub fn from_angle_and_scale(radians: f64, scale: f64) -> Vec2 {
    vec(radians.cos() * scale, radians.sin() * scale)
}

/// Exact component-wise equality, no epsilon
///
/// Callers that need a fuzzy comparison must pre-round.
pub fn vec_equals(a: Vec2, b: Vec2) -> bool {
    a.x == b.x && a.y == b.y
}

/// Wrap an angle into `[0, 2π)`
pub fn wrap_angle(radians: f64) -> f64 {
    radians.rem_euclid(constants::TAU)
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// 2 * Pi
    pub const TAU: f64 = std::f64::consts::TAU;

    /// Pi / 2
    pub const HALF_PI: f64 = PI * 0.5;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_is_euclidean() {
        assert_relative_eq!(distance(vec(0.0, 0.0), vec(3.0, 4.0)), 5.0);
    }

    #[test]
    fn angle_between_points_from_second_to_first() {
        // a is directly above b, so the displacement b -> a points up
        let a = vec(0.0, 1.0);
        let b = vec(0.0, 0.0);
        assert_relative_eq!(angle_between(a, b), constants::HALF_PI);
    }

    #[test]
    fn from_angle_round_trips_through_angle_between() {
        let origin = vec(10.0, -3.0);
        let p = origin + from_angle_and_scale(1.25, 7.0);
        assert_relative_eq!(angle_between(p, origin), 1.25, epsilon = 1e-12);
    }

    #[test]
    fn wrap_angle_stays_in_range() {
        assert_relative_eq!(wrap_angle(constants::TAU + 0.5), 0.5, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(-0.5), constants::TAU - 0.5, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(0.0), 0.0);
    }

    #[test]
    fn vec_equals_is_exact() {
        assert!(vec_equals(vec(1.0, 2.0), vec(1.0, 2.0)));
        assert!(!vec_equals(vec(1.0, 2.0), vec(1.0 + f64::EPSILON, 2.0)));
    }
}
