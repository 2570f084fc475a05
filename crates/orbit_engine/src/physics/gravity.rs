//! N-body gravitational accumulation
//!
//! A softened inverse-square law tuned for gameplay feel rather than
//! physical accuracy. The force numerator deliberately uses the *moving*
//! body's own mass, not the attracting body's: every massed body pulls a
//! given mover equally hard. This is a tuning choice carried over from the
//! original game and must not be "fixed" to conventional Newtonian form.

use crate::body::Body;
use crate::config::SimulationConfig;
use crate::foundation::collections::BodyHandle;
use crate::foundation::math::{vec, Vec2};
use crate::universe::Universe;

/// Substituted for an axis delta of exactly zero to prevent division by zero
pub const MIN_AXIS_DELTA: f64 = 1e-8;

/// Accumulate gravitational acceleration for one moveable body
///
/// Every massed body except the mover itself contributes, with one special
/// case: the player ignores pull from non-fixed bodies, so asteroids cannot
/// drag the player around; only planets and other fixed masses act on it.
///
/// Returns acceleration in pixels per millisecond squared.
pub fn accumulate_acceleration(
    universe: &Universe,
    mover: BodyHandle,
    config: &SimulationConfig,
) -> Vec2 {
    let Some(mover_body) = universe.get(mover) else {
        return vec(0.0, 0.0);
    };
    let Some(mover_mass) = mover_body.mass else {
        return vec(0.0, 0.0);
    };
    let mover_is_player = mover_body.is_player();

    let mut acc = vec(0.0, 0.0);
    for (handle, attractor) in universe.iter() {
        if handle == mover || attractor.mass.is_none() {
            continue;
        }
        if mover_is_player && !attractor.is_fixed {
            continue;
        }

        acc += pull(mover_body, attractor, mover_mass, config);
    }
    acc
}

fn pull(mover: &Body, attractor: &Body, mover_mass: f64, config: &SimulationConfig) -> Vec2 {
    let mut x_delta = attractor.position.x - mover.position.x;
    let mut y_delta = attractor.position.y - mover.position.y;
    if x_delta == 0.0 {
        x_delta = MIN_AXIS_DELTA;
    }
    if y_delta == 0.0 {
        y_delta = MIN_AXIS_DELTA;
    }

    let dist = (x_delta * x_delta + y_delta * y_delta).sqrt();
    let f = (config.gravity_constant * mover_mass)
        / (dist * (dist + config.softening_constant).sqrt());

    vec(x_delta * f, y_delta * f)
}
