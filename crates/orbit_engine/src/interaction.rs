//! Player interaction handling
//!
//! Resolves what happens when the player's hit-circle touches another body:
//! collect, land, win, or lose. This path is separate from generic collision
//! resolution; the player never participates in that rule set.

use crate::body::{BodyKind, PlanetAttachment};
use crate::events::GameEvent;
use crate::foundation::collections::BodyHandle;
use crate::foundation::math::{angle_between, from_angle_and_scale, vec, vec_equals, wrap_angle};
use crate::physics::circles_intersect;
use crate::universe::Universe;

/// Check the player against every other body and dispatch contacts
pub fn resolve_player_contacts(
    universe: &mut Universe,
    player: BodyHandle,
    events: &mut Vec<GameEvent>,
) {
    for other in universe.handles() {
        if other == player {
            continue;
        }
        player_touches(universe, player, other, events);
    }
}

/// Dispatch a single player/body pair, if their circles overlap
///
/// Safe to call with stale handles; pairs that no longer exist or do not
/// intersect are ignored.
pub fn player_touches(
    universe: &mut Universe,
    player: BodyHandle,
    other: BodyHandle,
    events: &mut Vec<GameEvent>,
) {
    let (Some(player_body), Some(other_body)) = (universe.get(player), universe.get(other)) else {
        return;
    };
    if !circles_intersect(player_body, other_body) {
        return;
    }

    if let Some(points) = other_body.collectible_points() {
        universe.remove(other);
        universe.add_points(points);
        let total = universe.points;
        log::debug!("collected {points} points, total {total}");
        events.push(GameEvent::PointsCollected { points, total });
        if universe.target_reached() {
            log::info!("target points reached at {total}");
            events.push(GameEvent::TargetPointsReached);
        }
        return;
    }

    match &other_body.kind {
        BodyKind::Planet | BodyKind::GoalPlanet { .. } => {
            let goal = matches!(other_body.kind, BodyKind::GoalPlanet { .. });
            // only a fresh landing signals the goal, so a player resting on
            // the goal planet does not re-announce it every step
            if land(universe, player, other) && goal {
                log::info!("player reached the goal planet");
                events.push(GameEvent::GoalReached);
            }
        }
        BodyKind::Asteroid => {
            // the impact consumes the asteroid; one strike, one event
            universe.remove(other);
            log::info!("player struck an asteroid");
            events.push(GameEvent::PlayerLost);
        }
        _ => {}
    }
}

/// Rigidly bind the player to a planet's surface and rotation
///
/// Returns whether the attachment was newly made; an already-attached player
/// is left alone. The orientation offset is the landing angle relative to the
/// planet's current orientation, so the player co-rotates with a spinning
/// planet. A player occupying the planet's exact position (levels author this
/// to start the player "on" a planet) keeps its own orientation as the offset
/// instead of computing a degenerate angle.
fn land(universe: &mut Universe, player: BodyHandle, planet: BodyHandle) -> bool {
    let Some(planet_body) = universe.get(planet) else {
        return false;
    };
    let planet_position = planet_body.position;
    let planet_orientation = planet_body
        .circle
        .as_ref()
        .map_or(0.0, |circle| circle.orientation);
    let planet_radius = planet_body.circle.as_ref().map_or(0.0, |circle| circle.radius);

    let Some(player_body) = universe.get_mut(player) else {
        return false;
    };
    let Some(state) = player_body.player_state() else {
        return false;
    };
    if state.attachment.is_some() {
        return false;
    }

    let player_orientation = player_body
        .circle
        .as_ref()
        .map_or(0.0, |circle| circle.orientation);
    let orientation_offset = if vec_equals(player_body.position, planet_position) {
        player_orientation
    } else {
        angle_between(player_body.position, planet_position) - planet_orientation
    };

    player_body.is_fixed = true;
    player_body.velocity = vec(0.0, 0.0);

    let orientation = wrap_angle(planet_orientation + orientation_offset);
    let surface_distance = planet_radius
        + player_body
            .circle
            .as_ref()
            .map_or(0.0, |circle| circle.radius);
    if let Some(circle) = player_body.circle.as_mut() {
        circle.orientation = orientation;
    }
    player_body.position = planet_position + from_angle_and_scale(orientation, surface_distance);

    if let Some(state) = player_body.player_state_mut() {
        state.attachment = Some(PlanetAttachment {
            planet,
            orientation_offset,
        });
    }
    log::debug!("player landed");
    true
}
