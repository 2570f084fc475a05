//! Circle collision detection and resolution
//!
//! The rule set is direction-asymmetric: a moving body always disappears on
//! a qualifying collision, a struck fixed body (a planet) never does, and a
//! struck non-fixed body does. Player contact is resolved exclusively through
//! the player-interaction path, never here, to avoid double-handling.

use crate::body::{Body, BodyKind};
use crate::foundation::collections::BodyHandle;
use crate::foundation::math::distance;
use crate::universe::Universe;

/// Whether two bodies' hit-circles overlap
///
/// Strict inequality: exact tangency does not count as a collision. Bodies
/// without a circle shape never collide.
pub fn circles_intersect(a: &Body, b: &Body) -> bool {
    match (&a.circle, &b.circle) {
        (Some(ca), Some(cb)) => distance(a.position, b.position) < ca.radius + cb.radius,
        _ => false,
    }
}

/// Resolve collisions of one moving body against the whole collection
///
/// Skips self, skips the player (see module docs), and skips debris-debris
/// pairs. The mover is removed on the first qualifying overlap but the scan
/// continues with its last known circle, so one pass can also strike down
/// several non-fixed bodies the mover overlapped simultaneously.
pub fn resolve_collisions(mover: BodyHandle, universe: &mut Universe) {
    let Some(mover_body) = universe.get(mover) else {
        return;
    };
    if mover_body.is_player() {
        return;
    }
    let Some(circle) = &mover_body.circle else {
        return;
    };
    let mover_radius = circle.radius;
    let mover_position = mover_body.position;
    let mover_is_debris = matches!(mover_body.kind, BodyKind::Debris(_));

    for other in universe.handles() {
        if other == mover {
            continue;
        }
        let Some(other_body) = universe.get(other) else {
            continue;
        };
        if other_body.is_player() {
            continue;
        }
        if mover_is_debris && matches!(other_body.kind, BodyKind::Debris(_)) {
            continue;
        }
        let Some(other_circle) = &other_body.circle else {
            continue;
        };

        let other_radius = other_circle.radius;
        let other_fixed = other_body.is_fixed;
        let other_position = other_body.position;

        if distance(mover_position, other_position) < mover_radius + other_radius {
            log::debug!("collision: mover struck another body");
            universe.remove(mover);
            if !other_fixed {
                universe.remove(other);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::vec;

    #[test]
    fn intersection_is_strict() {
        let a = Body::asteroid(vec(0.0, 0.0), vec(0.0, 0.0)); // radius 5
        let mut b = Body::asteroid(vec(10.0, 0.0), vec(0.0, 0.0));

        // exact tangency: distance == radius sum
        assert!(!circles_intersect(&a, &b));

        b.position = vec(9.999, 0.0);
        assert!(circles_intersect(&a, &b));

        b.position = vec(10.001, 0.0);
        assert!(!circles_intersect(&a, &b));
    }

    #[test]
    fn bodies_without_circles_never_intersect() {
        let spawner = Body::spawner(vec(0.0, 0.0), crate::body::SpawnerState::new(1.0, 0.0));
        let asteroid = Body::asteroid(vec(0.0, 0.0), vec(0.0, 0.0));
        assert!(!circles_intersect(&spawner, &asteroid));
    }

    #[test]
    fn moving_asteroid_dies_against_a_fixed_planet() {
        let mut universe = Universe::new();
        let planet = universe.insert(Body::planet(vec(100.0, 100.0), "#f00"));
        let asteroid = universe.insert(Body::asteroid(vec(110.0, 100.0), vec(0.01, 0.0)));

        resolve_collisions(asteroid, &mut universe);

        assert!(!universe.contains(asteroid));
        assert!(universe.contains(planet));
    }

    #[test]
    fn moving_asteroid_takes_a_non_fixed_body_with_it() {
        let mut universe = Universe::new();
        let a = universe.insert(Body::asteroid(vec(100.0, 100.0), vec(0.01, 0.0)));
        let b = universe.insert(Body::asteroid(vec(105.0, 100.0), vec(0.0, 0.0)));

        resolve_collisions(a, &mut universe);

        assert!(!universe.contains(a));
        assert!(!universe.contains(b));
    }

    #[test]
    fn player_contact_is_not_resolved_here() {
        let mut universe = Universe::new();
        let player = universe.insert(Body::player(vec(100.0, 100.0), 0.0));
        let asteroid = universe.insert(Body::asteroid(vec(105.0, 100.0), vec(0.01, 0.0)));

        resolve_collisions(asteroid, &mut universe);
        resolve_collisions(player, &mut universe);

        assert!(universe.contains(player));
        assert!(universe.contains(asteroid));
    }

    #[test]
    fn debris_does_not_collide_with_debris() {
        use crate::body::Orbit;
        let mut universe = Universe::new();
        let planet = universe.insert(Body::planet(vec(0.0, 0.0), "#f00"));
        let orbit = |location: f64| Orbit {
            planet,
            altitude: 50.0,
            orbit_speed: 1.0,
            orbit_location: location,
            points: 1,
        };
        let a = universe.insert(Body::debris(orbit(0.0)));
        let b = universe.insert(Body::debris(orbit(0.0)));
        // co-located debris
        universe.get_mut(a).unwrap().position = vec(50.0, 0.0);
        universe.get_mut(b).unwrap().position = vec(50.0, 0.0);

        resolve_collisions(a, &mut universe);

        assert!(universe.contains(a));
        assert!(universe.contains(b));
    }
}
