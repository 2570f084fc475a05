//! Universe construction
//!
//! Levels assemble a [`UniverseBuilder`], which validates the body set and
//! runs one player interaction pass before the first frame. The pass means a
//! player authored near (or exactly on) a planet starts the level already
//! landed instead of falling into it on frame one.

use super::{Universe, UniverseError};
use crate::body::{Body, Orbit, DEBRIS_POINTS};
use crate::foundation::collections::BodyHandle;
use crate::foundation::math::constants::TAU;
use crate::interaction;
use rand::Rng;

/// Staged universe contents, validated on [`build`](UniverseBuilder::build)
///
/// Bodies are inserted as they are added so that orbit back-references can
/// be wired up with real handles during construction.
#[derive(Debug, Default)]
pub struct UniverseBuilder {
    universe: Universe,
}

impl UniverseBuilder {
    /// Start an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one body, returning its handle
    pub fn add(&mut self, body: Body) -> BodyHandle {
        self.universe.insert(body)
    }

    /// Add one body, chaining
    #[must_use]
    pub fn with_body(mut self, body: Body) -> Self {
        self.universe.insert(body);
        self
    }

    /// Add several bodies, chaining
    #[must_use]
    pub fn with_bodies(mut self, bodies: impl IntoIterator<Item = Body>) -> Self {
        for body in bodies {
            self.universe.insert(body);
        }
        self
    }

    /// Add a planet together with a scattering of debris orbiting it
    ///
    /// Altitudes, orbit angles, and orbit speeds are randomised so each
    /// piece drifts independently. Returns the planet's handle.
    pub fn add_planet_with_debris(
        &mut self,
        planet: Body,
        count: usize,
        rng: &mut impl Rng,
    ) -> BodyHandle {
        let radius = planet.circle.as_ref().map_or(0.0, |circle| circle.radius);
        let position = planet.position;
        let handle = self.universe.insert(planet);

        for _ in 0..count {
            let orbit = Orbit {
                planet: handle,
                altitude: radius + rng.gen_range(15.0..55.0),
                orbit_speed: rng.gen_range(0.5..1.5),
                orbit_location: rng.gen_range(0.0..TAU),
                points: DEBRIS_POINTS,
            };
            let mut debris = Body::debris(orbit);
            // placed properly on the first self-update pass
            debris.position = position;
            self.universe.insert(debris);
        }
        handle
    }

    /// Set the score at which the level is won
    #[must_use]
    pub fn with_target_goal_points(mut self, target: u32) -> Self {
        self.universe.target_goal_points = Some(target);
        self
    }

    /// Validate and assemble the universe
    ///
    /// Requires exactly one player body. Runs an initial player interaction
    /// pass; its events are discarded since the session that would consume
    /// them does not exist yet.
    pub fn build(self) -> Result<Universe, UniverseError> {
        let mut universe = self.universe;

        let players = universe
            .iter()
            .filter(|(_, body)| body.is_player())
            .count();
        match players {
            1 => {}
            0 => return Err(UniverseError::PlayerMissing),
            n => return Err(UniverseError::MultiplePlayers(n)),
        }

        let player = universe.player()?;
        let mut events = Vec::new();
        interaction::resolve_player_contacts(&mut universe, player, &mut events);
        for event in events {
            log::debug!("event during universe construction discarded: {event:?}");
        }

        log::info!("universe built with {} bodies", universe.len());
        Ok(universe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyKind;
    use crate::foundation::math::vec;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn build_requires_exactly_one_player() {
        assert!(matches!(
            UniverseBuilder::new().build(),
            Err(UniverseError::PlayerMissing)
        ));

        let result = UniverseBuilder::new()
            .with_body(Body::player(vec(0.0, 0.0), 0.0))
            .with_body(Body::player(vec(50.0, 0.0), 0.0))
            .build();
        assert!(matches!(result, Err(UniverseError::MultiplePlayers(2))));
    }

    #[test]
    fn player_authored_on_a_planet_starts_landed() {
        let universe = UniverseBuilder::new()
            .with_body(Body::player(vec(100.0, 65.0), 0.0))
            .with_body(Body::planet(vec(100.0, 100.0), "#f00"))
            .build()
            .unwrap();

        let player = universe.player().unwrap();
        let body = universe.get(player).unwrap();
        assert!(body.is_fixed);
        assert!(body.player_state().unwrap().attachment.is_some());
    }

    #[test]
    fn player_exactly_on_the_planet_centre_attaches_without_error() {
        let universe = UniverseBuilder::new()
            .with_body(Body::player(vec(100.0, 100.0), 1.25))
            .with_body(Body::planet(vec(100.0, 100.0), "#f00"))
            .build()
            .unwrap();

        let player = universe.player().unwrap();
        let body = universe.get(player).unwrap();
        assert!(body.player_state().unwrap().attachment.is_some());
        assert!(body.position.x.is_finite() && body.position.y.is_finite());
    }

    #[test]
    fn target_goal_points_carries_into_the_universe() {
        let universe = UniverseBuilder::new()
            .with_body(Body::player(vec(0.0, 0.0), 0.0))
            .with_target_goal_points(12)
            .build()
            .unwrap();
        assert_eq!(universe.target_goal_points, Some(12));
    }

    #[test]
    fn scattered_debris_orbits_reference_their_planet() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut builder = UniverseBuilder::new();
        builder.add(Body::player(vec(900.0, 900.0), 0.0));
        let planet = builder.add_planet_with_debris(Body::planet(vec(300.0, 300.0), "#0f0"), 8, &mut rng);
        let universe = builder.build().unwrap();

        let debris: Vec<_> = universe
            .iter()
            .filter_map(|(_, body)| match &body.kind {
                BodyKind::Debris(orbit) => Some(orbit),
                _ => None,
            })
            .collect();
        assert_eq!(debris.len(), 8);
        for orbit in debris {
            assert_eq!(orbit.planet, planet);
            assert!(orbit.altitude > 30.0);
            assert!((0.0..TAU).contains(&orbit.orbit_location));
            assert!((0.5..1.5).contains(&orbit.orbit_speed));
        }
    }
}
