//! Level definitions
//!
//! Each level is a recipe for a [`Universe`]. Indices past the last real
//! level resolve to the congratulations screen. A goal-free [`sandbox`]
//! universe sits outside the progression for free-play hosts.

use orbit_engine::prelude::*;
use rand::Rng;
use std::f64::consts::{FRAC_PI_2, PI};

/// Playfield width in pixels
pub const SCREEN_WIDTH: f64 = 1200.0;
/// Playfield height in pixels
pub const SCREEN_HEIGHT: f64 = 800.0;

/// Number of real levels; this index is the congratulations screen
pub const LEVEL_COUNT: usize = 5;

/// Build the universe for a level index
pub fn level(index: usize, rng: &mut impl Rng) -> Result<Universe, UniverseError> {
    match index {
        0 => first_hop(),
        1 => stepping_stones(),
        2 => asteroid_alley(),
        3 => debris_harvest(rng),
        4 => the_gauntlet(rng),
        _ => congratulations(),
    }
}

/// One planet, one goal, one jump
fn first_hop() -> Result<Universe, UniverseError> {
    UniverseBuilder::new()
        .with_body(Body::player(vec(300.0, 400.0), 0.0))
        .with_body(Body::planet(vec(300.0, 400.0), "#c44").with_rotation_speed(0.2))
        .with_body(Body::goal_planet(vec(520.0, 400.0), "#46c", "#fd0"))
        .build()
}

/// A chain of planets to hop across
fn stepping_stones() -> Result<Universe, UniverseError> {
    UniverseBuilder::new()
        .with_body(Body::player(vec(180.0, 400.0), 0.0))
        .with_body(Body::planet(vec(180.0, 400.0), "#c44").with_rotation_speed(0.3))
        .with_body(Body::planet(vec(400.0, 340.0), "#4a4").with_rotation_speed(-0.25))
        .with_body(Body::planet(vec(620.0, 460.0), "#a4a").with_rotation_speed(0.4))
        .with_body(Body::goal_planet(vec(840.0, 400.0), "#46c", "#fd0"))
        .build()
}

/// A spawner strafes the corridor between start and goal
fn asteroid_alley() -> Result<Universe, UniverseError> {
    UniverseBuilder::new()
        .with_body(Body::player(vec(250.0, 600.0), 0.0))
        .with_body(Body::planet(vec(250.0, 600.0), "#c44").with_rotation_speed(0.2))
        .with_body(Body::planet(vec(470.0, 520.0), "#4a4"))
        .with_body(Body::goal_planet(vec(690.0, 440.0), "#46c", "#fd0"))
        .with_body(Body::spawner(
            vec(470.0, -100.0),
            SpawnerState::new(0.5, FRAC_PI_2).with_spawn_speed(0.15),
        ))
        .build()
}

/// Two ringed planets; the level is won by collecting enough debris
fn debris_harvest(rng: &mut impl Rng) -> Result<Universe, UniverseError> {
    let mut builder = UniverseBuilder::new();
    builder.add(Body::player(vec(400.0, 400.0), 0.0));
    builder.add_planet_with_debris(
        Body::planet(vec(400.0, 400.0), "#c44").with_rotation_speed(0.3),
        6,
        rng,
    );
    builder.add_planet_with_debris(
        Body::planet(vec(640.0, 400.0), "#4a4").with_rotation_speed(-0.3),
        6,
        rng,
    );
    builder.with_target_goal_points(8).build()
}

/// Everything at once: spawner crossfire, debris, and a distant goal
fn the_gauntlet(rng: &mut impl Rng) -> Result<Universe, UniverseError> {
    let mut builder = UniverseBuilder::new();
    builder.add(Body::player(vec(200.0, 650.0), 0.0));
    builder.add(Body::planet(vec(200.0, 650.0), "#c44").with_rotation_speed(0.25));
    builder.add_planet_with_debris(Body::planet(vec(430.0, 520.0), "#4a4"), 4, rng);
    builder.add(Body::planet(vec(660.0, 390.0), "#a4a").with_rotation_speed(-0.35));
    builder.add(Body::goal_planet(vec(890.0, 260.0), "#46c", "#fd0"));
    builder.add(Body::spawner(
        vec(-100.0, 455.0),
        SpawnerState::new(0.4, 0.0).with_spawn_speed(0.12),
    ));
    builder.add(Body::spawner(
        vec(SCREEN_WIDTH + 100.0, 585.0),
        SpawnerState::new(0.4, PI).with_spawn_speed(0.12),
    ));
    builder.build()
}

/// Free-play universe: no goal, no hazards, just two planets to hop between
pub fn sandbox() -> Result<Universe, UniverseError> {
    UniverseBuilder::new()
        .with_body(Body::player(vec(300.0, 200.0), 0.0))
        .with_body(Body::planet(vec(300.0, 300.0), "#f00"))
        .with_body(Body::planet(vec(600.0, 300.0), "#33f"))
        .build()
}

/// End screen; the player can still hop between the decorative planets
fn congratulations() -> Result<Universe, UniverseError> {
    UniverseBuilder::new()
        .with_body(Body::player(vec(450.0, 500.0), 0.0))
        .with_body(Body::planet(vec(450.0, 500.0), "#fd0").with_rotation_speed(0.5))
        .with_body(Body::planet(vec(670.0, 500.0), "#4a4").with_rotation_speed(-0.5))
        .with_body(Body::text(
            vec(SCREEN_WIDTH / 2.0, 220.0),
            "You made it home!",
            48.0,
        ))
        .with_body(Body::text(
            vec(SCREEN_WIDTH / 2.0, 280.0),
            "Press R to start over",
            24.0,
        ))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_level_is_a_valid_universe() {
        let mut rng = StdRng::seed_from_u64(42);
        for index in 0..=LEVEL_COUNT {
            let universe = level(index, &mut rng).expect("level builds");
            assert!(universe.player().is_ok(), "level {index} has a player");
        }
    }

    #[test]
    fn levels_past_the_end_resolve_to_the_end_screen() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = level(LEVEL_COUNT, &mut rng).unwrap();
        let b = level(LEVEL_COUNT + 7, &mut rng).unwrap();
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn the_sandbox_has_no_goal_and_no_score_target() {
        let universe = sandbox().unwrap();
        assert!(universe.player().is_ok());
        assert_eq!(universe.target_goal_points, None);
        let goals = universe
            .iter()
            .filter(|(_, body)| matches!(body.kind, BodyKind::GoalPlanet { .. }))
            .count();
        assert_eq!(goals, 0);
        let planets = universe
            .iter()
            .filter(|(_, body)| body.is_landable())
            .count();
        assert_eq!(planets, 2);
    }

    #[test]
    fn the_harvest_level_sets_a_score_target() {
        let mut rng = StdRng::seed_from_u64(42);
        let universe = level(3, &mut rng).unwrap();
        assert_eq!(universe.target_goal_points, Some(8));
        let debris = universe
            .iter()
            .filter(|(_, body)| body.collectible_points().is_some())
            .count();
        assert_eq!(debris, 12);
    }
}
