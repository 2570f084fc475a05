//! The body model
//!
//! Everything that exists in a universe is a [`Body`]: one record carrying
//! the kinematic state shared by all bodies, optional capabilities (mass,
//! a collidable circle shape), and a [`BodyKind`] discriminant with the
//! per-kind payload. Behaviour is dispatched on the discriminant instead of
//! an inheritance chain.

pub mod spawner;

pub use spawner::SpawnerState;

use crate::foundation::collections::BodyHandle;
use crate::foundation::math::{vec, Vec2};

/// Fill colour used by the render sink, e.g. `"#f00"`
pub type Texture = String;

/// Default player radius in pixels
pub const PLAYER_RADIUS: f64 = 10.0;
/// Default player mass
pub const PLAYER_MASS: f64 = 100.0;
/// Default planet radius in pixels
pub const PLANET_RADIUS: f64 = 30.0;
/// Default planet mass
pub const PLANET_MASS: f64 = 100.0;
/// Default asteroid radius in pixels
pub const ASTEROID_RADIUS: f64 = 5.0;
/// Default asteroid mass
pub const ASTEROID_MASS: f64 = 5.0;
/// Default debris radius in pixels
pub const DEBRIS_RADIUS: f64 = 5.0;
/// Score value of a single piece of debris
pub const DEBRIS_POINTS: u32 = 1;

/// Collidable circle capability
///
/// Carried by every visible body. `orientation` is kept wrapped to
/// `[0, 2π)` by the update loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Radius in pixels
    pub radius: f64,
    /// Rotation of the body in radians
    pub orientation: f64,
    /// Spin in radians per second (may be zero)
    pub rotation_speed: f64,
    /// Fill colour
    pub texture: Texture,
}

impl Circle {
    /// Create a circle shape with no spin
    pub fn new(radius: f64, texture: impl Into<Texture>) -> Self {
        Self {
            radius,
            orientation: 0.0,
            rotation_speed: 0.0,
            texture: texture.into(),
        }
    }
}

/// A player's rigid binding to a planet's rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetAttachment {
    /// The planet the player is standing on
    pub planet: BodyHandle,
    /// Player orientation relative to the planet's orientation
    pub orientation_offset: f64,
}

/// Player-specific state
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Jump charge in `[0, 100]`
    pub jump_charge: f64,
    /// Direction the triangular-wave charge is currently moving, `+1` or `-1`
    pub jump_charge_direction: f64,
    /// Present exactly while the player is landed on a planet
    pub attachment: Option<PlanetAttachment>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            jump_charge: 0.0,
            jump_charge_direction: 1.0,
            attachment: None,
        }
    }
}

/// Orbital state of a piece of debris
///
/// Debris position is never integrated; it is recomputed every frame from
/// the referenced planet's current position, the altitude, and the orbit
/// location.
#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    /// The planet being orbited (non-owning back-reference)
    pub planet: BodyHandle,
    /// Distance from the planet centre in pixels
    pub altitude: f64,
    /// Angular speed in radians per second
    pub orbit_speed: f64,
    /// Current angle on the orbit in radians
    pub orbit_location: f64,
    /// Score granted when the player collects this debris
    pub points: u32,
}

/// Static text floating in the universe
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// The text to display
    pub text: String,
    /// Font size in pixels
    pub font_size: f64,
}

/// Body discriminant with per-kind payload
#[derive(Debug, Clone, PartialEq)]
pub enum BodyKind {
    /// The player-controlled body
    Player(PlayerState),
    /// A fixed gravitating planet
    Planet,
    /// A planet whose touch completes the level
    GoalPlanet {
        /// Accent colour layered over the base planet
        accent: Texture,
    },
    /// Collectible debris orbiting a planet
    Debris(Orbit),
    /// A hazard body; contact loses the level
    Asteroid,
    /// Periodic asteroid emitter, invisible and non-colliding
    Spawner(SpawnerState),
    /// Static text, invisible to physics
    Text(TextBlock),
}

/// A simulated entity
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Position in pixels
    pub position: Vec2,
    /// Velocity in pixels per millisecond
    pub velocity: Vec2,
    /// Fixed bodies are exempt from velocity integration
    pub is_fixed: bool,
    /// Mass; only massed bodies participate in gravity
    pub mass: Option<f64>,
    /// Collidable circle shape, if the body takes up space
    pub circle: Option<Circle>,
    /// Kind discriminant and payload
    pub kind: BodyKind,
}

impl Body {
    /// Create a player at `position`, initially fixed in place
    pub fn player(position: Vec2, orientation: f64) -> Self {
        let mut circle = Circle::new(PLAYER_RADIUS, "#fff");
        circle.orientation = orientation;
        Self {
            position,
            velocity: vec(0.0, 0.0),
            is_fixed: true,
            mass: Some(PLAYER_MASS),
            circle: Some(circle),
            kind: BodyKind::Player(PlayerState::default()),
        }
    }

    /// Create a fixed planet
    pub fn planet(position: Vec2, texture: impl Into<Texture>) -> Self {
        Self {
            position,
            velocity: vec(0.0, 0.0),
            is_fixed: true,
            mass: Some(PLANET_MASS),
            circle: Some(Circle::new(PLANET_RADIUS, texture)),
            kind: BodyKind::Planet,
        }
    }

    /// Create a goal planet with an accent colour
    pub fn goal_planet(
        position: Vec2,
        texture: impl Into<Texture>,
        accent: impl Into<Texture>,
    ) -> Self {
        Self {
            kind: BodyKind::GoalPlanet {
                accent: accent.into(),
            },
            ..Self::planet(position, texture)
        }
    }

    /// Create a moving asteroid
    pub fn asteroid(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            is_fixed: false,
            mass: Some(ASTEROID_MASS),
            circle: Some(Circle::new(ASTEROID_RADIUS, "#0f0")),
            kind: BodyKind::Asteroid,
        }
    }

    /// Create debris on the given orbit
    ///
    /// Position is recomputed from the orbit on the first update; the
    /// authored position is a placeholder. Debris carries no mass so that
    /// dense rings cannot bend trajectories under the mover-mass force law.
    pub fn debris(orbit: Orbit) -> Self {
        Self {
            position: vec(0.0, 0.0),
            velocity: vec(0.0, 0.0),
            is_fixed: true,
            mass: None,
            circle: Some(Circle::new(DEBRIS_RADIUS, "#ff0")),
            kind: BodyKind::Debris(orbit),
        }
    }

    /// Create an asteroid spawner
    pub fn spawner(position: Vec2, state: SpawnerState) -> Self {
        Self {
            position,
            velocity: vec(0.0, 0.0),
            is_fixed: true,
            mass: None,
            circle: None,
            kind: BodyKind::Spawner(state),
        }
    }

    /// Create a static text block
    pub fn text(position: Vec2, text: impl Into<String>, font_size: f64) -> Self {
        Self {
            position,
            velocity: vec(0.0, 0.0),
            is_fixed: true,
            mass: None,
            circle: None,
            kind: BodyKind::Text(TextBlock {
                text: text.into(),
                font_size,
            }),
        }
    }

    /// Set the circle's rotation speed in radians per second
    #[must_use]
    pub fn with_rotation_speed(mut self, rotation_speed: f64) -> Self {
        if let Some(circle) = self.circle.as_mut() {
            circle.rotation_speed = rotation_speed;
        }
        self
    }

    /// Override the circle radius
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        if let Some(circle) = self.circle.as_mut() {
            circle.radius = radius;
        }
        self
    }

    /// Override the mass
    #[must_use]
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    /// Whether this body is the player
    pub fn is_player(&self) -> bool {
        matches!(self.kind, BodyKind::Player(_))
    }

    /// Whether this body is a planet the player can land on
    pub fn is_landable(&self) -> bool {
        matches!(self.kind, BodyKind::Planet | BodyKind::GoalPlanet { .. })
    }

    /// Score value if this body is collectible
    pub fn collectible_points(&self) -> Option<u32> {
        match &self.kind {
            BodyKind::Debris(orbit) => Some(orbit.points),
            _ => None,
        }
    }

    /// Player payload, if this body is the player
    pub fn player_state(&self) -> Option<&PlayerState> {
        match &self.kind {
            BodyKind::Player(state) => Some(state),
            _ => None,
        }
    }

    /// Mutable player payload, if this body is the player
    pub fn player_state_mut(&mut self) -> Option<&mut PlayerState> {
        match &mut self.kind {
            BodyKind::Player(state) => Some(state),
            _ => None,
        }
    }

    /// Unfix the body; for a player this also clears the attachment
    pub fn release(&mut self) {
        self.is_fixed = false;
        if let BodyKind::Player(state) = &mut self.kind {
            state.attachment = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::vec;

    #[test]
    fn release_clears_player_attachment() {
        let mut player = Body::player(vec(0.0, 0.0), 0.0);
        player
            .player_state_mut()
            .unwrap()
            .attachment = Some(PlanetAttachment {
            planet: BodyHandle::default(),
            orientation_offset: 1.0,
        });

        player.release();

        assert!(!player.is_fixed);
        assert!(player.player_state().unwrap().attachment.is_none());
    }

    #[test]
    fn defaults_match_the_classic_bodies() {
        let planet = Body::planet(vec(1.0, 2.0), "#f00");
        assert!(planet.is_fixed);
        assert_eq!(planet.mass, Some(PLANET_MASS));
        assert_eq!(planet.circle.as_ref().unwrap().radius, PLANET_RADIUS);

        let asteroid = Body::asteroid(vec(0.0, 0.0), vec(0.03, -0.03));
        assert!(!asteroid.is_fixed);
        assert_eq!(asteroid.mass, Some(ASTEROID_MASS));

        let goal = Body::goal_planet(vec(0.0, 0.0), "#333", "#ff0");
        assert!(goal.is_landable());
        assert!(Body::asteroid(vec(0.0, 0.0), vec(0.0, 0.0)).collectible_points().is_none());
    }
}
