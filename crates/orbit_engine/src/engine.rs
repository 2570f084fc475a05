//! Core engine implementation
//!
//! The [`Engine`] is the host-owned session: it holds the universe, the
//! simulation tunables, the input edge state, and the pause flag, and it
//! advances the simulation one frame at a time.
//!
//! Each step runs its phases in a fixed order, never interleaved:
//! 1. the player's jump-charge state machine,
//! 2. per-body self-updates (orbits, spin, spawner emission),
//! 3. gravity accumulation and semi-implicit Euler integration,
//! 4. collision resolution and player interaction.

use crate::body::{Body, BodyKind, PlanetAttachment};
use crate::config::{ConfigError, SimulationConfig};
use crate::events::GameEvent;
use crate::foundation::collections::BodyHandle;
use crate::foundation::math::{from_angle_and_scale, vec, wrap_angle};
use crate::interaction;
use crate::physics;
use crate::universe::{Universe, UniverseError};
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// A universe invariant does not hold (e.g. the player body is missing)
    #[error("universe invariant violated: {0}")]
    Universe(#[from] UniverseError),
}

/// Deferred self-update work that needs a second look at the arena
enum Carry {
    AttachedPlayer(PlanetAttachment),
    Debris,
}

/// The simulation session
///
/// Created at game start, replaced wholesale on restart, and driven by the
/// host's frame callback.
pub struct Engine {
    universe: Universe,
    config: SimulationConfig,
    jump_input_held: bool,
    paused: bool,
    last_frame_ms: Option<f64>,
}

impl Engine {
    /// Create a session over a universe
    pub fn new(universe: Universe, config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!("simulation session created with {} bodies", universe.len());
        Ok(Self {
            universe,
            config,
            jump_input_held: false,
            paused: false,
            last_frame_ms: None,
        })
    }

    /// Advance the simulation to the host's frame timestamp
    ///
    /// While paused this is a no-op that preserves all state, including the
    /// last frame timestamp: the first step after resuming sees the whole
    /// pause span as its delta, and spawners catch up over it.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> Result<Vec<GameEvent>, EngineError> {
        if self.paused {
            return Ok(Vec::new());
        }
        let dt_ms = match self.last_frame_ms {
            Some(last) => timestamp_ms - last,
            None => {
                self.last_frame_ms = Some(timestamp_ms);
                return Ok(Vec::new());
            }
        };
        // a non-advancing timestamp must not re-base the clock, or a
        // misbehaving host would quietly swallow the skipped span
        if dt_ms <= 0.0 {
            log::warn!("frame timestamp did not advance (dt {dt_ms:.3}ms), ignoring");
            return Ok(Vec::new());
        }
        self.last_frame_ms = Some(timestamp_ms);
        self.step(dt_ms)
    }

    /// Run one simulation step over an explicit delta
    ///
    /// Exposed so hosts and tests can drive the simulation deterministically
    /// without a wall clock.
    pub fn step(&mut self, dt_ms: f64) -> Result<Vec<GameEvent>, EngineError> {
        let player = self.universe.player()?;
        let mut events = Vec::new();

        self.update_jump_charge(player, dt_ms);
        self.update_bodies(dt_ms);
        self.integrate_and_resolve(player, dt_ms, &mut events);

        Ok(events)
    }

    /// The jump input was pressed
    pub fn on_jump_input_down(&mut self) {
        self.jump_input_held = true;
    }

    /// The jump input was released
    pub fn on_jump_input_up(&mut self) {
        self.jump_input_held = false;
    }

    /// Stop advancing the simulation; state is preserved, not reset
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume a paused simulation
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Whether the simulation is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Swap in a new universe (level transition or restart)
    pub fn replace_universe(&mut self, universe: Universe) {
        log::info!("universe replaced, {} bodies in play", universe.len());
        self.universe = universe;
        self.jump_input_held = false;
    }

    /// The universe under simulation
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Mutable access to the universe under simulation
    pub fn universe_mut(&mut self) -> &mut Universe {
        &mut self.universe
    }

    /// The active tunables
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Phase 1: charge while held and fixed; release into a jump otherwise
    ///
    /// The charge is a triangular wave: overshoot past the ceiling reflects
    /// back below it with the direction flipped, and undershoot past zero
    /// reflects upward. It is never hard-clamped.
    fn update_jump_charge(&mut self, player: BodyHandle, dt_ms: f64) {
        let rate = self.config.jump_charge_rate();
        let max = self.config.max_jump_charge;
        let release_factor = self.config.jump_release_factor;
        let held = self.jump_input_held;

        let Some(body) = self.universe.get_mut(player) else {
            return;
        };

        if held {
            // charging requires a foothold
            if !body.is_fixed {
                return;
            }
            let Some(state) = body.player_state_mut() else {
                return;
            };
            let mut charge = state.jump_charge + state.jump_charge_direction * rate * dt_ms;
            while charge > max || charge < 0.0 {
                if charge > max {
                    state.jump_charge_direction = -1.0;
                    charge = max - (charge - max);
                } else {
                    state.jump_charge_direction = 1.0;
                    charge = charge.abs();
                }
            }
            state.jump_charge = charge;
        } else {
            let Some(state) = body.player_state_mut() else {
                return;
            };
            let charge = state.jump_charge;
            // nonzero charge with the input released means the jump fires now
            if charge == 0.0 {
                return;
            }
            state.jump_charge = 0.0;
            state.jump_charge_direction = 1.0;
            body.release();
            let orientation = body
                .circle
                .as_ref()
                .map_or(0.0, |circle| circle.orientation);
            body.velocity = from_angle_and_scale(orientation, charge * release_factor);
            log::debug!("jump released at charge {charge:.1}");
        }
    }

    /// Phase 2: per-body self-updates
    ///
    /// Mutates each body's own state only. Spawner output is collected and
    /// appended after the pass so the traversal never observes it.
    fn update_bodies(&mut self, dt_ms: f64) {
        let dt_secs = dt_ms / 1000.0;
        let mut spawned: Vec<Body> = Vec::new();

        for handle in self.universe.handles() {
            let mut carry = None;
            if let Some(body) = self.universe.get_mut(handle) {
                if let Some(circle) = body.circle.as_mut() {
                    circle.orientation =
                        wrap_angle(circle.orientation + circle.rotation_speed * dt_secs);
                }
                carry = match &mut body.kind {
                    BodyKind::Player(state) => state.attachment.map(Carry::AttachedPlayer),
                    BodyKind::Debris(_) => Some(Carry::Debris),
                    BodyKind::Spawner(state) => {
                        let due = state.tick(dt_ms);
                        let velocity = state.spawn_velocity();
                        let position = body.position;
                        for _ in 0..due {
                            spawned.push(Body::asteroid(position, velocity));
                        }
                        None
                    }
                    _ => None,
                };
            }
            match carry {
                Some(Carry::AttachedPlayer(attachment)) => {
                    self.carry_attached_player(handle, attachment);
                }
                Some(Carry::Debris) => self.carry_debris(handle, dt_secs),
                None => {}
            }
        }

        for body in spawned {
            self.universe.insert(body);
        }
    }

    /// Keep an attached player rigidly co-rotating with its planet
    fn carry_attached_player(&mut self, player: BodyHandle, attachment: PlanetAttachment) {
        let Some(planet) = self.universe.get(attachment.planet) else {
            return;
        };
        let planet_position = planet.position;
        let planet_orientation = planet
            .circle
            .as_ref()
            .map_or(0.0, |circle| circle.orientation);
        let planet_radius = planet.circle.as_ref().map_or(0.0, |circle| circle.radius);

        let Some(body) = self.universe.get_mut(player) else {
            return;
        };
        let orientation = wrap_angle(planet_orientation + attachment.orientation_offset);
        let surface_distance =
            planet_radius + body.circle.as_ref().map_or(0.0, |circle| circle.radius);
        if let Some(circle) = body.circle.as_mut() {
            circle.orientation = orientation;
        }
        body.position = planet_position + from_angle_and_scale(orientation, surface_distance);
        body.velocity = vec(0.0, 0.0);
    }

    /// Advance a debris orbit and recompute its position from the planet's
    /// current position
    fn carry_debris(&mut self, debris: BodyHandle, dt_secs: f64) {
        let Some(BodyKind::Debris(orbit)) = self.universe.get(debris).map(|b| &b.kind) else {
            return;
        };
        let Some(planet) = self.universe.get(orbit.planet) else {
            return;
        };
        let planet_position = planet.position;

        let Some(body) = self.universe.get_mut(debris) else {
            return;
        };
        if let BodyKind::Debris(orbit) = &mut body.kind {
            orbit.orbit_location += orbit.orbit_speed * dt_secs;
            let altitude = orbit.altitude;
            let location = orbit.orbit_location;
            body.position = planet_position + from_angle_and_scale(location, altitude);
        }
    }

    /// Phases 3-5: gravity, integration, collisions, player interaction
    fn integrate_and_resolve(
        &mut self,
        player: BodyHandle,
        dt_ms: f64,
        events: &mut Vec<GameEvent>,
    ) {
        let movers: Vec<BodyHandle> = self
            .universe
            .iter()
            .filter(|(_, body)| body.mass.is_some() && !body.is_fixed)
            .map(|(handle, _)| handle)
            .collect();

        let mut player_scanned = false;
        for mover in movers {
            // an earlier mover's collision may have removed this one
            if !self.universe.contains(mover) {
                continue;
            }

            let acc = physics::accumulate_acceleration(&self.universe, mover, &self.config);
            if let Some(body) = self.universe.get_mut(mover) {
                body.velocity += acc * dt_ms;
                if let Some(circle) = body.circle.as_mut() {
                    // bodies visually point along their instantaneous pull
                    circle.orientation = wrap_angle(acc.y.atan2(acc.x));
                }
                let velocity = body.velocity;
                body.position += velocity * dt_ms;
            }

            physics::resolve_collisions(mover, &mut self.universe);

            if mover == player {
                interaction::resolve_player_contacts(&mut self.universe, player, events);
                player_scanned = true;
            }
        }

        // a fixed player still collects debris sweeping through it and is
        // still struck by whatever moved into it this step
        if !player_scanned && self.universe.contains(player) {
            interaction::resolve_player_contacts(&mut self.universe, player, events);
        }
    }
}
