//! Universe container
//!
//! A [`Universe`] exclusively owns every body in play, the running score,
//! and the optional win threshold. Bodies are stored in a slot-map arena so
//! that cross-body references (debris orbits, player attachments) are stable
//! handles rather than raw pointers.

pub mod builder;

pub use builder::UniverseBuilder;

use crate::body::{Body, BodyKind};
use crate::foundation::collections::{BodyHandle, HandleMap};
use thiserror::Error;

/// Universe-level errors
#[derive(Error, Debug)]
pub enum UniverseError {
    /// The update loop requires exactly one player body to exist
    #[error("universe contains no player body")]
    PlayerMissing,

    /// Level data constructed more than one player
    #[error("universe contains {0} player bodies, expected exactly one")]
    MultiplePlayers(usize),
}

/// Mutable collection of bodies plus score and win threshold
#[derive(Debug, Clone, Default)]
pub struct Universe {
    bodies: HandleMap<Body>,
    /// Accumulated score
    pub points: u32,
    /// Score at which the level is complete, if the level sets one
    pub target_goal_points: Option<u32>,
}

impl Universe {
    /// Create an empty universe
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body, returning its stable handle
    pub fn insert(&mut self, body: Body) -> BodyHandle {
        self.bodies.insert(body)
    }

    /// Remove a body
    ///
    /// Removing a planet cascades: debris orbiting it is removed too, and a
    /// player attached to it is released into free fall. This keeps every
    /// stored [`BodyHandle`] pointing at a live body.
    pub fn remove(&mut self, handle: BodyHandle) -> Option<Body> {
        let removed = self.bodies.remove(handle)?;

        if removed.is_landable() {
            self.bodies.retain(|_, body| {
                !matches!(&body.kind, BodyKind::Debris(orbit) if orbit.planet == handle)
            });
            for body in self.bodies.values_mut() {
                if let BodyKind::Player(state) = &mut body.kind {
                    if state.attachment.is_some_and(|a| a.planet == handle) {
                        log::debug!("planet removed from under the player, releasing");
                        body.release();
                    }
                }
            }
        }

        Some(removed)
    }

    /// Get a body by handle
    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle)
    }

    /// Get a mutable body by handle
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle)
    }

    /// Whether the handle still points at a live body
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.bodies.contains_key(handle)
    }

    /// Number of bodies in play
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the universe holds no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Snapshot of all live handles
    ///
    /// Update phases iterate over a snapshot so that appends (spawners) and
    /// removals (collisions) during the pass never invalidate the traversal.
    pub fn handles(&self) -> Vec<BodyHandle> {
        self.bodies.keys().collect()
    }

    /// Iterate over all bodies
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.bodies.iter()
    }

    /// Find the player body
    ///
    /// Exactly one player must exist whenever the update loop runs; a
    /// missing player is an invariant violation, not a gameplay event.
    pub fn player(&self) -> Result<BodyHandle, UniverseError> {
        self.bodies
            .iter()
            .find(|(_, body)| body.is_player())
            .map(|(handle, _)| handle)
            .ok_or(UniverseError::PlayerMissing)
    }

    /// Add collected points to the score
    pub fn add_points(&mut self, points: u32) {
        self.points += points;
    }

    /// Whether the score has reached the win threshold, if one is set
    pub fn target_reached(&self) -> bool {
        self.target_goal_points
            .is_some_and(|target| self.points >= target)
    }
}
