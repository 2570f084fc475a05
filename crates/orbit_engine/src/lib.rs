//! # Orbit Engine
//!
//! The simulation core of Planet Hoppers: a 2D arcade universe where a
//! player charges jumps off spinning planets, rides gravity between them,
//! collects orbiting debris, and dodges asteroids.
//!
//! ## Features
//!
//! - **Softened N-body gravity**: every massed free body is pulled by every
//!   other massed body under a softened inverse-square law
//! - **Charge-and-jump player**: a triangular-wave jump charge released into
//!   an impulse along the player's orientation
//! - **Orbital debris**: collectibles whose positions are reconstructed from
//!   their orbit state every frame
//! - **Asteroid spawners**: periodic hazard emitters that catch up correctly
//!   over large frame deltas
//! - **Host-agnostic rendering**: the scene is emitted as primitive fill
//!   commands into any [`render::RenderSink`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use orbit_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let universe = UniverseBuilder::new()
//!         .with_body(Body::player(vec(100.0, 60.0), 0.0))
//!         .with_body(Body::planet(vec(100.0, 100.0), "#f00"))
//!         .with_body(Body::goal_planet(vec(500.0, 400.0), "#00f", "#ff0"))
//!         .build()?;
//!     let mut engine = Engine::new(universe, SimulationConfig::default())?;
//!
//!     engine.on_jump_input_down();
//!     for frame in 0..600 {
//!         let events = engine.on_frame(f64::from(frame) * 16.0)?;
//!         if events.iter().any(|event| event.is_win()) {
//!             break;
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod body;
pub mod config;
pub mod events;
pub mod foundation;
pub mod interaction;
pub mod physics;
pub mod render;
pub mod universe;

mod engine;

pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        body::{Body, BodyKind, Circle, Orbit, PlayerState, SpawnerState, TextBlock},
        config::{Config, ConfigError, SimulationConfig},
        events::GameEvent,
        foundation::{
            collections::BodyHandle,
            math::{vec, Vec2},
            time::Timer,
        },
        render::{DrawCommand, RecordingSink, RenderSink},
        universe::{Universe, UniverseBuilder, UniverseError},
        Engine, EngineError,
    };
}
