//! Physics module for gravity accumulation and collision resolution
//!
//! Deliberately simplified, discrete-step physics tuned for gameplay feel:
//! circle-only collisions and a softened inverse-square force law.

pub mod collision;
pub mod gravity;

pub use collision::{circles_intersect, resolve_collisions};
pub use gravity::accumulate_acceleration;
