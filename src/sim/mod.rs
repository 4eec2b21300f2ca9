//! Deterministic gameplay data
//!
//! Everything the director mutates lives here. This module must stay pure
//! and deterministic:
//! - Seeded RNG only (passed in, never constructed here)
//! - Stable iteration order (insertion order per role, ids for identity)
//! - No rendering or platform dependencies

pub mod actor;
pub mod cast;
pub mod geometry;
pub mod spawn;

pub use actor::Actor;
pub use cast::{Cast, Role};
pub use geometry::{Color, Direction, Point, Velocity, wrap_position};
pub use spawn::{GEM_GLYPH, GEM_POINTS, ROCK_GLYPH, ROCK_POINTS, spawn_artifact};
