//! Grid geometry primitives
//!
//! Positions are integer pixel coordinates. All transformations produce new
//! values; nothing here is mutated in place.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An integer pixel coordinate on the play field.
pub type Point = IVec2;

/// A per-tick displacement, same representation as [`Point`].
pub type Velocity = IVec2;

/// Wrap a position into `[0, max_x) x [0, max_y)`.
///
/// Euclidean remainder, so positions entering from above the field (negative
/// y) come back in at the far edge rather than sticking to zero.
pub fn wrap_position(position: Point, max_x: i32, max_y: i32) -> Point {
    position.rem_euclid(IVec2::new(max_x, max_y))
}

/// An (r, g, b) triple, each channel in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Discrete directional intent for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// Every direction, for uniform draws.
    pub const ALL: [Direction; 5] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::None,
    ];

    /// Axis-aligned velocity of magnitude `step` (screen y grows downward).
    pub fn velocity(self, step: i32) -> Velocity {
        match self {
            Direction::Up => Velocity::new(0, -step),
            Direction::Down => Velocity::new(0, step),
            Direction::Left => Velocity::new(-step, 0),
            Direction::Right => Velocity::new(step, 0),
            Direction::None => Velocity::ZERO,
        }
    }
}
