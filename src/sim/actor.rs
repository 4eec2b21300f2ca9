//! The one entity type in the game
//!
//! Robots, banners, and artifacts all share this shape; what an actor *is*
//! comes from the cast role it lives under, not from its type.

use serde::{Deserialize, Serialize};

use super::geometry::{Color, Point, Velocity, wrap_position};
use crate::consts::DEFAULT_FONT_SIZE;

/// A drawable, positioned, movable entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Cast-assigned id, unique for the life of the cast.
    pub id: u32,
    pub position: Point,
    pub velocity: Velocity,
    /// Glyph (or banner line) drawn at `position`.
    pub text: String,
    pub font_size: u32,
    pub color: Color,
    /// Score delta awarded when this actor is collected.
    pub points: i64,
}

impl Actor {
    /// A blank white actor at the origin. The cast assigns the id on add.
    pub fn new() -> Self {
        Self {
            id: 0,
            position: Point::ZERO,
            velocity: Velocity::ZERO,
            text: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            color: Color::WHITE,
            points: 0,
        }
    }

    /// Advance position by velocity, wrapped into `[0, max_x) x [0, max_y)`.
    pub fn move_next(&mut self, max_x: i32, max_y: i32) {
        self.position = wrap_position(self.position + self.velocity, max_x, max_y);
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_next_advances_by_velocity() {
        let mut actor = Actor::new();
        actor.position = Point::new(30, 30);
        actor.velocity = Velocity::new(15, -15);

        actor.move_next(900, 600);
        assert_eq!(actor.position, Point::new(45, 15));
    }

    #[test]
    fn test_move_next_wraps_at_edges() {
        let mut actor = Actor::new();
        actor.position = Point::new(885, 0);
        actor.velocity = Velocity::new(30, -15);

        actor.move_next(900, 600);
        assert_eq!(actor.position, Point::new(15, 585));
    }

    #[test]
    fn test_move_next_falls_in_from_above() {
        // Artifacts spawn above the field; a downward velocity walks the
        // wrapped position toward the visible top rows.
        let mut actor = Actor::new();
        actor.position = Point::new(150, -45);
        actor.velocity = Velocity::new(0, 5);

        actor.move_next(900, 600);
        assert_eq!(actor.position, Point::new(150, 560));
    }
}
