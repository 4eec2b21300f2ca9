//! Demo-mode input
//!
//! A seeded random walk stands in for a player when nobody is at the
//! controls.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::KeyboardService;
use crate::consts::CELL_SIZE;
use crate::sim::{Direction, Velocity};

/// Artifacts fall five pixels per tick in demo mode.
pub const ARTIFACT_FALL: Velocity = Velocity::new(0, 5);

/// Seeded random-walk robot intent; constant downward artifact intent.
#[derive(Debug, Clone)]
pub struct AutopilotKeyboard {
    rng: Pcg32,
}

impl AutopilotKeyboard {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl KeyboardService for AutopilotKeyboard {
    fn robot_direction(&mut self) -> Velocity {
        let index = self.rng.random_range(0..Direction::ALL.len());
        Direction::ALL[index].velocity(CELL_SIZE)
    }

    fn artifact_direction(&mut self) -> Velocity {
        ARTIFACT_FALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autopilot_is_deterministic_per_seed() {
        let mut a = AutopilotKeyboard::new(5);
        let mut b = AutopilotKeyboard::new(5);
        for _ in 0..32 {
            assert_eq!(a.robot_direction(), b.robot_direction());
        }
    }

    #[test]
    fn test_autopilot_moves_in_cell_steps() {
        let mut keyboard = AutopilotKeyboard::new(11);
        for _ in 0..32 {
            let velocity = keyboard.robot_direction();
            assert!(velocity.x.abs() == CELL_SIZE || velocity.x == 0);
            assert!(velocity.y.abs() == CELL_SIZE || velocity.y == 0);
            assert!(velocity.x == 0 || velocity.y == 0);
        }
    }
}
