//! The game loop
//!
//! One director runs one session: open the window, then poll input, update
//! the world, and draw, once per tick, until the window reports closed.

use log::{debug, info};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::services::{KeyboardService, VideoService};
use crate::sim::{Cast, Role, spawn_artifact};

/// Score at the start of every session.
pub const STARTING_SCORE: i64 = 600;

/// Controls the sequence of play. Owns the score and the spawn RNG.
pub struct Director<K, V> {
    keyboard: K,
    video: V,
    score: i64,
    rng: Pcg32,
}

impl<K: KeyboardService, V: VideoService> Director<K, V> {
    /// A director over the given services, with a seeded spawn RNG.
    pub fn new(keyboard: K, video: V, seed: u64) -> Self {
        Self {
            keyboard,
            video,
            score: STARTING_SCORE,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Current score.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Take the services back, e.g. to read recorded frames after a run.
    pub fn into_services(self) -> (K, V) {
        (self.keyboard, self.video)
    }

    /// Run the session to completion. Opens the window, ticks while it
    /// reports open, then closes it.
    pub fn start_game(&mut self, cast: &mut Cast) {
        self.video.open_window();
        info!("session start, score {}", self.score);

        while self.video.is_window_open() {
            self.get_inputs(cast);
            self.do_updates(cast);
            self.do_outputs(cast);
        }

        self.video.close_window();
        info!("session over, final score {}", self.score);
    }

    /// Apply this tick's directional intent to the robot.
    fn get_inputs(&mut self, cast: &mut Cast) {
        let velocity = self.keyboard.robot_direction();
        cast.first_actor_mut(Role::Robots).velocity = velocity;
    }

    /// Advance the world one tick: banner, robot movement, then per-artifact
    /// collision, spawn, and movement.
    fn do_updates(&mut self, cast: &mut Cast) {
        let max_x = self.video.width();
        let max_y = self.video.height();

        cast.first_actor_mut(Role::Banners).text = format!("Points: {}", self.score);

        let robot_position = {
            let robot = cast.first_actor_mut(Role::Robots);
            robot.move_next(max_x, max_y);
            robot.position
        };

        // The artifact list is mutated mid-loop, so iterate the ids present
        // at tick start; a replacement spawned this tick is not revisited.
        let snapshot: Vec<u32> = cast
            .actors(Role::Artifacts)
            .iter()
            .map(|artifact| artifact.id)
            .collect();

        for id in snapshot {
            let collided = cast
                .actor(Role::Artifacts, id)
                .is_some_and(|artifact| artifact.position == robot_position);

            let mut current = id;
            if collided {
                if let Some(artifact) = cast.remove_actor(Role::Artifacts, id) {
                    self.score += artifact.points;
                    cast.first_actor_mut(Role::Banners).text =
                        format!("Points: {}", self.score);
                    debug!(
                        "collected {} ({:+}) at {}, score {}",
                        artifact.text, artifact.points, robot_position, self.score
                    );
                    current = cast.add_actor(Role::Artifacts, spawn_artifact(&mut self.rng));
                }
            }

            // After a collision, the freshly spawned replacement takes this
            // tick's movement step in place of the collected artifact.
            let velocity = self.keyboard.artifact_direction();
            if let Some(artifact) = cast.actor_mut(Role::Artifacts, current) {
                artifact.velocity = velocity;
                artifact.move_next(max_x, max_y);
            }
        }
    }

    /// Draw every actor and present the frame.
    fn do_outputs(&mut self, cast: &mut Cast) {
        self.video.clear_buffer();
        let actors = cast.all_actors();
        self.video.draw_actors(&actors);
        self.video.flush_buffer();
    }
}
