//! Headless service implementations
//!
//! `ScriptedKeyboard` replays a fixed input script; `HeadlessVideo` is a
//! frame-budgeted virtual window that records every draw submission. Both
//! the demo binary and the tests run the director against these.

use std::collections::VecDeque;

use log::info;
use serde::Serialize;

use super::{KeyboardService, VideoService};
use crate::consts::CELL_SIZE;
use crate::sim::{Actor, Direction, Point, Velocity};

/// Replays a queued sequence of robot directions, then holds still. The
/// artifact direction is a constant.
#[derive(Debug, Clone)]
pub struct ScriptedKeyboard {
    script: VecDeque<Direction>,
    artifact_velocity: Velocity,
}

impl ScriptedKeyboard {
    pub fn new(
        script: impl IntoIterator<Item = Direction>,
        artifact_velocity: Velocity,
    ) -> Self {
        Self {
            script: script.into_iter().collect(),
            artifact_velocity,
        }
    }
}

impl KeyboardService for ScriptedKeyboard {
    fn robot_direction(&mut self) -> Velocity {
        self.script.pop_front().unwrap_or_default().velocity(CELL_SIZE)
    }

    fn artifact_direction(&mut self) -> Velocity {
        self.artifact_velocity
    }
}

/// One recorded draw submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawnActor {
    pub id: u32,
    pub position: Point,
    pub text: String,
}

/// Everything submitted between one clear and the following flush.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    pub actors: Vec<DrawnActor>,
}

/// A virtual window with a fixed frame budget. The window reports open
/// until the budget is spent or it is closed; each flush spends one frame.
#[derive(Debug, Clone)]
pub struct HeadlessVideo {
    width: i32,
    height: i32,
    frame_budget: usize,
    open: bool,
    pending: Vec<DrawnActor>,
    frames: Vec<Frame>,
}

impl HeadlessVideo {
    pub fn new(width: i32, height: i32, frame_budget: usize) -> Self {
        Self {
            width,
            height,
            frame_budget,
            open: false,
            pending: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Frames flushed so far, oldest first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

impl VideoService for HeadlessVideo {
    fn open_window(&mut self) {
        self.open = true;
        info!(
            "window open, {}x{}, budget {} frames",
            self.width, self.height, self.frame_budget
        );
    }

    fn is_window_open(&self) -> bool {
        self.open && self.frames.len() < self.frame_budget
    }

    fn close_window(&mut self) {
        self.open = false;
        info!("window closed after {} frames", self.frames.len());
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn clear_buffer(&mut self) {
        self.pending.clear();
    }

    fn draw_actors(&mut self, actors: &[&Actor]) {
        self.pending.extend(actors.iter().map(|actor| DrawnActor {
            id: actor.id,
            position: actor.position,
            text: actor.text.clone(),
        }));
    }

    fn flush_buffer(&mut self) {
        self.frames.push(Frame {
            actors: std::mem::take(&mut self.pending),
        });
    }
}
