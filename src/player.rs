//! Player agent: buffered turns, per-step advance, wall stop.

use crate::constants::{MOUTH_MAX, MOUTH_STEP, PLAYER_SPEED, START_LIVES};
use crate::maze::{is_at_tile_center, position_to_tile, tile_to_position, Dir, Maze, Vec2};

pub struct Player {
    pub pos: Vec2,
    pub grid: (i32, i32),
    pub dir: Option<Dir>,
    /// Buffered turn request; committed only at a tile center when the
    /// target tile is open, superseded by later requests, never cleared.
    pub next_dir: Option<Dir>,
    pub score: u32,
    pub lives: u32,
    pub alive: bool,
    mouth_angle: i32,
    mouth_opening: bool,
}

impl Player {
    pub fn new(start: (i32, i32)) -> Self {
        Self {
            pos: tile_to_position(start.0, start.1),
            grid: start,
            dir: None,
            next_dir: None,
            score: 0,
            lives: START_LIVES,
            alive: true,
            mouth_angle: 0,
            mouth_opening: true,
        }
    }

    /// Back to the start tile after a capture. Score, lives and the alive
    /// flag persist across a respawn.
    pub fn reset_to_start(&mut self, start: (i32, i32)) {
        self.pos = tile_to_position(start.0, start.1);
        self.grid = start;
        self.dir = None;
        self.next_dir = None;
    }

    pub fn update(&mut self, maze: &Maze) {
        // Turns commit at tile centers only; a request made mid-tile
        // waits here until the next center, so the player cannot clip
        // through a wall corner.
        if let Some(next) = self.next_dir {
            if self.dir != Some(next) && is_at_tile_center(self.pos) {
                let (col, row) = position_to_tile(self.pos);
                let (dx, dy) = next.offset();
                if !maze.is_wall(col + dx, row + dy) {
                    self.dir = Some(next);
                }
            }
        }

        if let Some(dir) = self.dir {
            let candidate = self.pos + dir.delta() * PLAYER_SPEED;
            let (col, row) = position_to_tile(candidate);
            if !maze.is_wall(col, row) {
                self.pos = candidate;
            } else {
                // Snap exactly onto the current tile's center so repeated
                // wall hits cannot accumulate drift.
                let (col, row) = position_to_tile(self.pos);
                self.pos = tile_to_position(col, row);
                self.dir = None;
            }
        }

        self.grid = position_to_tile(self.pos);

        if self.mouth_opening {
            self.mouth_angle = (self.mouth_angle + MOUTH_STEP).min(MOUTH_MAX);
            if self.mouth_angle == MOUTH_MAX {
                self.mouth_opening = false;
            }
        } else {
            self.mouth_angle = (self.mouth_angle - MOUTH_STEP).max(0);
            if self.mouth_angle == 0 {
                self.mouth_opening = true;
            }
        }
    }

    pub fn mouth_open(&self) -> bool {
        self.mouth_angle > MOUTH_MAX / 2
    }
}
