//! Adversary agent: random heading choice at tile centers under the
//! anti-reversal policy, with a per-instance seeded random source.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::constants::{FRIGHTENED_SPEED, GHOST_SPEED};
use crate::maze::{is_at_tile_center, position_to_tile, tile_to_position, Dir, Maze, Vec2};

pub struct Ghost {
    start: (i32, i32),
    pub pos: Vec2,
    pub grid: (i32, i32),
    pub dir: Dir,
    pub frightened: bool,
    pub frightened_timer: f32,
    // Private source so one ghost's draws never shift another's sequence.
    rng: SmallRng,
}

impl Ghost {
    pub fn new(start: (i32, i32), seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let dir = Dir::ALL[rng.gen_range(0..Dir::ALL.len())];
        Self {
            start,
            pos: tile_to_position(start.0, start.1),
            grid: start,
            dir,
            frightened: false,
            frightened_timer: 0.0,
            rng,
        }
    }

    /// Full-strength activation; overwrites any countdown already running.
    pub fn set_frightened(&mut self, duration: f32) {
        self.frightened = true;
        self.frightened_timer = duration;
    }

    /// Respawn at the start tile with a fresh heading. The random source
    /// is kept, not re-seeded.
    pub fn reset_to_start(&mut self) {
        self.pos = tile_to_position(self.start.0, self.start.1);
        self.grid = self.start;
        self.dir = Dir::ALL[self.rng.gen_range(0..Dir::ALL.len())];
        self.frightened = false;
        self.frightened_timer = 0.0;
    }

    pub fn update(&mut self, dt: f32, maze: &Maze) {
        if self.frightened {
            self.frightened_timer -= dt;
            if self.frightened_timer <= 0.0 {
                self.frightened = false;
                self.frightened_timer = 0.0;
            }
        }

        let speed = if self.frightened {
            FRIGHTENED_SPEED
        } else {
            GHOST_SPEED
        };

        if is_at_tile_center(self.pos) {
            self.choose_heading(maze);
        }

        let candidate = self.pos + self.dir.delta() * speed;
        let (col, row) = position_to_tile(candidate);
        if !maze.is_wall(col, row) {
            self.pos = candidate;
        } else if is_at_tile_center(self.pos) {
            // The chosen step already reaches into a wall at this speed;
            // stay put and re-draw for the next frame's attempt.
            let (col, row) = self.grid;
            let options = maze.legal_headings(col, row);
            let forward: Vec<Dir> = options
                .iter()
                .copied()
                .filter(|d| *d != self.dir.opposite())
                .collect();
            let candidates = if forward.is_empty() { options } else { forward };
            if let Some(dir) = candidates.choose(&mut self.rng) {
                self.dir = *dir;
            }
        }

        self.grid = position_to_tile(self.pos);
    }

    /// Uniform draw over the legal headings, excluding the immediate
    /// reverse while any alternative exists. A dead end leaves only the
    /// reverse, which is then taken.
    fn choose_heading(&mut self, maze: &Maze) {
        let (col, row) = self.grid;
        let options = maze.legal_headings(col, row);
        if options.is_empty() {
            return;
        }
        let candidates: Vec<Dir> = if options.contains(&self.dir) && options.len() > 1 {
            options
                .iter()
                .copied()
                .filter(|d| *d != self.dir.opposite())
                .collect()
        } else {
            options.clone()
        };
        let candidates = if candidates.is_empty() {
            options
        } else {
            candidates
        };
        if let Some(dir) = candidates.choose(&mut self.rng) {
            self.dir = *dir;
        }
    }
}
