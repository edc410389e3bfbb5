//! Session state: pellet sets, power mode, collisions, terminal outcomes.

use std::collections::HashSet;

use crate::constants::{
    CAPTURE_DISTANCE, GHOST_SCORE, GHOST_STARTS, MAZE_LAYOUT, PELLET_SCORE, PLAYER_START,
    POWER_DURATION, POWER_PELLET_SCORE,
};
use crate::ghost::Ghost;
use crate::maze::{Dir, Maze, Tile};
use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Won,
    Lost,
}

pub struct Game {
    pub maze: Maze,
    pub player: Player,
    pub ghosts: Vec<Ghost>,
    pub pellets: HashSet<(i32, i32)>,
    pub power_pellets: HashSet<(i32, i32)>,
    /// Session-wide power window, surfaced on the HUD. Each ghost runs its
    /// own frightened countdown started at the same instant; the two layers
    /// are deliberately not resynchronized.
    pub power_timer: f32,
    pub state: SessionState,
    seed: u64,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        let maze = Maze::new(&MAZE_LAYOUT);

        let mut pellets = HashSet::new();
        let mut power_pellets = HashSet::new();
        for row in 0..maze.height() {
            for col in 0..maze.width() {
                match maze.tile(col, row) {
                    Tile::Pellet => {
                        pellets.insert((col, row));
                    }
                    Tile::Power => {
                        power_pellets.insert((col, row));
                    }
                    Tile::Wall | Tile::Empty => {}
                }
            }
        }

        let ghosts = GHOST_STARTS
            .iter()
            .enumerate()
            .map(|(i, start)| Ghost::new(*start, seed.wrapping_add(i as u64)))
            .collect();

        Self {
            maze,
            player: Player::new(PLAYER_START),
            ghosts,
            pellets,
            power_pellets,
            power_timer: 0.0,
            state: SessionState::Playing,
            seed,
        }
    }

    /// Full reconstruction: fresh pellets, zeroed score, full lives, same
    /// seed. The only way back from a terminal state.
    pub fn reset(&mut self) {
        *self = Game::new(self.seed);
    }

    pub fn power_mode_active(&self) -> bool {
        self.power_timer > 0.0
    }

    /// Advance the session by one fixed step. A no-op once the session is
    /// won or lost.
    pub fn step(&mut self, dt: f32, requested: Option<Dir>) {
        if self.state != SessionState::Playing {
            return;
        }

        if requested.is_some() {
            self.player.next_dir = requested;
        }
        self.player.update(&self.maze);
        for ghost in &mut self.ghosts {
            ghost.update(dt, &self.maze);
        }

        self.consume_pellets();
        if self.power_timer > 0.0 {
            self.power_timer = (self.power_timer - dt).max(0.0);
        }
        self.handle_collisions();
        if self.state == SessionState::Playing
            && self.pellets.is_empty()
            && self.power_pellets.is_empty()
        {
            self.state = SessionState::Won;
        }
    }

    fn consume_pellets(&mut self) {
        let tile = self.player.grid;
        if self.pellets.remove(&tile) {
            self.player.score += PELLET_SCORE;
        }
        if self.power_pellets.remove(&tile) {
            self.player.score += POWER_PELLET_SCORE;
            self.power_timer = POWER_DURATION;
            // Simultaneous, full-strength activation for every ghost,
            // whatever its previous countdown was.
            for ghost in &mut self.ghosts {
                ghost.set_frightened(POWER_DURATION);
            }
        }
    }

    fn handle_collisions(&mut self) {
        let mut fatal = false;
        for ghost in &mut self.ghosts {
            if ghost.pos.distance(self.player.pos) >= CAPTURE_DISTANCE {
                continue;
            }
            if ghost.frightened {
                self.player.score += GHOST_SCORE;
                ghost.reset_to_start();
            } else {
                // First lethal contact wins; the rest of the frame's
                // collisions are moot.
                fatal = true;
                break;
            }
        }

        if fatal {
            self.player.lives -= 1;
            if self.player.lives == 0 {
                self.player.alive = false;
                self.state = SessionState::Lost;
            } else {
                self.respawn_after_capture();
            }
        }
    }

    fn respawn_after_capture(&mut self) {
        self.player.reset_to_start(PLAYER_START);
        for ghost in &mut self.ghosts {
            ghost.reset_to_start();
        }
        self.power_timer = 0.0;
    }
}
