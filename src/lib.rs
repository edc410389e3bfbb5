//! Maze-chase arcade game.
//!
//! The simulation core (grid-constrained continuous movement, buffered
//! turns, random-at-intersection adversaries, pellet and power-mode
//! scoring, collision resolution) lives in [`maze`], [`player`], [`ghost`]
//! and [`game`]. It is fixed-step, single-threaded and free of terminal
//! concerns; [`render`] and the binary wrap it in a crossterm frontend.

pub mod constants;
pub mod game;
pub mod ghost;
pub mod maze;
pub mod player;
pub mod render;
