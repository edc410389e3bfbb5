//! Tuning constants and the arena layout.

/// Arena layout: `#` wall, `.` pellet, `o` power pellet, space empty.
/// The border must be solid wall; the grid queries treat everything
/// outside it as wall too.
pub const MAZE_LAYOUT: [&str; 7] = [
    "#######",
    "#..o..#",
    "#.###.#",
    "#.....#",
    "#o###o#",
    "#.....#",
    "#######",
];

pub const PLAYER_START: (i32, i32) = (1, 1);
pub const GHOST_STARTS: [(i32, i32); 2] = [(5, 1), (5, 5)];

pub const TILE_SIZE: f32 = 64.0;

// Speeds are pixels per simulation step.
pub const PLAYER_SPEED: f32 = 3.0;
pub const GHOST_SPEED: f32 = 2.5;
pub const FRIGHTENED_SPEED: f32 = 1.5;

/// Tolerance for tile-center detection. Must stay larger than the largest
/// per-step delta modulo the tile size, or agents can step over a center
/// without ever being allowed to turn there.
pub const CENTER_TOLERANCE: f32 = 2.0;

pub const POWER_DURATION: f32 = 6.0;
pub const START_LIVES: u32 = 3;

pub const PELLET_SCORE: u32 = 10;
pub const POWER_PELLET_SCORE: u32 = 50;
pub const GHOST_SCORE: u32 = 200;

pub const PLAYER_RADIUS: f32 = TILE_SIZE * 0.35;
pub const GHOST_RADIUS: f32 = TILE_SIZE * 0.35;
/// A capture needs visual overlap, not an edge touch.
pub const CAPTURE_DISTANCE: f32 = (PLAYER_RADIUS + GHOST_RADIUS) * 0.8;

pub const MOUTH_STEP: i32 = 6;
pub const MOUTH_MAX: i32 = 45;

pub const DEFAULT_TICK_MS: u64 = 16;
pub const DEFAULT_RENDER_FPS: u64 = 120;
pub const DEFAULT_SEED: u64 = 1;
