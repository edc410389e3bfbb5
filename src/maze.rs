//! Grid geometry: continuous positions, headings, and wall queries.

use std::ops::{Add, AddAssign, Mul, Sub};

use crate::constants::{CENTER_TOLERANCE, TILE_SIZE};

/// Continuous position in pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    /// Unit vector in pixel space.
    pub fn delta(self) -> Vec2 {
        match self {
            Dir::Up => Vec2::new(0.0, -1.0),
            Dir::Down => Vec2::new(0.0, 1.0),
            Dir::Left => Vec2::new(-1.0, 0.0),
            Dir::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Tile-space offset.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
    Pellet,
    Power,
}

/// Immutable tile grid. Pellet consumption is tracked by the session's
/// coordinate sets, never by mutating the grid.
#[derive(Clone, Debug)]
pub struct Maze {
    width: i32,
    height: i32,
    grid: Vec<Vec<Tile>>,
}

impl Maze {
    pub fn new(layout: &[&str]) -> Self {
        assert!(!layout.is_empty(), "layout has rows");
        let grid: Vec<Vec<Tile>> = layout
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        '#' => Tile::Wall,
                        '.' => Tile::Pellet,
                        'o' => Tile::Power,
                        _ => Tile::Empty,
                    })
                    .collect()
            })
            .collect();
        let width = grid[0].len() as i32;
        assert!(
            grid.iter().all(|row| row.len() as i32 == width),
            "layout is rectangular"
        );
        Self {
            width,
            height: grid.len() as i32,
            grid,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Tile at a coordinate; anything outside the grid reads as wall.
    /// This is the only boundary-containment rule in the game.
    pub fn tile(&self, col: i32, row: i32) -> Tile {
        if col < 0 || row < 0 || col >= self.width || row >= self.height {
            return Tile::Wall;
        }
        self.grid[row as usize][col as usize]
    }

    pub fn is_wall(&self, col: i32, row: i32) -> bool {
        self.tile(col, row) == Tile::Wall
    }

    /// Cardinal headings whose target tile is open, in a fixed order so
    /// random draws stay reproducible.
    pub fn legal_headings(&self, col: i32, row: i32) -> Vec<Dir> {
        Dir::ALL
            .iter()
            .copied()
            .filter(|dir| {
                let (dx, dy) = dir.offset();
                !self.is_wall(col + dx, row + dy)
            })
            .collect()
    }
}

/// Pixel coordinate of a tile's center. Total over all integers; semantic
/// range checking is the caller's problem.
pub fn tile_to_position(col: i32, row: i32) -> Vec2 {
    Vec2::new(
        col as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        row as f32 * TILE_SIZE + TILE_SIZE / 2.0,
    )
}

/// Tile containing a continuous position. Truncates toward the tile
/// origin, not the nearest tile.
pub fn position_to_tile(pos: Vec2) -> (i32, i32) {
    (
        (pos.x / TILE_SIZE).floor() as i32,
        (pos.y / TILE_SIZE).floor() as i32,
    )
}

/// True within a small window around the nearest tile center on both
/// axes. Heading changes are only committed here.
pub fn is_at_tile_center(pos: Vec2) -> bool {
    let (col, row) = position_to_tile(pos);
    let center = tile_to_position(col, row);
    (pos.x - center.x).abs() < CENTER_TOLERANCE && (pos.y - center.y).abs() < CENTER_TOLERANCE
}
