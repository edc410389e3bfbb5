//! Diff-based terminal renderer: redraws only the cells that changed.

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::game::{Game, SessionState};
use crate::maze::Tile;

pub const CELL_W: usize = 2;

const GHOST_COLORS: [Color; 2] = [Color::Red, Color::Cyan];
// Frightened ghosts flash white in the last stretch of their countdown.
const FLASH_WINDOW: f32 = 2.0;

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    PlayerOpen,
    PlayerClosed,
    Ghost,
    Frightened,
    Wall,
    Empty,
    Pellet,
    Power,
}

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    glyph: Glyph,
    color: Color,
}

pub struct Renderer {
    width: usize,
    height: usize,
    last: Vec<Cell>,
    last_hud: String,
    last_banner: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            last: vec![
                Cell {
                    glyph: Glyph::Empty,
                    color: Color::Reset,
                };
                width * height
            ],
            last_hud: String::new(),
            last_banner: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }

    /// Force a full redraw on the next frame (restart, resize, ...).
    pub fn invalidate(&mut self) {
        self.needs_full = true;
    }
}

pub fn render(stdout: &mut Stdout, game: &Game, renderer: &mut Renderer) -> io::Result<()> {
    let needed_h = (renderer.height + 2) as u16;
    let needed_w = (renderer.width * CELL_W) as u16;

    stdout.queue(MoveTo(0, 0))?;

    let (term_w, term_h) = terminal::size()?;
    if term_w < needed_w || term_h < needed_h {
        stdout.queue(Clear(ClearType::All))?;
        let msg = format!(
            "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
            needed_w, needed_h, term_w, term_h
        );
        stdout.queue(Print(msg))?;
        stdout.flush()?;
        renderer.needs_full = true;
        return Ok(());
    }

    let origin_x = (term_w - needed_w) / 2;
    let origin_y = (term_h - needed_h) / 2 + 1;
    if origin_x != renderer.origin_x || origin_y != renderer.origin_y {
        renderer.origin_x = origin_x;
        renderer.origin_y = origin_y;
        renderer.needs_full = true;
    }
    if renderer.needs_full {
        stdout.queue(Clear(ClearType::All))?;
    }

    let hud = format!(
        "Score: {}  Lives: {}  Pellets: {}  Power: {:.1}s  (q quit)",
        game.player.score,
        game.player.lives,
        game.pellets.len() + game.power_pellets.len(),
        game.power_timer.max(0.0),
    );
    if renderer.needs_full || hud != renderer.last_hud {
        stdout.queue(MoveTo(renderer.origin_x, renderer.origin_y - 1))?;
        stdout.queue(SetForegroundColor(Color::White))?;
        stdout.queue(Clear(ClearType::CurrentLine))?;
        stdout.queue(Print(&hud))?;
        stdout.queue(ResetColor)?;
        renderer.last_hud = hud;
    }

    for row in 0..renderer.height {
        for col in 0..renderer.width {
            let cell = cell_for(game, col as i32, row as i32);
            let idx = row * renderer.width + col;
            if renderer.needs_full || cell != renderer.last[idx] {
                renderer.last[idx] = cell;
                draw_cell(stdout, renderer, col, row, cell)?;
            }
        }
    }

    let banner = match game.state {
        SessionState::Playing => String::new(),
        SessionState::Won => format!("YOU WIN! Score: {}  (r restart, q quit)", game.player.score),
        SessionState::Lost => format!(
            "GAME OVER. Score: {}  (r restart, q quit)",
            game.player.score
        ),
    };
    if renderer.needs_full || banner != renderer.last_banner {
        stdout.queue(MoveTo(
            renderer.origin_x,
            renderer.origin_y + renderer.height as u16,
        ))?;
        stdout.queue(Clear(ClearType::CurrentLine))?;
        stdout.queue(SetForegroundColor(if game.state == SessionState::Won {
            Color::Green
        } else {
            Color::Red
        }))?;
        stdout.queue(Print(&banner))?;
        stdout.queue(ResetColor)?;
        renderer.last_banner = banner;
    }
    renderer.needs_full = false;

    stdout.flush()?;
    Ok(())
}

fn cell_for(game: &Game, col: i32, row: i32) -> Cell {
    if game.player.grid == (col, row) && game.player.alive {
        return Cell {
            glyph: if game.player.mouth_open() {
                Glyph::PlayerOpen
            } else {
                Glyph::PlayerClosed
            },
            color: Color::Yellow,
        };
    }
    for (idx, ghost) in game.ghosts.iter().enumerate() {
        if ghost.grid != (col, row) {
            continue;
        }
        if ghost.frightened {
            let flashing = ghost.frightened_timer < FLASH_WINDOW
                && (ghost.frightened_timer * 4.0) as i32 % 2 == 0;
            return Cell {
                glyph: Glyph::Frightened,
                color: if flashing { Color::White } else { Color::Blue },
            };
        }
        return Cell {
            glyph: Glyph::Ghost,
            color: GHOST_COLORS[idx % GHOST_COLORS.len()],
        };
    }
    // Pellets live in the session's sets, not the immutable grid.
    if game.pellets.contains(&(col, row)) {
        return Cell {
            glyph: Glyph::Pellet,
            color: Color::White,
        };
    }
    if game.power_pellets.contains(&(col, row)) {
        return Cell {
            glyph: Glyph::Power,
            color: Color::Magenta,
        };
    }
    match game.maze.tile(col, row) {
        Tile::Wall => Cell {
            glyph: Glyph::Wall,
            color: Color::Blue,
        },
        _ => Cell {
            glyph: Glyph::Empty,
            color: Color::Reset,
        },
    }
}

fn draw_cell(
    stdout: &mut Stdout,
    renderer: &Renderer,
    col: usize,
    row: usize,
    cell: Cell,
) -> io::Result<()> {
    let (text, color) = match cell.glyph {
        Glyph::PlayerOpen => ("😃", cell.color),
        Glyph::PlayerClosed => ("😶", cell.color),
        Glyph::Ghost => ("👻", cell.color),
        Glyph::Frightened => ("😱", cell.color),
        Glyph::Wall => ("██", cell.color),
        Glyph::Empty => ("  ", cell.color),
        Glyph::Pellet => ("· ", cell.color),
        Glyph::Power => ("● ", cell.color),
    };
    let x_pos = renderer.origin_x + (col * CELL_W) as u16;
    let y_pos = renderer.origin_y + row as u16;
    stdout.queue(MoveTo(x_pos, y_pos))?;
    stdout.queue(SetForegroundColor(color))?;
    stdout.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    if w < CELL_W {
        for _ in 0..(CELL_W - w) {
            stdout.queue(Print(' '))?;
        }
    }
    stdout.queue(ResetColor)?;
    Ok(())
}
