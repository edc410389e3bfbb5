use std::io::{self, Stdout};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;

use muncher::constants::{DEFAULT_RENDER_FPS, DEFAULT_SEED, DEFAULT_TICK_MS};
use muncher::game::{Game, SessionState};
use muncher::maze::Dir;
use muncher::render::{render, Renderer};

/// Terminal maze-chase arcade game.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Simulation tick length in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,

    /// Render frame rate cap.
    #[arg(long, default_value_t = DEFAULT_RENDER_FPS)]
    fps: u64,

    /// Base seed for adversary randomness; identical seeds replay
    /// identical ghost behavior.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, &args);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut Stdout, args: &Args) -> Result<()> {
    let mut game = Game::new(args.seed);
    let mut renderer = Renderer::new(game.maze.width() as usize, game.maze.height() as usize);
    let mut requested: Option<Dir> = None;

    let tick = Duration::from_millis(args.tick_ms.max(1));
    let dt = tick.as_secs_f32();
    let frame_time = Duration::from_micros(1_000_000 / args.fps.max(1));
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('r') => {
                        if game.state != SessionState::Playing {
                            game.reset();
                            requested = None;
                            renderer.invalidate();
                        }
                    }
                    KeyCode::Up | KeyCode::Char('k') => requested = Some(Dir::Up),
                    KeyCode::Down | KeyCode::Char('j') => requested = Some(Dir::Down),
                    KeyCode::Left | KeyCode::Char('h') => requested = Some(Dir::Left),
                    KeyCode::Right | KeyCode::Char('l') => requested = Some(Dir::Right),
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            game.step(dt, requested);
        }
        render(stdout, &game, &mut renderer)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}
