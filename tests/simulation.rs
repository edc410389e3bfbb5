//! End-to-end session scenarios driven only through `step`.

use muncher::constants::{
    PELLET_SCORE, PLAYER_START, POWER_DURATION, POWER_PELLET_SCORE, START_LIVES,
};
use muncher::game::{Game, SessionState};
use muncher::maze::{position_to_tile, Dir};

const DT: f32 = 1.0 / 60.0;

#[test]
fn fixed_seed_replays_identically() {
    let inputs = [
        Some(Dir::Right),
        None,
        None,
        Some(Dir::Down),
        None,
        Some(Dir::Left),
    ];
    let mut a = Game::new(42);
    let mut b = Game::new(42);
    for step in 0..600 {
        let requested = inputs[step % inputs.len()];
        a.step(DT, requested);
        b.step(DT, requested);
        assert_eq!(a.player.pos, b.player.pos);
        for (ga, gb) in a.ghosts.iter().zip(&b.ghosts) {
            assert_eq!(ga.pos, gb.pos);
            assert_eq!(ga.dir, gb.dir);
            assert_eq!(ga.frightened, gb.frightened);
        }
        assert_eq!(a.player.score, b.player.score);
        assert_eq!(a.state, b.state);
    }
}

#[test]
fn player_walks_the_top_corridor_and_scores() {
    let mut game = Game::new(1);
    // Start tile pellet is consumed on the very first step.
    game.step(DT, Some(Dir::Right));
    assert_eq!(game.player.score, PELLET_SCORE);

    // Keep heading right; the top corridor (1,1)..(5,1) carries two
    // pellets, one power pellet, and two more pellets.
    let mut saw_power = false;
    for _ in 0..200 {
        game.step(DT, Some(Dir::Right));
        if game.power_mode_active() {
            saw_power = true;
        }
        if game.player.grid.0 >= 4 {
            break;
        }
    }
    assert!(saw_power, "power pellet at (3,1) was not consumed");
    assert!(game.player.score >= 2 * PELLET_SCORE + POWER_PELLET_SCORE);
    for ghost in &game.ghosts {
        assert!(ghost.frightened || ghost.frightened_timer == 0.0);
    }
}

#[test]
fn requested_heading_is_buffered_across_steps() {
    let mut game = Game::new(1);
    // Up is walled off along the whole top row: the request must sit in
    // the buffer without moving the player until a later one supersedes it.
    game.step(DT, Some(Dir::Up));
    for _ in 0..5 {
        game.step(DT, None);
    }
    assert_eq!(game.player.dir, None);
    assert_eq!(game.player.next_dir, Some(Dir::Up));

    game.step(DT, Some(Dir::Right));
    assert_eq!(game.player.dir, Some(Dir::Right));
}

#[test]
fn ghost_grid_position_tracks_continuous_position() {
    let mut game = Game::new(9);
    for _ in 0..500 {
        game.step(DT, None);
        for ghost in &game.ghosts {
            assert_eq!(ghost.grid, position_to_tile(ghost.pos));
            assert!(!game.maze.is_wall(ghost.grid.0, ghost.grid.1));
        }
    }
}

#[test]
fn session_can_be_lost_and_reset() {
    let mut game = Game::new(1);
    game.player.lives = 1;
    // Park a ghost on the player and let one step resolve the capture.
    game.ghosts[0].pos = game.player.pos;
    game.ghosts[0].grid = game.player.grid;
    game.step(DT, None);
    assert_eq!(game.state, SessionState::Lost);
    assert!(!game.player.alive);

    // Terminal state ignores further input.
    let frozen = game.player.pos;
    game.step(DT, Some(Dir::Right));
    assert_eq!(game.player.pos, frozen);

    game.reset();
    assert_eq!(game.state, SessionState::Playing);
    assert_eq!(game.player.lives, START_LIVES);
    assert_eq!(game.player.score, 0);
    assert_eq!(game.player.grid, PLAYER_START);
}

#[test]
fn eating_everything_wins() {
    let mut game = Game::new(1);
    // Clear all but the pellet under the player; the next step should
    // consume it and flip the session to Won.
    game.pellets.retain(|tile| *tile == PLAYER_START);
    game.power_pellets.clear();
    assert_eq!(game.state, SessionState::Playing);
    game.step(DT, None);
    assert_eq!(game.state, SessionState::Won);
    assert_eq!(game.player.score, PELLET_SCORE);

    // Won is terminal too.
    let frozen = game.player.pos;
    game.step(DT, Some(Dir::Right));
    assert_eq!(game.player.pos, frozen);
    assert_eq!(game.player.score, PELLET_SCORE);
}

#[test]
fn power_mode_timers_run_down_together() {
    let mut game = Game::new(1);
    // Walk right to the power pellet at (3,1).
    for _ in 0..200 {
        game.step(DT, Some(Dir::Right));
        if game.power_mode_active() {
            break;
        }
    }
    assert!(game.power_mode_active());
    for ghost in &game.ghosts {
        assert!(ghost.frightened);
    }

    // Session timer and per-ghost countdowns started at the same instant
    // and decrement by the same dt, so they expire on the same schedule.
    let steps = (POWER_DURATION / DT).ceil() as usize + 2;
    for _ in 0..steps {
        game.step(DT, None);
    }
    assert!(!game.power_mode_active());
    for ghost in &game.ghosts {
        assert!(!ghost.frightened);
        assert_eq!(ghost.frightened_timer, 0.0);
    }
}
