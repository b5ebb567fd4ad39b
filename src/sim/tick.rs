//! Per-frame game logic
//!
//! [`tick`] advances the state by one display frame; [`handle_input`] applies
//! one symbolic key press. Collision flags raised at the end of a frame are
//! consumed by the entity updates of the next one, exactly one frame later.

use super::collision::{player_hits_enemy, player_hits_gem};
use super::grid::{Direction, GridCell, WATER_BORDER_ROW};
use super::placement::rock_neighbors;
use super::state::{ENEMY_EXIT_X, GamePhase, GameState, ROSTER_SIZE};

/// Symbolic key, one per keydown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Return,
}

impl Key {
    fn direction(self) -> Option<Direction> {
        match self {
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Space | Key::Return => None,
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, dt: f32) {
    match state.phase() {
        GamePhase::StartScreen => {
            if state.player.start_requested {
                state.player.start_screen = false;
                state.reset_run();
            }
        }
        // Selection and pause hold the world still
        GamePhase::CharacterSelect | GamePhase::Paused => {}
        GamePhase::Playing => {
            update_entities(state, dt);
            check_collisions(state);
            advance_countdown(state, dt);
        }
        GamePhase::GameOver | GamePhase::GameWon => {
            if state.player.restart_requested {
                state.reset_run();
            }
        }
    }
}

/// Apply a single key press to the state
pub fn handle_input(state: &mut GameState, key: Key) {
    // Start screen: return starts the first game
    if state.player.start_screen && key == Key::Return {
        state.player.start_requested = true;
    }

    // Character select: left/right cycle the roster, return commits
    if !state.player.character_selected && !state.player.start_screen {
        match key {
            Key::Left => {
                state.player.selector = (state.player.selector + ROSTER_SIZE - 1) % ROSTER_SIZE;
            }
            Key::Right => {
                state.player.selector = (state.player.selector + 1) % ROSTER_SIZE;
            }
            Key::Return => {
                state.player.character = state.player.selector;
                state.player.character_selected = true;
            }
            _ => {}
        }
    }

    // Game over / winner screens: return queues a fresh run
    if key == Key::Return && (!state.player.alive || state.player.game_won) {
        state.player.restart_requested = true;
    }

    // Space toggles pause during an active run
    if key == Key::Space
        && state.player.character_selected
        && state.player.alive
        && !state.player.game_won
    {
        state.paused = !state.paused;
    }

    // Arrow keys move one cell, blocked by rocks and the board edge
    if state.player.character_selected && !state.paused {
        if let Some(dir) = key.direction() {
            let blocked = rock_neighbors(&state.rocks, state.player.cell);
            let rock_in_the_way = match dir {
                Direction::Left => blocked.left,
                Direction::Right => blocked.right,
                Direction::Down => blocked.down,
                Direction::Up => blocked.up,
            };
            if !rock_in_the_way {
                if let Some(next) = state.player.cell.step(dir) {
                    state.player.cell = next;
                }
            }
        }
    }
}

/// Move bugs, pay out flagged gems, then settle the player: the death check
/// and the water run payout, which sends the player home in the same frame
fn update_entities(state: &mut GameState, dt: f32) {
    let GameState {
        rng,
        tuning,
        player,
        enemies,
        gems,
        ..
    } = state;

    for enemy in enemies.iter_mut() {
        if enemy.x < ENEMY_EXIT_X {
            enemy.x += enemy.speed * dt;
        } else {
            enemy.reset(rng, tuning);
        }
        // A flagged bug costs a life and sends the player home
        if enemy.collided {
            player.cell = GridCell::SPAWN;
            player.lives = player.lives.saturating_sub(1);
            enemy.reset(rng, tuning);
        }
    }

    for gem in gems.iter_mut() {
        if gem.collided {
            gem.collided = false;
            gem.cell = None;
            player.score += gem.kind.points(tuning);
        }
    }

    if player.lives == 0 {
        player.alive = false;
    }
    if player.cell.row < WATER_BORDER_ROW {
        player.cell = GridCell::SPAWN;
        player.score += tuning.water_points;
    }
}

/// Raise collision flags for this frame (bugs first, then gems)
fn check_collisions(state: &mut GameState) {
    let GameState {
        tuning,
        player,
        enemies,
        gems,
        ..
    } = state;
    let margin = tuning.sprite_margin_px as f32;

    for enemy in enemies.iter_mut() {
        if player_hits_enemy(player, enemy, margin) {
            enemy.collided = true;
        }
    }
    for gem in gems.iter_mut() {
        if player_hits_gem(player, gem, margin) {
            gem.collided = true;
        }
    }
}

/// Bank frame time and fire whole-second clock ticks. The accumulator only
/// runs while the game is actually playing, so paused or hidden-tab time
/// never drains the clock.
fn advance_countdown(state: &mut GameState, dt: f32) {
    if state.countdown.stopped {
        return;
    }
    state.countdown.acc += dt;
    while state.countdown.acc >= 1.0 {
        state.countdown.acc -= 1.0;
        second_tick(state);
        if state.countdown.stopped {
            break;
        }
    }
}

/// One whole-second clock tick: decrement, then loss, then win. Reaching the
/// target on the final second still wins; the win latch never fires for a
/// dead player.
fn second_tick(state: &mut GameState) {
    if state.player.character_selected
        && state.player.alive
        && !state.paused
        && state.countdown.remaining > 0
    {
        state.countdown.remaining -= 1;
    }
    if state.countdown.remaining == 0 && state.player.score < state.tuning.win_score {
        state.player.alive = false;
    }
    if state.player.alive && state.player.score >= state.tuning.win_score {
        state.player.game_won = true;
        state.countdown.stopped = true;
    }
}
