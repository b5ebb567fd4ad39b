//! The deterministic game core
//!
//! Gameplay lives here and nowhere else, under rules that keep a run
//! replayable from its seed:
//! - every random draw goes through the state's seeded RNG
//! - frame time arrives as an argument, never from a clock
//! - no canvas, no DOM, no browser types

pub mod collision;
pub mod grid;
pub mod placement;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{player_hits_enemy, player_hits_gem, spans_overlap};
pub use grid::{COLS, Direction, GridCell, ROWS, WATER_BORDER_ROW};
pub use placement::{MAX_PLACEMENT_ATTEMPTS, RockNeighbors, cell_has_gem, rock_neighbors};
pub use rng::random_number;
pub use state::{
    Collectible, Countdown, Enemy, GamePhase, GameState, GemKind, Player, ROSTER_SIZE, Rock,
};
pub use tick::{Key, handle_input, tick};
