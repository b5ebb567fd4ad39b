//! Gem Hopper - a cross-the-road arcade game on HTML canvas
//!
//! Core modules:
//! - `sim`: Deterministic game logic (grid movement, collisions, countdown)
//! - `render`: 2D canvas drawing (wasm only)
//! - `resources`: Sprite preloading (wasm only)
//! - `platform`: Device capability gate
//! - `tuning`: Data-driven balance values

pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod render;
#[cfg(target_arch = "wasm32")]
pub mod resources;
pub mod sim;
pub mod tuning;

pub use sim::{GamePhase, GameState, Key, handle_input, tick};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Canvas width in pixels (5 columns at 101px)
    pub const CANVAS_WIDTH: u32 = 505;
    /// Canvas height in pixels (6 rows at 83px plus sprite overhang)
    pub const CANVAS_HEIGHT: u32 = 606;

    /// Background tile footprint
    pub const TILE_WIDTH: f64 = 101.0;
    pub const TILE_HEIGHT: f64 = 83.0;

    /// Frame delta clamp so a stalled tab cannot fast-forward the game
    pub const MAX_FRAME_DT: f32 = 0.1;
}
