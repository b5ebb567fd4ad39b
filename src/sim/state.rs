//! Entities and the aggregate run state
//!
//! Everything the game knows about a run lives in [`GameState`]; the browser
//! shell owns exactly one and feeds it to `tick`/`handle_input`.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::grid::GridCell;
use super::placement;
use super::rng::random_number;
use crate::tuning::Tuning;

/// Current phase of gameplay, derived from state flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// One-time info panel shown on page load
    StartScreen,
    /// Picking a hero sprite
    CharacterSelect,
    /// The clock runs and entities move
    Playing,
    /// Frozen mid-run by the space bar or a hidden tab
    Paused,
    /// Out of lives or out of time
    GameOver,
    /// Reached the target score in time
    GameWon,
}

/// Number of selectable hero sprites
pub const ROSTER_SIZE: usize = 5;

/// Bug spawn x, off screen to the left
pub const ENEMY_SPAWN_X: f32 = -100.0;
/// Bugs recycle once they reach this x (the right canvas edge)
pub const ENEMY_EXIT_X: f32 = 505.0;

/// A road-crossing bug
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    /// Road lane being driven (row index, 1..=3)
    pub lane: usize,
    /// Horizontal position in pixels, continuous
    pub x: f32,
    /// Speed in pixels per second
    pub speed: f32,
    /// Raised by collision detection, consumed by the next update
    pub collided: bool,
}

impl Enemy {
    /// Fresh bug off screen on a random lane with a random speed
    pub fn spawn(rng: &mut Pcg32, tuning: &Tuning) -> Self {
        Self {
            lane: random_number(rng, 1, 3) as usize,
            x: ENEMY_SPAWN_X,
            speed: random_number(rng, tuning.enemy_speed_min, tuning.enemy_speed_span) as f32,
            collided: false,
        }
    }

    /// Recycle in place (same draws as a fresh spawn)
    pub fn reset(&mut self, rng: &mut Pcg32, tuning: &Tuning) {
        *self = Self::spawn(rng, tuning);
    }
}

/// Gem colors, in descending point order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GemKind {
    Blue,
    Green,
    Orange,
}

impl GemKind {
    /// Uniform random color
    pub fn random(rng: &mut Pcg32) -> Self {
        match random_number(rng, 0, 2) {
            0 => GemKind::Blue,
            1 => GemKind::Green,
            _ => GemKind::Orange,
        }
    }

    /// Points awarded when collected
    pub fn points(self, tuning: &Tuning) -> u32 {
        match self {
            GemKind::Blue => tuning.gem_points.blue,
            GemKind::Green => tuning.gem_points.green,
            GemKind::Orange => tuning.gem_points.orange,
        }
    }
}

/// A collectible gem
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collectible {
    /// Board cell, or `None` once collected (gone until the next run)
    pub cell: Option<GridCell>,
    pub kind: GemKind,
    /// Raised by collision detection, consumed by the next update
    pub collided: bool,
}

/// A movement-blocking rock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rock {
    pub cell: GridCell,
}

/// The hero
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub cell: GridCell,
    pub lives: u8,
    pub alive: bool,
    pub score: u32,
    /// Roster slot the selector box is on
    pub selector: usize,
    /// Committed roster slot (meaningful once `character_selected`)
    pub character: usize,
    pub character_selected: bool,
    /// Info panel shown once per page load
    pub start_screen: bool,
    /// Return pressed on the start screen
    pub start_requested: bool,
    /// Return pressed on a game-over or winner screen
    pub restart_requested: bool,
    pub game_won: bool,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            cell: GridCell::SPAWN,
            lives: tuning.starting_lives,
            alive: true,
            score: 0,
            selector: 0,
            character: 0,
            character_selected: false,
            start_screen: true,
            start_requested: false,
            restart_requested: false,
            game_won: false,
        }
    }

    /// Back to the spawn cell with fresh lives and score. Selection is
    /// cleared so a new run re-enters character select; the start screen
    /// flag is left alone because the info panel only ever shows once.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.cell = GridCell::SPAWN;
        self.lives = tuning.starting_lives;
        self.alive = true;
        self.score = 0;
        self.selector = 0;
        self.character_selected = false;
        self.start_requested = false;
        self.restart_requested = false;
        self.game_won = false;
    }
}

/// Round countdown, advanced by whole seconds from frame time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    /// Seconds left on the clock
    pub remaining: u32,
    /// Fractional-second accumulator; does not survive a reset
    pub acc: f32,
    /// Latched when the win fires, no further second ticks
    pub stopped: bool,
}

impl Countdown {
    fn new(tuning: &Tuning) -> Self {
        Self {
            remaining: tuning.round_seconds,
            acc: 0.0,
            stopped: false,
        }
    }

    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }
}

/// Complete game state (deterministic given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the run was built from; same seed, same run
    pub seed: u64,
    /// Seeded RNG threaded through every random draw
    pub rng: Pcg32,
    /// Balance values, loaded once at boot
    pub tuning: Tuning,
    /// Space bar pause latch
    pub paused: bool,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub gems: Vec<Collectible>,
    pub rocks: Vec<Rock>,
    pub countdown: Countdown,
}

impl GameState {
    /// Create a new game state with the given seed. Entities get a boot-time
    /// layout right away; starting the first game runs another full reset.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(&tuning),
            paused: false,
            enemies: Vec::new(),
            gems: Vec::new(),
            rocks: Vec::new(),
            countdown: Countdown::new(&tuning),
            tuning,
        };

        state.reset_run();

        state
    }

    /// Phase derived from the state flags, in precedence order. `game_won`
    /// and `!alive` never hold at once: the win latch only fires for a live
    /// player, and a won game stops ticking.
    pub fn phase(&self) -> GamePhase {
        let p = &self.player;
        if p.start_screen {
            GamePhase::StartScreen
        } else if !p.character_selected {
            GamePhase::CharacterSelect
        } else if p.game_won {
            GamePhase::GameWon
        } else if !p.alive {
            GamePhase::GameOver
        } else if self.paused {
            GamePhase::Paused
        } else {
            GamePhase::Playing
        }
    }

    /// Full reset before a run: every entity re-placed, player and countdown
    /// fresh, pause released. Gems go down before rocks so rock placement
    /// can avoid them.
    pub fn reset_run(&mut self) {
        let mut enemies = Vec::with_capacity(self.tuning.enemy_count);
        for _ in 0..self.tuning.enemy_count {
            enemies.push(Enemy::spawn(&mut self.rng, &self.tuning));
        }
        self.enemies = enemies;
        self.gems = placement::place_collectibles(&mut self.rng, self.tuning.gem_count);
        self.rocks = placement::place_rocks(&mut self.rng, self.tuning.rock_count, &self.gems);
        self.player.reset(&self.tuning);
        self.countdown.reset(&self.tuning);
        self.paused = false;
    }
}
