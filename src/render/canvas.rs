//! Canvas 2D scene renderer
//!
//! Draws one complete frame per call from the current [`GameState`]. The
//! board background is repainted in full each frame, so nothing is cleared
//! and nothing from the previous frame survives.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{TILE_HEIGHT, TILE_WIDTH};
use crate::render::panel;
use crate::resources::{Resources, sprites};
use crate::sim::grid::{GEM_HEIGHT, GEM_WIDTH, lane_y};
use crate::sim::{COLS, GamePhase, GameState, GemKind, ROSTER_SIZE, ROWS};

/// Background tile sprite per row, top to bottom
const ROW_SPRITES: [&str; ROWS] = [
    sprites::WATER,
    sprites::STONE,
    sprites::STONE,
    sprites::STONE,
    sprites::GRASS,
    sprites::GRASS,
];

/// Selector outline x per roster slot
const SELECTOR_BOX_X: [f64; ROSTER_SIZE] = [40.0, 130.0, 215.0, 310.0, 400.0];

/// Heart icons sit on the lower grass rows
const HEARTS_Y: f64 = 525.0;

/// Sprite URL for a gem color
fn gem_sprite(kind: GemKind) -> &'static str {
    match kind {
        GemKind::Blue => sprites::GEM_BLUE,
        GemKind::Green => sprites::GEM_GREEN,
        GemKind::Orange => sprites::GEM_ORANGE,
    }
}

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    resources: Resources,
}

impl Renderer {
    pub fn new(ctx: CanvasRenderingContext2d, resources: Resources) -> Self {
        Self { ctx, resources }
    }

    /// Draw the frame for the current phase
    pub fn draw(&self, state: &GameState) -> Result<(), JsValue> {
        match state.phase() {
            GamePhase::StartScreen => self.draw_start_screen(state),
            GamePhase::CharacterSelect => self.draw_character_select(state),
            // A paused game keeps showing the frozen board
            GamePhase::Playing | GamePhase::Paused => self.draw_playing(state),
            GamePhase::GameOver => self.draw_game_over(state),
            GamePhase::GameWon => self.draw_game_won(state),
        }
    }

    /// Water, stone and grass rows tiled across the board
    fn draw_background(&self) -> Result<(), JsValue> {
        for (row, sprite) in ROW_SPRITES.iter().enumerate() {
            for col in 0..COLS {
                self.ctx.draw_image_with_html_image_element(
                    self.resources.get(sprite),
                    col as f64 * TILE_WIDTH,
                    row as f64 * TILE_HEIGHT,
                )?;
            }
        }
        Ok(())
    }

    /// Active board: gems under rocks under bugs under the player
    fn draw_playing(&self, state: &GameState) -> Result<(), JsValue> {
        self.draw_background()?;

        // Collected gems have no cell and simply vanish
        for gem in &state.gems {
            let Some(cell) = gem.cell else { continue };
            let (x, y) = cell.gem_px();
            self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                self.resources.get(gem_sprite(gem.kind)),
                f64::from(x),
                f64::from(y),
                f64::from(GEM_WIDTH),
                f64::from(GEM_HEIGHT),
            )?;
        }

        for rock in &state.rocks {
            let (x, y) = rock.cell.tile_px();
            self.ctx.draw_image_with_html_image_element(
                self.resources.get(sprites::ROCK),
                f64::from(x),
                f64::from(y),
            )?;
        }

        for enemy in &state.enemies {
            self.ctx.draw_image_with_html_image_element(
                self.resources.get(sprites::ENEMY),
                f64::from(enemy.x),
                f64::from(lane_y(enemy.lane)),
            )?;
        }

        self.draw_player(state)?;
        self.draw_score(state)?;
        self.draw_timer(state)?;
        Ok(())
    }

    /// Hero sprite plus one heart per remaining life
    fn draw_player(&self, state: &GameState) -> Result<(), JsValue> {
        let (x, y) = state.player.cell.player_px();
        self.ctx.draw_image_with_html_image_element(
            self.resources.get(sprites::CHARACTERS[state.player.character]),
            f64::from(x),
            f64::from(y),
        )?;
        for i in 1..=state.player.lives {
            self.ctx.draw_image_with_html_image_element(
                self.resources.get(sprites::HEART),
                -30.0 + f64::from(i) * 40.0,
                HEARTS_Y,
            )?;
        }
        Ok(())
    }

    /// Score panel in the lower right corner
    fn draw_score(&self, state: &GameState) -> Result<(), JsValue> {
        panel::fill_panel(&self.ctx, 290.0, 545.0, 190.0, 20.0, "lightgreen");
        self.ctx.set_font("32pt Lobster");
        self.ctx.set_fill_style_str("green");
        self.ctx.fill_text("Score: ", 290.0, 580.0)?;
        self.ctx
            .fill_text(&state.player.score.to_string(), 400.0, 580.0)?;
        Ok(())
    }

    /// Countdown panel in the upper left corner
    fn draw_timer(&self, state: &GameState) -> Result<(), JsValue> {
        panel::fill_panel(&self.ctx, 10.0, 50.0, 190.0, 20.0, "lightblue");
        self.ctx.set_font("32pt Lobster");
        self.ctx.set_fill_style_str("blue");
        self.ctx.fill_text("Timer: ", 10.0, 85.0)?;
        self.ctx
            .fill_text(&state.countdown.remaining.to_string(), 125.0, 85.0)?;
        Ok(())
    }

    /// One-time info panel with the scoring table
    fn draw_start_screen(&self, state: &GameState) -> Result<(), JsValue> {
        self.draw_background()?;
        panel::fill_panel(&self.ctx, 30.0, 120.0, 445.0, 380.0, "white");
        panel::stroke_panel(&self.ctx, 30.0, 120.0, 445.0, 380.0, "green");

        let tuning = &state.tuning;
        self.ctx.set_font("32pt Lobster");
        self.ctx.set_fill_style_str("green");
        self.ctx.fill_text("GAME INFO", 140.0, 200.0)?;
        self.ctx.set_font("20pt Lobster");
        self.ctx.fill_text(
            &format!(
                "get {} points in {} seconds",
                tuning.win_score, tuning.round_seconds
            ),
            100.0,
            270.0,
        )?;
        self.ctx.fill_text(
            &format!("- reach water = {} points", tuning.water_points),
            120.0,
            330.0,
        )?;
        self.ctx.fill_text(
            &format!("- blue gem = {} points", tuning.gem_points.blue),
            120.0,
            360.0,
        )?;
        self.ctx.fill_text(
            &format!("- green gem = {} points", tuning.gem_points.green),
            120.0,
            390.0,
        )?;
        self.ctx.fill_text(
            &format!("- orange gem = {} points", tuning.gem_points.orange),
            120.0,
            420.0,
        )?;
        self.ctx.set_fill_style_str("red");
        self.ctx.fill_text("press return to start!", 150.0, 480.0)?;
        Ok(())
    }

    /// Hero roster with the selector box around the highlighted slot
    fn draw_character_select(&self, state: &GameState) -> Result<(), JsValue> {
        self.draw_background()?;
        panel::fill_panel(&self.ctx, 30.0, 200.0, 445.0, 210.0, "white");
        panel::stroke_panel(&self.ctx, 30.0, 200.0, 445.0, 210.0, "green");

        for (i, url) in sprites::CHARACTERS.iter().enumerate() {
            self.ctx.draw_image_with_html_image_element(
                self.resources.get(url),
                20.0 + i as f64 * 90.0,
                180.0,
            )?;
        }

        self.ctx.set_font("20pt Lobster");
        self.ctx.set_fill_style_str("green");
        self.ctx
            .fill_text("select your hero and press ENTER!", 75.0, 400.0)?;
        panel::stroke_panel(
            &self.ctx,
            SELECTOR_BOX_X[state.player.selector],
            220.0,
            63.0,
            110.0,
            "lightgreen",
        );
        Ok(())
    }

    /// Final score over the empty board
    fn draw_game_over(&self, state: &GameState) -> Result<(), JsValue> {
        self.draw_background()?;
        self.draw_score(state)?;
        panel::fill_panel(&self.ctx, 30.0, 200.0, 445.0, 210.0, "white");
        panel::stroke_panel(&self.ctx, 30.0, 200.0, 445.0, 210.0, "green");
        self.ctx.set_font("30pt Lobster");
        self.ctx.set_fill_style_str("green");
        self.ctx.fill_text("GAME OVER!", 140.0, 300.0)?;
        self.ctx.set_font("20pt Lobster");
        self.ctx
            .fill_text("press return for another game!", 90.0, 350.0)?;
        Ok(())
    }

    /// Time left on the clock over the empty board
    fn draw_game_won(&self, state: &GameState) -> Result<(), JsValue> {
        self.draw_background()?;
        self.draw_timer(state)?;
        panel::fill_panel(&self.ctx, 30.0, 200.0, 445.0, 210.0, "white");
        panel::stroke_panel(&self.ctx, 30.0, 200.0, 445.0, 210.0, "green");
        self.ctx.set_font("30pt Lobster");
        self.ctx.set_fill_style_str("red");
        self.ctx.fill_text("YOU ARE A WINNER!", 70.0, 300.0)?;
        self.ctx.set_font("20pt Lobster");
        self.ctx.set_fill_style_str("green");
        self.ctx
            .fill_text("press return for another game!", 90.0, 350.0)?;
        Ok(())
    }
}
