//! Gem Hopper entry point
//!
//! Boots the browser shell and drives the frame loop; natively it runs a
//! headless scripted round instead.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

    use gem_hopper::consts::*;
    use gem_hopper::platform;
    use gem_hopper::render::Renderer;
    use gem_hopper::resources::{Resources, sprites};
    use gem_hopper::sim::{GamePhase, GameState, Key, handle_input, tick};
    use gem_hopper::tuning::Tuning;

    /// Everything the frame loop owns: sim state, renderer, timing
    struct Game {
        state: GameState,
        renderer: Renderer,
        last_time: f64,
        // Track phase changes for logging and the footer hint
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64, renderer: Renderer) -> Self {
            let state = GameState::new(seed, Tuning::load());
            let last_phase = state.phase();
            Self {
                state,
                renderer,
                last_time: 0.0,
                last_phase,
            }
        }

        /// Advance the simulation by the elapsed wall time
        fn update(&mut self, time: f64) {
            // The first frame has no predecessor, and a throttled tab gets
            // clamped instead of fast-forwarded
            let dt = if self.last_time > 0.0 {
                (((time - self.last_time) / 1000.0) as f32).min(MAX_FRAME_DT)
            } else {
                0.0
            };
            self.last_time = time;

            tick(&mut self.state, dt);

            let phase = self.state.phase();
            if phase != self.last_phase {
                log::info!("Phase: {:?} -> {:?}", self.last_phase, phase);
                // The pause hint replaces the footer once the info panel is gone
                if self.last_phase == GamePhase::StartScreen {
                    show_pause_hint();
                }
                self.last_phase = phase;
            }
        }

        /// Draw the frame for whatever phase the state is in
        fn render(&self) {
            if let Err(e) = self.renderer.draw(&self.state) {
                log::warn!("Render error: {e:?}");
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Gem Hopper starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Touchscreens and tiny viewports get a message instead of a game
        if let Some(message) = platform::detect(&window).message() {
            log::warn!("{message}");
            show_footer_message(&document, message);
            return;
        }

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .expect("failed to create canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);
        document
            .query_selector("#gameCanvas")
            .expect("selector failed")
            .expect("no #gameCanvas container")
            .append_child(&canvas)
            .expect("failed to attach canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("failed to get 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // The game only boots once every sprite is in the cache
        let resources = Resources::load(&sprites::ALL)
            .await
            .expect("failed to load sprites");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, Renderer::new(ctx, resources))));

        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(game.clone());
        setup_auto_pause(game.clone());

        // Fade the page in now that the board is about to draw
        if let Some(body) = document.body() {
            let _ = body.class_list().remove_1("fade");
        }

        request_animation_frame(game);

        log::info!("Gem Hopper running!");
    }

    /// Put a plain message where the footer is, for devices that cannot
    /// host the game
    fn show_footer_message(document: &Document, message: &str) {
        if let Some(footer) = document.query_selector("footer").ok().flatten() {
            let _ = footer.set_attribute("style", "padding: 4rem");
            footer.set_text_content(Some(message));
        }
        if let Some(body) = document.body() {
            let _ = body.class_list().remove_1("fade");
        }
    }

    /// Swap the footer content for the pause hint once the first game starts
    fn show_pause_hint() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(footer) = document.query_selector("footer").ok().flatten() else {
            return;
        };
        footer.set_inner_html("");
        if let Ok(hint) = document.create_element("h4") {
            hint.set_text_content(Some("press SPACE to pause game"));
            let _ = footer.append_child(&hint);
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let key = match event.key().as_str() {
                "ArrowLeft" => Key::Left,
                "ArrowRight" => Key::Right,
                "ArrowUp" => Key::Up,
                "ArrowDown" => Key::Down,
                " " => Key::Space,
                "Enter" => Key::Return,
                _ => return,
            };
            event.prevent_default();
            handle_input(&mut game.borrow_mut().state, key);
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Tab hidden or minimized
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.state.phase() == GamePhase::Playing {
                        g.state.paused = true;
                        log::info!("Paused: tab hidden");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Focus moved to another window
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.state.phase() == GamePhase::Playing {
                    g.state.paused = true;
                    log::info!("Paused: window lost focus");
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Gem Hopper (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    println!("\nRunning a scripted round...");
    demo_round();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser enters through wasm_main; the bin target still needs a main
}

/// Drive a full round from the start screen to a settled outcome, with a
/// fixed seed so the printed result is reproducible.
#[cfg(not(target_arch = "wasm32"))]
fn demo_round() {
    use gem_hopper::sim::{GamePhase, GameState, Key, handle_input, tick};
    use gem_hopper::tuning::Tuning;

    let mut state = GameState::new(7, Tuning::load());
    handle_input(&mut state, Key::Return); // leave the info panel
    tick(&mut state, 1.0 / 60.0);
    handle_input(&mut state, Key::Return); // take the first hero
    assert_eq!(state.phase(), GamePhase::Playing);

    // March toward the water with a sidestep so one rock cannot pin the run
    let script = [Key::Up, Key::Up, Key::Left, Key::Up, Key::Right, Key::Up];
    for frame in 0..3700_usize {
        handle_input(&mut state, script[frame % script.len()]);
        tick(&mut state, 1.0 / 60.0);
    }

    assert!(
        matches!(state.phase(), GamePhase::GameOver | GamePhase::GameWon),
        "a round must settle within its time limit"
    );
    println!(
        "✓ seed {}: {:?} with score {} and {} lives left",
        state.seed,
        state.phase(),
        state.player.score,
        state.player.lives
    );
}
