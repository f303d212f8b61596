//! Canvas Arcade entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent};

    use canvas_arcade::arcade::SessionPhase;
    use canvas_arcade::renderer::CanvasSurface;
    use canvas_arcade::sim::GameOverReason;
    use canvas_arcade::{Arcade, GameKind, Hud, Settings};

    /// DOM text outputs for score, speed and the message overlay
    struct DomHud {
        document: Document,
    }

    impl DomHud {
        fn set_text(&self, id: &str, text: &str) {
            match self.document.get_element_by_id(id) {
                Some(el) => el.set_text_content(Some(text)),
                None => log::warn!("Missing #{} element", id),
            }
        }

        fn set_display(&self, id: &str, display: &str) {
            if let Some(el) = self
                .document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let _ = el.style().set_property("display", display);
            }
        }

        fn set_overlay_visible(&self, visible: bool) {
            self.set_display("messageScreen", if visible { "flex" } else { "none" });
        }
    }

    impl Hud for DomHud {
        fn score_changed(&mut self, score: u32) {
            self.set_text("score", &format!("SCORE: {}", score));
        }

        fn speed_changed(&mut self, speed_ms: u32) {
            self.set_text("speed", &format!("SPEED: {}ms", speed_ms));
        }

        fn game_over(&mut self, score: u32, _reason: GameOverReason) {
            if let Some(el) = self.document.query_selector("#messageScreen h1").ok().flatten() {
                el.set_text_content(Some("GAME OVER"));
            }
            if let Some(el) = self.document.query_selector("#messageScreen p").ok().flatten() {
                el.set_inner_html(&format!(
                    "Final Score: {}<br>Press START to play again.",
                    score
                ));
            }
            self.set_text("startButton", "PLAY AGAIN");
            self.set_overlay_visible(true);
        }
    }

    /// Game instance holding all browser-side state
    struct Game {
        arcade: Arcade,
        surface: CanvasSurface,
        hud: DomHud,
        /// True while a frame callback is scheduled
        looping: bool,
    }

    impl Game {
        fn frame(&mut self, time: f64) {
            self.arcade.frame(time);
            self.arcade.render(&mut self.surface);
            self.arcade.notify(&mut self.hud);
        }

        fn restart(&mut self) {
            let seed = js_sys::Date::now() as u64;
            self.arcade.start(seed);
            self.hud.set_overlay_visible(false);
            self.arcade.notify(&mut self.hud);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Canvas Arcade starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no #gameCanvas"))?
            .dyn_into()?;

        let mut settings = Settings::load();
        // Page picks the game with <canvas data-game="jump">
        if let Some(kind) = canvas
            .get_attribute("data-game")
            .and_then(|g| GameKind::from_str(&g))
        {
            settings.game = kind;
        }
        match settings.game {
            GameKind::Snake => {
                settings.snake.width = canvas.width() as i32;
                settings.snake.height = canvas.height() as i32;
            }
            GameKind::Jump => {
                settings.jump.width = canvas.width() as f32;
                settings.jump.height = canvas.height() as f32;
            }
        }
        settings.sanitize();

        let game = Rc::new(RefCell::new(Game {
            arcade: Arcade::new(settings),
            surface: CanvasSurface::new(&canvas)?,
            hud: DomHud {
                document: document.clone(),
            },
            looping: false,
        }));

        {
            let g = game.borrow();
            if !g.arcade.shows_speed() {
                g.hud.set_display("speed", "none");
            }
            log::info!("Loaded {}", g.arcade.kind().as_str());
        }

        setup_input_handlers(game.clone())?;
        setup_start_button(&document, game)?;

        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Key down: Snake reacts to edges, the platformer records held keys
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().arcade.key_down(&event.key()) {
                    // Keep arrow keys from scrolling the page
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().arcade.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_start_button(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id("startButton") else {
            log::warn!("Missing #startButton element, starting immediately");
            game.borrow_mut().restart();
            request_animation_frame(game);
            return Ok(());
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let needs_loop = {
                let mut g = game.borrow_mut();
                g.restart();
                !std::mem::replace(&mut g.looping, true)
            };
            if needs_loop {
                request_animation_frame(game.clone());
            }
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        game.borrow_mut().looping = true;
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let running = {
            let mut g = game.borrow_mut();
            g.frame(time);
            let running = g.arcade.phase() == SessionPhase::Running;
            if !running {
                g.looping = false;
            }
            running
        };

        // Stop rescheduling once the run is over; restart re-arms the loop
        if running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_arcade::arcade::{Arcade, SessionPhase};
    use canvas_arcade::{GameKind, Settings};

    env_logger::init();
    log::info!("Canvas Arcade (native) starting...");
    log::info!("The browser build is the playable one - run with `trunk serve`");

    // Headless smoke run of both games with scripted input
    for kind in [GameKind::Snake, GameKind::Jump] {
        let mut arcade = Arcade::new(Settings::default());
        arcade.select(kind);
        arcade.start(42);

        let script = ["ArrowDown", "ArrowRight", "ArrowUp", "ArrowRight"];
        let mut frames = 0u32;
        while arcade.phase() == SessionPhase::Running && frames < 3600 {
            if frames % 40 == 0 {
                let key = script[(frames / 40) as usize % script.len()];
                if kind == GameKind::Jump {
                    arcade.key_up("ArrowLeft");
                    arcade.key_up("ArrowRight");
                }
                arcade.key_down(key);
            }
            arcade.frame(frames as f64 * 1000.0 / 60.0);
            frames += 1;
        }

        log::info!(
            "{}: {} frames, score {}, {:?}",
            kind.as_str(),
            frames,
            arcade.score(),
            arcade.phase()
        );
        println!("{}: score {} after {} frames", kind.as_str(), arcade.score(), frames);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
