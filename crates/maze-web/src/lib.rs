pub mod audio;
pub mod dom;
pub mod runner;

pub use audio::WebAudioTones;
pub use dom::DomSurface;
pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner (DOM surface + Web Audio tones)
/// - `with_runner()` helper function
/// - wasm-bindgen exports: `game_init`, `game_tick`, `game_key_down`,
///   `game_custom_event`, `game_resize`, `game_events`, `game_snapshot`
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// maze_web::export_game!(MyGame, "my-game");
/// ```
///
/// The game type must implement `maze_engine::Game` and provide `fn new() -> Self`.
/// The calling crate needs `wasm-bindgen`, `log`, `console_log` and
/// `console_error_panic_hook` as dependencies.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        type Runner = $crate::GameRunner<$game_type, $crate::DomSurface, $crate::WebAudioTones>;

        thread_local! {
            static RUNNER: RefCell<Option<Runner>> = RefCell::new(None);
        }

        /// Run `f` against the runner. Returns None (and logs) before `game_init`.
        fn with_runner<R>(f: impl FnOnce(&mut Runner) -> R) -> Option<R> {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                match borrow.as_mut() {
                    Some(runner) => Some(f(runner)),
                    None => {
                        log::warn!("{}: not initialized, call game_init() first", $game_name);
                        None
                    }
                }
            })
        }

        #[wasm_bindgen]
        pub fn game_init() -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let surface = $crate::DomSurface::attach_to_page()
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            let runner = $crate::GameRunner::new(
                <$game_type>::new(),
                surface,
                $crate::WebAudioTones::new(),
                $crate::dom::viewport(),
            );

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| {
                r.init();
                r.reseed_effects($crate::dom::session_seed());
            });
            log::info!("{}: initialized", $game_name);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        /// Returns true when the page should `preventDefault()` the key event.
        #[wasm_bindgen]
        pub fn game_key_down(key: &str) -> bool {
            with_runner(|r| r.key_down(key)).unwrap_or(false)
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.custom_event(kind, a, b, c));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        /// This frame's game events, flattened as `[kind, a, b, c, ...]`.
        #[wasm_bindgen]
        pub fn game_events() -> Vec<f32> {
            with_runner(|r| r.game_events().to_vec()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn game_snapshot() -> String {
            with_runner(|r| r.snapshot()).unwrap_or_else(|| "null".to_string())
        }
    };
}
