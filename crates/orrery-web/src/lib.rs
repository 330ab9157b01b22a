pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, control setters, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery::*;
/// use orrery_web::GameRunner;
///
/// mod game;
/// use game::MyGame;
///
/// orrery_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `orrery::Game`
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        /// Run `f` against the runner. Returns `None` before `game_init()`.
        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> Option<R> {
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

        /// Create the runner and initialize the game. `settings_json`, when
        /// given, is applied before init so startup-only settings
        /// (`disableMoons`) take effect.
        #[wasm_bindgen]
        pub fn game_init(settings_json: Option<String>) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let mut runner = $crate::GameRunner::new(game);
            if let Some(json) = settings_json.as_deref() {
                if let Err(e) = runner.apply_settings(json) {
                    log::warn!("{}: ignoring initial settings: {}", $game_name, e);
                }
            }

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        // ---- Controls ----

        #[wasm_bindgen]
        pub fn game_set_time_speed(position: f64) {
            with_runner(|r| r.push_control(ControlEvent::TimeSpeed(position)));
        }

        #[wasm_bindgen]
        pub fn game_set_time_offset(days: f64) {
            with_runner(|r| r.push_control(ControlEvent::TimeOffset(days)));
        }

        #[wasm_bindgen]
        pub fn game_set_objects_distance(multiplier: f64) {
            with_runner(|r| r.push_control(ControlEvent::ObjectsDistance(multiplier)));
        }

        #[wasm_bindgen]
        pub fn game_set_objects_relative_scale(multiplier: f64) {
            with_runner(|r| r.push_control(ControlEvent::ObjectsRelativeScale(multiplier)));
        }

        #[wasm_bindgen]
        pub fn game_set_orbit_angle_offset(degrees: f64) {
            with_runner(|r| r.push_control(ControlEvent::OrbitAngleOffset(degrees)));
        }

        #[wasm_bindgen]
        pub fn game_set_disable_moons(disabled: bool) {
            with_runner(|r| r.push_control(ControlEvent::DisableMoons(disabled)));
        }

        /// Apply a JSON settings patch. Returns false if the JSON was rejected.
        #[wasm_bindgen]
        pub fn game_apply_settings(json: &str) -> bool {
            match with_runner(|r| r.apply_settings(json)) {
                Some(Ok(())) => true,
                Some(Err(e)) => {
                    log::warn!("{}: rejected settings patch: {}", $game_name, e);
                    false
                }
                None => false,
            }
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn is_ready() -> bool {
            with_runner(|r| r.is_ready()).unwrap_or(false)
        }

        #[wasm_bindgen]
        pub fn get_elapsed_seconds() -> f64 {
            with_runner(|r| r.elapsed_seconds()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_bodies_ptr() -> *const f32 {
            with_runner(|r| r.bodies_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_body_count() -> u32 {
            with_runner(|r| r.body_count()).unwrap_or(0)
        }

        /// Body names in the same order as the body instances.
        #[wasm_bindgen]
        pub fn get_body_names() -> js_sys::Array {
            let names = js_sys::Array::new();
            with_runner(|r| {
                for name in r.body_names() {
                    names.push(&js_sys::JsString::from(name.as_str()));
                }
            });
            names
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len()).unwrap_or(0)
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_bodies() -> u32 {
            with_runner(|r| r.max_bodies()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats()).unwrap_or(0)
        }
    };
}
