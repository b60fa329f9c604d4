pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{GameEvent, ToneRequest, Waveform};
pub use components::grid::Grid;
pub use core::time::FixedTimestep;
pub use core::timers::{FiredTimer, TimerQueue};
pub use core::viewport::Viewport;
pub use input::queue::{InputEvent, InputQueue, Key};
pub use renderer::frame::{CellInstance, CellStyle, Frame, Overlay};
pub use renderer::traits::{
    play_best_effort, DisplaySurface, SurfaceError, ToneError, ToneGenerator,
};
pub use systems::effects::{Confetti, EffectsState, Rng};
