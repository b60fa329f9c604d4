use serde::Serialize;

use crate::api::types::{GameEvent, ToneRequest};
use crate::core::timers::TimerQueue;
use crate::core::viewport::Viewport;
use crate::input::queue::InputQueue;
use crate::renderer::frame::{CellStyle, Frame};
use crate::systems::effects::EffectsState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Seed for the effects RNG.
    pub seed: u64,
    /// Maximum number of tones per frame (default: 16).
    pub max_tones: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            seed: 42,
            max_tones: 16,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// The game's cell classification, drawn by the display surface.
    type Cell: CellStyle;

    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build initial state. `ctx.viewport` already holds the host size.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Handle this tick's input (keys, host events, fired timers).
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Describe the full visible state. Called only after a redraw request.
    fn render(&self, ctx: &mut RenderContext<'_, Self::Cell>);

    /// JSON view of game state for host-side debugging.
    fn snapshot(&self) -> serde_json::Value {
        serde_json::Value::Null
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub viewport: Viewport,
    pub effects: EffectsState,
    pub timers: TimerQueue,
    pub tones: Vec<ToneRequest>,
    pub events: Vec<GameEvent>,
    redraw: bool,
    max_tones: usize,
    max_events: usize,
}

impl EngineContext {
    pub fn with_config(config: &GameConfig, viewport: Viewport) -> Self {
        Self {
            viewport,
            effects: EffectsState::new(config.seed),
            timers: TimerQueue::new(),
            tones: Vec::with_capacity(config.max_tones),
            events: Vec::with_capacity(config.max_events),
            redraw: false,
            max_tones: config.max_tones,
            max_events: config.max_events,
        }
    }

    /// Queue a tone for the host's tone generator. Tones past the per-frame cap are dropped.
    pub fn emit_tone(&mut self, tone: ToneRequest) {
        if self.tones.len() >= self.max_tones {
            log::warn!("tone queue full, dropping {} Hz", tone.frequency);
            return;
        }
        self.tones.push(tone);
    }

    /// Emit a game event to be forwarded to the host page.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("event queue full, dropping kind {}", event.kind);
            return;
        }
        self.events.push(event);
    }

    /// Ask the runner to rebuild and present a frame after this update.
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Consume the redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Clear per-frame transient data (tones, events).
    pub fn clear_frame_data(&mut self) {
        self.tones.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::with_config(&GameConfig::default(), Viewport::default())
    }
}

/// Render context handed to `Game::render`.
pub struct RenderContext<'a, C> {
    pub frame: &'a mut Frame<C>,
    pub viewport: Viewport,
}
