use std::sync::Arc;

use maze_engine::*;

use crate::maze::{cell_px_for, Maze, RABBIT_MAZE};
use crate::sounds::{self, ERROR_TONE, MELODY, MOVE_TONE};
use crate::state::{transition, Action, CellKind, Direction, Feedback, GameState, Position};

/// Pause between the winning step and the celebration overlay (seconds).
const OVERLAY_DELAY: f32 = 0.5;
const CONFETTI_COUNT: usize = 50;

// Game event kinds (Rust → page)
pub const EVENT_STEPS: f32 = 1.0;
pub const EVENT_WON: f32 = 2.0;

// Custom event kinds (page → Rust)
pub const CUSTOM_RESET: u32 = 1;
pub const CUSTOM_PLAY_AGAIN: u32 = 2;
pub const CUSTOM_BACKDROP: u32 = 3;

// Timer kinds
const TIMER_REVEAL: u32 = 1;
const TIMER_NOTE: u32 = 2;

pub struct RabbitMaze {
    state: GameState,
    overlay: Overlay,
}

impl RabbitMaze {
    pub fn new() -> Self {
        Self::with_maze(Maze::for_viewport(&Viewport::default(), &RABBIT_MAZE))
    }

    pub fn with_maze(maze: Maze) -> Self {
        Self {
            state: GameState::new(Arc::new(maze)),
            overlay: Overlay::Hidden,
        }
    }

    fn apply(&mut self, ctx: &mut EngineContext, action: Action) {
        let next = transition(&self.state, action);
        self.state = next.state;

        for feedback in next.feedback {
            match feedback {
                Feedback::MoveTone => {
                    log::debug!("rabbit -> {} (step {})", self.state.rabbit(), self.state.steps());
                    ctx.emit_tone(MOVE_TONE);
                }
                Feedback::ErrorTone(reason) => {
                    log::debug!("move blocked at {}: {:?}", self.state.rabbit(), reason);
                    ctx.emit_tone(ERROR_TONE);
                }
                Feedback::Redraw => {
                    ctx.emit_event(GameEvent::new(EVENT_STEPS, self.state.steps() as f32));
                    ctx.request_redraw();
                }
                Feedback::Won { steps } => {
                    log::info!("gift reached in {} steps", steps);
                    ctx.timers.schedule(OVERLAY_DELAY, TIMER_REVEAL, steps);
                }
                Feedback::Restarted => {
                    log::info!("maze reset");
                    ctx.timers.cancel_all();
                    ctx.effects.clear();
                    self.overlay = Overlay::Hidden;
                }
            }
        }
    }

    /// Show the overlay, burst confetti and start the melody.
    fn celebrate(&mut self, ctx: &mut EngineContext, steps: u32) {
        self.overlay = Overlay::Shown { value: steps };
        ctx.effects.spawn_confetti(CONFETTI_COUNT);
        ctx.emit_event(GameEvent::new(EVENT_WON, steps as f32));
        ctx.request_redraw();

        for index in 0..MELODY.len() as u32 {
            if index == 0 {
                self.play_note(ctx, index);
            } else {
                ctx.timers.schedule(sounds::note_offset(index), TIMER_NOTE, index);
            }
        }
    }

    fn play_note(&self, ctx: &mut EngineContext, index: u32) {
        match sounds::melody_note(index) {
            Some(tone) => ctx.emit_tone(tone),
            None => log::warn!("melody note {} out of range", index),
        }
    }
}

impl Default for RabbitMaze {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for RabbitMaze {
    type Cell = CellKind;

    fn init(&mut self, ctx: &mut EngineContext) {
        // Board size is picked once per page load.
        let maze = Maze::for_viewport(&ctx.viewport, &RABBIT_MAZE);
        log::info!(
            "rabbit-maze: {0}x{0} board for {1}px viewport",
            maze.size(),
            ctx.viewport.width
        );
        *self = Self::with_maze(maze);
        ctx.emit_event(GameEvent::new(EVENT_STEPS, 0.0));
        ctx.request_redraw();
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::KeyDown { key } => {
                    if let Some(dir) = Direction::from_key(key) {
                        self.apply(ctx, Action::Move(dir));
                    }
                }
                InputEvent::Custom { kind, .. } => match kind {
                    CUSTOM_RESET | CUSTOM_PLAY_AGAIN => self.apply(ctx, Action::Reset),
                    CUSTOM_BACKDROP => {
                        if self.overlay.is_shown() {
                            self.apply(ctx, Action::Reset);
                        }
                    }
                    other => log::debug!("ignoring custom event {}", other),
                },
                InputEvent::Resize { .. } => ctx.request_redraw(),
                InputEvent::Timer { kind, arg } => match kind {
                    TIMER_REVEAL => self.celebrate(ctx, arg),
                    TIMER_NOTE => self.play_note(ctx, arg),
                    other => log::warn!("unknown timer kind {}", other),
                },
            }
        }
    }

    fn render(&self, ctx: &mut RenderContext<'_, CellKind>) {
        let size = self.state.maze().size();
        ctx.frame.begin(size, size, cell_px_for(&ctx.viewport));
        for y in 0..size as i32 {
            for x in 0..size as i32 {
                let pos = Position::new(x, y);
                ctx.frame.push(pos, self.state.cell_kind(pos));
            }
        }
        ctx.frame.counter = self.state.steps();
        ctx.frame.overlay = self.overlay;
    }

    fn snapshot(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self.state.snapshot()).unwrap_or_default();
        if let Some(map) = value.as_object_mut() {
            map.insert(
                "overlay".into(),
                serde_json::to_value(self.overlay).unwrap_or_default(),
            );
        }
        value
    }
}
