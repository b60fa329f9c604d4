use maze_engine::{
    play_best_effort, DisplaySurface, EffectsState, EngineContext, FixedTimestep, Frame, Game,
    GameConfig, InputEvent, InputQueue, Key, RenderContext, ToneGenerator, Viewport,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner via `export_game!`
/// and exports free functions through `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game, S: DisplaySurface, T: ToneGenerator> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    frame: Frame<G::Cell>,
    timestep: FixedTimestep,
    config: GameConfig,
    surface: S,
    tones: T,
    initialized: bool,
    /// Flat copy of this frame's game events (4 floats each) for the host.
    event_buffer: Vec<f32>,
}

impl<G: Game, S: DisplaySurface, T: ToneGenerator> GameRunner<G, S, T> {
    pub fn new(game: G, surface: S, tones: T, viewport: Viewport) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let ctx = EngineContext::with_config(&config, viewport);

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            frame: Frame::new(),
            timestep,
            config,
            surface,
            tones,
            initialized: false,
            event_buffer: Vec::new(),
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.timestep = FixedTimestep::new(self.config.fixed_dt);
        self.ctx = EngineContext::with_config(&self.config, self.ctx.viewport);
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.flush();
    }

    /// Replace the effects RNG seed. Clears live effects.
    pub fn reseed_effects(&mut self, seed: u64) {
        self.ctx.effects = EffectsState::new(seed);
    }

    /// Queue a key press from a DOM key name.
    /// Returns true when the host should call `preventDefault`.
    pub fn key_down(&mut self, dom_key: &str) -> bool {
        let key = Key::from_dom(dom_key);
        if key.is_arrow() {
            self.input.push(InputEvent::KeyDown { key });
        }
        key.is_arrow()
    }

    /// Queue a host event (button press, overlay click).
    pub fn custom_event(&mut self, kind: u32, a: f32, b: f32, c: f32) {
        self.input.push(InputEvent::Custom { kind, a, b, c });
    }

    /// Record a new viewport size and let the game react on the next tick.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.ctx.viewport = Viewport::new(width, height);
        self.input.push(InputEvent::Resize { width });
    }

    /// Run one frame tick: update game, fire timers, redraw if asked, play tones.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        let step_dt = self.timestep.dt();
        for _ in 0..steps {
            // Host input first, so a reset cancels timers before they can fire.
            if !self.input.is_empty() {
                self.game.update(&mut self.ctx, &self.input);
                self.input.drain();
            }

            let fired = self.ctx.timers.advance(step_dt);
            if !fired.is_empty() {
                let mut timer_input = InputQueue::new();
                for timer in fired {
                    timer_input.push(InputEvent::Timer { kind: timer.kind, arg: timer.arg });
                }
                self.game.update(&mut self.ctx, &timer_input);
            }

            self.ctx.effects.tick(step_dt);
        }

        self.flush();
    }

    /// Present a frame if one was requested, then hand off tones and events.
    fn flush(&mut self) {
        if self.ctx.take_redraw() {
            self.redraw();
        }

        for tone in &self.ctx.tones {
            play_best_effort(&mut self.tones, tone);
        }

        self.event_buffer.clear();
        self.event_buffer
            .extend_from_slice(bytemuck::cast_slice(&self.ctx.events));
    }

    fn redraw(&mut self) {
        {
            let mut render_ctx = RenderContext {
                frame: &mut self.frame,
                viewport: self.ctx.viewport,
            };
            self.game.render(&mut render_ctx);
        }

        if self.frame.overlay.is_shown() {
            self.frame.confetti.clone_from(&self.ctx.effects.confetti);
        } else {
            self.frame.confetti.clear();
        }

        if let Err(err) = self.surface.present(&self.frame) {
            log::error!("{}: present failed: {}", self.surface.backend(), err);
        }
    }

    /// JSON snapshot of game state plus the last presented frame.
    pub fn snapshot(&self) -> String {
        let value = serde_json::json!({
            "game": self.game.snapshot(),
            "frame": &self.frame,
            "pending_timers": self.ctx.timers.len(),
        });
        value.to_string()
    }

    /// This frame's game events as `[kind, a, b, c, ...]`.
    pub fn game_events(&self) -> &[f32] {
        &self.event_buffer
    }
}

#[cfg(test)]
impl<G: Game, S: DisplaySurface, T: ToneGenerator> GameRunner<G, S, T> {
    fn game(&self) -> &G {
        &self.game
    }

    fn frame(&self) -> &Frame<G::Cell> {
        &self.frame
    }

    fn surface(&self) -> &S {
        &self.surface
    }

    fn tones(&self) -> &T {
        &self.tones
    }

    fn context(&self) -> &EngineContext {
        &self.ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use maze_engine::{
        CellStyle, GameEvent, Overlay, SurfaceError, ToneError, ToneRequest, Waveform,
    };
    use serde::Serialize;

    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    enum Lamp {
        Lit,
        Dark,
    }

    impl CellStyle for Lamp {
        fn css_class(&self) -> &'static str {
            match self {
                Lamp::Lit => "lit",
                Lamp::Dark => "dark",
            }
        }
    }

    const TIMER_CELEBRATE: u32 = 1;
    const CUSTOM_RESET: u32 = 9;

    /// A 3×1 strip: ArrowRight moves a lit lamp, reaching the end celebrates after 0.5 s.
    struct LampStrip {
        lit: i32,
        celebrating: bool,
    }

    impl Game for LampStrip {
        type Cell = Lamp;

        fn init(&mut self, ctx: &mut EngineContext) {
            ctx.request_redraw();
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            for event in input.iter() {
                match *event {
                    InputEvent::KeyDown { key: Key::ArrowRight } if self.lit < 2 => {
                        self.lit += 1;
                        ctx.emit_tone(ToneRequest::new(220.0, 0.1, Waveform::Sine));
                        ctx.emit_event(GameEvent::new(1.0, self.lit as f32));
                        if self.lit == 2 {
                            ctx.timers.schedule(0.5, TIMER_CELEBRATE, 0);
                        }
                        ctx.request_redraw();
                    }
                    InputEvent::Timer { kind: TIMER_CELEBRATE, .. } => {
                        self.celebrating = true;
                        ctx.effects.spawn_confetti(5);
                        ctx.request_redraw();
                    }
                    InputEvent::Custom { kind: CUSTOM_RESET, .. } => {
                        self.lit = 0;
                        self.celebrating = false;
                        ctx.timers.cancel_all();
                        ctx.effects.clear();
                        ctx.request_redraw();
                    }
                    InputEvent::Resize { .. } => ctx.request_redraw(),
                    _ => {}
                }
            }
        }

        fn render(&self, ctx: &mut RenderContext<'_, Lamp>) {
            let px = if ctx.viewport.is_narrow(768.0) { 40.0 } else { 50.0 };
            ctx.frame.begin(3, 1, px);
            for x in 0..3 {
                let kind = if x == self.lit { Lamp::Lit } else { Lamp::Dark };
                ctx.frame.push(IVec2::new(x, 0), kind);
            }
            ctx.frame.counter = self.lit as u32;
            if self.celebrating {
                ctx.frame.overlay = Overlay::Shown { value: self.lit as u32 };
            }
        }
    }

    /// What the recording surface saw for one presented frame.
    #[derive(Debug, Clone, PartialEq)]
    struct Presented {
        classes: Vec<&'static str>,
        counter: u32,
        overlay: Overlay,
        confetti: usize,
        cell_px: f32,
    }

    #[derive(Default)]
    struct RecordingSurface {
        frames: Vec<Presented>,
    }

    impl DisplaySurface for RecordingSurface {
        fn backend(&self) -> &'static str {
            "recording"
        }

        fn present<C: CellStyle>(&mut self, frame: &Frame<C>) -> Result<(), SurfaceError> {
            self.frames.push(Presented {
                classes: frame.cells.iter().map(|c| c.kind.css_class()).collect(),
                counter: frame.counter,
                overlay: frame.overlay,
                confetti: frame.confetti.len(),
                cell_px: frame.cell_px,
            });
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingTones {
        played: Vec<ToneRequest>,
        fail: bool,
    }

    impl ToneGenerator for RecordingTones {
        fn play(&mut self, tone: &ToneRequest) -> Result<(), ToneError> {
            if self.fail {
                return Err(ToneError::Unavailable("test".into()));
            }
            self.played.push(*tone);
            Ok(())
        }
    }

    fn runner(fail_audio: bool) -> GameRunner<LampStrip, RecordingSurface, RecordingTones> {
        let tones = RecordingTones { fail: fail_audio, ..Default::default() };
        let mut r = GameRunner::new(
            LampStrip { lit: 0, celebrating: false },
            RecordingSurface::default(),
            tones,
            Viewport::new(1024.0, 768.0),
        );
        r.init();
        r
    }

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn init_presents_first_frame() {
        let r = runner(false);
        assert_eq!(r.surface().frames.len(), 1);
        assert_eq!(r.surface().frames[0].classes, vec!["lit", "dark", "dark"]);
        assert_eq!(r.frame().cell_px, 50.0);
        assert_eq!(r.frame().cells[0].pos, IVec2::new(0, 0));
        assert_eq!(r.frame().cells[0].kind, Lamp::Lit);
    }

    #[test]
    fn tick_without_input_does_not_redraw() {
        let mut r = runner(false);
        r.tick(FRAME);
        r.tick(FRAME);
        assert_eq!(r.surface().frames.len(), 1);
    }

    #[test]
    fn only_arrow_keys_are_queued() {
        let mut r = runner(false);
        assert!(!r.key_down("a"));
        assert!(r.key_down("ArrowRight"));
        r.tick(FRAME);
        assert_eq!(r.game().lit, 1);
        assert_eq!(r.tones().played.len(), 1);
        assert_eq!(r.game_events(), &[1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn input_waits_for_a_whole_step() {
        let mut r = runner(false);
        r.key_down("ArrowRight");
        r.tick(FRAME / 4.0);
        assert_eq!(r.game().lit, 0);
        r.tick(FRAME);
        assert_eq!(r.game().lit, 1);
    }

    #[test]
    fn timer_fires_after_delay_and_shows_confetti() {
        let mut r = runner(false);
        r.key_down("ArrowRight");
        r.key_down("ArrowRight");
        r.tick(FRAME);
        assert!(!r.game().celebrating);

        for _ in 0..40 {
            r.tick(FRAME);
        }
        assert!(r.game().celebrating);
        let last = r.surface().frames.last().cloned().unwrap();
        assert_eq!(last.overlay, Overlay::Shown { value: 2 });
        assert_eq!(last.confetti, 5);
        assert_eq!(last.classes, vec!["dark", "dark", "lit"]);
    }

    #[test]
    fn reset_before_timer_cancels_it() {
        let mut r = runner(false);
        r.key_down("ArrowRight");
        r.key_down("ArrowRight");
        r.tick(FRAME);
        r.custom_event(CUSTOM_RESET, 0.0, 0.0, 0.0);
        for _ in 0..60 {
            r.tick(FRAME);
        }
        assert!(!r.game().celebrating);
        assert_eq!(r.context().timers.len(), 0);
        assert!(r.frame().confetti.is_empty());
    }

    #[test]
    fn audio_failure_does_not_stop_play() {
        let mut r = runner(true);
        r.key_down("ArrowRight");
        r.tick(FRAME);
        assert_eq!(r.game().lit, 1);
        assert!(r.tones().played.is_empty());
        assert_eq!(r.frame().counter, 1);
    }

    #[test]
    fn resize_redraws_with_new_cell_size() {
        let mut r = runner(false);
        r.resize(500.0, 800.0);
        r.tick(FRAME);
        assert_eq!(r.surface().frames.len(), 2);
        assert_eq!(r.frame().cell_px, 40.0);
        assert_eq!(r.frame().columns, 3);
    }

    #[test]
    fn resize_during_celebration_keeps_confetti_age() {
        let mut r = runner(false);
        r.key_down("ArrowRight");
        r.key_down("ArrowRight");
        for _ in 0..60 {
            r.tick(FRAME);
        }
        let live_age = r.context().effects.confetti[0].age;
        assert!(live_age > 0.0);

        r.resize(500.0, 800.0);
        r.tick(FRAME);
        let presented = &r.frame().confetti;
        assert_eq!(presented.len(), 5);
        assert!(presented[0].age > live_age);
        assert_eq!(presented, &r.context().effects.confetti);
    }

    #[test]
    fn reseed_changes_confetti_layout() {
        let mut a = runner(false);
        let mut b = runner(false);
        b.reseed_effects(12345);
        for r in [&mut a, &mut b] {
            r.key_down("ArrowRight");
            r.key_down("ArrowRight");
            for _ in 0..40 {
                r.tick(FRAME);
            }
        }
        assert_eq!(a.frame().confetti.len(), b.frame().confetti.len());
        assert_ne!(a.frame().confetti, b.frame().confetti);
    }

    #[test]
    fn snapshot_is_json() {
        let r = runner(false);
        let parsed: serde_json::Value = serde_json::from_str(&r.snapshot()).unwrap();
        assert_eq!(parsed["frame"]["columns"], 3);
        assert_eq!(parsed["pending_timers"], 0);
    }
}
