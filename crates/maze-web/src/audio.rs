//! Web Audio tone generator.
//!
//! One oscillator + gain node per tone, started immediately and stopped after
//! the tone's duration. The gain decays exponentially so tones don't click.

use maze_engine::{ToneError, ToneGenerator, ToneRequest, Waveform};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

/// Gain at tone start.
pub const START_GAIN: f32 = 0.1;
/// Gain at tone end. Must stay above zero for an exponential ramp.
pub const END_GAIN: f32 = 0.01;

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn synth_err(err: JsValue) -> ToneError {
    ToneError::Synthesis(js_message(&err))
}

fn oscillator_type(waveform: Waveform) -> OscillatorType {
    match waveform {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Square => OscillatorType::Square,
        Waveform::Sawtooth => OscillatorType::Sawtooth,
        Waveform::Triangle => OscillatorType::Triangle,
    }
}

/// Tone generator over a single lazily created `AudioContext`.
/// The context is created on the first tone. Tones are played from the frame
/// loop, one tick after the key press that caused them, so browsers that gate
/// audio on user activation allow it only through sticky activation.
#[derive(Default)]
pub struct WebAudioTones {
    context: Option<AudioContext>,
}

impl WebAudioTones {
    pub fn new() -> Self {
        Self { context: None }
    }

    fn context(&mut self) -> Result<AudioContext, ToneError> {
        if let Some(ctx) = &self.context {
            return Ok(ctx.clone());
        }
        let ctx = AudioContext::new().map_err(|e| ToneError::Unavailable(js_message(&e)))?;
        log::info!("audio: context created ({} Hz)", ctx.sample_rate());
        self.context = Some(ctx.clone());
        Ok(ctx)
    }
}

impl ToneGenerator for WebAudioTones {
    #[allow(deprecated)]
    fn play(&mut self, tone: &ToneRequest) -> Result<(), ToneError> {
        let ctx = self.context()?;

        let oscillator = ctx.create_oscillator().map_err(synth_err)?;
        let gain = ctx.create_gain().map_err(synth_err)?;
        oscillator.connect_with_audio_node(&gain).map_err(synth_err)?;
        gain.connect_with_audio_node(&ctx.destination()).map_err(synth_err)?;

        oscillator.frequency().set_value(tone.frequency);
        oscillator.set_type(oscillator_type(tone.waveform));

        let now = ctx.current_time();
        let end = now + tone.duration as f64;
        gain.gain().set_value_at_time(START_GAIN, now).map_err(synth_err)?;
        gain.gain()
            .exponential_ramp_to_value_at_time(END_GAIN, end)
            .map_err(synth_err)?;

        oscillator.start_with_when(now).map_err(synth_err)?;
        oscillator.stop_with_when(end).map_err(synth_err)?;
        Ok(())
    }
}
