use bytemuck::{Pod, Zeroable};
use serde::Serialize;

/// Oscillator shape for a tone.
/// Names match the Web Audio `OscillatorType` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// A tone the game wants played.
/// The host's `ToneGenerator` synthesizes it; failures never reach the game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToneRequest {
    /// Frequency in Hz.
    pub frequency: f32,
    /// Duration in seconds.
    pub duration: f32,
    pub waveform: Waveform,
}

impl ToneRequest {
    pub const fn new(frequency: f32, duration: f32, waveform: Waveform) -> Self {
        Self { frequency, duration, waveform }
    }
}

/// A game event forwarded to the host page.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub fn new(kind: f32, a: f32) -> Self {
        Self { kind, a, b: 0.0, c: 0.0 }
    }
}
