//! Output seams between the engine and the host platform.
//!
//! The engine never touches the DOM or the audio hardware itself. Games
//! describe what to show in a `Frame` and what to play as `ToneRequest`s;
//! the host supplies a `DisplaySurface` and a `ToneGenerator` that turn them
//! into pixels and sound. The wasm bridge implements both over web-sys.

use thiserror::Error;

use super::frame::{CellStyle, Frame};
use crate::api::types::ToneRequest;

/// Failure reported by a `ToneGenerator`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToneError {
    /// No audio backend on this platform (e.g. Web Audio missing).
    #[error("audio backend unavailable: {0}")]
    Unavailable(String),
    /// The backend exists but refused the request.
    #[error("tone synthesis failed: {0}")]
    Synthesis(String),
}

/// Failure reported by a `DisplaySurface`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    #[error("missing element #{0}")]
    MissingElement(String),
    #[error("display operation failed: {0}")]
    Dom(String),
}

/// Draws full frames.
pub trait DisplaySurface {
    /// Backend identifier (e.g. "dom", "recording").
    fn backend(&self) -> &'static str;

    /// Replace everything on screen with `frame`.
    /// Must be idempotent: presenting the same frame twice shows the same thing.
    fn present<C: CellStyle>(&mut self, frame: &Frame<C>) -> Result<(), SurfaceError>;
}

/// Synthesizes tones. Best-effort: callers go through `play_best_effort`.
pub trait ToneGenerator {
    fn play(&mut self, tone: &ToneRequest) -> Result<(), ToneError>;
}

/// Play a tone, logging and swallowing any failure.
/// Returns whether the tone was accepted.
pub fn play_best_effort<T: ToneGenerator + ?Sized>(generator: &mut T, tone: &ToneRequest) -> bool {
    match generator.play(tone) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("audio: {} ({} Hz dropped)", err, tone.frequency);
            false
        }
    }
}
