use maze_engine::{ToneRequest, Waveform};

/// Short blip for a successful step.
pub const MOVE_TONE: ToneRequest = ToneRequest::new(220.0, 0.1, Waveform::Sine);

/// Harsher buzz for a blocked step.
pub const ERROR_TONE: ToneRequest = ToneRequest::new(150.0, 0.2, Waveform::Sawtooth);

/// Win melody, C4 up to C5.
pub const MELODY: [f32; 8] = [262.0, 294.0, 330.0, 349.0, 392.0, 440.0, 494.0, 523.0];
pub const NOTE_DURATION: f32 = 0.3;
/// Seconds between melody note starts.
pub const NOTE_SPACING: f32 = 0.15;

/// Melody note `index`, or None past the end.
pub fn melody_note(index: u32) -> Option<ToneRequest> {
    MELODY
        .get(index as usize)
        .map(|&freq| ToneRequest::new(freq, NOTE_DURATION, Waveform::Sine))
}

/// Start offset of melody note `index` from the first note.
pub fn note_offset(index: u32) -> f32 {
    index as f32 * NOTE_SPACING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn melody_ascends() {
        assert!(MELODY.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn melody_notes_are_sine_and_bounded() {
        let first = melody_note(0).unwrap();
        assert_eq!(first.frequency, 262.0);
        assert_eq!(first.waveform, Waveform::Sine);
        assert_eq!(melody_note(7).unwrap().frequency, 523.0);
        assert!(melody_note(8).is_none());
    }

    #[test]
    fn notes_are_evenly_spaced() {
        assert_eq!(note_offset(0), 0.0);
        assert!((note_offset(7) - 1.05).abs() < 1e-6);
    }
}
