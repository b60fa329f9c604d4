//! Visual effects: celebration confetti.
//!
//! `EffectsState` owns the live pieces and the seeded RNG that places them.
//! Effects never feed back into game state.

mod confetti;
mod rng;

pub use confetti::Confetti;
pub use rng::Rng;

/// Container for all live visual effects.
pub struct EffectsState {
    pub confetti: Vec<Confetti>,
    pub rng: Rng,
}

impl EffectsState {
    /// Create a new EffectsState with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        EffectsState {
            confetti: Vec::new(),
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    /// Replace any live confetti with `count` fresh pieces.
    pub fn spawn_confetti(&mut self, count: usize) {
        self.confetti.clear();
        for _ in 0..count {
            let piece = Confetti::random(&mut self.rng);
            self.confetti.push(piece);
        }
    }

    /// Advance all effects by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        for piece in &mut self.confetti {
            piece.tick(dt);
        }
    }

    /// Remove every live effect.
    pub fn clear(&mut self) {
        self.confetti.clear();
    }
}
