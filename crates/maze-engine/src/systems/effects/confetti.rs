//! Falling confetti for celebration overlays. Purely cosmetic.

use serde::Serialize;

use super::rng::Rng;

/// One confetti piece.
/// Pieces fall from the top edge to the bottom edge, then start over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Confetti {
    /// Horizontal position as a percentage of the layer width.
    pub left: f32,
    /// Seconds before the piece starts falling.
    pub delay: f32,
    /// Seconds for one fall from top to bottom.
    pub duration: f32,
    /// Hue in degrees.
    pub hue: f32,
    /// Seconds since the piece was spawned.
    pub age: f32,
}

impl Confetti {
    pub const MAX_DELAY: f32 = 3.0;
    pub const MIN_DURATION: f32 = 2.0;
    pub const MAX_DURATION: f32 = 4.0;

    /// A piece with random position, delay, fall duration and hue.
    pub fn random(rng: &mut Rng) -> Self {
        Self {
            left: rng.range(0.0, 100.0),
            delay: rng.range(0.0, Self::MAX_DELAY),
            duration: rng.range(Self::MIN_DURATION, Self::MAX_DURATION),
            hue: rng.range(0.0, 360.0),
            age: 0.0,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.age += dt;
    }

    /// Animation delay that resumes the fall where it would be after `age`
    /// seconds. Negative once the piece has started falling.
    pub fn resume_delay(&self) -> f32 {
        self.delay - self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_piece_respects_ranges() {
        let mut rng = Rng::new(99);
        for _ in 0..200 {
            let c = Confetti::random(&mut rng);
            assert!((0.0..100.0).contains(&c.left));
            assert!((0.0..Confetti::MAX_DELAY).contains(&c.delay));
            assert!((Confetti::MIN_DURATION..Confetti::MAX_DURATION).contains(&c.duration));
        }
    }

    #[test]
    fn resume_delay_counts_down_with_age() {
        let mut c = Confetti { left: 50.0, delay: 1.0, duration: 2.0, hue: 0.0, age: 0.0 };
        assert_eq!(c.resume_delay(), 1.0);
        c.tick(0.25);
        assert_eq!(c.resume_delay(), 0.75);
        c.tick(2.75);
        assert_eq!(c.resume_delay(), -2.0);
    }
}
