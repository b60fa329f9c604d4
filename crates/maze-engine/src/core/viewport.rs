use serde::Serialize;

/// Host viewport size in logical (CSS) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when the viewport is narrower than `breakpoint`.
    pub fn is_narrow(&self, breakpoint: f32) -> bool {
        self.width < breakpoint
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024.0, 768.0)
    }
}
