use glam::IVec2;
use serde::Serialize;

use crate::systems::effects::Confetti;

/// Visual classification of a grid cell.
/// Games implement this for their cell enum; surfaces only see the class name.
pub trait CellStyle: Copy + PartialEq + std::fmt::Debug + Serialize {
    /// CSS class applied to the cell element.
    fn css_class(&self) -> &'static str;
}

/// One classified cell in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellInstance<C> {
    pub pos: IVec2,
    pub kind: C,
}

/// Completion overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Overlay {
    #[default]
    Hidden,
    /// Visible, showing a final counter value.
    Shown { value: u32 },
}

impl Overlay {
    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown { .. })
    }
}

/// Everything a display surface needs to draw one full frame.
/// Rebuilt from scratch on every redraw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame<C> {
    pub columns: u32,
    pub rows: u32,
    /// Edge length of one cell in CSS pixels.
    pub cell_px: f32,
    /// Cells in row-major order.
    pub cells: Vec<CellInstance<C>>,
    /// Value of the on-screen counter (steps, score, ...).
    pub counter: u32,
    pub overlay: Overlay,
    /// Live confetti; only drawn while the overlay is shown.
    pub confetti: Vec<Confetti>,
}

impl<C: CellStyle> Frame<C> {
    pub fn new() -> Self {
        Self {
            columns: 0,
            rows: 0,
            cell_px: 0.0,
            cells: Vec::with_capacity(128),
            counter: 0,
            overlay: Overlay::Hidden,
            confetti: Vec::new(),
        }
    }

    /// Reset for a new redraw of a `columns` × `rows` grid.
    pub fn begin(&mut self, columns: u32, rows: u32, cell_px: f32) {
        self.columns = columns;
        self.rows = rows;
        self.cell_px = cell_px;
        self.cells.clear();
        self.counter = 0;
        self.overlay = Overlay::Hidden;
        self.confetti.clear();
    }

    pub fn push(&mut self, pos: IVec2, kind: C) {
        self.cells.push(CellInstance { pos, kind });
    }
}

impl<C: CellStyle> Default for Frame<C> {
    fn default() -> Self {
        Self::new()
    }
}
