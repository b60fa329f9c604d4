pub mod frame;
pub mod traits;

pub use frame::{CellInstance, CellStyle, Frame, Overlay};
pub use traits::{play_best_effort, DisplaySurface, SurfaceError, ToneError, ToneGenerator};
