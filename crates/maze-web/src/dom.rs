//! DOM display surface.
//!
//! Expects the host page to provide these element ids:
//! `maze`, `steps`, `celebration-modal`, `final-steps`, `confetti-container`.
//! Every present rebuilds the grid children from scratch.

use maze_engine::{CellStyle, Confetti, DisplaySurface, Frame, Overlay, SurfaceError, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

pub const MAZE_ID: &str = "maze";
pub const STEPS_ID: &str = "steps";
pub const OVERLAY_ID: &str = "celebration-modal";
pub const FINAL_STEPS_ID: &str = "final-steps";
pub const CONFETTI_ID: &str = "confetti-container";

/// CSS class that hides the overlay.
const HIDDEN_CLASS: &str = "hidden";

fn dom_err(err: JsValue) -> SurfaceError {
    SurfaceError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Current window size in CSS pixels. Falls back to the engine default off-browser.
pub fn viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::default();
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    match (width, height) {
        (Some(w), Some(h)) => Viewport::new(w as f32, h as f32),
        _ => Viewport::default(),
    }
}

/// Seed for per-page randomness (confetti layout).
pub fn session_seed() -> u64 {
    js_sys::Date::now() as u64
}

pub struct DomSurface {
    document: Document,
    maze: HtmlElement,
    steps: Element,
    overlay: Element,
    final_steps: Element,
    confetti: HtmlElement,
}

impl DomSurface {
    /// Look up all required elements in the current page.
    pub fn attach_to_page() -> Result<Self, SurfaceError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SurfaceError::Dom("no document".into()))?;
        Self::attach(document)
    }

    pub fn attach(document: Document) -> Result<Self, SurfaceError> {
        let maze = html_element(&document, MAZE_ID)?;
        let steps = element(&document, STEPS_ID)?;
        let overlay = element(&document, OVERLAY_ID)?;
        let final_steps = element(&document, FINAL_STEPS_ID)?;
        let confetti = html_element(&document, CONFETTI_ID)?;
        Ok(Self {
            document,
            maze,
            steps,
            overlay,
            final_steps,
            confetti,
        })
    }

    fn draw_cells<C: CellStyle>(&self, frame: &Frame<C>) -> Result<(), SurfaceError> {
        self.maze.set_inner_html("");
        let style = self.maze.style();
        style
            .set_property(
                "grid-template-columns",
                &format!("repeat({}, {}px)", frame.columns, frame.cell_px),
            )
            .map_err(dom_err)?;
        style
            .set_property(
                "grid-template-rows",
                &format!("repeat({}, {}px)", frame.rows, frame.cell_px),
            )
            .map_err(dom_err)?;

        for cell in &frame.cells {
            let div = self.document.create_element("div").map_err(dom_err)?;
            div.set_class_name(&format!("maze-cell {}", cell.kind.css_class()));
            div.set_attribute("data-x", &cell.pos.x.to_string()).map_err(dom_err)?;
            div.set_attribute("data-y", &cell.pos.y.to_string()).map_err(dom_err)?;
            self.maze.append_child(&div).map_err(dom_err)?;
        }
        Ok(())
    }

    fn draw_overlay(&self, overlay: Overlay, confetti: &[Confetti]) -> Result<(), SurfaceError> {
        let classes = self.overlay.class_list();
        self.confetti.set_inner_html("");

        match overlay {
            Overlay::Hidden => {
                classes.add_1(HIDDEN_CLASS).map_err(dom_err)?;
            }
            Overlay::Shown { value } => {
                self.final_steps.set_text_content(Some(&value.to_string()));
                classes.remove_1(HIDDEN_CLASS).map_err(dom_err)?;
                for piece in confetti {
                    let div = self.document.create_element("div").map_err(dom_err)?;
                    div.set_class_name("confetti");
                    div.set_attribute("style", &confetti_style(piece))
                        .map_err(dom_err)?;
                    self.confetti.append_child(&div).map_err(dom_err)?;
                }
            }
        }
        Ok(())
    }
}

impl DisplaySurface for DomSurface {
    fn backend(&self) -> &'static str {
        "dom"
    }

    fn present<C: CellStyle>(&mut self, frame: &Frame<C>) -> Result<(), SurfaceError> {
        self.draw_cells(frame)?;
        self.steps.set_text_content(Some(&frame.counter.to_string()));
        self.draw_overlay(frame.overlay, &frame.confetti)
    }
}

/// Inline style for one confetti piece. The delay is offset by the piece's
/// age, so a rebuilt div continues its fall instead of restarting at the top.
fn confetti_style(piece: &Confetti) -> String {
    format!(
        "left: {:.1}%; animation-delay: {:.2}s; animation-duration: {:.2}s; \
         background-color: hsl({:.0}, 85%, 60%);",
        piece.left,
        piece.resume_delay(),
        piece.duration,
        piece.hue
    )
}

fn element(document: &Document, id: &str) -> Result<Element, SurfaceError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SurfaceError::MissingElement(id.to_string()))
}

fn html_element(document: &Document, id: &str) -> Result<HtmlElement, SurfaceError> {
    element(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SurfaceError::Dom(format!("#{} is not an HTML element", id)))
}
