//! Drawable surface abstraction.
//!
//! The scene only needs an immediate-mode 2D context: clear a region, set the
//! pen, stroke a rectangle outline, and report its size. Acquiring a real
//! canvas or window is left to the embedding application.

mod cmd;
mod recording;

pub use cmd::SurfaceCmd;
pub use recording::{RecordingSurface, Stroke};

use crate::coords::{Rect, Viewport};
use crate::paint::Color;

/// Immediate-mode 2D drawing context.
pub trait Surface {
    /// Drawable area.
    fn size(&self) -> Viewport;

    /// Erases everything painted inside `rect`.
    fn clear_rect(&mut self, rect: Rect);

    fn set_line_width(&mut self, width: f32);

    fn set_stroke_color(&mut self, color: Color);

    /// Strokes the outline of `rect` with the current pen.
    fn stroke_rect(&mut self, rect: Rect);
}
