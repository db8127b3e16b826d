use crate::coords::{Rect, Viewport};
use crate::paint::Color;

use super::{Surface, SurfaceCmd};

/// A rectangle outline currently visible on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub rect: Rect,
    pub line_width: f32,
    pub color: Color,
}

/// Headless surface that keeps what is visible instead of rasterizing it.
///
/// - `strokes()` is the visible content: every outline stroked since the last
///   clear that covered it.
/// - the command log is opt-in ([`with_command_log`](Self::with_command_log))
///   so long-running loops do not grow it without bound.
#[derive(Debug)]
pub struct RecordingSurface {
    viewport: Viewport,
    line_width: f32,
    stroke_color: Color,
    strokes: Vec<Stroke>,

    log_commands: bool,
    commands: Vec<SurfaceCmd>,
}

impl RecordingSurface {
    /// Creates an empty surface with a canvas-like default pen (1 unit, black).
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            line_width: 1.0,
            stroke_color: Color::BLACK,
            strokes: Vec::new(),
            log_commands: false,
            commands: Vec::new(),
        }
    }

    /// Enables recording of every call into [`commands`](Self::commands).
    pub fn with_command_log(mut self) -> Self {
        self.log_commands = true;
        self
    }

    #[inline]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    #[inline]
    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    #[inline]
    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    #[inline]
    pub fn commands(&self) -> &[SurfaceCmd] {
        &self.commands
    }

    /// Drains the command log, keeping its allocation.
    pub fn take_commands(&mut self) -> Vec<SurfaceCmd> {
        std::mem::take(&mut self.commands)
    }

    fn record(&mut self, cmd: SurfaceCmd) {
        if self.log_commands {
            self.commands.push(cmd);
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn clear_rect(&mut self, rect: Rect) {
        // Only the on-surface part of an outline is visible, so that part is
        // what a clear has to cover. Outlines entirely off-surface go too.
        let area = self.viewport.bounds();
        self.strokes.retain(|s| match s.rect.intersect(area) {
            Some(visible) => !rect.contains_rect(visible),
            None => false,
        });
        self.record(SurfaceCmd::ClearRect(rect));
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
        self.record(SurfaceCmd::SetLineWidth(width));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
        self.record(SurfaceCmd::SetStrokeColor(color));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.strokes.push(Stroke {
            rect,
            line_width: self.line_width,
            color: self.stroke_color,
        });
        self.record(SurfaceCmd::StrokeRect(rect));
    }
}
