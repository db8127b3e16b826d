use crate::coords::{Rect, Vec2};
use crate::error::SceneError;
use crate::paint::Color;
use crate::surface::Surface;

use super::Shape;

/// Outlined axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub width: f32,
    pub height: f32,
    pub stroke: Color,
}

impl Rectangle {
    /// Rectangle stroked in the default color (red).
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, stroke: Color::default() }
    }

    #[inline]
    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = stroke;
        self
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    fn draw(&self, origin: Vec2, surface: &mut dyn Surface) -> Result<(), SceneError> {
        surface.set_line_width(1.0);
        surface.set_stroke_color(self.stroke);
        surface.stroke_rect(Rect::from_origin_size(origin, self.size()));
        Ok(())
    }
}
