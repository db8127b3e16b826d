//! Shape variants.
//!
//! Extending the scene:
//! - add a new shape module under `scene::shapes::*`
//! - implement [`Shape`] for it (at least `name`, `size` and `draw`)
//! - add a [`ShapeType`] variant so the controller factory can build it

pub(crate) mod rect;

use core::fmt;
use core::str::FromStr;

use crate::coords::Vec2;
use crate::error::SceneError;
use crate::surface::Surface;

pub use rect::Rectangle;

/// Drawing and sizing capability of a renderable.
///
/// Position, collision and the action queue live on
/// [`Renderable`](crate::scene::Renderable); a shape only knows its extent and
/// how to paint itself at a given origin.
pub trait Shape: fmt::Debug + Send + Sync {
    /// Short variant name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Collision box extent (width, height).
    fn size(&self) -> Vec2;

    /// Paints the shape with its top-left corner at `origin`.
    ///
    /// Every variant is expected to override this. The fallback reports
    /// [`SceneError::DrawNotImplemented`] so a forgotten override surfaces
    /// as an error instead of an invisible object.
    fn draw(&self, origin: Vec2, surface: &mut dyn Surface) -> Result<(), SceneError> {
        let _ = (origin, surface);
        log::warn!("shape `{}` has no draw implementation", self.name());
        Err(SceneError::DrawNotImplemented(self.name()))
    }
}

/// Factory tag accepted by
/// [`SurfaceController::add_shape`](crate::controller::SurfaceController::add_shape).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeType {
    Rectangle,
}

impl ShapeType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ShapeType::Rectangle => SHAPE_TYPE_RECTANGLE,
        }
    }
}

/// Tag string for [`ShapeType::Rectangle`].
pub const SHAPE_TYPE_RECTANGLE: &str = "Rectangle";

impl FromStr for ShapeType {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SHAPE_TYPE_RECTANGLE => Ok(ShapeType::Rectangle),
            other => Err(SceneError::UnknownShape(other.to_string())),
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
