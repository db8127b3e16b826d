//! Geometry shared by shapes, collision and surfaces.
//!
//! Canonical space:
//! - surface units, origin top-left
//! - +X right, +Y down
//!
//! Collision boxes are half-open: `[min, max)` on both axes.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
