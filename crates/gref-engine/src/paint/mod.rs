//! Stroke colors.
//!
//! Surfaces receive straight (non-premultiplied) sRGB bytes; shape configs may
//! name colors the way a 2D canvas context does (`"red"`, `"#ff0000"`).

pub mod color;

pub use color::{Color, ColorParseError};
