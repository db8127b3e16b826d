//! Gref engine crate.
//!
//! A small 2D scene framework: layered renderables drawn onto an
//! immediate-mode surface, collision-constrained movement between
//! axis-aligned boxes, and a per-object queue of deferred actions driven by a
//! fixed-period tick.

pub mod action;
pub mod controller;
pub mod coords;
pub mod error;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod surface;
pub mod time;

pub use error::SceneError;
