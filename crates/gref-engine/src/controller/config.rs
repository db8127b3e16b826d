use std::time::Duration;

use crate::time::DEFAULT_TICK_INTERVAL;

/// Tick loop configuration.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Period between tick starts.
    pub tick_interval: Duration,
    /// Stop after this many ticks. `None` runs for the rest of the process.
    pub max_ticks: Option<u64>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            max_ticks: None,
        }
    }
}

/// Construction parameters for
/// [`SurfaceController::add_shape`](super::SurfaceController::add_shape).
///
/// `z` (the layer key) is required; there is no implicit default layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeParams {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub z: i32,
    pub collision: bool,
    /// Stroke color as a canvas color string (`"white"`, `"#3080ff"`).
    /// `None` keeps the shape's default.
    pub stroke: Option<String>,
}

impl ShapeParams {
    /// Non-collidable shape with the default stroke.
    pub fn new(x: f32, y: f32, w: f32, h: f32, z: i32) -> Self {
        Self { x, y, w, h, z, collision: false, stroke: None }
    }

    pub fn collision(mut self, collision: bool) -> Self {
        self.collision = collision;
        self
    }

    pub fn stroke(mut self, color: impl Into<String>) -> Self {
        self.stroke = Some(color.into());
        self
    }
}
