use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use crate::action::Action;
use crate::coords::{Rect, Vec2};
use crate::error::SceneError;
use crate::surface::Surface;

use super::shapes::Shape;

/// Handle naming a renderable inside one [`Registry`](super::Registry).
///
/// Handles are dense and never reused; objects are not removed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ObjectId(pub(crate) u32);

impl ObjectId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.0)
    }
}

/// A positioned shape with its own action queue.
pub struct Renderable {
    shape: Arc<dyn Shape>,
    pub(crate) origin: Vec2,
    collidable: bool,
    pub(crate) actions: VecDeque<Box<dyn Action>>,
}

impl Renderable {
    pub fn new(shape: impl Shape + 'static, origin: Vec2, collidable: bool) -> Self {
        Self::from_boxed(Box::new(shape), origin, collidable)
    }

    pub fn from_boxed(shape: Box<dyn Shape>, origin: Vec2, collidable: bool) -> Self {
        Self {
            shape: Arc::from(shape),
            origin,
            collidable,
            actions: VecDeque::new(),
        }
    }

    #[inline]
    pub fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    /// Shared handle to the shape, usable after the registry lock is gone.
    #[inline]
    pub(crate) fn shape_handle(&self) -> Arc<dyn Shape> {
        Arc::clone(&self.shape)
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn is_collidable(&self) -> bool {
        self.collidable
    }

    /// Current collision box.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.shape.size())
    }

    #[inline]
    pub fn pending_actions(&self) -> usize {
        self.actions.len()
    }

    /// Appends to the back of the queue; whatever is running keeps running.
    pub fn add_action(&mut self, action: impl Action + 'static) {
        self.push_action(Box::new(action));
    }

    pub(crate) fn push_action(&mut self, action: Box<dyn Action>) {
        self.actions.push_back(action);
    }

    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), SceneError> {
        self.shape.draw(self.origin, surface)
    }
}

impl fmt::Debug for Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderable")
            .field("shape", &self.shape)
            .field("origin", &self.origin)
            .field("collidable", &self.collidable)
            .field("pending_actions", &self.actions.len())
            .finish()
    }
}
