use crate::action::Action;
use crate::coords::{Rect, Vec2};
use crate::error::SceneError;
use crate::scene::{ObjectId, Registry, UpdateOutcome};

/// A registered shape, as returned by
/// [`SurfaceController::add_shape`](super::SurfaceController::add_shape).
///
/// Cheap to clone; all calls go through the owning registry.
#[derive(Debug, Clone)]
pub struct ShapeHandle {
    id: ObjectId,
    registry: Registry,
}

impl ShapeHandle {
    pub(crate) fn new(id: ObjectId, registry: Registry) -> Self {
        Self { id, registry }
    }

    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn add_action(&self, action: impl Action + 'static) -> Result<(), SceneError> {
        self.registry.add_action(self.id, action)
    }

    pub fn update(&self) -> Result<UpdateOutcome, SceneError> {
        self.registry.update(self.id)
    }

    pub fn step(&self, dx: f32, dy: f32) -> Result<bool, SceneError> {
        self.registry.step(self.id, dx, dy)
    }

    pub fn position(&self) -> Option<Vec2> {
        self.registry.position(self.id)
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.registry.bounds(self.id)
    }

    pub fn pending_actions(&self) -> Option<usize> {
        self.registry.pending_actions(self.id)
    }
}
