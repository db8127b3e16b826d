//! Deferred per-object behavior.
//!
//! Each renderable owns a FIFO queue of actions. On every update the head
//! action runs once; it is dropped from the queue as soon as it reports
//! finished. Lifecycle of every action: `Pending -> Finished`, never back.

mod function;
mod movement;

pub use function::FunctionAction;
pub use movement::MoveAction;

use crate::error::SceneError;
use crate::scene::{ObjectId, Registry};

/// A unit of queued behavior.
pub trait Action: Send {
    /// Advances the action by one update of its owner.
    fn execute(&mut self, ctx: &mut ActionCtx<'_>) -> Result<(), SceneError>;

    fn is_finished(&self) -> bool;
}

/// What an executing action may touch: its owner, through the registry.
///
/// The owner is a plain [`ObjectId`]; the registry lock is not held while
/// an action runs, so callbacks may call back into the registry.
pub struct ActionCtx<'a> {
    registry: &'a Registry,
    owner: ObjectId,
}

impl<'a> ActionCtx<'a> {
    pub(crate) fn new(registry: &'a Registry, owner: ObjectId) -> Self {
        Self { registry, owner }
    }

    #[inline]
    pub fn owner(&self) -> ObjectId {
        self.owner
    }

    #[inline]
    pub fn registry(&self) -> &Registry {
        self.registry
    }

    /// Moves the owner, honoring collisions. See [`Registry::step`].
    pub fn step(&mut self, dx: f32, dy: f32) -> Result<bool, SceneError> {
        self.registry.step(self.owner, dx, dy)
    }
}
