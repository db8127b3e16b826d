use crate::coords::Vec2;
use crate::error::SceneError;

use super::{Action, ActionCtx};

/// Steps the owner by a fixed displacement a number of times.
///
/// Only successful steps count; a step blocked by a collision is retried with
/// the same displacement on the next update.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveAction {
    delta: Vec2,
    remaining: u32,
}

impl MoveAction {
    /// `steps == 0` is finished immediately and never moves the owner.
    pub fn new(dx: f32, dy: f32, steps: u32) -> Self {
        Self { delta: Vec2::new(dx, dy), remaining: steps }
    }

    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    #[inline]
    pub fn remaining_steps(&self) -> u32 {
        self.remaining
    }
}

impl Action for MoveAction {
    fn execute(&mut self, ctx: &mut ActionCtx<'_>) -> Result<(), SceneError> {
        if self.remaining == 0 {
            return Ok(());
        }

        if ctx.step(self.delta.x, self.delta.y)? {
            self.remaining -= 1;
        } else {
            log::trace!("{} blocked, {} steps left", ctx.owner(), self.remaining);
        }
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Registry, Renderable, UpdateOutcome, ZIndex};
    use crate::scene::shapes::Rectangle;

    fn rect(registry: &Registry, x: f32, y: f32, collidable: bool) -> crate::scene::ObjectId {
        let obj = Renderable::new(Rectangle::new(10.0, 10.0), Vec2::new(x, y), collidable);
        registry.add_object(obj, ZIndex::new(0))
    }

    #[test]
    fn unblocked_move_finishes_after_exactly_n_updates() {
        let registry = Registry::new();
        let id = rect(&registry, 0.0, 0.0, false);
        registry.add_action(id, MoveAction::new(1.0, 0.0, 200)).unwrap();

        for _ in 0..199 {
            assert_eq!(registry.update(id).unwrap(), UpdateOutcome::Pending);
        }
        assert_eq!(registry.update(id).unwrap(), UpdateOutcome::Finished);
        assert_eq!(registry.position(id), Some(Vec2::new(200.0, 0.0)));
        assert_eq!(registry.pending_actions(id), Some(0));
        assert_eq!(registry.update(id).unwrap(), UpdateOutcome::Idle);
    }

    #[test]
    fn blocked_steps_do_not_count() {
        let registry = Registry::new();
        let mover = rect(&registry, 0.0, 0.0, true);
        // Overlaps the mover's candidate box on every step; no shared edge.
        rect(&registry, 5.0, 5.0, true);
        registry.add_action(mover, MoveAction::new(1.0, 0.0, 200)).unwrap();

        for _ in 0..500 {
            assert_eq!(registry.update(mover).unwrap(), UpdateOutcome::Pending);
        }
        assert_eq!(registry.position(mover), Some(Vec2::zero()));
        assert_eq!(registry.pending_actions(mover), Some(1));
    }

    #[test]
    fn zero_steps_is_finished_without_moving() {
        let registry = Registry::new();
        let id = rect(&registry, 3.0, 4.0, false);
        let action = MoveAction::new(1.0, 1.0, 0);
        assert!(action.is_finished());

        registry.add_action(id, action).unwrap();
        assert_eq!(registry.update(id).unwrap(), UpdateOutcome::Finished);
        assert_eq!(registry.position(id), Some(Vec2::new(3.0, 4.0)));
    }
}
