use crate::error::SceneError;

use super::{Action, ActionCtx};

type Callback = Box<dyn FnOnce() + Send>;

/// Runs a callback once, then finishes.
pub struct FunctionAction {
    callback: Option<Callback>,
}

impl FunctionAction {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self { callback: Some(Box::new(callback)) }
    }
}

impl Action for FunctionAction {
    fn execute(&mut self, _ctx: &mut ActionCtx<'_>) -> Result<(), SceneError> {
        // Taking the callback out makes a second execute a no-op.
        if let Some(callback) = self.callback.take() {
            callback();
        }
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.callback.is_none()
    }
}

impl std::fmt::Debug for FunctionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionAction")
            .field("finished", &self.is_finished())
            .finish()
    }
}
