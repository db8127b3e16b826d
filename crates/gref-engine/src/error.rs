use std::fmt;

use crate::paint::ColorParseError;
use crate::scene::ObjectId;

/// Failures surfaced by the scene, its shapes and their actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// `add_shape` was given a type tag no factory knows about.
    UnknownShape(String),
    /// A handle that does not name an object in this registry.
    UnknownObject(ObjectId),
    /// A shape variant that never overrode `Shape::draw`.
    DrawNotImplemented(&'static str),
    /// A shape config named a stroke color that does not parse.
    InvalidColor(ColorParseError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::UnknownShape(tag) => write!(f, "unknown shape type: {tag:?}"),
            SceneError::UnknownObject(id) => write!(f, "no object with id {id}"),
            SceneError::DrawNotImplemented(name) => {
                write!(f, "shape `{name}` does not implement draw")
            }
            SceneError::InvalidColor(e) => write!(f, "invalid stroke color: {e}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::InvalidColor(e) => Some(e),
            _ => None,
        }
    }
}
