//! Scene graph: renderables, their layers and the registry that drives them.
//!
//! Responsibilities:
//! - own every renderable, bucketed by layer ([`ZIndex`])
//! - provide deterministic traversal (layer, then insertion order) for both
//!   updates and draws
//! - resolve collision-constrained movement between collidable objects
//! - keep shape-specific drawing isolated per shape file under `scene::shapes`

mod key;
mod object;
mod registry;
mod z_index;

pub mod shapes;

pub use key::SortKey;
pub use object::{ObjectId, Renderable};
pub use registry::{Registry, UpdateOutcome};
pub use z_index::ZIndex;
