//! Time subsystem.
//!
//! Provides fixed-period tick pacing without coupling to the scene.
//! Intended usage:
//! - one `TickClock` per surface loop
//! - call `wait()` before each tick to obtain `TickTime`

mod tick_clock;

pub use tick_clock::{TickClock, TickTime, DEFAULT_TICK_INTERVAL};
