use anyhow::{Context, Result};

use gref_engine::action::{FunctionAction, MoveAction};
use gref_engine::controller::{ControllerConfig, ShapeParams, SurfaceController};
use gref_engine::logging::{init_logging, LoggingConfig};
use gref_engine::scene::Registry;
use gref_engine::scene::shapes::SHAPE_TYPE_RECTANGLE;
use gref_engine::surface::RecordingSurface;

/// Enough ticks for both rectangles to finish their moves (the left one is
/// held up for a while at the contact point).
const DEFAULT_TICKS: u64 = 300;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // `GREF_TICKS=0` runs unbounded, like a browser canvas would.
    let max_ticks = match std::env::var("GREF_TICKS") {
        Ok(v) => {
            let n: u64 = v.parse().with_context(|| format!("GREF_TICKS is not a number: {v:?}"))?;
            (n > 0).then_some(n)
        }
        Err(_) => Some(DEFAULT_TICKS),
    };

    let config = ControllerConfig { max_ticks, ..ControllerConfig::default() };
    let surface = RecordingSurface::new(640.0, 480.0);
    let mut controller = SurfaceController::with_registry(surface, Registry::shared(), config);

    let left = controller
        .add_shape(
            SHAPE_TYPE_RECTANGLE,
            ShapeParams::new(5.0, 5.0, 100.0, 100.0, 0).collision(true),
        )
        .context("failed to add left rectangle")?;
    left.add_action(MoveAction::new(1.0, 0.0, 200))?;
    left.add_action(FunctionAction::new(|| log::info!("left rectangle finished!")))?;

    let right = controller
        .add_shape(
            SHAPE_TYPE_RECTANGLE,
            ShapeParams::new(160.0, 5.0, 100.0, 100.0, 0)
                .collision(true)
                .stroke("#3080ff"),
        )
        .context("failed to add right rectangle")?;
    right.add_action(MoveAction::new(-1.0, 1.0, 200))?;
    right.add_action(FunctionAction::new(|| log::info!("right rectangle finished!")))?;

    controller.start().context("tick loop failed")?;

    for stroke in controller.surface().strokes() {
        let r = stroke.rect;
        log::info!(
            "visible outline at ({}, {}) {}x{} in {}",
            r.origin.x,
            r.origin.y,
            r.size.x,
            r.size.y,
            stroke.color.to_hex()
        );
    }

    Ok(())
}
