//! Surface controller: builds shapes onto a surface and drives the tick loop.
//!
//! One tick is `Registry::update_all` followed by `Registry::draw_all`.
//! Ticks run back to back on the calling thread, paced by a `TickClock`.

mod config;
mod handle;

pub use config::{ControllerConfig, ShapeParams};
pub use handle::ShapeHandle;

use anyhow::Result;

use crate::coords::Vec2;
use crate::error::SceneError;
use crate::paint::Color;
use crate::scene::shapes::{Rectangle, ShapeType};
use crate::scene::{Registry, Renderable, ZIndex};
use crate::surface::Surface;
use crate::time::TickClock;

/// Owns a drawable surface and the loop that repaints it.
pub struct SurfaceController<S: Surface> {
    surface: S,
    registry: Registry,
    config: ControllerConfig,
}

impl<S: Surface> SurfaceController<S> {
    /// Controller over the process-wide registry with default config.
    pub fn new(surface: S) -> Self {
        Self::with_registry(surface, Registry::shared(), ControllerConfig::default())
    }

    pub fn with_registry(surface: S, registry: Registry, config: ControllerConfig) -> Self {
        Self { surface, registry, config }
    }

    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Builds a shape of type `tag` and registers it on layer `params.z`.
    ///
    /// An unknown tag yields [`SceneError::UnknownShape`] and an unparsable
    /// stroke yields [`SceneError::InvalidColor`]; neither registers anything.
    pub fn add_shape(&self, tag: &str, params: ShapeParams) -> Result<ShapeHandle, SceneError> {
        let kind: ShapeType = tag
            .parse()
            .inspect_err(|e| log::warn!("add_shape rejected: {e}"))?;
        let stroke = params
            .stroke
            .as_deref()
            .map(Color::parse)
            .transpose()
            .map_err(SceneError::InvalidColor)
            .inspect_err(|e| log::warn!("add_shape rejected: {e}"))?;

        let object = match kind {
            ShapeType::Rectangle => {
                let mut rect = Rectangle::new(params.w, params.h);
                if let Some(color) = stroke {
                    rect = rect.with_stroke(color);
                }
                Renderable::new(rect, Vec2::new(params.x, params.y), params.collision)
            }
        };

        let z = ZIndex::new(params.z);
        let id = self.registry.add_object(object, z);
        log::info!(
            "added {kind} {id} at ({}, {}) size {}x{} on {z}",
            params.x,
            params.y,
            params.w,
            params.h
        );

        Ok(ShapeHandle::new(id, self.registry.clone()))
    }

    /// Runs one update pass, then repaints the surface.
    ///
    /// The draw happens even when the update reported an error.
    pub fn tick(&mut self) -> Result<(), SceneError> {
        let updated = self.registry.update_all();
        let drawn = self.registry.draw_all(&mut self.surface);
        updated.and(drawn)
    }

    /// Runs ticks every `config.tick_interval` until `config.max_ticks` is
    /// reached, or forever when it is `None`.
    ///
    /// Tick failures are logged and the loop keeps going.
    pub fn start(&mut self) -> Result<()> {
        let size = self.surface.size();
        anyhow::ensure!(
            size.width > 0.0 && size.height > 0.0,
            "surface has zero size ({}x{})",
            size.width,
            size.height
        );

        let mut clock = TickClock::new(self.config.tick_interval);
        log::info!(
            "tick loop started: every {:?}, {} objects",
            clock.period(),
            self.registry.len()
        );

        while self.config.max_ticks.is_none_or(|max| clock.ticks() < max) {
            let time = clock.wait();
            if !time.late.is_zero() {
                log::trace!("tick {} released {:?} late", time.index, time.late);
            }

            if let Err(e) = self.tick() {
                log::error!("tick {} failed: {e}", time.index);
            }
        }

        log::info!("tick loop stopped after {} ticks", clock.ticks());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::action::{FunctionAction, MoveAction};
    use crate::coords::Rect;
    use crate::paint::ColorParseError;
    use crate::scene::shapes::SHAPE_TYPE_RECTANGLE;
    use crate::surface::RecordingSurface;

    fn controller() -> SurfaceController<RecordingSurface> {
        SurfaceController::with_registry(
            RecordingSurface::new(640.0, 480.0),
            Registry::new(),
            ControllerConfig { tick_interval: Duration::ZERO, max_ticks: Some(10) },
        )
    }

    fn counter() -> (Arc<AtomicUsize>, FunctionAction) {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        let action = FunctionAction::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (calls, action)
    }

    #[test]
    fn unknown_tag_registers_nothing() {
        let c = controller();
        let err = c.add_shape("Circle", ShapeParams::new(0.0, 0.0, 1.0, 1.0, 0)).unwrap_err();
        assert_eq!(err, SceneError::UnknownShape("Circle".to_string()));
        assert!(c.registry().is_empty());
    }

    #[test]
    fn bad_stroke_color_registers_nothing() {
        let c = controller();
        let err = c
            .add_shape(
                SHAPE_TYPE_RECTANGLE,
                ShapeParams::new(0.0, 0.0, 1.0, 1.0, 0).stroke("#12345"),
            )
            .unwrap_err();
        assert_eq!(err, SceneError::InvalidColor(ColorParseError("#12345".to_string())));
        assert!(c.registry().is_empty());
    }

    #[test]
    fn rectangle_lands_on_its_layer() {
        let c = controller();
        let a = c
            .add_shape(SHAPE_TYPE_RECTANGLE, ShapeParams::new(1.0, 2.0, 3.0, 4.0, 2))
            .unwrap();
        let b = c
            .add_shape(
                SHAPE_TYPE_RECTANGLE,
                ShapeParams::new(0.0, 0.0, 5.0, 5.0, -1).collision(true),
            )
            .unwrap();

        assert_eq!(a.bounds(), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(c.registry().layer(ZIndex::new(2)), vec![a.id()]);
        assert_eq!(c.registry().paint_order(), vec![b.id(), a.id()]);
        assert_eq!(c.registry().collidables(), vec![b.id()]);
    }

    #[test]
    fn tick_repaints_with_stroke_colors() {
        let mut c = controller();
        c.add_shape(SHAPE_TYPE_RECTANGLE, ShapeParams::new(0.0, 0.0, 10.0, 10.0, 0))
            .unwrap();
        c.add_shape(
            SHAPE_TYPE_RECTANGLE,
            ShapeParams::new(20.0, 0.0, 10.0, 10.0, 0).stroke("white"),
        )
        .unwrap();

        c.tick().unwrap();
        c.tick().unwrap();

        let colors: Vec<Color> = c.surface().strokes().iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![Color::RED, Color::WHITE]);
    }

    #[test]
    fn start_runs_bounded_ticks() {
        let mut c = controller();
        let shape = c
            .add_shape(SHAPE_TYPE_RECTANGLE, ShapeParams::new(0.0, 0.0, 10.0, 10.0, 0))
            .unwrap();
        shape.add_action(MoveAction::new(1.0, 0.0, 100)).unwrap();

        c.start().unwrap();
        assert_eq!(shape.position(), Some(Vec2::new(10.0, 0.0)));
        assert_eq!(c.surface().strokes().len(), 1);
    }

    #[test]
    fn start_rejects_empty_surface() {
        let mut c = SurfaceController::with_registry(
            RecordingSurface::new(0.0, 100.0),
            Registry::new(),
            ControllerConfig { tick_interval: Duration::ZERO, max_ticks: Some(1) },
        );
        assert!(c.start().is_err());
    }

    #[test]
    fn default_controller_uses_shared_registry() {
        let c = SurfaceController::new(RecordingSurface::new(1.0, 1.0));
        assert!(Registry::ptr_eq(c.registry(), &Registry::shared()));
        assert_eq!(c.config().tick_interval, Duration::from_millis(30));
        assert_eq!(c.config().max_ticks, None);
    }

    #[test]
    fn converging_rectangles_stop_at_contact_then_slide() {
        let mut c = controller();
        let params = |x| ShapeParams::new(x, 5.0, 100.0, 100.0, 0).collision(true);

        let left = c.add_shape(SHAPE_TYPE_RECTANGLE, params(5.0)).unwrap();
        let (left_done, left_cb) = counter();
        left.add_action(MoveAction::new(1.0, 0.0, 200)).unwrap();
        left.add_action(left_cb).unwrap();

        let right = c.add_shape(SHAPE_TYPE_RECTANGLE, params(160.0)).unwrap();
        let (right_done, right_cb) = counter();
        right.add_action(MoveAction::new(-1.0, 1.0, 200)).unwrap();
        right.add_action(right_cb).unwrap();

        let at = |h: &ShapeHandle| {
            let p = h.position().unwrap();
            (p.x, p.y)
        };

        for t in 1..=300u32 {
            c.tick().unwrap();
            let tf = t as f32;

            let (l, r) = (left.bounds().unwrap(), right.bounds().unwrap());
            assert!(!l.overlaps(r), "overlap at tick {t}: {l:?} vs {r:?}");
            assert_eq!(c.surface().strokes().len(), 2);

            match t {
                // Free approach: the 55-unit gap closes by 2 per tick.
                1..=27 => {
                    assert_eq!(at(&left), (5.0 + tf, 5.0));
                    assert_eq!(at(&right), (160.0 - tf, 5.0 + tf));
                }
                // Contact: left closes the last unit, right can only slide down.
                28 => {
                    assert_eq!(at(&left), (33.0, 5.0));
                    assert_eq!(at(&right), (133.0, 33.0));
                    assert!(l.is_adjacent_x(r));
                }
                // Left is blocked; right keeps sliding along the shared edge.
                29..=99 => {
                    assert_eq!(at(&left), (33.0, 5.0));
                    assert_eq!(at(&right), (133.0, 5.0 + tf));
                }
                // Right clears left's bottom edge and resumes its diagonal.
                100 => {
                    assert_eq!(at(&left), (33.0, 5.0));
                    assert_eq!(at(&right), (132.0, 105.0));
                }
                101..=200 => {
                    assert_eq!(at(&left), (tf - 67.0, 5.0));
                    assert_eq!(at(&right), (232.0 - tf, 5.0 + tf));
                }
                _ => {}
            }

            // Right never lost a step; its callback runs on the tick after.
            let right_expected = usize::from(t > 200);
            assert_eq!(right_done.load(Ordering::SeqCst), right_expected, "tick {t}");

            // Left lost 72 ticks (29..=100) while blocked.
            let left_expected = usize::from(t > 272);
            assert_eq!(left_done.load(Ordering::SeqCst), left_expected, "tick {t}");
        }

        assert_eq!(at(&left), (205.0, 5.0));
        assert_eq!(at(&right), (32.0, 205.0));
        assert_eq!(left.pending_actions(), Some(0));
        assert_eq!(right.pending_actions(), Some(0));
    }
}
