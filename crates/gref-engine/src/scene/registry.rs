use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use state::InitCell;

use crate::action::{Action, ActionCtx};
use crate::coords::{Rect, Vec2};
use crate::error::SceneError;
use crate::surface::Surface;

use super::shapes::Shape;
use super::{ObjectId, Renderable, SortKey, ZIndex};

/// Result of advancing one object's action queue.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UpdateOutcome {
    /// The queue was empty.
    Idle,
    /// The head action ran and is still pending.
    Pending,
    /// The head action ran, finished and was dequeued.
    Finished,
}

struct Entry {
    key: SortKey,
    object: Renderable,
}

/// Backing storage shared by every clone of a [`Registry`].
///
/// Performance characteristics:
/// - `insert()` is O(1)
/// - traversal order reuses an internal index buffer, rebuilt only after inserts
#[derive(Default)]
struct SceneStore {
    /// Indexed by `ObjectId`.
    entries: Vec<Entry>,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Collidable objects in insertion order. Ownership stays in `entries`.
    collidables: Vec<ObjectId>,
}

impl SceneStore {
    fn insert(&mut self, object: Renderable, z: ZIndex) -> ObjectId {
        let id = ObjectId(self.entries.len() as u32);
        if object.is_collidable() {
            self.collidables.push(id);
        }

        self.entries.push(Entry { key: SortKey::new(z, id.0), object });
        self.sorted_dirty = true;
        id
    }

    fn get(&self, id: ObjectId) -> Result<&Renderable, SceneError> {
        self.entries
            .get(id.index())
            .map(|e| &e.object)
            .ok_or(SceneError::UnknownObject(id))
    }

    fn get_mut(&mut self, id: ObjectId) -> Result<&mut Renderable, SceneError> {
        self.entries
            .get_mut(id.index())
            .map(|e| &mut e.object)
            .ok_or(SceneError::UnknownObject(id))
    }

    fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.sorted_indices.clear();
            self.sorted_indices.extend(0..self.entries.len());

            let entries = &self.entries;
            // Keys are unique (order == id), so an unstable sort is deterministic.
            self.sorted_indices
                .sort_unstable_by(|&a, &b| entries[a].key.cmp(&entries[b].key));

            self.sorted_dirty = false;
        }
        &self.sorted_indices
    }

    /// Pairwise collision resolution; see [`Registry::step`].
    fn step(&mut self, id: ObjectId, delta: Vec2) -> Result<bool, SceneError> {
        let mover = self.get(id)?;
        if !mover.is_collidable() {
            self.get_mut(id)?.origin += delta;
            return Ok(true);
        }

        let size = mover.shape().size();
        let candidate = mover.bounds().translated(delta);
        let mut origin = mover.origin();
        let mut stepped = false;

        for &other_id in &self.collidables {
            if other_id == id {
                continue;
            }
            let other = self.get(other_id)?.bounds();

            if !candidate.overlaps(other) {
                origin += delta;
                stepped = true;
                continue;
            }

            if delta.y != 0.0 && Rect::from_origin_size(origin, size).is_adjacent_x(other) {
                origin.y += delta.y;
                stepped = true;
            }
            if delta.x != 0.0 && Rect::from_origin_size(origin, size).is_adjacent_y(other) {
                origin.x += delta.x;
                stepped = true;
            }
        }

        if !stepped {
            log::trace!("{id} blocked stepping by ({}, {})", delta.x, delta.y);
        }
        self.get_mut(id)?.origin = origin;
        Ok(stepped)
    }
}

static SHARED: InitCell<Registry> = InitCell::new();

/// Owner of every renderable, bucketed by layer.
///
/// `Registry` is a handle: clones share the same storage. Construct one per
/// application with [`Registry::new`] and pass it down, or use
/// [`Registry::shared`] for the process-wide instance.
///
/// Traversal order for both [`update_all`](Self::update_all) and
/// [`draw_all`](Self::draw_all): ascending [`ZIndex`], then insertion order.
#[derive(Clone, Default)]
pub struct Registry {
    store: Arc<Mutex<SceneStore>>,
}

impl Registry {
    /// Creates an empty, independent registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry. Every call yields the same storage.
    pub fn shared() -> Self {
        SHARED.get_or_init(Registry::new).clone()
    }

    /// True when both handles refer to the same storage.
    #[inline]
    pub fn ptr_eq(a: &Registry, b: &Registry) -> bool {
        Arc::ptr_eq(&a.store, &b.store)
    }

    fn lock(&self) -> MutexGuard<'_, SceneStore> {
        // A panic inside a user callback must not wedge the whole scene.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends `object` to the bucket for `z`, and to the collidable list when
    /// it is collidable. Adding the same object twice is not detected.
    pub fn add_object(&self, object: Renderable, z: ZIndex) -> ObjectId {
        let collidable = object.is_collidable();
        let id = self.lock().insert(object, z);
        log::debug!("registered {id} on {z} (collidable: {collidable})");
        id
    }

    /// Queues `action` behind the object's existing actions.
    pub fn add_action(&self, id: ObjectId, action: impl Action + 'static) -> Result<(), SceneError> {
        self.lock().get_mut(id)?.push_action(Box::new(action));
        Ok(())
    }

    /// Runs the head action of `id` once, dequeuing it if it finished.
    ///
    /// An action that never finishes holds back everything queued behind it.
    pub fn update(&self, id: ObjectId) -> Result<UpdateOutcome, SceneError> {
        // The lock is released while the action runs.
        let head = self.lock().get_mut(id)?.actions.pop_front();
        let Some(mut action) = head else {
            return Ok(UpdateOutcome::Idle);
        };

        let result = action.execute(&mut ActionCtx::new(self, id));
        let finished = action.is_finished();
        if !finished {
            self.lock().get_mut(id)?.actions.push_front(action);
        }
        result?;

        if finished {
            log::debug!("{id} finished an action");
            Ok(UpdateOutcome::Finished)
        } else {
            Ok(UpdateOutcome::Pending)
        }
    }

    /// Updates every object in traversal order.
    ///
    /// Objects added while the pass runs are first updated on the next pass.
    /// A failing object does not stop the pass; the first error is returned.
    pub fn update_all(&self) -> Result<(), SceneError> {
        let mut first_err = None;
        for id in self.paint_order() {
            if let Err(e) = self.update(id) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Clears the whole surface, then draws every object in traversal order.
    ///
    /// The frame is a snapshot taken before drawing starts; the lock is not
    /// held while shapes and the surface run, so either may call back into
    /// the registry. A failing object does not stop the frame; the first
    /// error is returned.
    pub fn draw_all(&self, surface: &mut dyn Surface) -> Result<(), SceneError> {
        let frame: Vec<(Arc<dyn Shape>, Vec2)> = {
            let mut store = self.lock();
            let order = store.indices_in_paint_order().to_vec();
            order
                .into_iter()
                .map(|i| {
                    let object = &store.entries[i].object;
                    (object.shape_handle(), object.origin())
                })
                .collect()
        };

        let area = surface.size().bounds();
        surface.clear_rect(area);

        let mut first_err = None;
        for (shape, origin) in frame {
            if let Err(e) = shape.draw(origin, surface) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Moves `id` by `(dx, dy)`. Returns whether the position changed.
    ///
    /// Non-collidable objects always move by the full delta. A collidable
    /// object is tested against each other collidable on its own, using the
    /// candidate box computed from its starting position:
    /// - disjoint: the full delta is committed
    /// - overlapping but edge-adjacent on x: `dy` alone is committed
    /// - overlapping but edge-adjacent on y: `dx` alone is committed
    ///
    /// Commits add up across comparisons, so with several other collidables
    /// the object can travel a multiple of the delta. With no other
    /// collidables nothing is committed and the step reports blocked.
    pub fn step(&self, id: ObjectId, dx: f32, dy: f32) -> Result<bool, SceneError> {
        self.lock().step(id, Vec2::new(dx, dy))
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every object in traversal order.
    pub fn paint_order(&self) -> Vec<ObjectId> {
        let mut store = self.lock();
        store
            .indices_in_paint_order()
            .iter()
            .map(|&i| ObjectId(i as u32))
            .collect()
    }

    /// Objects in the `z` bucket, in insertion order.
    pub fn layer(&self, z: ZIndex) -> Vec<ObjectId> {
        let store = self.lock();
        store
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.key.z == z)
            .map(|(i, _)| ObjectId(i as u32))
            .collect()
    }

    /// Occupied layer keys, ascending.
    pub fn layers(&self) -> Vec<ZIndex> {
        let mut zs: Vec<ZIndex> = self.lock().entries.iter().map(|e| e.key.z).collect();
        zs.sort_unstable();
        zs.dedup();
        zs
    }

    pub fn collidables(&self) -> Vec<ObjectId> {
        self.lock().collidables.clone()
    }

    pub fn position(&self, id: ObjectId) -> Option<Vec2> {
        self.lock().get(id).ok().map(Renderable::origin)
    }

    pub fn bounds(&self, id: ObjectId) -> Option<Rect> {
        self.lock().get(id).ok().map(Renderable::bounds)
    }

    pub fn pending_actions(&self, id: ObjectId) -> Option<usize> {
        self.lock().get(id).ok().map(Renderable::pending_actions)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.lock();
        f.debug_struct("Registry")
            .field("objects", &store.entries.len())
            .field("collidables", &store.collidables.len())
            .finish()
    }
}
