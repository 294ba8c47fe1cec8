//! Scene object storage and lifecycle.
//!
//! The [`Scene`] owns the strong reference to every live object. Destroying
//! an object fires its [`DestroySignal`](crate::DestroySignal) and releases
//! the scene's reference; anything else that still points at the object sees
//! it as destroyed from then on.
//!
//! [`Scene::destroy`] follows engine convention and defers teardown to the end
//! of the current frame. [`Scene::destroy_immediate`] tears down on the spot.

use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::id::ObjectId;
use crate::object::{Object, ObjectCore};

/// The set of live engine objects for one simulation.
pub struct Scene {
    /// Live objects, keyed by id.
    objects: HashMap<ObjectId, Rc<dyn Object>>,
    /// Objects queued for destruction at the end of the frame, in call order.
    pending: Vec<ObjectId>,
    /// Number of completed frames.
    frame: u64,
}

impl Scene {
    /// Create a new empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
            pending: Vec::new(),
            frame: 0,
        }
    }

    /// Construct a new object and take ownership of it.
    ///
    /// `build` receives the object's [`ObjectCore`] and must embed it. Ids
    /// are process-wide, so objects from different scenes never share one.
    pub fn spawn<T: Object>(&mut self, build: impl FnOnce(ObjectCore) -> T) -> Rc<T> {
        let core = ObjectCore::new();
        let id = core.id();
        let object = Rc::new(build(core));
        debug_assert_eq!(object.core().id(), id, "spawned object must embed its core");

        let erased: Rc<dyn Object> = object.clone();
        self.objects.insert(id, erased);
        object
    }

    /// Queue an object for destruction at the end of the current frame.
    ///
    /// Returns `false` if the object is not alive in this scene. Queuing the
    /// same object twice is harmless.
    pub fn destroy(&mut self, id: ObjectId) -> bool {
        if !self.objects.contains_key(&id) {
            return false;
        }
        if !self.pending.contains(&id) {
            self.pending.push(id);
        }
        true
    }

    /// Destroy an object right away, firing its destroy signal.
    ///
    /// Returns `true` if the object existed and was destroyed.
    pub fn destroy_immediate(&mut self, id: ObjectId) -> bool {
        let Some(object) = self.objects.remove(&id) else {
            return false;
        };
        self.pending.retain(|&pending| pending != id);

        let listeners = object.on_destroy().fire();
        debug!(object = %id, listeners, "object destroyed");
        true
    }

    /// Finish the current frame: destroy every queued object and advance the
    /// frame counter.
    ///
    /// Returns the number of objects destroyed.
    pub fn end_frame(&mut self) -> usize {
        let pending = std::mem::take(&mut self.pending);
        let destroyed = pending
            .into_iter()
            .filter(|&id| self.destroy_immediate(id))
            .count();
        self.frame += 1;
        if destroyed > 0 {
            debug!(frame = self.frame, destroyed, "flushed deferred destroys");
        }
        destroyed
    }

    /// Tear down the whole scene, destroying every remaining object in
    /// spawn order.
    ///
    /// Returns the number of objects destroyed.
    pub fn destroy_all(&mut self) -> usize {
        self.pending.clear();
        let mut ids: Vec<ObjectId> = self.objects.keys().copied().collect();
        ids.sort();
        ids.into_iter()
            .filter(|&id| self.destroy_immediate(id))
            .count()
    }

    /// Returns `true` if the object is alive in this scene.
    ///
    /// Objects queued by [`Scene::destroy`] stay alive until the frame ends.
    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Returns the number of live objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the scene has no live objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns the number of completed frames.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("objects", &self.objects.len())
            .field("pending", &self.pending)
            .field("frame", &self.frame)
            .finish()
    }
}
