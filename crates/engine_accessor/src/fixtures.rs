//! Scene objects shared by the unit tests.

use engine_object::{Component, Object, ObjectCore};

pub(crate) struct Player {
    core: ObjectCore,
}

impl Player {
    pub(crate) fn new(core: ObjectCore) -> Self {
        Self { core }
    }
}

impl Object for Player {
    fn core(&self) -> &ObjectCore {
        &self.core
    }
}

pub(crate) struct Health {
    core: ObjectCore,
}

impl Health {
    pub(crate) fn new(core: ObjectCore) -> Self {
        Self { core }
    }
}

impl Object for Health {
    fn core(&self) -> &ObjectCore {
        &self.core
    }
}

impl Component for Health {
    fn type_name() -> &'static str {
        "Health"
    }
}

pub(crate) struct Inventory {
    core: ObjectCore,
}

impl Inventory {
    pub(crate) fn new(core: ObjectCore) -> Self {
        Self { core }
    }
}

impl Object for Inventory {
    fn core(&self) -> &ObjectCore {
        &self.core
    }
}

impl Component for Inventory {
    fn type_name() -> &'static str {
        "Inventory"
    }
}
