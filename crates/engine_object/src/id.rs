//! Process-wide object identity.
//!
//! Property tables key owners and values by [`ObjectId`], so an id has to
//! name exactly one object for the life of the process, whichever scene
//! spawned it. Ids come from a single global counter and cannot be built
//! from a raw number outside this crate: the only way to get one is to
//! create an [`ObjectCore`](crate::ObjectCore).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// The identity of one engine object.
///
/// Ids are never reused. Their order follows allocation order, so sorting
/// ids sorts objects by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Take the next id from the global counter.
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_increase_with_allocation_order() {
        let first = ObjectId::next();
        let second = ObjectId::next();
        assert!(first < second);
    }

    #[test]
    fn test_ids_are_unique_across_threads() {
        let here: Vec<ObjectId> = (0..64).map(|_| ObjectId::next()).collect();
        let worker = std::thread::spawn(|| (0..64).map(|_| ObjectId::next()).collect());
        let there: Vec<ObjectId> = worker.join().unwrap();

        let all: HashSet<ObjectId> = here.iter().chain(&there).copied().collect();
        assert_eq!(all.len(), 128);
    }

    #[test]
    fn test_display() {
        assert_eq!(ObjectId(7).to_string(), "Object(7)");
    }
}
