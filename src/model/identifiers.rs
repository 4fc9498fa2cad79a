//! Child box identifiers and their allocator.

use std::fmt;

/// Identifier of one child box, stable for the box's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChildId(u64);

impl ChildId {
    /// Wraps a raw id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out fresh child ids.
///
/// Allocation is monotonic: every id is strictly greater than all ids handed
/// out before and all ids currently live, so an id that belonged to a removed
/// box is never reused. A pending edit addressed to a removed box therefore
/// cannot land on a newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildIdAllocator {
    next: u64,
}

impl ChildIdAllocator {
    /// Create an allocator whose first id follows every id in `live`.
    pub fn after<'a>(live: impl IntoIterator<Item = &'a ChildId>) -> Self {
        let max = live.into_iter().map(|id| id.get()).max().unwrap_or(0);
        Self { next: max + 1 }
    }

    /// Allocate an id distinct from every id in `live`.
    pub fn allocate<'a>(&mut self, live: impl IntoIterator<Item = &'a ChildId>) -> ChildId {
        let floor = live
            .into_iter()
            .map(|id| id.get() + 1)
            .max()
            .unwrap_or(1);
        let id = self.next.max(floor);
        self.next = id + 1;
        ChildId(id)
    }
}

impl Default for ChildIdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}
