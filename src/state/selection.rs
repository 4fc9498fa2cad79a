//! Selected child box (transient UI state).

use crate::model::{ChildId, ChildStyle};

/// At most one selected child, referenced by id.
///
/// Selection only routes per-child edits. It never affects layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection(Option<ChildId>);

impl Selection {
    /// Selects nothing.
    pub fn none() -> Self {
        Self(None)
    }

    /// Selects `id`.
    pub fn of(id: ChildId) -> Self {
        Self(Some(id))
    }

    /// The selected id, if any.
    pub fn id(&self) -> Option<ChildId> {
        self.0
    }

    /// True when `id` is the selected child.
    pub fn is_selected(&self, id: ChildId) -> bool {
        self.0 == Some(id)
    }

    /// Clear the selection if its id is no longer among `children`.
    pub fn reconcile(self, children: &[ChildStyle]) -> Self {
        match self.0 {
            Some(id) if children.iter().any(|c| c.id == id) => self,
            _ => Self(None),
        }
    }
}
