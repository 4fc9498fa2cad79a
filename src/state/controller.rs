//! Layout mutation controller.
//!
//! The free functions are the pure transitions: each takes the current
//! `LayoutState` by value and returns its replacement. `LayoutController`
//! owns the one live state together with the selection and id allocator and
//! keeps the selection consistent after every transition.

use crate::model::{
    ChildId, ChildIdAllocator, ChildStyle, ChildStylePatch, ContainerPropUpdate, LayoutMode,
    LayoutState,
};
use crate::state::selection::Selection;
use tracing::debug;

// ===== Pure transitions =====

/// Replace the layout mode. Container props and children are untouched.
pub fn set_mode(state: LayoutState, mode: LayoutMode) -> LayoutState {
    state.with_mode(mode)
}

/// Append a default child with the given id.
///
/// The id must not belong to a live child; `LayoutController` guarantees
/// this through its allocator. A colliding id leaves the state unchanged.
pub fn add_child(state: LayoutState, id: ChildId) -> LayoutState {
    if state.child(id).is_some() {
        return state;
    }
    let mut children = state.children().to_vec();
    children.push(ChildStyle::with_defaults(id));
    state.with_children(children)
}

/// Drop the last child. No-op when only one child remains.
pub fn remove_child(state: LayoutState) -> LayoutState {
    if state.children().len() <= 1 {
        return state;
    }
    let mut children = state.children().to_vec();
    children.pop();
    state.with_children(children)
}

/// Merge `patch` into the child with `id`. Unknown ids are ignored.
pub fn update_child_style(state: LayoutState, id: ChildId, patch: ChildStylePatch) -> LayoutState {
    if state.child(id).is_none() {
        return state;
    }
    let children = state
        .children()
        .iter()
        .map(|child| {
            if child.id == id {
                patch.clone().apply_to(child.clone())
            } else {
                child.clone()
            }
        })
        .collect();
    state.with_children(children)
}

/// Merge one field into the flex or grid props, as named by the update.
pub fn update_container_prop(state: LayoutState, update: ContainerPropUpdate) -> LayoutState {
    match update {
        ContainerPropUpdate::Flex(update) => {
            let props = state.flex_props().clone().with(update);
            state.with_flex_props(props)
        }
        ContainerPropUpdate::Grid(update) => {
            let props = state.grid_props().clone().with(update);
            state.with_grid_props(props)
        }
    }
}

// ===== LayoutController =====

/// Owner of the live layout and its selection.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutController {
    layout: LayoutState,
    selection: Selection,
    ids: ChildIdAllocator,
}

impl LayoutController {
    /// Wraps an existing layout. The allocator starts past its highest id.
    pub fn new(layout: LayoutState) -> Self {
        let ids = ChildIdAllocator::after(layout.child_ids());
        Self {
            layout,
            selection: Selection::none(),
            ids,
        }
    }

    /// Current layout.
    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    /// Current selection, always pointing at a live child or nothing.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The selected child's current record.
    pub fn selected_child(&self) -> Option<&ChildStyle> {
        self.selection.id().and_then(|id| self.layout.child(id))
    }

    fn replace(&mut self, layout: LayoutState) {
        self.layout = layout;
        self.selection = self.selection.reconcile(self.layout.children());
    }

    /// Switches the container mode. Both property sets are kept.
    pub fn set_mode(&mut self, mode: LayoutMode) {
        debug!(%mode, "Layout mode set");
        let layout = set_mode(self.layout.clone(), mode);
        self.replace(layout);
    }

    /// Flips between flex and grid.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.layout.mode().toggled());
    }

    /// Append a default child and return its id.
    pub fn add_child(&mut self) -> ChildId {
        let id = self.ids.allocate(self.layout.child_ids());
        debug!(%id, "Child added");
        let layout = add_child(self.layout.clone(), id);
        self.replace(layout);
        id
    }

    /// Drop the last child; clears the selection if it pointed there.
    pub fn remove_child(&mut self) {
        let before = self.layout.children().len();
        let layout = remove_child(self.layout.clone());
        if layout.children().len() < before {
            debug!(remaining = layout.children().len(), "Child removed");
        }
        self.replace(layout);
    }

    /// Applies `patch` to the child `id`. Unknown ids are ignored.
    pub fn update_child_style(&mut self, id: ChildId, patch: ChildStylePatch) {
        if self.layout.child(id).is_none() {
            debug!(%id, "Dropping edit for missing child");
        }
        let layout = update_child_style(self.layout.clone(), id, patch);
        self.replace(layout);
    }

    /// Patch the selected child, if any.
    pub fn update_selected(&mut self, patch: ChildStylePatch) {
        if let Some(id) = self.selection.id() {
            self.update_child_style(id, patch);
        }
    }

    /// Applies a single container property change.
    pub fn update_container_prop(&mut self, update: ContainerPropUpdate) {
        debug!(?update, "Container prop updated");
        let layout = update_container_prop(self.layout.clone(), update);
        self.replace(layout);
    }

    // ===== Selection =====

    /// Select a live child. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: ChildId) {
        if self.layout.child(id).is_some() {
            self.selection = Selection::of(id);
        }
    }

    /// Deselects.
    pub fn clear_selection(&mut self) {
        self.selection = Selection::none();
    }

    /// Select the next child in display order, wrapping. Selects the first
    /// child when nothing is selected.
    pub fn select_next(&mut self) {
        self.step_selection(1);
    }

    /// Select the previous child in display order, wrapping. Selects the
    /// last child when nothing is selected.
    pub fn select_prev(&mut self) {
        self.step_selection(-1);
    }

    fn step_selection(&mut self, delta: isize) {
        let children = self.layout.children();
        let len = children.len() as isize;
        let position = self
            .selection
            .id()
            .and_then(|id| self.layout.position_of(id));
        let next = match position {
            Some(p) => (p as isize + delta).rem_euclid(len),
            None if delta >= 0 => 0,
            None => len - 1,
        };
        self.selection = Selection::of(children[next as usize].id);
    }
}

impl Default for LayoutController {
    fn default() -> Self {
        Self::new(LayoutState::seed())
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
