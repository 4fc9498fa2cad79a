//! Mouse event handler.
//!
//! Pure functions that transform AppState in response to mouse events.

use crate::model::ChildId;
use crate::state::AppState;
use ratatui::layout::Rect;

/// Screen area a child box occupied in the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxHit {
    /// Child drawn in `area`.
    pub id: ChildId,
    /// Screen cells covered by the box.
    pub area: Rect,
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x
        && x < area.x.saturating_add(area.width)
        && y >= area.y
        && y < area.y.saturating_add(area.height)
}

/// The box under `(click_x, click_y)`, if any.
///
/// Later entries are drawn on top, so the search runs back to front.
pub fn detect_box_click(click_x: u16, click_y: u16, hits: &[BoxHit]) -> Option<ChildId> {
    hits.iter()
        .rev()
        .find(|hit| contains(hit.area, click_x, click_y))
        .map(|hit| hit.id)
}

/// Handle a left click: select the box under the cursor.
///
/// Clicks outside every box leave the selection unchanged.
pub fn handle_mouse_click(mut state: AppState, click_x: u16, click_y: u16) -> AppState {
    if let Some(id) = detect_box_click(click_x, click_y, &state.box_hits) {
        state.controller.select(id);
        // A new target invalidates any half-typed value.
        state.form = state.form.cancel();
    }
    state
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: u64, x: u16, y: u16, w: u16, h: u16) -> BoxHit {
        BoxHit {
            id: ChildId::new(id),
            area: Rect::new(x, y, w, h),
        }
    }

    #[test]
    fn click_inside_box_detects_it() {
        let hits = [hit(1, 10, 5, 8, 3), hit(2, 20, 5, 8, 3)];
        assert_eq!(detect_box_click(21, 6, &hits), Some(ChildId::new(2)));
    }

    #[test]
    fn right_and_bottom_edges_are_exclusive() {
        let hits = [hit(1, 10, 5, 8, 3)];
        assert_eq!(detect_box_click(18, 6, &hits), None);
        assert_eq!(detect_box_click(10, 8, &hits), None);
        assert_eq!(detect_box_click(17, 7, &hits), Some(ChildId::new(1)));
    }

    #[test]
    fn overlapping_boxes_prefer_topmost() {
        let hits = [hit(1, 0, 0, 10, 10), hit(2, 5, 5, 10, 10)];
        assert_eq!(detect_box_click(6, 6, &hits), Some(ChildId::new(2)));
    }

    #[test]
    fn click_selects_box() {
        let mut state = AppState::default();
        state.box_hits = vec![hit(2, 10, 10, 5, 2)];
        let state = handle_mouse_click(state, 12, 11);
        assert_eq!(state.controller.selection().id(), Some(ChildId::new(2)));
    }

    #[test]
    fn click_on_empty_canvas_keeps_selection() {
        let mut state = AppState::default();
        state.controller.select(ChildId::new(1));
        state.box_hits = vec![hit(2, 10, 10, 5, 2)];
        let state = handle_mouse_click(state, 0, 0);
        assert_eq!(state.controller.selection().id(), Some(ChildId::new(1)));
    }

    #[test]
    fn click_on_stale_hit_is_ignored() {
        let mut state = AppState::default();
        state.box_hits = vec![hit(99, 0, 0, 5, 5)];
        let state = handle_mouse_click(state, 1, 1);
        assert_eq!(state.controller.selection().id(), None);
    }
}
