//! Sidebar form: which controls exist and how each one edits the layout.
//!
//! Everything here is pure. A control produces a [`FieldEdit`] and the
//! caller hands it to the `LayoutController`.

use crate::model::{
    is_flex_basis_preset, parse_count_or_zero, ChildId, ChildStyle, ChildStylePatch,
    ContainerPropUpdate, FlexPropUpdate, GridPropUpdate, LayoutMode, LayoutState,
    FLEX_BASIS_PRESETS,
};
use crate::state::controller::LayoutController;
use crate::state::text_input::TextInput;

/// Upper end of the gap slider, in pixels.
pub const GAP_MAX: u32 = 64;

/// Every editable control in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    // Flex container
    /// `flex-direction`
    FlexDirection,
    /// `justify-content`
    JustifyContent,
    /// `align-items`
    AlignItems,
    /// `flex-wrap`
    FlexWrap,
    /// Flex gap.
    FlexGap,

    // Grid container
    /// `grid-template-columns`
    GridColumns,
    /// `grid-template-rows`
    GridRows,
    /// Grid gap.
    GridGap,
    /// `justify-items`
    JustifyItems,
    /// `align-content`
    AlignContent,

    // Selected child, flex mode
    /// `align-self`
    AlignSelf,
    /// `flex-grow`
    FlexGrow,
    /// `flex-shrink`
    FlexShrink,
    /// `flex-basis`
    FlexBasis,

    // Selected child, grid mode
    /// `grid-column`
    GridColumn,
    /// `grid-row`
    GridRow,
}

/// How a control takes input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Cycles through a closed keyword set.
    Choice,
    /// Non-negative integer; steps by one or is typed.
    Number,
    /// Free-form text, passed through verbatim.
    Text,
}

const FLEX_CONTAINER_FIELDS: &[Field] = &[
    Field::FlexDirection,
    Field::JustifyContent,
    Field::AlignItems,
    Field::FlexWrap,
    Field::FlexGap,
];

const GRID_CONTAINER_FIELDS: &[Field] = &[
    Field::GridColumns,
    Field::GridRows,
    Field::GridGap,
    Field::JustifyItems,
    Field::AlignContent,
];

const FLEX_CHILD_FIELDS: &[Field] = &[
    Field::AlignSelf,
    Field::FlexGrow,
    Field::FlexShrink,
    Field::FlexBasis,
];

const GRID_CHILD_FIELDS: &[Field] = &[Field::GridColumn, Field::GridRow];

impl Field {
    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Field::FlexDirection => "Direction",
            Field::JustifyContent => "Justify Content",
            Field::AlignItems => "Align Items",
            Field::FlexWrap => "Wrap",
            Field::FlexGap | Field::GridGap => "Gap",
            Field::GridColumns => "Columns",
            Field::GridRows => "Rows",
            Field::JustifyItems => "Justify Items",
            Field::AlignContent => "Align Content",
            Field::AlignSelf => "Align Self",
            Field::FlexGrow => "Grow",
            Field::FlexShrink => "Shrink",
            Field::FlexBasis => "Basis",
            Field::GridColumn => "Grid Column",
            Field::GridRow => "Grid Row",
        }
    }

    /// How the field takes input.
    pub fn kind(self) -> FieldKind {
        match self {
            Field::FlexDirection
            | Field::JustifyContent
            | Field::AlignItems
            | Field::FlexWrap
            | Field::JustifyItems
            | Field::AlignContent
            | Field::AlignSelf => FieldKind::Choice,
            Field::FlexGap | Field::GridGap | Field::FlexGrow | Field::FlexShrink => {
                FieldKind::Number
            }
            // Basis also walks its presets with the arrow keys.
            Field::FlexBasis
            | Field::GridColumns
            | Field::GridRows
            | Field::GridColumn
            | Field::GridRow => FieldKind::Text,
        }
    }

    /// Whether the control edits the selected child rather than the container.
    pub fn is_child_field(self) -> bool {
        FLEX_CHILD_FIELDS.contains(&self) || GRID_CHILD_FIELDS.contains(&self)
    }

    /// Whether Enter opens a text buffer for this control.
    pub fn accepts_typing(self) -> bool {
        self.kind() != FieldKind::Choice
    }
}

/// Controls shown for `mode`, container fields first.
pub fn visible_fields(mode: LayoutMode, child_selected: bool) -> Vec<Field> {
    let (container, child) = match mode {
        LayoutMode::Flex => (FLEX_CONTAINER_FIELDS, FLEX_CHILD_FIELDS),
        LayoutMode::Grid => (GRID_CONTAINER_FIELDS, GRID_CHILD_FIELDS),
    };
    let mut fields = container.to_vec();
    if child_selected {
        fields.extend_from_slice(child);
    }
    fields
}

/// Current value of a control as displayed in the sidebar.
///
/// Child fields read `child`; they show nothing when no child is selected.
pub fn field_value(field: Field, layout: &LayoutState, child: Option<&ChildStyle>) -> String {
    let flex = layout.flex_props();
    let grid = layout.grid_props();
    match field {
        Field::FlexDirection => flex.direction.to_string(),
        Field::JustifyContent => flex.justify_content.to_string(),
        Field::AlignItems => flex.align_items.to_string(),
        Field::FlexWrap => flex.wrap.to_string(),
        Field::FlexGap => format!("{}px", flex.gap),
        Field::GridColumns => grid.column_template.clone(),
        Field::GridRows => grid.row_template.clone(),
        Field::GridGap => format!("{}px", grid.gap),
        Field::JustifyItems => grid.justify_items.to_string(),
        Field::AlignContent => grid.align_content.to_string(),
        Field::AlignSelf => child.map(|c| c.align_self.to_string()).unwrap_or_default(),
        Field::FlexGrow => child.map(|c| c.flex_grow.to_string()).unwrap_or_default(),
        Field::FlexShrink => child.map(|c| c.flex_shrink.to_string()).unwrap_or_default(),
        Field::FlexBasis => child.map(|c| c.flex_basis.clone()).unwrap_or_default(),
        Field::GridColumn => child.map(|c| c.grid_column.clone()).unwrap_or_default(),
        Field::GridRow => child.map(|c| c.grid_row.clone()).unwrap_or_default(),
    }
}

/// Raw text placed in the edit buffer when typing starts.
///
/// Same as [`field_value`] except gaps are edited without their unit.
pub fn field_edit_text(field: Field, layout: &LayoutState, child: Option<&ChildStyle>) -> String {
    match field {
        Field::FlexGap => layout.flex_props().gap.to_string(),
        Field::GridGap => layout.grid_props().gap.to_string(),
        other => field_value(other, layout, child),
    }
}

// ===== Edits =====

/// A change produced by a form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// Change to the container.
    Container(ContainerPropUpdate),
    /// Patch for a specific child, addressed by id so a stale edit is
    /// dropped instead of landing on another box.
    Child(ChildId, ChildStylePatch),
}

impl FieldEdit {
    /// Routes the edit to the matching controller transition.
    pub fn apply(self, controller: &mut LayoutController) {
        match self {
            FieldEdit::Container(update) => controller.update_container_prop(update),
            FieldEdit::Child(id, patch) => controller.update_child_style(id, patch),
        }
    }
}

fn step_count(value: u32, forward: bool) -> u32 {
    if forward {
        value.saturating_add(1)
    } else {
        value.saturating_sub(1)
    }
}

fn step_gap(value: u32, forward: bool) -> u32 {
    step_count(value, forward).min(GAP_MAX)
}

fn cycle_basis(current: &str, forward: bool) -> String {
    let len = FLEX_BASIS_PRESETS.len();
    let index = match FLEX_BASIS_PRESETS.iter().position(|p| *p == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        // A custom value enters the preset list at either end.
        None if forward => 0,
        None => len - 1,
    };
    FLEX_BASIS_PRESETS[index].to_string()
}

/// Edit produced by the left/right keys on `field`.
///
/// Choice fields move to the neighbouring keyword, numbers step by one, and
/// flex basis walks the presets. Other text fields have no stepping.
pub fn cycle_field(
    field: Field,
    layout: &LayoutState,
    child: Option<&ChildStyle>,
    forward: bool,
) -> Option<FieldEdit> {
    let flex = layout.flex_props();
    let grid = layout.grid_props();
    let container = |update| Some(FieldEdit::Container(update));
    let flex_update = |u| container(ContainerPropUpdate::Flex(u));
    let grid_update = |u| container(ContainerPropUpdate::Grid(u));

    match field {
        Field::FlexDirection => flex_update(FlexPropUpdate::Direction(if forward {
            flex.direction.next()
        } else {
            flex.direction.prev()
        })),
        Field::JustifyContent => flex_update(FlexPropUpdate::JustifyContent(if forward {
            flex.justify_content.next()
        } else {
            flex.justify_content.prev()
        })),
        Field::AlignItems => flex_update(FlexPropUpdate::AlignItems(if forward {
            flex.align_items.next()
        } else {
            flex.align_items.prev()
        })),
        Field::FlexWrap => flex_update(FlexPropUpdate::Wrap(if forward {
            flex.wrap.next()
        } else {
            flex.wrap.prev()
        })),
        Field::FlexGap => flex_update(FlexPropUpdate::Gap(step_gap(flex.gap, forward))),
        Field::GridGap => grid_update(GridPropUpdate::Gap(step_gap(grid.gap, forward))),
        Field::JustifyItems => grid_update(GridPropUpdate::JustifyItems(if forward {
            grid.justify_items.next()
        } else {
            grid.justify_items.prev()
        })),
        Field::AlignContent => grid_update(GridPropUpdate::AlignContent(if forward {
            grid.align_content.next()
        } else {
            grid.align_content.prev()
        })),
        Field::GridColumns | Field::GridRows => None,
        Field::AlignSelf
        | Field::FlexGrow
        | Field::FlexShrink
        | Field::FlexBasis
        | Field::GridColumn
        | Field::GridRow => {
            let child = child?;
            let patch = match field {
                Field::AlignSelf => ChildStylePatch::align_self(if forward {
                    child.align_self.next()
                } else {
                    child.align_self.prev()
                }),
                Field::FlexGrow => ChildStylePatch::flex_grow(step_count(child.flex_grow, forward)),
                Field::FlexShrink => {
                    ChildStylePatch::flex_shrink(step_count(child.flex_shrink, forward))
                }
                Field::FlexBasis => {
                    ChildStylePatch::flex_basis(cycle_basis(&child.flex_basis, forward))
                }
                // Placements are typed only.
                _ => return None,
            };
            Some(FieldEdit::Child(child.id, patch))
        }
    }
}

/// Edit produced by committing typed `text` into `field`.
///
/// Numbers go through [`parse_count_or_zero`]; text is kept verbatim.
/// Child fields need the id of the child being edited.
pub fn commit_text(field: Field, target: Option<ChildId>, text: &str) -> Option<FieldEdit> {
    let container = |update| Some(FieldEdit::Container(update));
    let child = |patch| target.map(|id| FieldEdit::Child(id, patch));
    match field {
        Field::FlexGap => container(ContainerPropUpdate::Flex(FlexPropUpdate::Gap(
            parse_count_or_zero(text),
        ))),
        Field::GridGap => container(ContainerPropUpdate::Grid(GridPropUpdate::Gap(
            parse_count_or_zero(text),
        ))),
        Field::GridColumns => container(ContainerPropUpdate::Grid(GridPropUpdate::ColumnTemplate(
            text.to_string(),
        ))),
        Field::GridRows => container(ContainerPropUpdate::Grid(GridPropUpdate::RowTemplate(
            text.to_string(),
        ))),
        Field::FlexGrow => child(ChildStylePatch::flex_grow(parse_count_or_zero(text))),
        Field::FlexShrink => child(ChildStylePatch::flex_shrink(parse_count_or_zero(text))),
        Field::FlexBasis => child(ChildStylePatch::flex_basis(text)),
        Field::GridColumn => child(ChildStylePatch::grid_column(text)),
        Field::GridRow => child(ChildStylePatch::grid_row(text)),
        Field::FlexDirection
        | Field::JustifyContent
        | Field::AlignItems
        | Field::FlexWrap
        | Field::JustifyItems
        | Field::AlignContent
        | Field::AlignSelf => None,
    }
}

/// Whether a basis value is shown as "custom" in the picker.
pub fn is_custom_basis(value: &str) -> bool {
    !is_flex_basis_preset(value)
}

// ===== FormState =====

/// A field being typed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editing {
    /// Field being edited.
    pub field: Field,
    /// Child the edit belongs to, captured when typing started.
    pub target: Option<ChildId>,
    /// Text typed so far.
    pub input: TextInput,
}

/// Cursor over the visible controls plus the active text buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    cursor: usize,
    editing: Option<Editing>,
}

impl FormState {
    /// The in-progress edit, if any.
    pub fn editing(&self) -> Option<&Editing> {
        self.editing.as_ref()
    }

    /// True while a text field is being typed into.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// The focused control among `fields`, clamping a stale cursor.
    pub fn focused(&self, fields: &[Field]) -> Option<Field> {
        if fields.is_empty() {
            return None;
        }
        Some(fields[self.cursor.min(fields.len() - 1)])
    }

    /// Index of the focused control among `fields`.
    pub fn focused_index(&self, fields: &[Field]) -> usize {
        self.cursor.min(fields.len().saturating_sub(1))
    }

    /// Move focus down, wrapping to the top.
    pub fn focus_next(mut self, fields: &[Field]) -> Self {
        if !fields.is_empty() {
            self.cursor = (self.focused_index(fields) + 1) % fields.len();
        }
        self
    }

    /// Move focus up, wrapping to the bottom.
    pub fn focus_prev(mut self, fields: &[Field]) -> Self {
        if !fields.is_empty() {
            let len = fields.len();
            self.cursor = (self.focused_index(fields) + len - 1) % len;
        }
        self
    }

    /// Open a text buffer for `field` holding `initial`.
    pub fn begin_edit(mut self, field: Field, target: Option<ChildId>, initial: &str) -> Self {
        self.editing = Some(Editing {
            field,
            target,
            input: TextInput::new(initial),
        });
        self
    }

    /// Apply `f` to the open buffer. No-op when not editing.
    pub fn map_input(mut self, f: impl FnOnce(TextInput) -> TextInput) -> Self {
        if let Some(editing) = self.editing.take() {
            self.editing = Some(Editing {
                input: f(editing.input),
                ..editing
            });
        }
        self
    }

    /// Close the buffer and return the edit it produces, if any.
    pub fn commit(mut self) -> (Self, Option<FieldEdit>) {
        let edit = self.editing.take().and_then(|editing| {
            commit_text(editing.field, editing.target, editing.input.text())
        });
        (self, edit)
    }

    /// Close the buffer without applying it.
    pub fn cancel(mut self) -> Self {
        self.editing = None;
        self
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
