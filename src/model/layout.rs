//! Layout state model.
//!
//! `LayoutState` is the single source of truth the editor manipulates. It is
//! plain data: transitions live in `state::controller` and always produce a new
//! value, so consumers can compare snapshots to detect change.

use super::identifiers::ChildId;
use super::keywords::{
    AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent, JustifyItems,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

// ===== LayoutMode =====

/// Which layout paradigm the container uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// One-dimensional flexbox.
    #[default]
    Flex,
    /// Two-dimensional grid.
    Grid,
}

impl LayoutMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Flex => LayoutMode::Grid,
            LayoutMode::Grid => LayoutMode::Flex,
        }
    }

    /// Human-readable name used in the mode switcher.
    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::Flex => "Flexbox",
            LayoutMode::Grid => "CSS Grid",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::Flex => f.write_str("flex"),
            LayoutMode::Grid => f.write_str("grid"),
        }
    }
}

// ===== Container properties =====

/// Flex container configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexContainerProps {
    /// Main axis direction.
    pub direction: FlexDirection,
    /// Main axis distribution.
    pub justify_content: JustifyContent,
    /// Cross axis alignment.
    pub align_items: AlignItems,
    /// Line wrapping.
    pub wrap: FlexWrap,
    /// Gap between items in pixels.
    pub gap: u32,
}

impl Default for FlexContainerProps {
    fn default() -> Self {
        Self {
            direction: FlexDirection::Row,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            wrap: FlexWrap::NoWrap,
            gap: 16,
        }
    }
}

/// Grid container configuration.
///
/// Track templates are free-form and passed through to the renderer verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridContainerProps {
    /// Value of `grid-template-columns`.
    pub column_template: String,
    /// Value of `grid-template-rows`.
    pub row_template: String,
    /// Gap between tracks in pixels.
    pub gap: u32,
    /// Inline alignment of items in their cells.
    pub justify_items: JustifyItems,
    /// Block alignment of the track set.
    pub align_content: AlignContent,
}

impl Default for GridContainerProps {
    fn default() -> Self {
        Self {
            column_template: "1fr 1fr 1fr".to_string(),
            row_template: "auto".to_string(),
            gap: 16,
            justify_items: JustifyItems::Stretch,
            align_content: AlignContent::Stretch,
        }
    }
}

/// One-field update of the flex container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlexPropUpdate {
    /// Sets `flex-direction`.
    Direction(FlexDirection),
    /// Sets `justify-content`.
    JustifyContent(JustifyContent),
    /// Sets `align-items`.
    AlignItems(AlignItems),
    /// Sets `flex-wrap`.
    Wrap(FlexWrap),
    /// Sets the gap in pixels.
    Gap(u32),
}

/// One-field update of the grid container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridPropUpdate {
    /// Sets the column template.
    ColumnTemplate(String),
    /// Sets the row template.
    RowTemplate(String),
    /// Sets the gap in pixels.
    Gap(u32),
    /// Sets `justify-items`.
    JustifyItems(JustifyItems),
    /// Sets `align-content`.
    AlignContent(AlignContent),
}

/// A container property update. The variant selects which mode's property
/// set is touched; the other set is never affected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerPropUpdate {
    /// Touches the flex property set.
    Flex(FlexPropUpdate),
    /// Touches the grid property set.
    Grid(GridPropUpdate),
}

impl ContainerPropUpdate {
    /// The mode whose property set this update targets.
    pub fn mode(&self) -> LayoutMode {
        match self {
            ContainerPropUpdate::Flex(_) => LayoutMode::Flex,
            ContainerPropUpdate::Grid(_) => LayoutMode::Grid,
        }
    }
}

impl FlexContainerProps {
    /// Return a copy with one field replaced.
    pub fn with(mut self, update: FlexPropUpdate) -> Self {
        match update {
            FlexPropUpdate::Direction(v) => self.direction = v,
            FlexPropUpdate::JustifyContent(v) => self.justify_content = v,
            FlexPropUpdate::AlignItems(v) => self.align_items = v,
            FlexPropUpdate::Wrap(v) => self.wrap = v,
            FlexPropUpdate::Gap(v) => self.gap = v,
        }
        self
    }
}

impl GridContainerProps {
    /// Return a copy with one field replaced.
    pub fn with(mut self, update: GridPropUpdate) -> Self {
        match update {
            GridPropUpdate::ColumnTemplate(v) => self.column_template = v,
            GridPropUpdate::RowTemplate(v) => self.row_template = v,
            GridPropUpdate::Gap(v) => self.gap = v,
            GridPropUpdate::JustifyItems(v) => self.justify_items = v,
            GridPropUpdate::AlignContent(v) => self.align_content = v,
        }
        self
    }
}

// ===== ChildStyle =====

/// Flex-basis values offered by the picker. Anything else is a custom value.
pub const FLEX_BASIS_PRESETS: &[&str] = &[
    "auto",
    "0",
    "content",
    "max-content",
    "min-content",
    "fit-content",
    "25%",
    "50%",
    "100%",
];

/// Whether `value` is one of the picker presets.
pub fn is_flex_basis_preset(value: &str) -> bool {
    FLEX_BASIS_PRESETS.contains(&value)
}

/// Per-child overrides.
///
/// Flex fields only matter in flex mode and grid fields only in grid mode, but
/// both are always kept so toggling the mode restores earlier edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildStyle {
    /// Stable identity of the box.
    pub id: ChildId,
    /// Flex grow factor.
    pub flex_grow: u32,
    /// Flex shrink factor.
    pub flex_shrink: u32,
    /// Keyword or length/percentage token, passed through verbatim.
    pub flex_basis: String,
    /// Cross axis override.
    pub align_self: AlignSelf,
    /// Free-form placement, e.g. `span 2 / auto`.
    pub grid_column: String,
    /// Free-form row placement.
    pub grid_row: String,
}

impl ChildStyle {
    /// A new child with the editor defaults.
    pub fn with_defaults(id: ChildId) -> Self {
        Self {
            id,
            flex_grow: 0,
            flex_shrink: 1,
            flex_basis: "200px".to_string(),
            align_self: AlignSelf::Auto,
            grid_column: "auto".to_string(),
            grid_row: "auto".to_string(),
        }
    }
}

/// Partial update of a child. `None` fields are left untouched; the id can
/// never be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildStylePatch {
    /// New grow factor.
    pub flex_grow: Option<u32>,
    /// New shrink factor.
    pub flex_shrink: Option<u32>,
    /// New basis token.
    pub flex_basis: Option<String>,
    /// New cross axis override.
    pub align_self: Option<AlignSelf>,
    /// New column placement.
    pub grid_column: Option<String>,
    /// New row placement.
    pub grid_row: Option<String>,
}

impl ChildStylePatch {
    /// Patch that sets only `flex-grow`.
    pub fn flex_grow(value: u32) -> Self {
        Self {
            flex_grow: Some(value),
            ..Self::default()
        }
    }

    /// Patch that sets only `flex-shrink`.
    pub fn flex_shrink(value: u32) -> Self {
        Self {
            flex_shrink: Some(value),
            ..Self::default()
        }
    }

    /// Patch that sets only `flex-basis`.
    pub fn flex_basis(value: impl Into<String>) -> Self {
        Self {
            flex_basis: Some(value.into()),
            ..Self::default()
        }
    }

    /// Patch that sets only `align-self`.
    pub fn align_self(value: AlignSelf) -> Self {
        Self {
            align_self: Some(value),
            ..Self::default()
        }
    }

    /// Patch that sets only `grid-column`.
    pub fn grid_column(value: impl Into<String>) -> Self {
        Self {
            grid_column: Some(value.into()),
            ..Self::default()
        }
    }

    /// Patch that sets only `grid-row`.
    pub fn grid_row(value: impl Into<String>) -> Self {
        Self {
            grid_row: Some(value.into()),
            ..Self::default()
        }
    }

    /// Merge this patch into `child`, returning the updated child.
    pub fn apply_to(self, mut child: ChildStyle) -> ChildStyle {
        if let Some(v) = self.flex_grow {
            child.flex_grow = v;
        }
        if let Some(v) = self.flex_shrink {
            child.flex_shrink = v;
        }
        if let Some(v) = self.flex_basis {
            child.flex_basis = v;
        }
        if let Some(v) = self.align_self {
            child.align_self = v;
        }
        if let Some(v) = self.grid_column {
            child.grid_column = v;
        }
        if let Some(v) = self.grid_row {
            child.grid_row = v;
        }
        child
    }
}

// ===== Numeric input =====

/// Parse a non-negative integer typed into a form field.
///
/// Anything unparseable (empty, negative, fractional, non-numeric) yields 0.
pub fn parse_count_or_zero(text: &str) -> u32 {
    text.trim().parse::<u32>().unwrap_or(0)
}

// ===== LayoutState =====

/// Invariant violations when building a `LayoutState` from raw parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A layout always has at least one child.
    #[error("layout must contain at least one child")]
    NoChildren,

    /// Two children share an id.
    #[error("duplicate child id {0}")]
    DuplicateId(ChildId),
}

/// The complete layout being edited.
///
/// Invariants: `children` is never empty and ids are unique. Both property
/// sets are always present; `mode` picks the active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutState {
    mode: LayoutMode,
    children: Vec<ChildStyle>,
    flex_props: FlexContainerProps,
    grid_props: GridContainerProps,
}

/// Number of boxes in the seed layout.
pub const SEED_CHILD_COUNT: u64 = 3;

impl LayoutState {
    /// Build a layout from parts, checking the child invariants.
    pub fn new(
        mode: LayoutMode,
        children: Vec<ChildStyle>,
        flex_props: FlexContainerProps,
        grid_props: GridContainerProps,
    ) -> Result<Self, LayoutError> {
        if children.is_empty() {
            return Err(LayoutError::NoChildren);
        }
        let mut seen = HashSet::new();
        for child in &children {
            if !seen.insert(child.id) {
                return Err(LayoutError::DuplicateId(child.id));
            }
        }
        Ok(Self {
            mode,
            children,
            flex_props,
            grid_props,
        })
    }

    /// The startup layout: three default boxes, default flex and grid props.
    pub fn seed() -> Self {
        let children = (1..=SEED_CHILD_COUNT)
            .map(|raw| ChildStyle::with_defaults(ChildId::new(raw)))
            .collect();
        Self {
            mode: LayoutMode::Flex,
            children,
            flex_props: FlexContainerProps::default(),
            grid_props: GridContainerProps::default(),
        }
    }

    /// The active layout mode.
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Children in display order.
    pub fn children(&self) -> &[ChildStyle] {
        &self.children
    }

    /// Flex container properties, kept in either mode.
    pub fn flex_props(&self) -> &FlexContainerProps {
        &self.flex_props
    }

    /// Grid container properties, kept in either mode.
    pub fn grid_props(&self) -> &GridContainerProps {
        &self.grid_props
    }

    /// Looks up a child by id.
    pub fn child(&self, id: ChildId) -> Option<&ChildStyle> {
        self.children.iter().find(|c| c.id == id)
    }

    /// 0-based display position of a child.
    pub fn position_of(&self, id: ChildId) -> Option<usize> {
        self.children.iter().position(|c| c.id == id)
    }

    /// Child ids in display order.
    pub fn child_ids(&self) -> impl Iterator<Item = &ChildId> {
        self.children.iter().map(|c| &c.id)
    }

    // Field-level replacements for the controller transitions. Callers must
    // keep the child invariants.

    pub(crate) fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.mode = mode;
        self
    }

    pub(crate) fn with_children(mut self, children: Vec<ChildStyle>) -> Self {
        debug_assert!(!children.is_empty());
        self.children = children;
        self
    }

    pub(crate) fn with_flex_props(mut self, props: FlexContainerProps) -> Self {
        self.flex_props = props;
        self
    }

    pub(crate) fn with_grid_props(mut self, props: GridContainerProps) -> Self {
        self.grid_props = props;
        self
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_three_default_children() {
        let state = LayoutState::seed();
        assert_eq!(state.mode(), LayoutMode::Flex);
        assert_eq!(state.children().len(), 3);
        for (i, child) in state.children().iter().enumerate() {
            assert_eq!(child.id, ChildId::new(i as u64 + 1));
            assert_eq!(child.flex_basis, "200px");
            assert_eq!(child.flex_grow, 0);
            assert_eq!(child.flex_shrink, 1);
            assert_eq!(child.align_self, AlignSelf::Auto);
            assert_eq!(child.grid_column, "auto");
            assert_eq!(child.grid_row, "auto");
        }
    }

    #[test]
    fn seed_grid_props_match_defaults() {
        let state = LayoutState::seed();
        let grid = state.grid_props();
        assert_eq!(grid.column_template, "1fr 1fr 1fr");
        assert_eq!(grid.row_template, "auto");
        assert_eq!(grid.gap, 16);
        assert_eq!(grid.justify_items, JustifyItems::Stretch);
        assert_eq!(grid.align_content, AlignContent::Stretch);
    }

    #[test]
    fn new_rejects_empty_children() {
        let result = LayoutState::new(
            LayoutMode::Flex,
            vec![],
            FlexContainerProps::default(),
            GridContainerProps::default(),
        );
        assert_eq!(result, Err(LayoutError::NoChildren));
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let child = ChildStyle::with_defaults(ChildId::new(4));
        let result = LayoutState::new(
            LayoutMode::Grid,
            vec![child.clone(), child],
            FlexContainerProps::default(),
            GridContainerProps::default(),
        );
        assert_eq!(result, Err(LayoutError::DuplicateId(ChildId::new(4))));
    }

    #[test]
    fn patch_touches_only_given_fields() {
        let child = ChildStyle::with_defaults(ChildId::new(1));
        let patched = ChildStylePatch::flex_grow(3).apply_to(child.clone());
        assert_eq!(patched.flex_grow, 3);
        assert_eq!(ChildStyle { flex_grow: 0, ..patched }, child);
    }

    #[test]
    fn flex_update_leaves_other_fields() {
        let props = FlexContainerProps::default().with(FlexPropUpdate::Gap(40));
        assert_eq!(props.gap, 40);
        assert_eq!(props.direction, FlexDirection::Row);
    }

    #[test]
    fn container_update_reports_its_mode() {
        let update = ContainerPropUpdate::Grid(GridPropUpdate::Gap(2));
        assert_eq!(update.mode(), LayoutMode::Grid);
    }

    #[test]
    fn parse_count_falls_back_to_zero() {
        assert_eq!(parse_count_or_zero("3"), 3);
        assert_eq!(parse_count_or_zero(" 12 "), 12);
        assert_eq!(parse_count_or_zero(""), 0);
        assert_eq!(parse_count_or_zero("abc"), 0);
        assert_eq!(parse_count_or_zero("-2"), 0);
        assert_eq!(parse_count_or_zero("1.5"), 0);
    }

    #[test]
    fn flex_basis_presets_are_recognised() {
        assert!(is_flex_basis_preset("auto"));
        assert!(is_flex_basis_preset("50%"));
        assert!(!is_flex_basis_preset("200px"));
    }

    #[test]
    fn mode_toggles_and_displays() {
        assert_eq!(LayoutMode::Flex.toggled(), LayoutMode::Grid);
        assert_eq!(LayoutMode::Grid.toggled(), LayoutMode::Flex);
        assert_eq!(LayoutMode::Grid.to_string(), "grid");
    }
}
