//! Style derivation (pure).
//!
//! Maps a `LayoutState` to the concrete declarations the renderer receives.
//! Container and child styles are closed, mode-tagged enums, so the two
//! property sets can never be mixed.

use crate::model::{ChildStyle, LayoutMode, LayoutState};
use crate::model::keywords::{
    AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent, JustifyItems,
};

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// CSS property name.
    pub property: &'static str,
    /// CSS value, verbatim.
    pub value: String,
}

impl Declaration {
    /// Creates a declaration.
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// Render a pixel gap the way every output spells it.
pub fn px(value: u32) -> String {
    format!("{value}px")
}

// ===== Container =====

/// Container style for the active mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerStyle {
    /// Flex container.
    Flex {
        /// `flex-direction`
        direction: FlexDirection,
        /// `justify-content`
        justify_content: JustifyContent,
        /// `align-items`
        align_items: AlignItems,
        /// `flex-wrap`
        wrap: FlexWrap,
        /// `gap` in pixels.
        gap: u32,
    },
    /// Grid container.
    Grid {
        /// `grid-template-columns`
        template_columns: String,
        /// `grid-template-rows`
        template_rows: String,
        /// `gap` in pixels.
        gap: u32,
        /// `justify-items`
        justify_items: JustifyItems,
        /// `align-content`
        align_content: AlignContent,
    },
}

impl ContainerStyle {
    /// Mode the style was derived for.
    pub fn mode(&self) -> LayoutMode {
        match self {
            ContainerStyle::Flex { .. } => LayoutMode::Flex,
            ContainerStyle::Grid { .. } => LayoutMode::Grid,
        }
    }

    /// Declarations in output order, `display` first.
    pub fn declarations(&self) -> Vec<Declaration> {
        match self {
            ContainerStyle::Flex {
                direction,
                justify_content,
                align_items,
                wrap,
                gap,
            } => vec![
                Declaration::new("display", "flex"),
                Declaration::new("flex-direction", direction.as_css()),
                Declaration::new("justify-content", justify_content.as_css()),
                Declaration::new("align-items", align_items.as_css()),
                Declaration::new("flex-wrap", wrap.as_css()),
                Declaration::new("gap", px(*gap)),
            ],
            ContainerStyle::Grid {
                template_columns,
                template_rows,
                gap,
                justify_items,
                align_content,
            } => vec![
                Declaration::new("display", "grid"),
                Declaration::new("grid-template-columns", template_columns.clone()),
                Declaration::new("grid-template-rows", template_rows.clone()),
                Declaration::new("gap", px(*gap)),
                Declaration::new("justify-items", justify_items.as_css()),
                Declaration::new("align-content", align_content.as_css()),
            ],
        }
    }
}

/// Derive the container style from the active mode's property set.
pub fn derive_container_style(state: &LayoutState) -> ContainerStyle {
    match state.mode() {
        LayoutMode::Flex => {
            let p = state.flex_props();
            ContainerStyle::Flex {
                direction: p.direction,
                justify_content: p.justify_content,
                align_items: p.align_items,
                wrap: p.wrap,
                gap: p.gap,
            }
        }
        LayoutMode::Grid => {
            let p = state.grid_props();
            ContainerStyle::Grid {
                template_columns: p.column_template.clone(),
                template_rows: p.row_template.clone(),
                gap: p.gap,
                justify_items: p.justify_items,
                align_content: p.align_content,
            }
        }
    }
}

// ===== Child =====

/// Per-child style for the active mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildStyleDecl {
    /// Child of a flex container.
    Flex {
        /// `flex-grow`
        grow: u32,
        /// `flex-shrink`
        shrink: u32,
        /// `flex-basis`
        basis: String,
        /// `align-self`
        align_self: AlignSelf,
    },
    /// Child of a grid container.
    Grid {
        /// `grid-column`
        column: String,
        /// `grid-row`
        row: String,
    },
}

impl ChildStyleDecl {
    /// Declarations in emission order.
    pub fn declarations(&self) -> Vec<Declaration> {
        match self {
            ChildStyleDecl::Flex {
                grow,
                shrink,
                basis,
                align_self,
            } => vec![
                Declaration::new("flex-grow", grow.to_string()),
                Declaration::new("flex-shrink", shrink.to_string()),
                Declaration::new("flex-basis", basis.clone()),
                Declaration::new("align-self", align_self.as_css()),
            ],
            ChildStyleDecl::Grid { column, row } => vec![
                Declaration::new("grid-column", column.clone()),
                Declaration::new("grid-row", row.clone()),
            ],
        }
    }
}

/// Derive one child's style. Fields of the inactive mode are ignored here but
/// stay in the child record.
pub fn derive_child_style(state: &LayoutState, child: &ChildStyle) -> ChildStyleDecl {
    match state.mode() {
        LayoutMode::Flex => ChildStyleDecl::Flex {
            grow: child.flex_grow,
            shrink: child.flex_shrink,
            basis: child.flex_basis.clone(),
            align_self: child.align_self,
        },
        LayoutMode::Grid => ChildStyleDecl::Grid {
            column: child.grid_column.clone(),
            row: child.grid_row.clone(),
        },
    }
}
