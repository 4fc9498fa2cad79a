//! Canvas preview geometry.
//!
//! The derived declarations are handed to `taffy` as text, the same way a
//! browser would receive them, and the computed box positions come back. No
//! layout logic lives here; this module only translates.

pub mod parse;

use crate::model::{ChildId, LayoutState};
use crate::style::{derive_child_style, derive_container_style, Declaration};
use crate::viewport::HostSize;
use taffy::{
    AlignContent, AlignItems, AvailableSpace, Dimension, Display, FlexDirection, FlexWrap,
    LengthPercentage, Rect, Size, Style, TaffyTree,
};
use thiserror::Error;

/// Padding inside the preview container, in logical px.
pub const CONTAINER_PADDING_PX: f32 = 24.0;

/// Smallest size a child box is drawn at, in logical px, on both axes.
pub const MIN_BOX_PX: f32 = 70.0;

/// Failure while building or solving the layout tree.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The layout engine rejected the tree.
    #[error("layout engine error: {0}")]
    Engine(String),
}

/// Computed geometry of one child box, relative to the container's top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewBox {
    /// Child the box belongs to.
    pub id: ChildId,
    /// 0-based display position.
    pub index: usize,
    /// Left edge relative to the container.
    pub x: f32,
    /// Top edge relative to the container.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

/// Geometry of the whole preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewLayout {
    /// Container width in pixels.
    pub width: f32,
    /// Container height in pixels.
    pub height: f32,
    /// One entry per child, in display order.
    pub boxes: Vec<PreviewBox>,
}

// ===== Declaration readers =====

fn justify(value: &str) -> Option<AlignContent> {
    Some(match value {
        "flex-start" => AlignContent::FlexStart,
        "flex-end" => AlignContent::FlexEnd,
        "start" => AlignContent::Start,
        "end" => AlignContent::End,
        "center" => AlignContent::Center,
        "stretch" => AlignContent::Stretch,
        "space-between" => AlignContent::SpaceBetween,
        "space-around" => AlignContent::SpaceAround,
        "space-evenly" => AlignContent::SpaceEvenly,
        _ => return None,
    })
}

fn align(value: &str) -> Option<AlignItems> {
    Some(match value {
        "flex-start" => AlignItems::FlexStart,
        "flex-end" => AlignItems::FlexEnd,
        "start" => AlignItems::Start,
        "end" => AlignItems::End,
        "center" => AlignItems::Center,
        "baseline" => AlignItems::Baseline,
        "stretch" => AlignItems::Stretch,
        _ => return None,
    })
}

fn flex_direction(value: &str) -> Option<FlexDirection> {
    Some(match value {
        "row" => FlexDirection::Row,
        "row-reverse" => FlexDirection::RowReverse,
        "column" => FlexDirection::Column,
        "column-reverse" => FlexDirection::ColumnReverse,
        _ => return None,
    })
}

fn flex_wrap(value: &str) -> Option<FlexWrap> {
    Some(match value {
        "nowrap" => FlexWrap::NoWrap,
        "wrap" => FlexWrap::Wrap,
        "wrap-reverse" => FlexWrap::WrapReverse,
        _ => return None,
    })
}

fn factor(value: &str) -> Option<f32> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Apply one declaration. Unreadable values leave `style` untouched.
fn apply_declaration(style: &mut Style, decl: &Declaration) {
    let value = decl.value.as_str();
    match decl.property {
        "display" => match value {
            "flex" => style.display = Display::Flex,
            "grid" => style.display = Display::Grid,
            _ => {}
        },
        "flex-direction" => {
            if let Some(v) = flex_direction(value) {
                style.flex_direction = v;
            }
        }
        "flex-wrap" => {
            if let Some(v) = flex_wrap(value) {
                style.flex_wrap = v;
            }
        }
        "justify-content" => {
            if let Some(v) = justify(value) {
                style.justify_content = Some(v);
            }
        }
        "align-items" => {
            if let Some(v) = align(value) {
                style.align_items = Some(v);
            }
        }
        "justify-items" => {
            if let Some(v) = align(value) {
                style.justify_items = Some(v);
            }
        }
        "align-content" => {
            if let Some(v) = justify(value) {
                style.align_content = Some(v);
            }
        }
        "gap" => {
            if let Some(v) = parse::length_percentage(value) {
                style.gap = Size {
                    width: v,
                    height: v,
                };
            }
        }
        "grid-template-columns" => {
            if let Some(tracks) = parse::track_list(value) {
                style.grid_template_columns = tracks;
            }
        }
        "grid-template-rows" => {
            if let Some(tracks) = parse::track_list(value) {
                style.grid_template_rows = tracks;
            }
        }
        "flex-grow" => {
            if let Some(v) = factor(value) {
                style.flex_grow = v;
            }
        }
        "flex-shrink" => {
            if let Some(v) = factor(value) {
                style.flex_shrink = v;
            }
        }
        "flex-basis" => {
            if let Some(v) = parse::flex_basis(value) {
                style.flex_basis = v;
            }
        }
        "align-self" => {
            if value == "auto" {
                style.align_self = None;
            } else if let Some(v) = align(value) {
                style.align_self = Some(v);
            }
        }
        "grid-column" => {
            if let Some(v) = parse::grid_placement(value) {
                style.grid_column = v;
            }
        }
        "grid-row" => {
            if let Some(v) = parse::grid_placement(value) {
                style.grid_row = v;
            }
        }
        _ => {}
    }
}

fn container_style(layout: &LayoutState, content: HostSize) -> Style {
    let padding = LengthPercentage::length(CONTAINER_PADDING_PX);
    let mut style = Style {
        size: Size {
            width: Dimension::length(content.width.max(0.0) as f32),
            height: Dimension::length(content.height.max(0.0) as f32),
        },
        padding: Rect {
            left: padding,
            right: padding,
            top: padding,
            bottom: padding,
        },
        ..Style::default()
    };
    for decl in derive_container_style(layout).declarations() {
        apply_declaration(&mut style, &decl);
    }
    style
}

fn child_style(layout: &LayoutState, index: usize) -> Style {
    let mut style = Style {
        min_size: Size {
            width: Dimension::length(MIN_BOX_PX),
            height: Dimension::length(MIN_BOX_PX),
        },
        ..Style::default()
    };
    if let Some(child) = layout.children().get(index) {
        for decl in derive_child_style(layout, child).declarations() {
            apply_declaration(&mut style, &decl);
        }
    }
    style
}

/// Lay out `layout` inside a content box of `content` logical px.
pub fn compute_preview(layout: &LayoutState, content: HostSize) -> Result<PreviewLayout, PreviewError> {
    let engine = |e: taffy::TaffyError| PreviewError::Engine(e.to_string());
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let leaves = (0..layout.children().len())
        .map(|index| tree.new_leaf(child_style(layout, index)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(engine)?;
    let root = tree
        .new_with_children(container_style(layout, content), &leaves)
        .map_err(engine)?;

    tree.compute_layout(
        root,
        Size {
            width: AvailableSpace::Definite(content.width.max(0.0) as f32),
            height: AvailableSpace::Definite(content.height.max(0.0) as f32),
        },
    )
    .map_err(engine)?;

    let root_layout = tree.layout(root).map_err(engine)?;
    let mut boxes = Vec::with_capacity(leaves.len());
    for (index, (leaf, child)) in leaves.iter().zip(layout.children()).enumerate() {
        let l = tree.layout(*leaf).map_err(engine)?;
        boxes.push(PreviewBox {
            id: child.id,
            index,
            x: l.location.x,
            y: l.location.y,
            width: l.size.width,
            height: l.size.height,
        });
    }

    Ok(PreviewLayout {
        width: root_layout.size.width,
        height: root_layout.size.height,
        boxes,
    })
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod tests;
