//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod keywords;
pub mod layout;

// Re-export for convenience
pub use error::AppError;
pub use identifiers::{ChildId, ChildIdAllocator};
pub use key_action::KeyAction;
pub use keywords::{
    AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, InvalidKeyword, JustifyContent,
    JustifyItems,
};
pub use layout::{
    is_flex_basis_preset, parse_count_or_zero, ChildStyle, ChildStylePatch, ContainerPropUpdate,
    FlexContainerProps, FlexPropUpdate, GridContainerProps, GridPropUpdate, LayoutError,
    LayoutMode, LayoutState, FLEX_BASIS_PRESETS, SEED_CHILD_COUNT,
};
