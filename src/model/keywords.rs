//! Closed CSS keyword sets used by the layout editor.
//!
//! Each enum covers exactly the values the editor offers for one property.
//! `next`/`prev` wrap around so form controls can cycle through them.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A string that is not a member of the expected keyword set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {property} keyword")]
pub struct InvalidKeyword {
    /// CSS property the keyword was parsed for.
    pub property: &'static str,
    /// The rejected input.
    pub value: String,
}

macro_rules! css_keyword {
    (
        $(#[$meta:meta])*
        $name:ident, $property:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $css:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("`", $property, ": ", $css, "`")]
                $(#[$vmeta])*
                $variant
            ),+
        }

        impl $name {
            /// Every keyword, in picker order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// CSS property this keyword set belongs to.
            pub const PROPERTY: &'static str = $property;

            /// The CSS spelling of this keyword.
            pub fn as_css(self) -> &'static str {
                match self {
                    $($name::$variant => $css),+
                }
            }

            /// Next keyword in picker order, wrapping to the first.
            pub fn next(self) -> Self {
                let index = self.position();
                Self::ALL[(index + 1) % Self::ALL.len()]
            }

            /// Previous keyword in picker order, wrapping to the last.
            pub fn prev(self) -> Self {
                let index = self.position();
                Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
            }

            fn position(self) -> usize {
                Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_css())
            }
        }

        impl FromStr for $name {
            type Err = InvalidKeyword;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|k| k.as_css() == trimmed)
                    .ok_or_else(|| InvalidKeyword {
                        property: $property,
                        value: s.to_string(),
                    })
            }
        }
    };
}

css_keyword! {
    /// Main axis of a flex container.
    FlexDirection, "flex-direction" {
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
}

css_keyword! {
    /// Distribution of flex items along the main axis.
    JustifyContent, "justify-content" {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
    }
}

css_keyword! {
    /// Cross-axis alignment of flex items.
    AlignItems, "align-items" {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Baseline => "baseline",
        Stretch => "stretch",
    }
}

css_keyword! {
    /// Whether flex items wrap onto new lines.
    FlexWrap, "flex-wrap" {
        NoWrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

css_keyword! {
    /// Per-item override of the container's `align-items`.
    AlignSelf, "align-self" {
        Auto => "auto",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Baseline => "baseline",
        Stretch => "stretch",
    }
}

css_keyword! {
    /// Inline-axis alignment of grid items inside their cells.
    JustifyItems, "justify-items" {
        Start => "start",
        End => "end",
        Center => "center",
        Stretch => "stretch",
    }
}

css_keyword! {
    /// Block-axis distribution of grid tracks.
    AlignContent, "align-content" {
        Stretch => "stretch",
        Center => "center",
        Start => "start",
        End => "end",
        SpaceAround => "space-around",
        SpaceBetween => "space-between",
    }
}
