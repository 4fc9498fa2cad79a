//! Code generators (pure).
//!
//! Both generators are total and deterministic: the same `LayoutState`
//! always yields byte-identical text.

use crate::model::keywords::{AlignItems, JustifyContent};
use crate::model::{LayoutMode, LayoutState};
use crate::style::{derive_container_style, px, Declaration};
use serde::Deserialize;

/// Which text the code panel shows and copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// A `.container` rule.
    #[default]
    Css,
    /// A root element carrying utility classes.
    #[serde(alias = "tailwind")]
    Markup,
}

impl OutputFormat {
    /// The other format.
    pub fn toggled(self) -> Self {
        match self {
            OutputFormat::Css => OutputFormat::Markup,
            OutputFormat::Markup => OutputFormat::Css,
        }
    }

    /// Tab label in the code panel.
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Css => "CSS",
            OutputFormat::Markup => "Tailwind",
        }
    }
}

/// Generate code in the requested format.
pub fn generate(state: &LayoutState, format: OutputFormat) -> String {
    match format {
        OutputFormat::Css => generate_css(state),
        OutputFormat::Markup => generate_markup(state),
    }
}

// ===== CSS =====

/// A `.container` rule with one declaration per line.
pub fn generate_css(state: &LayoutState) -> String {
    let mut code = String::from(".container {\n");
    for decl in derive_container_style(state).declarations() {
        code.push_str("  ");
        code.push_str(decl.property);
        code.push_str(": ");
        code.push_str(&decl.value);
        code.push_str(";\n");
    }
    code.push('}');
    code
}

// ===== Utility-class markup =====

/// Character that stands in for spaces inside arbitrary-value classes.
const ARBITRARY_SPACE: char = '_';

/// Escapes a literal `_` or `\` inside an arbitrary value.
const ARBITRARY_ESCAPE: char = '\\';

/// Write `value` as the body of an arbitrary-value class.
///
/// Spaces become `_`; a literal `_` is written `\_` and a backslash `\\`,
/// so `read_arbitrary` gives back the exact text.
fn escape_arbitrary(value: &str) -> String {
    let mut body = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            ' ' => body.push(ARBITRARY_SPACE),
            ARBITRARY_SPACE | ARBITRARY_ESCAPE => {
                body.push(ARBITRARY_ESCAPE);
                body.push(c);
            }
            c => body.push(c),
        }
    }
    body
}

fn read_arbitrary(body: &str) -> String {
    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            ARBITRARY_ESCAPE => value.extend(chars.next()),
            ARBITRARY_SPACE => value.push(' '),
            c => value.push(c),
        }
    }
    value
}

fn justify_token(value: JustifyContent) -> &'static str {
    match value {
        JustifyContent::FlexStart => "start",
        JustifyContent::FlexEnd => "end",
        JustifyContent::Center => "center",
        JustifyContent::SpaceBetween => "between",
        JustifyContent::SpaceAround => "around",
        JustifyContent::SpaceEvenly => "evenly",
    }
}

fn align_token(value: AlignItems) -> &'static str {
    match value {
        AlignItems::FlexStart => "start",
        AlignItems::FlexEnd => "end",
        AlignItems::Center => "center",
        AlignItems::Baseline => "baseline",
        AlignItems::Stretch => "stretch",
    }
}

/// The utility class list for the container.
pub fn utility_classes(state: &LayoutState) -> String {
    match state.mode() {
        LayoutMode::Flex => {
            let p = state.flex_props();
            format!(
                "flex flex-{} justify-{} items-{} gap-[{}]",
                p.direction.as_css(),
                justify_token(p.justify_content),
                align_token(p.align_items),
                px(p.gap),
            )
        }
        LayoutMode::Grid => {
            let p = state.grid_props();
            format!(
                "grid grid-cols-[{}] gap-[{}] justify-items-{} content-{}",
                escape_arbitrary(&p.column_template),
                px(p.gap),
                p.justify_items.as_css(),
                p.align_content.as_css(),
            )
        }
    }
}

/// A root element carrying the utility classes.
///
/// The class list is attribute-escaped, so a `"` typed into a template can
/// not close the attribute early.
pub fn generate_markup(state: &LayoutState) -> String {
    format!(
        "<div className=\"{}\">\n  ...\n</div>",
        escape_attribute(&utility_classes(state))
    )
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn unescape_attribute(value: &str) -> String {
    let mut text = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(at) = rest.find('&') {
        text.push_str(&rest[..at]);
        rest = &rest[at..];
        if let Some(tail) = rest.strip_prefix("&amp;") {
            text.push('&');
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("&quot;") {
            text.push('"');
            rest = tail;
        } else {
            text.push('&');
            rest = &rest[1..];
        }
    }
    text.push_str(rest);
    text
}

/// Read a utility class list back into CSS declarations.
///
/// Understands the grammar `utility_classes` emits; unknown classes are
/// skipped. Used to check that markup and CSS say the same thing.
pub fn expand_utility_classes(classes: &str) -> Vec<Declaration> {
    let mut decls = Vec::new();
    for class in classes.split_whitespace() {
        if let Some(decl) = expand_class(class) {
            decls.push(decl);
        }
    }
    decls
}

fn expand_class(class: &str) -> Option<Declaration> {
    if class == "flex" || class == "grid" {
        return Some(Declaration::new("display", class));
    }
    if let Some(value) = arbitrary(class, "gap-") {
        return Some(Declaration::new("gap", value));
    }
    if let Some(value) = arbitrary(class, "grid-cols-") {
        return Some(Declaration::new("grid-template-columns", value));
    }
    if let Some(rest) = class.strip_prefix("justify-items-") {
        return Some(Declaration::new("justify-items", rest));
    }
    if let Some(rest) = class.strip_prefix("content-") {
        return Some(Declaration::new("align-content", rest));
    }
    if let Some(rest) = class.strip_prefix("flex-") {
        return Some(Declaration::new("flex-direction", rest));
    }
    if let Some(rest) = class.strip_prefix("justify-") {
        let value = JustifyContent::ALL
            .iter()
            .find(|v| justify_token(**v) == rest)?;
        return Some(Declaration::new("justify-content", value.as_css()));
    }
    if let Some(rest) = class.strip_prefix("items-") {
        let value = AlignItems::ALL.iter().find(|v| align_token(**v) == rest)?;
        return Some(Declaration::new("align-items", value.as_css()));
    }
    None
}

/// Body of an arbitrary-value class such as `gap-[16px]`.
fn arbitrary(class: &str, prefix: &str) -> Option<String> {
    let body = class.strip_prefix(prefix)?.strip_prefix('[')?.strip_suffix(']')?;
    Some(read_arbitrary(body))
}

/// Pull the class list out of generated markup, undoing attribute escapes.
pub fn class_attribute(markup: &str) -> Option<String> {
    let start = markup.find("className=\"")? + "className=\"".len();
    let len = markup[start..].find('"')?;
    Some(unescape_attribute(&markup[start..start + len]))
}

#[cfg(test)]
#[path = "codegen_tests.rs"]
mod tests;
