//! Permissive readers from CSS text to `taffy` values.
//!
//! Each reader returns `None` for input it cannot interpret; the caller then
//! leaves the property at its initial value, which is what a browser does
//! with an invalid declaration.

use taffy::prelude::{FromFr, TaffyAuto, TaffyMaxContent, TaffyMinContent};
use taffy::style_helpers::{line, span};
use taffy::{
    Dimension, GridPlacement, GridTemplateComponent, GridTemplateRepetition, LengthPercentage,
    Line, MaxTrackSizingFunction, MinMax, MinTrackSizingFunction, RepetitionCount,
    TrackSizingFunction,
};

/// A plain length before it is converted to a particular `taffy` type.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Length {
    Px(f32),
    /// Fraction of the containing size, 0.5 for `50%`.
    Fraction(f32),
}

impl Length {
    fn to_length_percentage(self) -> LengthPercentage {
        match self {
            Length::Px(v) => LengthPercentage::length(v),
            Length::Fraction(v) => LengthPercentage::percent(v),
        }
    }
}

/// Split a trailing unit off a number, e.g. `150px` -> (150.0, "px").
fn number_with_unit(token: &str) -> Option<(f32, &str)> {
    let split = token
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.' || *c == '-' || *c == '+'))
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    let (number, unit) = token.split_at(split);
    let value: f32 = number.parse().ok()?;
    value.is_finite().then_some((value, unit))
}

fn plain_length(token: &str) -> Option<Length> {
    match number_with_unit(token.trim())? {
        (v, "px") => Some(Length::Px(v)),
        (v, "%") => Some(Length::Fraction(v / 100.0)),
        (v, "") if v == 0.0 => Some(Length::Px(0.0)),
        _ => None,
    }
}

/// `px`, `%` or a unitless zero.
pub fn length_percentage(token: &str) -> Option<LengthPercentage> {
    plain_length(token).map(Length::to_length_percentage)
}

/// A `flex-basis` value. Content-sizing keywords fall back to `auto`.
pub fn flex_basis(token: &str) -> Option<Dimension> {
    match token.trim() {
        "auto" | "content" | "max-content" | "min-content" | "fit-content" => {
            Some(Dimension::AUTO)
        }
        other => match plain_length(other)? {
            Length::Px(v) => Some(Dimension::length(v)),
            Length::Fraction(v) => Some(Dimension::percent(v)),
        },
    }
}

// ===== Track lists =====

fn min_track(token: &str) -> Option<MinTrackSizingFunction> {
    match token {
        "auto" => Some(MinTrackSizingFunction::AUTO),
        "min-content" => Some(MinTrackSizingFunction::MIN_CONTENT),
        "max-content" => Some(MinTrackSizingFunction::MAX_CONTENT),
        other => match number_with_unit(other)? {
            // A flexible minimum is not allowed; it behaves as `auto`.
            (v, "fr") if v >= 0.0 => Some(MinTrackSizingFunction::AUTO),
            _ => plain_length(other)
                .map(|l| MinTrackSizingFunction::from(l.to_length_percentage())),
        },
    }
}

fn max_track(token: &str) -> Option<MaxTrackSizingFunction> {
    match token {
        "auto" => Some(MaxTrackSizingFunction::AUTO),
        "min-content" => Some(MaxTrackSizingFunction::MIN_CONTENT),
        "max-content" => Some(MaxTrackSizingFunction::MAX_CONTENT),
        other => match number_with_unit(other)? {
            (v, "fr") if v >= 0.0 => Some(MaxTrackSizingFunction::from_fr(v)),
            _ => plain_length(other)
                .map(|l| MaxTrackSizingFunction::from(l.to_length_percentage())),
        },
    }
}

/// One track size: a single breadth or `minmax(min, max)`.
fn track_size(token: &str) -> Option<TrackSizingFunction> {
    let (min, max) = match function_args(token, "minmax") {
        Some(args) => {
            let (min, max) = args.split_once(',')?;
            (min.trim(), max.trim())
        }
        None => (token, token),
    };
    Some(MinMax {
        min: min_track(min)?,
        max: max_track(max)?,
    })
}

/// Arguments of `name(...)`, if `token` is that function call.
fn function_args<'a>(token: &'a str, name: &str) -> Option<&'a str> {
    token
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Split on whitespace, keeping parenthesised groups together.
fn split_top_level(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for c in input.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            c if c.is_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn repetition(args: &str) -> Option<GridTemplateComponent<String>> {
    let (count, tracks) = args.split_once(',')?;
    let count = match count.trim() {
        "auto-fill" => RepetitionCount::AutoFill,
        "auto-fit" => RepetitionCount::AutoFit,
        n => RepetitionCount::Count(n.parse::<u16>().ok().filter(|n| *n > 0)?),
    };
    let tracks = split_top_level(tracks)
        .iter()
        .map(|t| track_size(t))
        .collect::<Option<Vec<_>>>()?;
    if tracks.is_empty() {
        return None;
    }
    let line_names = vec![Vec::new(); tracks.len() + 1];
    Some(GridTemplateComponent::Repeat(GridTemplateRepetition {
        count,
        tracks,
        line_names,
    }))
}

/// A `grid-template-columns`/`-rows` track list.
///
/// The whole list is rejected if any track is unreadable.
pub fn track_list(input: &str) -> Option<Vec<GridTemplateComponent<String>>> {
    let tokens = split_top_level(input.trim());
    if tokens.is_empty() {
        return None;
    }
    if tokens.len() == 1 && tokens[0] == "none" {
        return Some(Vec::new());
    }
    tokens
        .iter()
        .map(|token| match function_args(token, "repeat") {
            Some(args) => repetition(args),
            None => track_size(token).map(GridTemplateComponent::Single),
        })
        .collect()
}

// ===== Placement =====

fn grid_line(token: &str) -> Option<GridPlacement<String>> {
    let token = token.trim();
    if token == "auto" {
        return Some(GridPlacement::Auto);
    }
    if let Some(n) = token.strip_prefix("span") {
        let n = n.trim();
        let n = if n.is_empty() { 1 } else { n.parse::<u16>().ok()? };
        return (n > 0).then(|| span(n));
    }
    let n = token.parse::<i16>().ok()?;
    if n == 0 {
        return None;
    }
    Some(line(n))
}

/// A `grid-column`/`grid-row` shorthand: `start` or `start / end`.
pub fn grid_placement(input: &str) -> Option<Line<GridPlacement<String>>> {
    match input.split_once('/') {
        Some((start, end)) => Some(Line {
            start: grid_line(start)?,
            end: grid_line(end)?,
        }),
        None => {
            let start = grid_line(input)?;
            // A lone span applies to the start; the end stays automatic.
            Some(Line {
                start,
                end: GridPlacement::Auto,
            })
        }
    }
}
