//! Property-based tests for the layout model, generators and scaling.
//!
//! Tests validate:
//! 1. Container derivation only ever carries the active mode's properties
//! 2. CSS output lists every derived declaration; markup agrees with CSS
//! 3. add/remove/update keep the child invariants
//! 4. Viewport scale stays in [0, 1], grows with the host and is idempotent

use flexlab::codegen::{
    class_attribute, expand_utility_classes, generate, generate_css, generate_markup,
    OutputFormat,
};
use flexlab::model::{
    AlignContent, AlignItems, AlignSelf, ChildStylePatch, ContainerPropUpdate, FlexDirection,
    FlexPropUpdate, FlexWrap, GridPropUpdate, JustifyContent, JustifyItems, LayoutMode,
    LayoutState,
};
use flexlab::state::LayoutController;
use flexlab::style::derive_container_style;
use flexlab::viewport::{compute_scale, HostSize, ScaleTracker, ViewportKind};
use proptest::prelude::*;
use proptest::sample::select;

// ===== Strategies =====

/// One user edit, as the sidebar would issue it.
#[derive(Debug, Clone)]
enum Edit {
    ToggleMode,
    AddChild,
    RemoveChild,
    Container(ContainerPropUpdate),
    /// Patch the child at this display position (modulo the child count).
    Child(usize, ChildStylePatch),
}

fn free_text() -> impl Strategy<Value = String> {
    "[ -~]{0,12}"
}

/// Realistic track lists mixed with arbitrary typed text (quotes,
/// underscores and backslashes included).
fn template() -> impl Strategy<Value = String> {
    prop_oneof![
        select(vec![
            "1fr 1fr 1fr",
            "repeat(4, 1fr)",
            "100px auto 2fr",
            "minmax(50px, 1fr) 1fr",
            "[main_start] 1fr 2fr",
            "auto",
        ])
        .prop_map(str::to_string),
        free_text(),
    ]
}

fn container_update() -> impl Strategy<Value = ContainerPropUpdate> {
    prop_oneof![
        select(FlexDirection::ALL)
            .prop_map(|v| ContainerPropUpdate::Flex(FlexPropUpdate::Direction(v))),
        select(JustifyContent::ALL)
            .prop_map(|v| ContainerPropUpdate::Flex(FlexPropUpdate::JustifyContent(v))),
        select(AlignItems::ALL)
            .prop_map(|v| ContainerPropUpdate::Flex(FlexPropUpdate::AlignItems(v))),
        select(FlexWrap::ALL).prop_map(|v| ContainerPropUpdate::Flex(FlexPropUpdate::Wrap(v))),
        (0u32..=200).prop_map(|v| ContainerPropUpdate::Flex(FlexPropUpdate::Gap(v))),
        template().prop_map(|v| ContainerPropUpdate::Grid(GridPropUpdate::ColumnTemplate(v))),
        free_text().prop_map(|v| ContainerPropUpdate::Grid(GridPropUpdate::RowTemplate(v))),
        (0u32..=200).prop_map(|v| ContainerPropUpdate::Grid(GridPropUpdate::Gap(v))),
        select(JustifyItems::ALL)
            .prop_map(|v| ContainerPropUpdate::Grid(GridPropUpdate::JustifyItems(v))),
        select(AlignContent::ALL)
            .prop_map(|v| ContainerPropUpdate::Grid(GridPropUpdate::AlignContent(v))),
    ]
}

fn child_patch() -> impl Strategy<Value = ChildStylePatch> {
    prop_oneof![
        (0u32..10).prop_map(ChildStylePatch::flex_grow),
        (0u32..10).prop_map(ChildStylePatch::flex_shrink),
        free_text().prop_map(ChildStylePatch::flex_basis),
        select(AlignSelf::ALL).prop_map(ChildStylePatch::align_self),
        free_text().prop_map(ChildStylePatch::grid_column),
        free_text().prop_map(ChildStylePatch::grid_row),
    ]
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        1 => Just(Edit::ToggleMode),
        2 => Just(Edit::AddChild),
        2 => Just(Edit::RemoveChild),
        4 => container_update().prop_map(Edit::Container),
        3 => (0usize..16, child_patch()).prop_map(|(i, p)| Edit::Child(i, p)),
    ]
}

fn apply(controller: &mut LayoutController, edit: Edit) {
    match edit {
        Edit::ToggleMode => controller.toggle_mode(),
        Edit::AddChild => {
            controller.add_child();
        }
        Edit::RemoveChild => controller.remove_child(),
        Edit::Container(update) => controller.update_container_prop(update),
        Edit::Child(position, patch) => {
            let children = controller.layout().children();
            let id = children[position % children.len()].id;
            controller.update_child_style(id, patch);
        }
    }
}

/// A controller driven through a random edit history from the seed.
fn edited_controller() -> impl Strategy<Value = LayoutController> {
    prop::collection::vec(edit(), 0..24).prop_map(|edits| {
        let mut controller = LayoutController::default();
        for e in edits {
            apply(&mut controller, e);
        }
        controller
    })
}

fn edited_layout() -> impl Strategy<Value = LayoutState> {
    edited_controller().prop_map(|c| c.layout().clone())
}

// ===== Property 1: Mode-exclusive derivation =====

proptest! {
    #[test]
    fn container_style_matches_active_mode(layout in edited_layout()) {
        let style = derive_container_style(&layout);
        prop_assert_eq!(style.mode(), layout.mode());

        let decls = style.declarations();
        prop_assert_eq!(decls[0].property, "display");
        let foreign: &[&str] = match layout.mode() {
            LayoutMode::Flex => &["grid-template-columns", "grid-template-rows", "justify-items", "align-content"],
            LayoutMode::Grid => &["flex-direction", "justify-content", "align-items", "flex-wrap"],
        };
        for decl in &decls {
            prop_assert!(!foreign.contains(&decl.property), "{} leaked", decl.property);
        }
    }
}

// ===== Property 2: Generator agreement =====

proptest! {
    #[test]
    fn css_lists_every_declaration_in_order(layout in edited_layout()) {
        let css = generate_css(&layout);
        let body: Vec<&str> = css.lines().skip(1).filter(|l| l.starts_with("  ")).collect();
        let decls = derive_container_style(&layout).declarations();
        prop_assert_eq!(body.len(), decls.len());
        for (line, decl) in body.iter().zip(&decls) {
            prop_assert_eq!(line.to_string(), format!("  {}: {};", decl.property, decl.value));
        }
        let gap = decls.iter().find(|d| d.property == "gap").map(|d| d.value.clone());
        prop_assert!(gap.is_some_and(|g| g.ends_with("px")));
    }

    #[test]
    fn markup_declarations_agree_with_css(layout in edited_layout()) {
        let markup = generate_markup(&layout);
        let classes = class_attribute(&markup).unwrap_or_default();
        let from_markup = expand_utility_classes(&classes);
        let from_css = derive_container_style(&layout).declarations();

        // Both modes carry five classes; losing one means the list was cut short.
        prop_assert_eq!(from_markup.len(), 5, "classes {}", classes);
        for decl in &from_markup {
            prop_assert!(from_css.contains(decl), "markup says {decl:?}, css does not");
        }
    }

    #[test]
    fn generation_is_deterministic(layout in edited_layout()) {
        for format in [OutputFormat::Css, OutputFormat::Markup] {
            prop_assert_eq!(generate(&layout, format), generate(&layout.clone(), format));
        }
    }
}

// ===== Property 3: Child invariants =====

proptest! {
    #[test]
    fn children_never_empty_and_ids_unique(controller in edited_controller()) {
        let children = controller.layout().children();
        prop_assert!(!children.is_empty());
        let mut ids: Vec<_> = children.iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), children.len());
    }

    #[test]
    fn selection_always_names_a_live_child(controller in edited_controller()) {
        if let Some(id) = controller.selection().id() {
            prop_assert!(controller.layout().child(id).is_some());
        }
    }

    #[test]
    fn add_then_remove_restores_layout(controller in edited_controller()) {
        let before = controller.layout().clone();
        let mut after = controller.clone();
        let added = after.add_child();
        prop_assert!(before.child(added).is_none());
        prop_assert_eq!(after.layout().children().len(), before.children().len() + 1);
        after.remove_child();
        prop_assert_eq!(after.layout(), &before);
    }

    #[test]
    fn child_updates_keep_count_and_ids(
        controller in edited_controller(),
        position in 0usize..16,
        patch in child_patch(),
    ) {
        let before: Vec<_> = controller.layout().child_ids().copied().collect();
        let mut after = controller.clone();
        apply(&mut after, Edit::Child(position, patch));
        let ids: Vec<_> = after.layout().child_ids().copied().collect();
        prop_assert_eq!(ids, before);
    }
}

#[test]
fn remove_on_single_child_is_noop() {
    let mut controller = LayoutController::default();
    controller.remove_child();
    controller.remove_child();
    let before = controller.layout().clone();
    assert_eq!(before.children().len(), 1);
    controller.remove_child();
    assert_eq!(controller.layout(), &before);
}

// ===== Property 4: Viewport scale =====

fn host() -> impl Strategy<Value = HostSize> {
    (-100.0f64..3000.0, -100.0f64..3000.0).prop_map(|(w, h)| HostSize::new(w, h))
}

proptest! {
    #[test]
    fn scale_is_in_unit_range(kind in select(ViewportKind::ALL.to_vec()), host in host()) {
        let scale = compute_scale(kind, host);
        prop_assert!((0.0..=1.0).contains(&scale), "scale {scale}");
    }

    #[test]
    fn larger_host_never_shrinks_scale(
        kind in select(ViewportKind::ALL.to_vec()),
        host in host(),
        dw in 0.0f64..1000.0,
        dh in 0.0f64..1000.0,
    ) {
        let bigger = HostSize::new(host.width + dw, host.height + dh);
        prop_assert!(compute_scale(kind, bigger) >= compute_scale(kind, host));
    }

    #[test]
    fn repeated_resize_notifications_are_idempotent(
        kind in select(ViewportKind::ALL.to_vec()),
        host in host(),
        repeats in 1usize..6,
    ) {
        let mut tracker = ScaleTracker::new(kind);
        tracker.observe_host(host);
        let first = tracker.clone();
        for _ in 0..repeats {
            prop_assert!(!tracker.observe_host(host));
        }
        prop_assert_eq!(tracker, first);
    }
}
