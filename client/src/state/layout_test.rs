use super::*;

const WIDE: ContainerRect = ContainerRect { left: 0.0, width: 1600.0, bottom: 900.0 };

fn at(x: f64, y: f64) -> PointerPosition {
    PointerPosition { x, y }
}

fn assert_within_bounds(state: &LayoutState, container: ContainerRect) {
    let (lmin, lmax) = left_width_bounds(container.width);
    let (mmin, mmax) = middle_width_bounds(container.width);
    assert!(state.left_width() >= lmin && state.left_width() <= lmax, "left {}", state.left_width());
    assert!(state.middle_width() >= mmin && state.middle_width() <= mmax, "middle {}", state.middle_width());
    assert!(
        state.input_area_height() >= INPUT_MIN_HEIGHT && state.input_area_height() <= INPUT_MAX_HEIGHT,
        "input {}",
        state.input_area_height()
    );
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn layout_default_is_idle_with_three_column_widths() {
    let state = LayoutState::default();
    assert_eq!(state.left_width(), DEFAULT_LEFT_WIDTH);
    assert_eq!(state.middle_width(), DEFAULT_MIDDLE_WIDTH);
    assert_eq!(state.input_area_height(), DEFAULT_INPUT_HEIGHT);
    assert_eq!(state.active_drag(), None);
    assert_eq!(state.grid_template_columns(), "300px 180px minmax(0, 1fr)");
}

// =============================================================
// State machine
// =============================================================

#[test]
fn begin_drag_enters_dragging_once() {
    let mut state = LayoutState::default();
    assert!(state.begin_drag(DragHandle::Left));
    assert!(state.is_dragging());
    assert!(!state.begin_drag(DragHandle::Right));
    assert_eq!(state.active_drag(), Some(DragHandle::Left));
}

#[test]
fn end_drag_returns_to_idle() {
    let mut state = LayoutState::default();
    state.begin_drag(DragHandle::Input);
    assert_eq!(state.end_drag(), Some(DragHandle::Input));
    assert!(!state.is_dragging());
    assert_eq!(state.end_drag(), None);
    assert!(state.begin_drag(DragHandle::Right));
}

#[test]
fn drag_to_without_active_handle_is_ignored() {
    let mut state = LayoutState::default();
    assert!(!state.drag_to(at(500.0, 500.0), WIDE));
    assert_eq!(state, LayoutState::default());
}

// =============================================================
// Left handle
// =============================================================

#[test]
fn left_drag_follows_pointer_x() {
    let mut state = LayoutState::default();
    state.begin_drag(DragHandle::Left);
    assert!(state.drag_to(at(420.0, 10.0), WIDE));
    assert_eq!(state.left_width(), 420.0);
    assert_eq!(state.middle_width(), DEFAULT_MIDDLE_WIDTH);
}

#[test]
fn left_drag_clamps_to_minimum_and_ratio() {
    let mut state = LayoutState::default();
    state.begin_drag(DragHandle::Left);
    state.drag_to(at(10.0, 0.0), WIDE);
    assert_eq!(state.left_width(), LEFT_MIN_WIDTH);
    state.drag_to(at(5000.0, 0.0), WIDE);
    assert_eq!(state.left_width(), 960.0);
}

#[test]
fn left_drag_subtracts_container_offset() {
    let mut state = LayoutState::default();
    state.begin_drag(DragHandle::Left);
    state.drag_to(at(350.0, 0.0), ContainerRect { left: 50.0, ..WIDE });
    assert_eq!(state.left_width(), 300.0);
}

// =============================================================
// Right handle
// =============================================================

#[test]
fn right_drag_is_relative_to_left_width() {
    let mut state = LayoutState::default();
    state.begin_drag(DragHandle::Right);
    state.drag_to(at(550.0, 0.0), WIDE);
    assert_eq!(state.middle_width(), 250.0);
    state.end_drag();

    state.begin_drag(DragHandle::Left);
    state.drag_to(at(400.0, 0.0), WIDE);
    state.end_drag();

    state.begin_drag(DragHandle::Right);
    state.drag_to(at(650.0, 0.0), WIDE);
    assert_eq!(state.middle_width(), 250.0);
}

#[test]
fn right_drag_clamps_to_absolute_and_ratio_caps() {
    let mut state = LayoutState::default();
    state.begin_drag(DragHandle::Right);
    state.drag_to(at(2000.0, 0.0), WIDE);
    assert_eq!(state.middle_width(), MIDDLE_MAX_WIDTH);

    let narrow = ContainerRect { left: 0.0, width: 800.0, bottom: 600.0 };
    state.drag_to(at(2000.0, 0.0), narrow);
    assert_eq!(state.middle_width(), 320.0);

    state.drag_to(at(0.0, 0.0), narrow);
    assert_eq!(state.middle_width(), MIDDLE_MIN_WIDTH);
}

// =============================================================
// Input handle
// =============================================================

#[test]
fn input_drag_measures_from_container_bottom() {
    let mut state = LayoutState::default();
    state.begin_drag(DragHandle::Input);
    state.drag_to(at(0.0, 700.0), WIDE);
    assert_eq!(state.input_area_height(), 200.0);
    state.drag_to(at(0.0, 890.0), WIDE);
    assert_eq!(state.input_area_height(), INPUT_MIN_HEIGHT);
    state.drag_to(at(0.0, -50.0), WIDE);
    assert_eq!(state.input_area_height(), INPUT_MAX_HEIGHT);
}

#[test]
fn drag_to_reports_unchanged_position() {
    let mut state = LayoutState::default();
    state.begin_drag(DragHandle::Input);
    assert!(state.drag_to(at(0.0, 700.0), WIDE));
    assert!(!state.drag_to(at(0.0, 700.0), WIDE));
}

// =============================================================
// Clamp invariants
// =============================================================

#[test]
fn every_drag_sequence_stays_within_clamps() {
    let containers = [
        WIDE,
        ContainerRect { left: 0.0, width: 900.0, bottom: 700.0 },
        ContainerRect { left: 0.0, width: 250.0, bottom: 400.0 },
    ];
    let positions = [-10_000.0, -1.0, 0.0, 75.0, 199.0, 350.0, 640.0, 999.0, 1800.0, 50_000.0];
    let handles = [DragHandle::Left, DragHandle::Right, DragHandle::Input];

    for container in containers {
        let mut state = LayoutState::default();
        for handle in handles {
            assert!(state.begin_drag(handle));
            for &x in &positions {
                for &y in &positions {
                    state.drag_to(at(x, y), container);
                    if handle != DragHandle::Input {
                        let (min, max) = if handle == DragHandle::Left {
                            left_width_bounds(container.width)
                        } else {
                            middle_width_bounds(container.width)
                        };
                        let value = if handle == DragHandle::Left { state.left_width() } else { state.middle_width() };
                        assert!(value >= min && value <= max);
                    }
                }
            }
            state.end_drag();
        }
        assert_within_bounds(&state, container);
    }
}

#[test]
fn non_finite_pointer_is_ignored() {
    let mut state = LayoutState::default();
    state.begin_drag(DragHandle::Left);
    assert!(!state.drag_to(at(f64::NAN, 0.0), WIDE));
    assert!(!state.drag_to(at(f64::INFINITY, 0.0), WIDE));
    assert_eq!(state.left_width(), DEFAULT_LEFT_WIDTH);
}

#[test]
fn bounds_prefer_minimum_for_tiny_containers() {
    assert_eq!(left_width_bounds(100.0), (LEFT_MIN_WIDTH, LEFT_MIN_WIDTH));
    assert_eq!(middle_width_bounds(100.0), (MIDDLE_MIN_WIDTH, MIDDLE_MIN_WIDTH));
    assert_eq!(middle_width_bounds(10_000.0), (MIDDLE_MIN_WIDTH, MIDDLE_MAX_WIDTH));
}

#[test]
fn drag_handle_cursor_matches_axis() {
    assert_eq!(DragHandle::Left.cursor(), "col-resize");
    assert_eq!(DragHandle::Right.cursor(), "col-resize");
    assert_eq!(DragHandle::Input.cursor(), "row-resize");
    assert_eq!(DragHandle::Input.orientation(), "horizontal");
}
