//! Resizable studio layout: panel widths, input box height, active drag.
//!
//! DESIGN
//! ======
//! The layout is a two-state machine (`idle` / `dragging(handle)`). Fields are
//! private and change only through `begin_drag`, `drag_to`, and `end_drag`, so
//! every width and height written is clamped against the container geometry
//! captured at the moment of the move.
//!
//! Pointer coordinates are viewport coordinates; `ContainerRect::left` is
//! subtracted so the math stays correct if the workspace is ever offset.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

pub const LEFT_MIN_WIDTH: f64 = 200.0;
pub const LEFT_MAX_RATIO: f64 = 0.6;
pub const MIDDLE_MIN_WIDTH: f64 = 150.0;
pub const MIDDLE_MAX_WIDTH: f64 = 400.0;
pub const MIDDLE_MAX_RATIO: f64 = 0.4;
pub const INPUT_MIN_HEIGHT: f64 = 80.0;
pub const INPUT_MAX_HEIGHT: f64 = 300.0;

pub const DEFAULT_LEFT_WIDTH: f64 = 300.0;
pub const DEFAULT_MIDDLE_WIDTH: f64 = 180.0;
pub const DEFAULT_INPUT_HEIGHT: f64 = 120.0;

/// A draggable strip between panels (or above the input box).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragHandle {
    /// Between the assistant panel and the navigator.
    Left,
    /// Between the navigator and the preview.
    Right,
    /// Above the assistant input box.
    Input,
}

impl DragHandle {
    /// Document cursor forced while this handle is dragged.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Left | Self::Right => "col-resize",
            Self::Input => "row-resize",
        }
    }

    #[must_use]
    pub fn orientation(self) -> &'static str {
        match self {
            Self::Left | Self::Right => "vertical",
            Self::Input => "horizontal",
        }
    }
}

/// Workspace bounds in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub width: f64,
    pub bottom: f64,
}

/// Pointer position in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutState {
    left_width: f64,
    middle_width: f64,
    input_area_height: f64,
    active_drag: Option<DragHandle>,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            left_width: DEFAULT_LEFT_WIDTH,
            middle_width: DEFAULT_MIDDLE_WIDTH,
            input_area_height: DEFAULT_INPUT_HEIGHT,
            active_drag: None,
        }
    }
}

impl LayoutState {
    #[must_use]
    pub fn left_width(&self) -> f64 {
        self.left_width
    }

    #[must_use]
    pub fn middle_width(&self) -> f64 {
        self.middle_width
    }

    #[must_use]
    pub fn input_area_height(&self) -> f64 {
        self.input_area_height
    }

    #[must_use]
    pub fn active_drag(&self) -> Option<DragHandle> {
        self.active_drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active_drag.is_some()
    }

    /// `idle -> dragging(handle)`. Returns `false` (and changes nothing) when
    /// another drag is already active.
    pub fn begin_drag(&mut self, handle: DragHandle) -> bool {
        if self.active_drag.is_some() {
            return false;
        }
        self.active_drag = Some(handle);
        true
    }

    /// Apply a pointer move to the active handle. Returns `true` if a
    /// dimension changed.
    pub fn drag_to(&mut self, pointer: PointerPosition, container: ContainerRect) -> bool {
        let Some(handle) = self.active_drag else {
            return false;
        };
        if !(pointer.x.is_finite() && pointer.y.is_finite() && container.width.is_finite()) {
            return false;
        }

        let x = pointer.x - container.left;
        let (slot, next) = match handle {
            DragHandle::Left => {
                let (min, max) = left_width_bounds(container.width);
                (&mut self.left_width, x.clamp(min, max))
            }
            DragHandle::Right => {
                let (min, max) = middle_width_bounds(container.width);
                (&mut self.middle_width, (x - self.left_width).clamp(min, max))
            }
            DragHandle::Input => (
                &mut self.input_area_height,
                (container.bottom - pointer.y).clamp(INPUT_MIN_HEIGHT, INPUT_MAX_HEIGHT),
            ),
        };

        if (*slot - next).abs() < f64::EPSILON {
            return false;
        }
        *slot = next;
        true
    }

    /// `dragging -> idle`. Returns the handle that was released, if any.
    pub fn end_drag(&mut self) -> Option<DragHandle> {
        self.active_drag.take()
    }

    /// CSS `grid-template-columns` for the three panels.
    #[must_use]
    pub fn grid_template_columns(&self) -> String {
        format!("{:.0}px {:.0}px minmax(0, 1fr)", self.left_width, self.middle_width)
    }
}

/// Allowed left-panel widths for a container. The minimum wins when the
/// container is too narrow for the ratio cap.
#[must_use]
pub fn left_width_bounds(container_width: f64) -> (f64, f64) {
    let max = (container_width * LEFT_MAX_RATIO).max(LEFT_MIN_WIDTH);
    (LEFT_MIN_WIDTH, max)
}

/// Allowed navigator widths for a container. The minimum wins when the
/// container is too narrow for the ratio cap.
#[must_use]
pub fn middle_width_bounds(container_width: f64) -> (f64, f64) {
    let max = (container_width * MIDDLE_MAX_RATIO)
        .min(MIDDLE_MAX_WIDTH)
        .max(MIDDLE_MIN_WIDTH);
    (MIDDLE_MIN_WIDTH, max)
}
