//! Draggable divider that resizes studio panels.
//!
//! ARCHITECTURE
//! ============
//! Pointer-down on a handle starts a drag in `LayoutState`, captures the
//! pointer on the handle, and attaches `pointermove` / `pointerup` /
//! `pointercancel` listeners to the window. Captured events still bubble to
//! the window, so the drag keeps tracking when the pointer leaves the handle
//! or crosses a slide iframe. The listeners are removed as soon as the drag
//! ends and when the handle unmounts mid-drag.

use leptos::ev;
use leptos::prelude::*;

use crate::state::layout::{ContainerRect, DragHandle, LayoutState, PointerPosition};
use crate::util::drag;

/// The studio workspace element that drag math is measured against.
#[derive(Clone, Copy)]
pub struct LayoutContainer(pub NodeRef<leptos::html::Div>);

impl LayoutContainer {
    /// Current viewport bounds of the workspace, if mounted.
    pub fn rect(self) -> Option<ContainerRect> {
        #[cfg(feature = "hydrate")]
        {
            let el = self.0.get_untracked()?;
            let rect = el.get_bounding_client_rect();
            Some(ContainerRect { left: rect.left(), width: rect.width(), bottom: rect.bottom() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

#[component]
pub fn ResizeHandle(handle: DragHandle) -> impl IntoView {
    let layout = expect_context::<RwSignal<LayoutState>>();
    let container = expect_context::<LayoutContainer>();
    let detach = StoredValue::new_local(Vec::<Box<dyn FnOnce()>>::new());

    let release = move || {
        detach.update_value(|slot| {
            for remove in slot.drain(..) {
                remove();
            }
        });
        if layout.try_update(LayoutState::end_drag).flatten().is_some() {
            drag::clear_drag_affordance();
        }
    };

    let on_pointer_down = move |ev: ev::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        if !layout.try_update(|l| l.begin_drag(handle)).unwrap_or(false) {
            return;
        }
        ev.prevent_default();
        drag::capture_pointer(&ev);
        drag::apply_drag_affordance(handle);

        let on_move = window_event_listener(ev::pointermove, move |ev| {
            let Some(rect) = container.rect() else {
                return;
            };
            let pointer = PointerPosition { x: f64::from(ev.client_x()), y: f64::from(ev.client_y()) };
            layout.update(|l| {
                l.drag_to(pointer, rect);
            });
        });
        let on_up = window_event_listener(ev::pointerup, move |_| release());
        let on_cancel = window_event_listener(ev::pointercancel, move |_| release());

        detach.update_value(|slot| {
            slot.push(Box::new(move || on_move.remove()));
            slot.push(Box::new(move || on_up.remove()));
            slot.push(Box::new(move || on_cancel.remove()));
        });
    };

    on_cleanup(move || release());

    let active = move || layout.with(|l| l.active_drag() == Some(handle));
    let class = match handle {
        DragHandle::Left | DragHandle::Right => "resize-handle resize-handle--column",
        DragHandle::Input => "resize-handle resize-handle--row",
    };

    view! {
        <div
            class=class
            class:resize-handle--active=active
            role="separator"
            aria-orientation=handle.orientation()
            on:pointerdown=on_pointer_down
        ></div>
    }
}
