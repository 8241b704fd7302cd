//! Document-level affordances while a panel divider is dragged.
//!
//! While a drag is active the whole document shows the resize cursor, text
//! selection is suppressed, and `<body>` carries `RESIZING_ATTR` so the
//! stylesheet can turn off pointer events on slide iframes. Without that, an
//! iframe under the pointer would swallow the moves and the release. All of
//! it is cleared on drag end. SSR paths no-op.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::state::layout::DragHandle;

/// Attribute set on `<body>` for the duration of a drag.
pub const RESIZING_ATTR: &str = "data-resizing";

/// Inline `<body>` style properties applied while `handle` is dragged.
#[must_use]
pub fn affordance_properties(handle: DragHandle) -> [(&'static str, &'static str); 2] {
    [("cursor", handle.cursor()), ("user-select", "none")]
}

/// Force the resize cursor, disable text selection, and mark `<body>`.
pub fn apply_drag_affordance(handle: DragHandle) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = body() else {
            return;
        };
        let style = body.style();
        for (name, value) in affordance_properties(handle) {
            let _ = style.set_property(name, value);
        }
        let _ = body.set_attribute(RESIZING_ATTR, handle.orientation());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = handle;
    }
}

/// Undo everything set by `apply_drag_affordance`.
pub fn clear_drag_affordance() {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = body() else {
            return;
        };
        let style = body.style();
        for (name, _) in affordance_properties(DragHandle::Left) {
            let _ = style.remove_property(name);
        }
        let _ = body.remove_attribute(RESIZING_ATTR);
    }
}

/// Route all further events of this pointer to the handle element, even when
/// the pointer is over an iframe.
pub fn capture_pointer(ev: &leptos::ev::PointerEvent) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            let _ = target.set_pointer_capture(ev.pointer_id());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
    }
}

#[cfg(feature = "hydrate")]
fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
}
