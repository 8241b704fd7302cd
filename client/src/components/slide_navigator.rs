//! Middle column: one sandboxed thumbnail per slide.
//!
//! Thumbnails render the slide's own HTML document through `srcdoc` with an
//! empty `sandbox`, so slide markup gets no script or same-origin access to
//! the studio. The frames are scaled down with CSS and ignore pointer events;
//! clicks land on the wrapper.

use leptos::prelude::*;

use crate::components::resize_handle::ResizeHandle;
use crate::net::types::Slide;
use crate::state::deck::{DeckState, slide_count_label};
use crate::state::layout::DragHandle;

#[component]
pub fn SlideNavigator() -> impl IntoView {
    let deck = expect_context::<RwSignal<DeckState>>();
    let header = move || slide_count_label(deck.with(DeckState::total));
    let entries = move || deck.with(|d| d.slides().iter().cloned().enumerate().collect::<Vec<_>>());

    view! {
        <section class="panel slide-navigator">
            <header class="slide-navigator__header">
                <span class="caption">{header}</span>
            </header>
            <div class="slide-navigator__list">
                <For
                    each=entries
                    key=|(index, slide)| (*index, slide.id, slide.filename.clone())
                    children=move |(index, slide)| view! { <SlideThumbnail index slide/> }
                />
            </div>
            <ResizeHandle handle=DragHandle::Right/>
        </section>
    }
}

#[component]
fn SlideThumbnail(index: usize, slide: Slide) -> impl IntoView {
    let deck = expect_context::<RwSignal<DeckState>>();
    let active = move || deck.with(|d| d.is_active(index));
    let select = move |_| {
        deck.update(|d| {
            d.select(index);
        });
    };

    view! {
        <div
            class="slide-thumb"
            class:slide-thumb--active=active
            role="button"
            tabindex="0"
            aria-current=move || active().then_some("true")
            on:click=select
        >
            <span class="slide-thumb__number">{index + 1}</span>
            <div class="slide-thumb__frame">
                <iframe sandbox="" srcdoc=slide.content title=slide.filename tabindex="-1"></iframe>
            </div>
        </div>
    }
}
