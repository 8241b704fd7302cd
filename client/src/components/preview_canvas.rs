//! Right column: live preview of the selected slide with zoom controls.
//!
//! The preview frame is sandboxed like the thumbnails. Zoom only resizes the
//! canvas; it never touches the deck or the selection.

use leptos::prelude::*;

use crate::state::deck::{DeckState, DeckStatus};

#[component]
pub fn PreviewCanvas() -> impl IntoView {
    let deck = expect_context::<RwSignal<DeckState>>();
    let status = Memo::new(move |_| deck.with(DeckState::status));

    let zoom_label = move || format!("{}%", deck.with(DeckState::zoom));
    let zoom_in = move |_| {
        deck.update(|d| {
            d.zoom_in();
        });
    };
    let zoom_out = move |_| {
        deck.update(|d| {
            d.zoom_out();
        });
    };

    view! {
        <section class="preview">
            <div class="preview__toolbar">
                <button
                    type="button"
                    class="icon-button"
                    title="Zoom out"
                    disabled=move || !deck.with(DeckState::can_zoom_out)
                    on:click=zoom_out
                >
                    "−"
                </button>
                <span class="preview__zoom">{zoom_label}</span>
                <button
                    type="button"
                    class="icon-button"
                    title="Zoom in"
                    disabled=move || !deck.with(DeckState::can_zoom_in)
                    on:click=zoom_in
                >
                    "+"
                </button>
            </div>
            <div class="preview__stage">
                {move || match status.get() {
                    DeckStatus::Loading => view! {
                        <div class="preview__placeholder">
                            <div class="spinner" aria-hidden="true"></div>
                            <span>"Loading slides..."</span>
                        </div>
                    }
                    .into_any(),
                    DeckStatus::ReadyEmpty => view! {
                        <div class="preview__placeholder">
                            <span>"No slides yet"</span>
                        </div>
                    }
                    .into_any(),
                    DeckStatus::ReadyWithContent => view! { <PreviewFrame/> }.into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn PreviewFrame() -> impl IntoView {
    let deck = expect_context::<RwSignal<DeckState>>();
    let content = Memo::new(move |_| deck.with(|d| d.current_slide().map(|s| s.content.clone()).unwrap_or_default()));
    let page = move || deck.with(DeckState::page_label).unwrap_or_default();

    view! {
        <div class="preview__canvas" style=move || deck.with(DeckState::canvas_style)>
            <iframe class="preview__frame" sandbox="" srcdoc=move || content.get() title="Slide preview"></iframe>
            <span class="preview__page caption">{page}</span>
        </div>
    }
}
