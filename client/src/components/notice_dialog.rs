//! Modal notice for non-fatal problems (e.g. missing speech recognition).

use leptos::prelude::*;

use crate::state::composer::ComposerState;

#[component]
pub fn NoticeDialog() -> impl IntoView {
    let composer = expect_context::<RwSignal<ComposerState>>();
    let notice = move || composer.with(ComposerState::notice);
    let dismiss = move |_| composer.update(ComposerState::dismiss_notice);

    view! {
        <Show when=move || notice().is_some()>
            <div class="notice-dialog__backdrop" on:click=dismiss>
                <div
                    class="notice-dialog"
                    role="alertdialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <p class="notice-dialog__message">{move || notice().unwrap_or_default()}</p>
                    <button type="button" class="notice-dialog__ok" on:click=dismiss>
                        "OK"
                    </button>
                </div>
            </div>
        </Show>
    }
}
