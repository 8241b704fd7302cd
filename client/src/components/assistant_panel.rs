//! Left column: AI copilot chat with source files and the prompt composer.
//!
//! ARCHITECTURE
//! ============
//! All state lives in `ComposerState`; this component only wires DOM events
//! to its intent methods and executes the `DictationCommand` returned by the
//! microphone toggle against the browser recognizer.
//!
//! The chat history and the send button are static until a generation
//! backend exists.

use leptos::prelude::*;

use crate::components::resize_handle::ResizeHandle;
use crate::i18n::Locale;
use crate::state::composer::{ComposerState, DictationCommand, GenerationMode, UploadedFile};
use crate::state::layout::{DragHandle, LayoutState};
use crate::util::files::format_file_size;
use crate::util::speech::{self, Dictation};

#[component]
pub fn AssistantPanel() -> impl IntoView {
    let composer = expect_context::<RwSignal<ComposerState>>();
    let has_files = move || composer.with(|c| !c.files().is_empty());

    view! {
        <section class="panel assistant">
            <header class="assistant__header">
                <h2 class="assistant__title">"AI Copilot"</h2>
                <button type="button" class="icon-button" title="More">
                    <svg viewBox="0 0 20 20" aria-hidden="true">
                        <circle cx="4.5" cy="10" r="1.5" />
                        <circle cx="10" cy="10" r="1.5" />
                        <circle cx="15.5" cy="10" r="1.5" />
                    </svg>
                </button>
            </header>

            <Show when=has_files>
                <SourceContext/>
            </Show>

            <div class="assistant__chat">
                <div class="bubble bubble--user">"Create a slide summarizing the document."</div>
                <div class="bubble bubble--ai">
                    "I've analyzed the attached sources. Here is a summary slide covering the key metrics."
                </div>
            </div>

            <Composer/>
            <ResizeHandle handle=DragHandle::Left/>
        </section>
    }
}

#[component]
fn SourceContext() -> impl IntoView {
    let composer = expect_context::<RwSignal<ComposerState>>();
    let files = move || composer.with(|c| c.files().to_vec());

    view! {
        <div class="assistant__sources">
            <span class="caption">"Source Context"</span>
            <For each=files key=|file| file.id.clone() children=move |file| view! { <FileCard file/> }/>
        </div>
    }
}

#[component]
fn FileCard(file: UploadedFile) -> impl IntoView {
    let composer = expect_context::<RwSignal<ComposerState>>();
    let id = file.id.clone();
    let remove = move |_| {
        composer.update(|c| {
            c.remove_file(&id);
        });
    };

    view! {
        <div class="file-card" title=file.name.clone()>
            <svg class="file-card__icon" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M5 2.5 H11.5 L15 6 V17.5 H5 Z" />
                <path d="M11.5 2.5 V6 H15" />
            </svg>
            <div class="file-card__meta">
                <span class="file-card__name">{file.name.clone()}</span>
                <span class="file-card__size">{format_file_size(file.size)}</span>
            </div>
            <button type="button" class="icon-button file-card__delete" title="Remove" on:click=remove>
                <svg viewBox="0 0 20 20" aria-hidden="true">
                    <path d="M4 6 H16" />
                    <path d="M8 6 V4 H12 V6" />
                    <path d="M6 6 L7 17 H13 L14 6" />
                </svg>
            </button>
        </div>
    }
}

/// Prompt input box with mode tabs and attach / dictate / send tools.
#[component]
fn Composer() -> impl IntoView {
    let composer = expect_context::<RwSignal<ComposerState>>();
    let layout = expect_context::<RwSignal<LayoutState>>();
    let locale = expect_context::<Memo<Locale>>();
    let dictation = StoredValue::new_local(None::<Dictation>);

    let height_style = move || format!("height: {:.0}px;", layout.with(LayoutState::input_area_height));
    let recording = move || composer.with(ComposerState::is_recording);

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(list) = input.files() {
                let picked = crate::util::files::uploaded_files_from_list(&list);
                composer.update(|c| c.add_files(picked));
            }
            // Allow picking the same file again after removing it.
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_mic = move |_| {
        let available = speech::is_supported();
        match composer.try_update(|c| c.toggle_recording(available)) {
            Some(DictationCommand::Start) => {
                // The previous session has ended; release it before starting anew.
                dictation.set_value(None);
                let started = Dictation::start(
                    locale.get_untracked().speech_lang(),
                    move |transcript| composer.update(|c| c.append_transcript(&transcript)),
                    move || composer.update(ComposerState::recording_ended),
                );
                match started {
                    Ok(session) => dictation.set_value(Some(session)),
                    Err(e) => {
                        leptos::logging::warn!("dictation failed to start: {e}");
                        composer.update(ComposerState::recording_ended);
                    }
                }
            }
            Some(DictationCommand::Stop) => dictation.with_value(|session| {
                if let Some(session) = session {
                    session.stop();
                }
            }),
            Some(DictationCommand::ShowNotice) | None => {}
        }
    };

    on_cleanup(move || dictation.set_value(None));

    view! {
        <div class="composer" style=height_style>
            <ResizeHandle handle=DragHandle::Input/>
            <textarea
                class="composer__input"
                placeholder="Ask AI to edit..."
                prop:value=move || composer.with(|c| c.input().to_owned())
                on:input=move |ev| composer.update(|c| c.set_input(event_target_value(&ev)))
            ></textarea>
            <div class="composer__toolbar">
                <div class="mode-tabs" role="tablist">
                    {GenerationMode::ALL
                        .into_iter()
                        .map(|mode| {
                            let selected = move || composer.with(|c| c.mode() == mode);
                            view! {
                                <button
                                    type="button"
                                    role="tab"
                                    class="mode-tabs__tab"
                                    class:mode-tabs__tab--active=selected
                                    aria-selected=move || selected().to_string()
                                    data-mode=mode.as_str()
                                    on:click=move |_| composer.update(|c| c.set_mode(mode))
                                >
                                    {mode.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="composer__tools">
                    <label class="icon-button" title="Attach files">
                        <input type="file" multiple class="visually-hidden" on:change=on_files/>
                        <svg viewBox="0 0 20 20" aria-hidden="true">
                            <path d="M13.5 6 L7.5 12 C6.5 13 7.5 14.5 8.5 13.5 L15 7 C16.5 5.5 14.5 3 12.5 4.5 L6 11 C3.5 13.5 7 17 9.5 14.5 L15 9" />
                        </svg>
                    </label>
                    <button
                        type="button"
                        class="icon-button"
                        class:icon-button--recording=recording
                        title=move || if recording() { "Stop dictation" } else { "Dictate" }
                        aria-pressed=move || recording().to_string()
                        on:click=on_mic
                    >
                        <svg viewBox="0 0 20 20" aria-hidden="true">
                            <rect x="7.5" y="2.5" width="5" height="9" rx="2.5" />
                            <path d="M4.5 9.5 C4.5 13 7 15 10 15 C13 15 15.5 13 15.5 9.5" />
                            <path d="M10 15 V17.5" />
                        </svg>
                    </button>
                    <button type="button" class="icon-button icon-button--primary" title="Send">
                        <svg viewBox="0 0 20 20" aria-hidden="true">
                            <path d="M3 10 L17 3 L13 17 L10 11 Z" />
                        </svg>
                    </button>
                </div>
            </div>
        </div>
    }
}
