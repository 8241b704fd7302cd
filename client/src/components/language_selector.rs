//! Locale dropdown in the navbar.
//!
//! Choosing a language replaces the current history entry with the same path
//! under the new locale prefix.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::i18n::{Locale, path_for_locale};

#[component]
pub fn LanguageSelector() -> impl IntoView {
    let locale = expect_context::<Memo<Locale>>();
    let location = use_location();
    let navigate = use_navigate();
    let open = RwSignal::new(false);

    let choose = move |next: Locale| {
        open.set(false);
        if next == locale.get_untracked() {
            return;
        }
        let path = path_for_locale(&location.pathname.get_untracked(), next);
        navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <div class="language-selector">
            <button
                type="button"
                class="language-selector__trigger"
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <svg viewBox="0 0 20 20" aria-hidden="true">
                    <circle cx="10" cy="10" r="7.5" />
                    <path d="M2.5 10 H17.5" />
                    <path d="M10 2.5 C7 5 7 15 10 17.5 C13 15 13 5 10 2.5" />
                </svg>
                <span class="language-selector__current">{move || locale.get().display_name()}</span>
                <span class="language-selector__chevron" aria-hidden="true">"▾"</span>
            </button>
            <ul class="language-selector__menu" role="listbox" hidden=move || !open.get()>
                {Locale::all()
                    .iter()
                    .copied()
                    .map(|option| {
                        let choose = choose.clone();
                        view! {
                            <li
                                class="language-selector__item"
                                class:language-selector__item--active=move || locale.get() == option
                                role="option"
                                aria-selected=move || (locale.get() == option).to_string()
                                on:click=move |_| choose(option)
                            >
                                <span class="language-selector__name">{option.display_name()}</span>
                                <span class="language-selector__check" aria-hidden="true">
                                    {move || (locale.get() == option).then_some("✓")}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
