//! Top navigation bar with the product name and language selector.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::language_selector::LanguageSelector;
use crate::i18n::Locale;

pub const PRODUCT_NAME: &str = "ppt-studio";

#[component]
pub fn Navbar() -> impl IntoView {
    let locale = expect_context::<Memo<Locale>>();
    let home = move || format!("/{}", locale.get().code());

    view! {
        <nav class="navbar">
            <A href=home attr:class="navbar__brand">
                {PRODUCT_NAME}
            </A>
            <div class="navbar__actions">
                <LanguageSelector/>
            </div>
        </nav>
    }
}
