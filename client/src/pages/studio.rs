//! Studio page: the three-pane slide editing workspace.
//!
//! ARCHITECTURE
//! ============
//! This route owns all studio state for its rendered lifetime. It creates the
//! layout, deck, and composer signals, provides them (plus the active locale
//! and the workspace element) as context, and composes the panes in a CSS grid
//! whose column widths come from `LayoutState`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The deck is fetched from `GET /api/slides` once, after hydration. During
//! SSR the page renders its loading state; a failed fetch is logged and shown
//! as an empty deck.

use leptos::prelude::*;
use leptos_meta::{Html, Title};
use leptos_router::hooks::use_params_map;

use crate::components::assistant_panel::AssistantPanel;
use crate::components::navbar::Navbar;
use crate::components::notice_dialog::NoticeDialog;
use crate::components::preview_canvas::PreviewCanvas;
use crate::components::resize_handle::LayoutContainer;
use crate::components::slide_navigator::SlideNavigator;
use crate::i18n::locale_or_default;
use crate::state::composer::ComposerState;
use crate::state::deck::DeckState;
use crate::state::layout::LayoutState;

pub const PAGE_TITLE: &str = "Slide Studio";

#[component]
pub fn StudioPage() -> impl IntoView {
    let params = use_params_map();
    let locale = Memo::new(move |_| locale_or_default(params.read().get("locale").as_deref()));

    let layout = RwSignal::new(LayoutState::default());
    let deck = RwSignal::new(DeckState::default());
    let composer = RwSignal::new(ComposerState::default());
    let workspace = NodeRef::<leptos::html::Div>::new();

    provide_context(locale);
    provide_context(layout);
    provide_context(deck);
    provide_context(composer);
    provide_context(LayoutContainer(workspace));

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_slides().await {
                    Ok(slides) => deck.update(|d| d.finish_loading(slides)),
                    Err(e) => {
                        leptos::logging::warn!("failed to load slides: {e}");
                        deck.update(DeckState::fail_loading);
                    }
                }
            });
        });
    }

    let columns = move || format!("grid-template-columns: {};", layout.with(LayoutState::grid_template_columns));

    view! {
        <Html attr:lang=move || locale.get().code()/>
        <Title text=PAGE_TITLE/>
        <div class="studio">
            <Navbar/>
            <div class="studio__workspace" node_ref=workspace style=columns>
                <AssistantPanel/>
                <SlideNavigator/>
                <PreviewCanvas/>
            </div>
            <NoticeDialog/>
        </div>
    }
}
