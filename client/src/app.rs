//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    ParamSegment,
    components::{Route, Router, Routes},
};

use crate::pages::studio::StudioPage;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `<html lang>` is set per locale by the studio page.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Studio state is route-scoped and provided by `StudioPage`; the root only
/// sets up meta tags and routing. `/` itself is redirected by the server.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/studio.css"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=ParamSegment("locale") view=StudioPage/>
            </Routes>
        </Router>
    }
}
