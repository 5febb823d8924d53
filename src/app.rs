//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::voyages::VoyagesPage;
use crate::state::cache::QueryCache;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides the shared query cache and toast state and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The explicit read cache and the single toast slot, injectable so
    // tests and child components see the same instances.
    let cache = RwSignal::new(QueryCache::default());
    let toast = RwSignal::new(ToastState::default());
    provide_context(cache);
    provide_context(toast);

    view! {
        <Stylesheet id="leptos" href="/pkg/voyages-client.css"/>
        <Title text="Voyages"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=VoyagesPage/>
            </Routes>
        </Router>
    }
}
