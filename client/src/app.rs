//! Root application component with routing, context providers, and the
//! client-side route guard.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::notice_stack::NoticeStack;
use crate::pages::{
    dashboard::DashboardPage, feeds::FeedsPage, login::LoginPage, posts::PostsPage,
    register::RegisterPage, settings::SettingsPage,
};
use crate::state::{session::SessionState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="api-base" content=crate::net::api::configured_api_base()/>
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
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/rssdeck.css"/>
        <Title text="RSS Deck"/>
        <Meta name="description" content="Follow RSS feeds and read saved posts"/>

        <Router>
            <RouteGuard/>
            <NoticeStack/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("feeds") view=FeedsPage/>
                <Route path=StaticSegment("posts") view=PostsPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
            </Routes>
        </Router>
    }
}

/// Redirects away from pages the current session may not see.
///
/// Runs on every navigation. Signed-out visitors are sent to the login page
/// for anything outside the public allow-list, and signed-in visitors are
/// bounced off the login page back home. The server enforces the same policy
/// before HTML is ever served, so this only covers client-side transitions.
#[component]
fn RouteGuard() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        let has_token = crate::session::get().is_some();
        let decision = models::guard::decide(&path, has_token);
        if let Some(target) = models::guard::redirect_target(decision) {
            navigate(target, NavigateOptions::default());
        }
    });
}
