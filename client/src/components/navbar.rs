//! Top navigation bar for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the current user's summary on mount (no caching layer; every
//! page load re-fetches, per the product's data model) and owns the logout
//! action, which clears the cookie store and returns to the login screen.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::SessionState;

const NAV_LINKS: &[(&str, &str)] =
    &[("/", "Home"), ("/feeds", "Feeds"), ("/posts", "Posts"), ("/settings", "Settings")];

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() {
            return;
        }
        fetched.set(true);
        #[cfg(feature = "hydrate")]
        {
            if crate::session::get().is_none() {
                session.update(|s| s.loading = false);
                return;
            }
            session.update(|s| s.loading = true);
            leptos::task::spawn_local(async move {
                let user = crate::net::api::fetch_me().await;
                if user.is_none() {
                    log::warn!("failed to fetch user summary");
                }
                session.update(|s| {
                    s.user = user;
                    s.loading = false;
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        session.update(|s| s.loading = false);
    });

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            crate::session::clear();
            session.update(|s| s.user = None);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    let pathname = move || location.pathname.get();

    view! {
        <header class="navbar">
            <a href="/" class="navbar__logo">
                "RSS Deck"
            </a>
            <nav class="navbar__links">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        let href = *href;
                        let class = move || {
                            if pathname() == href {
                                "navbar__link navbar__link--active"
                            } else {
                                "navbar__link"
                            }
                        };
                        view! {
                            <a href=href class=class>
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <span class="navbar__spacer"></span>
            <Show when=move || session.get().signed_in()>
                {move || {
                    session
                        .get()
                        .user
                        .map(|user| {
                            let initial = user.name.chars().next().unwrap_or('?').to_string();
                            view! {
                                <span class="navbar__identity">
                                    {match user.avatar {
                                        Some(src) => {
                                            view! {
                                                <img class="navbar__avatar" src=src alt=user.name.clone()/>
                                            }
                                                .into_any()
                                        }
                                        None => {
                                            view! { <span class="navbar__avatar-fallback">{initial}</span> }
                                                .into_any()
                                        }
                                    }}
                                    <span class="navbar__name">{user.name}</span>
                                    <span class="navbar__email">{user.email}</span>
                                </span>
                            }
                        })
                }}
            </Show>
            <button class="btn navbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
