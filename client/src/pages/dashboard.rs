//! Dashboard page with account stats and recently updated feeds.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads feeds, follows, and
//! posts in parallel; if any one fetch fails the whole load reports a single
//! error instead of rendering partial numbers.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::ui::UiState;
use crate::util::relative_time::format_updated;

#[cfg(feature = "hydrate")]
use crate::components::notice_stack::notify;
#[cfg(feature = "hydrate")]
use crate::state::feeds::{followed_only, posts_for, recently_updated};
#[cfg(feature = "hydrate")]
use crate::state::ui::NoticeLevel;

/// How many feeds the "Recently Updated" panel shows.
const RECENT_LIMIT: usize = 3;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let feed_count = RwSignal::new(0usize);
    let following_count = RwSignal::new(0usize);
    let saved_count = RwSignal::new(0usize);
    let recent = RwSignal::new(Vec::<models::Feed>::new());
    let loading = RwSignal::new(true);

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() || crate::session::get().is_none() {
            return;
        }
        fetched.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let loaded = futures::future::try_join3(
                crate::net::api::fetch_feeds(),
                crate::net::api::fetch_follows(),
                crate::net::api::fetch_posts(),
            )
            .await;
            match loaded {
                Ok((feeds, follows, posts)) => {
                    let followed = follows
                        .into_iter()
                        .map(|f| f.feed_id)
                        .collect::<std::collections::HashSet<_>>();
                    feed_count.set(feeds.len());
                    following_count.set(followed_only(&feeds, &followed).len());
                    saved_count.set(posts_for(&posts, &followed).len());
                    recent.set(recently_updated(&feeds, RECENT_LIMIT));
                }
                Err(e) => notify(ui, NoticeLevel::Error, format!("Dashboard load failed: {e}")),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ui, loading);
    });

    view! {
        <div class="dashboard-page">
            <Navbar/>
            <main class="dashboard-page__body">
                <h1>"Dashboard"</h1>
                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p>"Loading..."</p> }
                >
                    <div class="stat-cards">
                        <a class="stat-card" href="/feeds">
                            <span class="stat-card__value">{move || feed_count.get()}</span>
                            <span class="stat-card__label">"Feeds in directory"</span>
                        </a>
                        <a class="stat-card" href="/feeds">
                            <span class="stat-card__value">{move || following_count.get()}</span>
                            <span class="stat-card__label">"Following"</span>
                        </a>
                        <a class="stat-card" href="/posts">
                            <span class="stat-card__value">{move || saved_count.get()}</span>
                            <span class="stat-card__label">"Saved posts"</span>
                        </a>
                    </div>
                    <section class="dashboard-page__recent">
                        <h2>"Recently Updated"</h2>
                        <Show
                            when=move || !recent.get().is_empty()
                            fallback=move || view! { <p>"No feeds yet. Visit the directory to follow some."</p> }
                        >
                            <ul class="recent-list">
                                {move || {
                                    recent
                                        .get()
                                        .into_iter()
                                        .map(|feed| {
                                            view! {
                                                <li class="recent-list__item">
                                                    <a href=feed.url.clone() target="_blank" rel="noopener noreferrer">
                                                        {feed.name.clone()}
                                                    </a>
                                                    <span class="recent-list__when">
                                                        {format_updated(&feed.updated_at)}
                                                    </span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </Show>
                    </section>
                </Show>
            </main>
        </div>
    }
}
