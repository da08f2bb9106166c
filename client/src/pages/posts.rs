//! Saved-posts reader with title search and a per-feed filter.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::post_card::PostCard;
use crate::state::posts::PostsState;
use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
use crate::components::notice_stack::notify;
#[cfg(feature = "hydrate")]
use crate::state::ui::NoticeLevel;

#[component]
pub fn PostsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let posts = RwSignal::new(PostsState::default());

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() || crate::session::get().is_none() {
            return;
        }
        fetched.set(true);
        posts.update(|s| s.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let loaded = futures::future::try_join(
                crate::net::api::fetch_posts(),
                crate::net::api::fetch_feeds(),
            )
            .await;
            match loaded {
                Ok((items, feeds)) => posts.update(|s| s.load(items, feeds)),
                Err(e) => {
                    posts.update(|s| s.loading = false);
                    notify(ui, NoticeLevel::Error, format!("Posts load failed: {e}"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = ui;
    });

    let on_feed_select = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        posts.update(|s| {
            s.selected_feed = if value.is_empty() { None } else { Some(value) };
        });
    };

    view! {
        <div class="posts-page">
            <Navbar/>
            <main class="posts-page__body">
                <h1>"Saved Posts"</h1>
                <div class="posts-page__controls">
                    <input
                        class="posts-page__search"
                        type="search"
                        placeholder="Search posts..."
                        prop:value=move || posts.get().search
                        on:input=move |ev| {
                            posts.update(|s| s.search = event_target_value(&ev));
                        }
                    />
                    <select class="posts-page__feed-select" on:change=on_feed_select>
                        <option value="">"All feeds"</option>
                        {move || {
                            posts
                                .get()
                                .feeds
                                .into_iter()
                                .map(|feed| {
                                    view! { <option value=feed.id.clone()>{feed.name.clone()}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>
                <Show
                    when=move || !posts.get().loading
                    fallback=move || view! { <p>"Loading posts..."</p> }
                >
                    <Show
                        when=move || !posts.get().visible().is_empty()
                        fallback=move || {
                            view! {
                                <p class="posts-page__empty">
                                    "No posts yet. Follow some feeds and check back."
                                </p>
                            }
                        }
                    >
                        <div class="posts-page__list">
                            {move || {
                                let state = posts.get();
                                state
                                    .visible()
                                    .into_iter()
                                    .map(|post| {
                                        let feed_name = state.feed_name(&post.feed_id);
                                        view! { <PostCard post=post feed_name=feed_name/> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </main>
        </div>
    }
}
