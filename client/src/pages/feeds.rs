//! Feed directory page with search, follow filter, and optimistic
//! follow/unfollow.
//!
//! DESIGN
//! ======
//! Follow toggles mutate state before the network round-trip. The reducer
//! returns the applied action; if the request then fails, the same action is
//! rolled back and a notification explains what happened. The card never
//! shows a spinner for a toggle.

use leptos::prelude::*;

use crate::components::feed_card::FeedCard;
use crate::components::navbar::Navbar;
use crate::components::notice_stack::notify;
use crate::state::feeds::{FeedFilter, FeedsState};
use crate::state::ui::{NoticeLevel, UiState};

#[cfg(feature = "hydrate")]
use crate::state::feeds::FollowAction;

#[component]
pub fn FeedsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let feeds = RwSignal::new(FeedsState::default());

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() || crate::session::get().is_none() {
            return;
        }
        fetched.set(true);
        feeds.update(|s| s.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let loaded = futures::future::try_join(
                crate::net::api::fetch_feeds(),
                crate::net::api::fetch_follows(),
            )
            .await;
            match loaded {
                Ok((all, follows)) => feeds.update(|s| s.load(all, follows)),
                Err(e) => {
                    feeds.update(|s| s.loading = false);
                    notify(ui, NoticeLevel::Error, format!("Feeds load failed: {e}"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = ui;
    });

    let on_toggle = Callback::new(move |feed_id: String| {
        let mut applied = None;
        feeds.update(|s| applied = Some(s.toggle_follow(&feed_id)));
        let Some(action) = applied else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match &action {
                FollowAction::Followed(id) => crate::net::api::follow(id).await,
                FollowAction::Unfollowed(id) => crate::net::api::unfollow(id).await,
            };
            if let Err(e) = result {
                feeds.update(|s| s.rollback(&action));
                notify(ui, NoticeLevel::Error, format!("Follow update failed: {e}"));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = action;
    });

    // Add-feed dialog state.
    let show_add = RwSignal::new(false);
    let on_add = move |_| show_add.set(true);
    let on_add_cancel = Callback::new(move |()| show_add.set(false));

    let filter_class = move |which: FeedFilter| {
        if feeds.get().filter == which {
            "btn feeds-page__filter feeds-page__filter--active"
        } else {
            "btn feeds-page__filter"
        }
    };

    view! {
        <div class="feeds-page">
            <Navbar/>
            <main class="feeds-page__body">
                <header class="feeds-page__header">
                    <h1>"Feed Directory"</h1>
                    <button class="btn btn--primary" on:click=on_add>
                        "+ Add Feed"
                    </button>
                </header>
                <div class="feeds-page__controls">
                    <input
                        class="feeds-page__search"
                        type="search"
                        placeholder="Search feeds..."
                        prop:value=move || feeds.get().search
                        on:input=move |ev| {
                            feeds.update(|s| s.search = event_target_value(&ev));
                        }
                    />
                    <button
                        class=move || filter_class(FeedFilter::All)
                        on:click=move |_| feeds.update(|s| s.filter = FeedFilter::All)
                    >
                        "All"
                    </button>
                    <button
                        class=move || filter_class(FeedFilter::Followed)
                        on:click=move |_| feeds.update(|s| s.filter = FeedFilter::Followed)
                    >
                        "Following"
                    </button>
                </div>
                <Show
                    when=move || !feeds.get().loading
                    fallback=move || view! { <p>"Loading feeds..."</p> }
                >
                    <Show
                        when=move || !feeds.get().visible().is_empty()
                        fallback=move || view! { <p class="feeds-page__empty">"No feeds match."</p> }
                    >
                        <div class="feeds-page__grid">
                            {move || {
                                let state = feeds.get();
                                state
                                    .visible()
                                    .into_iter()
                                    .map(|feed| {
                                        let following = state.is_followed(&feed.id);
                                        view! {
                                            <FeedCard feed=feed following=following on_toggle=on_toggle/>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
                <Show when=move || show_add.get()>
                    <AddFeedDialog feeds=feeds on_cancel=on_add_cancel/>
                </Show>
            </main>
        </div>
    }
}

/// Modal dialog for registering a new feed by name and URL.
#[component]
fn AddFeedDialog(feeds: RwSignal<FeedsState>, on_cancel: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let name = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let name_value = name.get().trim().to_owned();
        let url_value = url.get().trim().to_owned();
        if name_value.is_empty() || url_value.is_empty() {
            notify(ui, NoticeLevel::Info, "Enter both a name and a URL.");
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_feed(&name_value, &url_value).await {
                Ok(feed) => {
                    let feed_name = feed.name.clone();
                    feeds.update(|s| s.add_feed(feed));
                    notify(ui, NoticeLevel::Success, format!("Added {feed_name}"));
                }
                Err(e) => notify(ui, NoticeLevel::Error, format!("Add feed failed: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (name_value, url_value, feeds);
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Feed"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "URL"
                    <input
                        class="dialog__input"
                        type="url"
                        placeholder="https://example.com/rss"
                        prop:value=move || url.get()
                        on:input=move |ev| url.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Add"
                    </button>
                </div>
            </div>
        </div>
    }
}
