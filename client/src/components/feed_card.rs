//! Card for one feed in the directory grid.

use leptos::prelude::*;
use models::Feed;

#[component]
pub fn FeedCard(feed: Feed, following: bool, on_toggle: Callback<String>) -> impl IntoView {
    let feed_id = feed.id.clone();
    let toggle_label = if following { "Unfollow" } else { "Follow" };
    let toggle_class = if following { "btn feed-card__toggle feed-card__toggle--secondary" } else { "btn btn--primary feed-card__toggle" };

    view! {
        <div class="feed-card">
            <div class="feed-card__header">
                <h2 class="feed-card__name">{feed.name}</h2>
                <Show when=move || following>
                    <span class="feed-card__badge">"Following"</span>
                </Show>
            </div>
            <p class="feed-card__description">{feed.description}</p>
            <a class="feed-card__visit" href=feed.url target="_blank" rel="noopener noreferrer">
                "Visit Feed"
            </a>
            <button class=toggle_class on:click=move |_| on_toggle.run(feed_id.clone())>
                {toggle_label}
            </button>
        </div>
    }
}
