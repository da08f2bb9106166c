//! Card for one saved post in the reader list.

use leptos::prelude::*;
use models::Post;

#[component]
pub fn PostCard(post: Post, feed_name: String) -> impl IntoView {
    view! {
        <div class="post-card">
            <div class="post-card__header">
                <h2 class="post-card__title">
                    <a href=post.url target="_blank" rel="noopener noreferrer">
                        {post.title}
                    </a>
                </h2>
                <span class="post-card__feed">{feed_name}</span>
            </div>
            <p class="post-card__description">{post.description}</p>
            <div class="post-card__published">"Published: " {post.published_at}</div>
        </div>
    }
}
