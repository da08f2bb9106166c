//! Saved-posts state and its local filters.
//!
//! DESIGN
//! ======
//! Posts and feeds arrive from two parallel reads; feeds are narrowed to
//! those that actually have posts so the per-feed selector never offers an
//! empty choice. Filtering is purely local over the in-memory lists.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use models::{Feed, Post};

/// Saved-posts state backed by `GET /v1/posts` + `GET /v1/feeds`.
#[derive(Clone, Debug, Default)]
pub struct PostsState {
    pub posts: Vec<Post>,
    /// Feeds that have at least one saved post.
    pub feeds: Vec<Feed>,
    pub search: String,
    /// Feed id to narrow to; `None` means all feeds.
    pub selected_feed: Option<String>,
    pub loading: bool,
}

impl PostsState {
    /// Replace contents with a fresh parallel-fetch result.
    pub fn load(&mut self, posts: Vec<Post>, feeds: Vec<Feed>) {
        self.feeds = feeds
            .into_iter()
            .filter(|feed| posts.iter().any(|post| post.feed_id == feed.id))
            .collect();
        self.posts = posts;
        self.loading = false;
    }

    /// Display name for a post's feed, or a placeholder for unknown ids.
    #[must_use]
    pub fn feed_name(&self, feed_id: &str) -> String {
        self.feeds
            .iter()
            .find(|feed| feed.id == feed_id)
            .map_or_else(|| "Unknown Feed".to_owned(), |feed| feed.name.clone())
    }

    /// Posts matching the title/feed-name search and the feed selector.
    #[must_use]
    pub fn visible(&self) -> Vec<Post> {
        let needle = self.search.to_lowercase();
        self.posts
            .iter()
            .filter(|post| {
                post.title.to_lowercase().contains(&needle)
                    || self.feed_name(&post.feed_id).to_lowercase().contains(&needle)
            })
            .filter(|post| {
                self.selected_feed.as_deref().is_none_or(|selected| post.feed_id == selected)
            })
            .cloned()
            .collect()
    }
}
