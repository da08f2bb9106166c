//! Feed-directory state: the public feed list, the followed-id set, and
//! local filters.
//!
//! DESIGN
//! ======
//! The followed-id set must always reflect the last acknowledged server
//! state plus any optimistic updates not yet contradicted by an error.
//! Follow toggles therefore run as a reducer step: `toggle_follow` applies
//! the optimistic mutation and returns the [`FollowAction`] to replay
//! against the backend; `rollback` undoes it when that request fails.

#[cfg(test)]
#[path = "feeds_test.rs"]
mod feeds_test;

use std::collections::HashSet;

use models::{Feed, FollowedFeed, Post};

/// Directory filter matching the All/Followed toggle group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedFilter {
    #[default]
    All,
    Followed,
}

/// An optimistic follow mutation awaiting backend confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FollowAction {
    /// The feed id was added to the followed set.
    Followed(String),
    /// The feed id was removed from the followed set.
    Unfollowed(String),
}

/// Feed-directory state backed by `GET /v1/feeds` + `GET /v1/feed_follows`.
#[derive(Clone, Debug, Default)]
pub struct FeedsState {
    pub feeds: Vec<Feed>,
    pub followed: HashSet<String>,
    pub search: String,
    pub filter: FeedFilter,
    pub loading: bool,
}

impl FeedsState {
    /// Replace contents with a fresh parallel-fetch result.
    pub fn load(&mut self, feeds: Vec<Feed>, follows: Vec<FollowedFeed>) {
        self.feeds = feeds;
        self.followed = follows.into_iter().map(|f| f.feed_id).collect();
        self.loading = false;
    }

    #[must_use]
    pub fn is_followed(&self, feed_id: &str) -> bool {
        self.followed.contains(feed_id)
    }

    /// Optimistically flip follow membership for `feed_id`, before any
    /// network confirmation, and return the action to send to the backend.
    pub fn toggle_follow(&mut self, feed_id: &str) -> FollowAction {
        if self.followed.remove(feed_id) {
            FollowAction::Unfollowed(feed_id.to_owned())
        } else {
            self.followed.insert(feed_id.to_owned());
            FollowAction::Followed(feed_id.to_owned())
        }
    }

    /// Undo an optimistic mutation after the backend rejected it.
    pub fn rollback(&mut self, action: &FollowAction) {
        match action {
            FollowAction::Followed(feed_id) => {
                self.followed.remove(feed_id);
            }
            FollowAction::Unfollowed(feed_id) => {
                self.followed.insert(feed_id.clone());
            }
        }
    }

    /// Append a freshly created feed; the backend auto-follows it for the
    /// creating user.
    pub fn add_feed(&mut self, feed: Feed) {
        self.followed.insert(feed.id.clone());
        self.feeds.push(feed);
    }

    /// Feeds passing the name search and the All/Followed filter.
    #[must_use]
    pub fn visible(&self) -> Vec<Feed> {
        let needle = self.search.to_lowercase();
        self.feeds
            .iter()
            .filter(|feed| feed.name.to_lowercase().contains(&needle))
            .filter(|feed| self.filter == FeedFilter::All || self.is_followed(&feed.id))
            .cloned()
            .collect()
    }
}

/// Feeds the user follows, in directory order.
#[must_use]
pub fn followed_only(feeds: &[Feed], followed: &HashSet<String>) -> Vec<Feed> {
    feeds.iter().filter(|feed| followed.contains(&feed.id)).cloned().collect()
}

/// Posts belonging to followed feeds.
#[must_use]
pub fn posts_for(posts: &[Post], followed: &HashSet<String>) -> Vec<Post> {
    posts.iter().filter(|post| followed.contains(&post.feed_id)).cloned().collect()
}

/// The `limit` most recently refreshed feeds. `updated_at` is RFC 3339 UTC,
/// so lexicographic order is chronological.
#[must_use]
pub fn recently_updated(feeds: &[Feed], limit: usize) -> Vec<Feed> {
    let mut sorted = feeds.to_vec();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    sorted.truncate(limit);
    sorted
}
