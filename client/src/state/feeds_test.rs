use super::*;

fn feed(id: &str, name: &str) -> Feed {
    Feed {
        id: id.to_owned(),
        name: name.to_owned(),
        url: format!("https://{id}.example/rss"),
        description: String::new(),
        updated_at: String::new(),
    }
}

fn loaded_state() -> FeedsState {
    let mut state = FeedsState { loading: true, ..FeedsState::default() };
    state.load(
        vec![feed("f1", "Tech"), feed("f2", "News")],
        vec![FollowedFeed { feed_id: "f1".to_owned() }],
    );
    state
}

// =============================================================
// Loading and membership merge
// =============================================================

#[test]
fn load_merges_follow_records_by_feed_id() {
    let state = loaded_state();
    assert!(!state.loading);
    assert_eq!(state.feeds.len(), 2);
    assert!(state.is_followed("f1"));
    assert!(!state.is_followed("f2"));
}

#[test]
fn directory_shows_both_feeds_with_only_f1_marked_following() {
    let state = loaded_state();
    let visible = state.visible();
    assert_eq!(visible.len(), 2);
    let marked: Vec<bool> = visible.iter().map(|f| state.is_followed(&f.id)).collect();
    assert_eq!(marked, vec![true, false]);
}

// =============================================================
// Filters
// =============================================================

#[test]
fn followed_filter_shows_only_f1() {
    let mut state = loaded_state();
    state.filter = FeedFilter::Followed;
    let visible = state.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "f1");
}

#[test]
fn search_is_case_insensitive_on_feed_name() {
    let mut state = loaded_state();
    state.search = "tech".to_owned();
    let visible = state.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Tech");
}

// =============================================================
// Optimistic follow reducer
// =============================================================

#[test]
fn toggling_unfollowed_feed_adds_before_confirmation() {
    let mut state = loaded_state();
    let action = state.toggle_follow("f2");
    assert_eq!(action, FollowAction::Followed("f2".to_owned()));
    assert!(state.is_followed("f2"));
}

#[test]
fn toggling_followed_feed_removes_before_confirmation() {
    let mut state = loaded_state();
    let action = state.toggle_follow("f1");
    assert_eq!(action, FollowAction::Unfollowed("f1".to_owned()));
    assert!(!state.is_followed("f1"));
}

#[test]
fn rollback_restores_membership_after_failed_follow() {
    let mut state = loaded_state();
    let action = state.toggle_follow("f2");
    state.rollback(&action);
    assert!(!state.is_followed("f2"));
}

#[test]
fn rollback_restores_membership_after_failed_unfollow() {
    let mut state = loaded_state();
    let action = state.toggle_follow("f1");
    state.rollback(&action);
    assert!(state.is_followed("f1"));
}

#[test]
fn created_feed_is_appended_and_marked_followed() {
    let mut state = loaded_state();
    state.add_feed(feed("f3", "Blogs"));
    assert_eq!(state.feeds.len(), 3);
    assert!(state.is_followed("f3"));
}

// =============================================================
// Dashboard helpers
// =============================================================

#[test]
fn followed_only_keeps_directory_order() {
    let state = loaded_state();
    let mine = followed_only(&state.feeds, &state.followed);
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, "f1");
}

#[test]
fn posts_for_filters_by_followed_feed_membership() {
    let state = loaded_state();
    let posts = vec![
        Post {
            id: "p1".to_owned(),
            title: "a".to_owned(),
            url: String::new(),
            description: String::new(),
            feed_id: "f1".to_owned(),
            published_at: String::new(),
        },
        Post {
            id: "p2".to_owned(),
            title: "b".to_owned(),
            url: String::new(),
            description: String::new(),
            feed_id: "f2".to_owned(),
            published_at: String::new(),
        },
    ];
    let mine = posts_for(&posts, &state.followed);
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, "p1");
}

#[test]
fn recently_updated_sorts_descending_and_truncates() {
    let mut older = feed("f1", "Tech");
    older.updated_at = "2026-08-01T00:00:00Z".to_owned();
    let mut newer = feed("f2", "News");
    newer.updated_at = "2026-08-20T00:00:00Z".to_owned();
    let mut newest = feed("f3", "Blogs");
    newest.updated_at = "2026-08-30T00:00:00Z".to_owned();

    let top = recently_updated(&[older, newer, newest], 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].id, "f3");
    assert_eq!(top[1].id, "f2");
}
