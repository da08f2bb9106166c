use super::*;

fn post(id: &str, title: &str, feed_id: &str) -> Post {
    Post {
        id: id.to_owned(),
        title: title.to_owned(),
        url: format!("https://example.com/{id}"),
        description: String::new(),
        feed_id: feed_id.to_owned(),
        published_at: String::new(),
    }
}

fn feed(id: &str, name: &str) -> Feed {
    Feed {
        id: id.to_owned(),
        name: name.to_owned(),
        url: String::new(),
        description: String::new(),
        updated_at: String::new(),
    }
}

fn loaded_state() -> PostsState {
    let mut state = PostsState { loading: true, ..PostsState::default() };
    state.load(
        vec![post("p1", "Rust 1.90 released", "f1"), post("p2", "Election night", "f2")],
        vec![feed("f1", "Tech"), feed("f2", "News"), feed("f3", "Silent")],
    );
    state
}

#[test]
fn load_drops_feeds_without_posts() {
    let state = loaded_state();
    assert!(!state.loading);
    let ids: Vec<&str> = state.feeds.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["f1", "f2"]);
}

#[test]
fn feed_name_falls_back_for_unknown_ids() {
    let state = loaded_state();
    assert_eq!(state.feed_name("f1"), "Tech");
    assert_eq!(state.feed_name("missing"), "Unknown Feed");
}

#[test]
fn search_matches_title_or_feed_name() {
    let mut state = loaded_state();
    state.search = "rust".to_owned();
    assert_eq!(state.visible().len(), 1);

    state.search = "news".to_owned();
    let by_feed = state.visible();
    assert_eq!(by_feed.len(), 1);
    assert_eq!(by_feed[0].id, "p2");
}

#[test]
fn feed_selector_narrows_to_one_feed() {
    let mut state = loaded_state();
    state.selected_feed = Some("f1".to_owned());
    let visible = state.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "p1");
}

#[test]
fn no_selector_and_empty_search_shows_everything() {
    let state = loaded_state();
    assert_eq!(state.visible().len(), 2);
}
