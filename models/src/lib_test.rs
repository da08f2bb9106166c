use super::*;

#[test]
fn feed_deserializes_with_missing_optional_fields() {
    let feed: Feed =
        serde_json::from_str(r#"{"id":"f1","name":"Tech","url":"https://t.example/rss"}"#).unwrap();
    assert_eq!(feed.id, "f1");
    assert_eq!(feed.description, "");
    assert_eq!(feed.updated_at, "");
}

#[test]
fn feed_ignores_unknown_backend_fields() {
    let feed: Feed = serde_json::from_str(
        r#"{"id":"f1","name":"Tech","url":"u","created_at":"2026-01-01T00:00:00Z","user_id":"x"}"#,
    )
    .unwrap();
    assert_eq!(feed.name, "Tech");
}

#[test]
fn followed_feed_extracts_feed_id_from_full_join_record() {
    let follow: FollowedFeed = serde_json::from_str(
        r#"{"id":"ff1","feed_id":"f1","user_id":"u1","created_at":"2026-01-01T00:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(follow.feed_id, "f1");
}

#[test]
fn post_round_trips() {
    let post = Post {
        id: "p1".to_owned(),
        title: "Hello".to_owned(),
        url: "https://t.example/p1".to_owned(),
        description: "body".to_owned(),
        feed_id: "f1".to_owned(),
        published_at: "2026-08-01T12:00:00Z".to_owned(),
    };
    let json = serde_json::to_string(&post).unwrap();
    let back: Post = serde_json::from_str(&json).unwrap();
    assert_eq!(back, post);
}

#[test]
fn user_avatar_defaults_to_none() {
    let user: User = serde_json::from_str(r#"{"name":"Alice","email":"a@b.com"}"#).unwrap();
    assert_eq!(user.avatar, None);
}

#[test]
fn login_response_reads_token_field() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"opaque"}"#).unwrap();
    assert_eq!(resp.token, "opaque");
}
