use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = UiState::default();
    let first = state.push(NoticeLevel::Info, "one");
    let second = state.push(NoticeLevel::Error, "two");
    assert!(second > first);
    assert_eq!(state.notices.len(), 2);
}

#[test]
fn dismiss_removes_only_the_target_notice() {
    let mut state = UiState::default();
    let first = state.push(NoticeLevel::Success, "kept");
    let second = state.push(NoticeLevel::Error, "dropped");
    state.dismiss(second);
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].id, first);
}

#[test]
fn dismiss_of_unknown_id_is_a_no_op() {
    let mut state = UiState::default();
    state.push(NoticeLevel::Info, "kept");
    state.dismiss(99);
    assert_eq!(state.notices.len(), 1);
}

#[test]
fn levels_map_to_css_classes() {
    assert_eq!(NoticeLevel::Info.css_class(), "info");
    assert_eq!(NoticeLevel::Success.css_class(), "success");
    assert_eq!(NoticeLevel::Error.css_class(), "error");
}
