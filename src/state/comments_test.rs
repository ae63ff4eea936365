use super::*;

fn comment(id: i64, text: &str) -> Comment {
    Comment { id, author: None, text: text.to_owned(), created_at: None }
}

#[test]
fn set_items_clears_loading() {
    let mut state = CommentsState { loading: true, ..Default::default() };
    state.set_items(vec![comment(1, "first")]);
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn append_keeps_thread_order() {
    let mut state = CommentsState::default();
    state.set_items(vec![comment(1, "first")]);
    state.append(comment(2, "second"));
    let texts: Vec<&str> = state.items.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second"]);
}

#[test]
fn append_clears_a_stale_error() {
    let mut state = CommentsState::default();
    state.set_error("Could not post comment");
    state.append(comment(1, "retried"));
    assert!(state.error.is_none());
}
