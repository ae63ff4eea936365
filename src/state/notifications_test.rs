use super::*;

fn item(id: i64, read: bool) -> Notification {
    Notification { id, message: format!("note {id}"), read, timestamp: None }
}

#[test]
fn set_items_clears_loading_and_error() {
    let mut state = NotificationsState { loading: true, error: Some("x".to_owned()), ..Default::default() };
    state.set_items(vec![item(1, false)]);
    assert!(state.loaded);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn mark_read_decrements_count() {
    let mut state = NotificationsState { unread_count: 2, ..Default::default() };
    state.set_items(vec![item(1, false), item(2, false)]);
    assert!(state.mark_read(1));
    assert_eq!(state.unread_count, 1);
    assert!(state.items[0].read);
}

#[test]
fn mark_read_is_idempotent_per_item() {
    let mut state = NotificationsState { unread_count: 1, ..Default::default() };
    state.set_items(vec![item(1, false)]);
    assert!(state.mark_read(1));
    assert!(!state.mark_read(1));
    assert_eq!(state.unread_count, 0);
}

#[test]
fn mark_read_never_drives_count_below_zero() {
    let mut state = NotificationsState::default();
    state.set_items(vec![item(1, false)]);
    assert!(state.mark_read(1));
    assert_eq!(state.unread_count, 0);
}

#[test]
fn mark_read_unknown_id_changes_nothing() {
    let mut state = NotificationsState { unread_count: 1, ..Default::default() };
    state.set_items(vec![item(1, false)]);
    assert!(!state.mark_read(42));
    assert_eq!(state.unread_count, 1);
}
