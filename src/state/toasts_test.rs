use super::*;

#[test]
fn push_returns_the_new_toast_id() {
    let mut state = ToastsState::default();
    let id = state.push(ToastKind::Success, "Signed in successfully");
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, id);
    assert_eq!(state.toasts[0].message, "Signed in successfully");
}

#[test]
fn dismiss_removes_exactly_the_given_id() {
    let mut state = ToastsState::default();
    let first = state.push(ToastKind::Info, "one");
    let second = state.push(ToastKind::Error, "two");
    assert!(state.dismiss(&first));
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_unknown_id_reports_false() {
    let mut state = ToastsState::default();
    state.push(ToastKind::Info, "one");
    assert!(!state.dismiss("no-such-id"));
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn dismiss_twice_is_harmless() {
    let mut state = ToastsState::default();
    let id = state.push(ToastKind::Info, "one");
    assert!(state.dismiss(&id));
    assert!(!state.dismiss(&id));
    assert!(state.toasts.is_empty());
}

#[test]
fn stack_evicts_oldest_past_the_cap() {
    let mut state = ToastsState::default();
    for n in 0..6 {
        state.push(ToastKind::Info, format!("toast {n}"));
    }
    assert_eq!(state.toasts.len(), 4);
    assert_eq!(state.toasts[0].message, "toast 2");
}
