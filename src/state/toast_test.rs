use super::*;

#[test]
fn toast_starts_hidden() {
    let toast = ToastState::default();
    assert!(!toast.is_visible());
    assert!(!toast.is_error);
    assert_eq!(toast.seq, 0);
}

#[test]
fn show_success_sets_message() {
    let mut toast = ToastState::default();
    toast.show_success("Voyage created successfully");
    assert!(toast.is_visible());
    assert!(!toast.is_error);
    assert_eq!(toast.message.as_deref(), Some("Voyage created successfully"));
}

#[test]
fn show_error_marks_error() {
    let mut toast = ToastState::default();
    toast.show_error("Error creating voyage");
    assert!(toast.is_visible());
    assert!(toast.is_error);
}

#[test]
fn dismiss_clears_message() {
    let mut toast = ToastState::default();
    toast.show_error("boom");
    toast.dismiss();
    assert!(!toast.is_visible());
    assert!(!toast.is_error);
}

#[test]
fn seq_distinguishes_stale_timers() {
    let mut toast = ToastState::default();
    toast.show_success("first");
    let stale_seq = toast.seq;
    toast.show_error("second");
    assert_ne!(toast.seq, stale_seq);

    // A timer captured for "first" must not dismiss "second".
    if toast.seq == stale_seq {
        toast.dismiss();
    }
    assert!(toast.is_visible());
    assert_eq!(toast.message.as_deref(), Some("second"));
}
