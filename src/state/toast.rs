//! Transient toast notification state.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// A single transient notification: success or error, one at a time.
///
/// `seq` increments on every `show_*` so an auto-dismiss timer started for
/// an earlier toast can tell it has been superseded and must not clear the
/// newer one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: Option<String>,
    pub is_error: bool,
    pub seq: u64,
}

impl ToastState {
    /// Show a success notification, replacing any current toast.
    pub fn show_success(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.is_error = false;
        self.seq += 1;
    }

    /// Show an error notification, replacing any current toast.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.is_error = true;
        self.seq += 1;
    }

    /// Clear the toast (user dismissal or display timeout).
    pub fn dismiss(&mut self) {
        self.message = None;
        self.is_error = false;
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}
