//! Outcome handlers for the two write operations.
//!
//! These are plain functions over the state structs so the
//! invalidate-exactly-once and draft-preservation rules stay testable
//! without a DOM; the components call them from inside signal updates.

#[cfg(test)]
#[path = "mutations_test.rs"]
mod mutations_test;

use super::cache::{QueryCache, QueryKey};
use super::form::VoyageDraft;
use super::toast::ToastState;

/// A voyage was created: stale the list, clear the draft, announce success.
/// The caller closes the creation panel.
pub fn on_create_success(cache: &mut QueryCache, draft: &mut VoyageDraft, toast: &mut ToastState) {
    cache.invalidate(QueryKey::Voyages);
    draft.reset();
    toast.show_success("Voyage created successfully");
}

/// A create failed: announce the error and keep the draft intact so the
/// user can retry without re-entering data.
pub fn on_create_failure(toast: &mut ToastState) {
    toast.show_error("Error creating voyage");
}

/// A voyage was deleted: stale the list so it refetches without the row.
pub fn on_delete_success(cache: &mut QueryCache) {
    cache.invalidate(QueryKey::Voyages);
}

/// A delete failed: announce it; the list is left unchanged.
pub fn on_delete_failure(toast: &mut ToastState) {
    toast.show_error("Voyage has not been deleted successfully!");
}
