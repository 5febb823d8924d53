//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`cache`, `form`, `toast`) as plain structs so
//! the validation and mutation-outcome rules can be unit tested without a
//! DOM. Components wrap these in `RwSignal`s provided via context.

pub mod cache;
pub mod form;
pub mod mutations;
pub mod toast;
