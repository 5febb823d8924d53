//! Reusable UI components for the voyage pages.

pub mod input_wrapper;
pub mod toast;
pub mod unit_type_popover;
pub mod voyage_form;
