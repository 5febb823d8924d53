//! Backend communication: typed records and REST helpers.

pub mod api;
pub mod types;
