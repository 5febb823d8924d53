//! Page-level components.

pub mod voyages;
