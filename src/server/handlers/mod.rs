//! HTTP handlers for orders and section listings

pub mod listing;
pub mod orders;
