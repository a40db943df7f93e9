//! Order intake: submission, confirmation lookup, admin operations

pub mod service;

pub use service::{OrderService, confirmation_email, prefill_order_details};
