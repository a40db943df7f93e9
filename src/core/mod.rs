//! Core types: error taxonomy, order model, page-node abstraction,
//! pagination and validation

pub mod error;
pub mod order;
pub mod page;
pub mod query;
pub mod validation;

pub use error::{ErrorResponse, SilverpressError};
pub use order::{DEFAULT_COUNTRY, Order, OrderRef, OrderStatus, OrderSubmission, OrderUpdate};
pub use page::{ImageRef, ItemSummary, PageNode, slugify};
pub use query::{ListingQuery, PageMeta, Paginated, paginate};
pub use validation::{FieldError, FieldErrorKind, ValidationErrors};
