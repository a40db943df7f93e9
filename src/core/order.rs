//! The order model: a customer print request
//!
//! An [`Order`] is created once from a validated [`OrderSubmission`] and is
//! immutable afterwards except for `status`, `total_amount` and `updated_at`,
//! which administrators adjust while fulfilling the request.
//!
//! Payment fields are stored as entered, in cleartext, with only shape
//! validation. This mirrors the site this core was built for and is a known,
//! documented risk: wire a real payment processor before taking live traffic.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Fulfilment status of an order. New orders always start as `Pending`;
/// every later transition is a manual administrative action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status: {}", other)),
        }
    }
}

/// Raw order form fields, exactly as submitted.
///
/// Nothing here is trusted: [`validate`](OrderSubmission::validate) produces
/// a cleaned copy (trimmed text, whitespace-stripped card number) or a
/// per-field error map, and only the cleaned copy ever reaches storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderSubmission {
    // Customer details
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,

    // Shipping address
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Free text; falls back to the site default when left blank
    pub country: String,

    // Payment info (stored as-is; see module docs)
    pub card_holder_name: String,
    pub card_number: String,
    /// Expected shape `MM/YYYY`; only the `/` separator is enforced
    pub expiry_date: String,
    pub cvv: String,

    // Order details
    pub order_details: String,
    pub special_instructions: String,
}

/// Default country applied when the address leaves the field blank
pub const DEFAULT_COUNTRY: &str = "Ireland";

/// A persisted customer print request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Non-guessable external reference, generated at creation
    pub id: Uuid,
    /// Submitting account, when the customer was signed in
    pub user_id: Option<Uuid>,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,

    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,

    pub card_holder_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,

    pub order_details: String,
    pub special_instructions: String,

    /// Not computed from the order content; set by an administrator
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Build a new pending order from an already-validated submission.
    ///
    /// Timestamps and the id are server-assigned; the total starts at zero.
    pub fn from_submission(clean: OrderSubmission, user_id: Option<Uuid>) -> Self {
        let now = Utc::now();
        let country = if clean.country.is_empty() {
            DEFAULT_COUNTRY.to_string()
        } else {
            clean.country
        };
        Self {
            id: Uuid::new_v4(),
            user_id,
            first_name: clean.first_name,
            last_name: clean.last_name,
            email: clean.email,
            phone: clean.phone,
            street_address: clean.street_address,
            city: clean.city,
            state: clean.state,
            zip_code: clean.zip_code,
            country,
            card_holder_name: clean.card_holder_name,
            card_number: clean.card_number,
            expiry_date: clean.expiry_date,
            cvv: clean.cvv,
            order_details: clean.order_details,
            special_instructions: clean.special_instructions,
            total_amount: Decimal::ZERO,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the update timestamp (call after any mutation)
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order {} - {}", self.id, self.customer_name())
    }
}

/// Durable reference returned by a successful submission, used for
/// confirmation pages and emails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRef {
    pub id: Uuid,
}

impl fmt::Display for OrderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.id.fmt(f)
    }
}

/// Admin-editable slice of an order. Everything else is an immutable
/// snapshot from submission time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub total_amount: Option<Decimal>,
}
