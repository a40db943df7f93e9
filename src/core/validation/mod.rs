//! Order form validation
//!
//! Validation is an explicit, storage-independent step: a raw
//! [`OrderSubmission`] either becomes a cleaned copy ready for persistence,
//! or a [`ValidationErrors`] map naming every failing field. Nothing is ever
//! partially saved.

pub mod filters;
pub mod validators;

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::order::OrderSubmission;

/// Why a single field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Required,
    TooLong,
    InvalidEmail,
    InvalidCardNumber,
    InvalidExpiryFormat,
    InvalidChoice,
}

/// A single field failure: machine-readable kind plus display message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Per-field validation errors, in form field order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(IndexMap<String, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, error: FieldError) {
        self.0.insert(field.to_string(), error);
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldError)> {
        self.0.iter()
    }

    /// Field name -> message map, for error responses and re-rendered forms
    pub fn messages(&self) -> IndexMap<String, String> {
        self.0
            .iter()
            .map(|(field, err)| (field.clone(), err.message.clone()))
            .collect()
    }
}

/// Required text field with a maximum length
fn check_text(errors: &mut ValidationErrors, field: &str, value: &str, max: usize) {
    if let Err(e) = validators::required(value) {
        errors.insert(field, e);
    } else if let Err(e) = validators::max_length(value, max) {
        errors.insert(field, e);
    }
}

impl OrderSubmission {
    /// Validate the whole submission.
    ///
    /// Returns a cleaned copy (text trimmed, card number whitespace-stripped)
    /// when every rule passes, otherwise the full per-field error map.
    /// Validation runs over all fields so the caller can annotate the entire
    /// form in one round trip.
    pub fn validate(&self) -> Result<OrderSubmission, ValidationErrors> {
        use filters::trim;

        let mut clean = OrderSubmission {
            first_name: trim(&self.first_name),
            last_name: trim(&self.last_name),
            email: trim(&self.email),
            phone: trim(&self.phone),
            street_address: trim(&self.street_address),
            city: trim(&self.city),
            state: trim(&self.state),
            zip_code: trim(&self.zip_code),
            country: trim(&self.country),
            card_holder_name: trim(&self.card_holder_name),
            card_number: trim(&self.card_number),
            expiry_date: trim(&self.expiry_date),
            cvv: trim(&self.cvv),
            order_details: trim(&self.order_details),
            special_instructions: trim(&self.special_instructions),
        };

        let mut errors = ValidationErrors::new();

        check_text(&mut errors, "first_name", &clean.first_name, 100);
        check_text(&mut errors, "last_name", &clean.last_name, 100);

        if let Err(e) = validators::required(&clean.email) {
            errors.insert("email", e);
        } else if let Err(e) = validators::email(&clean.email) {
            errors.insert("email", e);
        }

        check_text(&mut errors, "phone", &clean.phone, 20);
        check_text(&mut errors, "street_address", &clean.street_address, 255);
        check_text(&mut errors, "city", &clean.city, 100);
        check_text(&mut errors, "state", &clean.state, 100);
        check_text(&mut errors, "zip_code", &clean.zip_code, 10);

        // Country is optional here; a blank value takes the site default
        // when the order record is built.
        if let Err(e) = validators::max_length(&clean.country, 100) {
            errors.insert("country", e);
        }

        check_text(&mut errors, "card_holder_name", &clean.card_holder_name, 100);

        if let Err(e) = validators::required(&clean.card_number) {
            errors.insert("card_number", e);
        } else {
            match validators::card_number(&clean.card_number) {
                Ok(stripped) => clean.card_number = stripped,
                Err(e) => errors.insert("card_number", e),
            }
        }

        if let Err(e) = validators::required(&clean.expiry_date) {
            errors.insert("expiry_date", e);
        } else if let Err(e) = validators::expiry_date(&clean.expiry_date) {
            errors.insert("expiry_date", e);
        } else if let Err(e) = validators::max_length(&clean.expiry_date, 7) {
            errors.insert("expiry_date", e);
        }

        check_text(&mut errors, "cvv", &clean.cvv, 4);

        if let Err(e) = validators::required(&clean.order_details) {
            errors.insert("order_details", e);
        }
        // special_instructions is free text and optional

        if errors.is_empty() { Ok(clean) } else { Err(errors) }
    }
}
