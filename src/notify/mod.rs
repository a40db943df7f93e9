//! Notification channel abstraction
//!
//! The order service sends a confirmation email after persisting an order.
//! Delivery is best-effort by contract: [`DeliveryError`] exists so the
//! failure is visible to logs, but it never propagates into the caller's
//! result. The trait seam also lets tests substitute a failing channel.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::info;

/// An outbound email, transport-agnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
    pub from: String,
    pub to: Vec<String>,
}

/// Why a delivery attempt failed. Observed by logs only, never by end users.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("notification channel unavailable: {0}")]
    Unavailable(String),

    #[error("notification rejected by transport: {0}")]
    Rejected(String),
}

/// A channel that attempts to deliver an [`EmailMessage`]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), DeliveryError>;
}

/// Mailer that writes messages to the log instead of a wire.
///
/// The development analogue of a console email backend; also useful in
/// demos where no SMTP relay exists.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), DeliveryError> {
        info!(
            to = %message.to.join(", "),
            from = %message.from,
            subject = %message.subject,
            "email (log backend)\n{}",
            message.body
        );
        Ok(())
    }
}

/// In-memory mailer that records every message, optionally failing each
/// send. Intended for tests that assert on the best-effort contract.
#[derive(Debug, Clone, Default)]
pub struct MemoryMailer {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    fail_with: Option<String>,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails with the given reason
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(reason.into()),
        }
    }

    /// Messages accepted so far (empty for a failing mailer)
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().expect("mailer mutex poisoned").clone()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), DeliveryError> {
        if let Some(reason) = &self.fail_with {
            return Err(DeliveryError::Unavailable(reason.clone()));
        }
        self.sent
            .lock()
            .expect("mailer mutex poisoned")
            .push(message);
        Ok(())
    }
}
