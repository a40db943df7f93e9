//! Order intake service
//!
//! The write path of the shop: validate a submission, persist the order,
//! then fire off a confirmation email without letting its outcome touch the
//! caller's result. Reads (`get_order`, `list_orders`) and the admin update
//! live here too.

use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::SiteConfig;
use crate::core::error::SilverpressError;
use crate::core::order::{Order, OrderRef, OrderStatus, OrderSubmission, OrderUpdate};
use crate::core::page::ItemSummary;
use crate::core::query::{Paginated, paginate};
use crate::notify::{EmailMessage, Mailer};
use crate::storage::{ItemLookup, OrderStore};

/// Order intake and administration over a store, a notification channel and
/// the catalog lookup used for form prefill.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    mailer: Arc<dyn Mailer>,
    catalog: Arc<dyn ItemLookup>,
    config: Arc<SiteConfig>,
}

impl OrderService {
    pub fn new(
        store: Arc<dyn OrderStore>,
        mailer: Arc<dyn Mailer>,
        catalog: Arc<dyn ItemLookup>,
        config: Arc<SiteConfig>,
    ) -> Self {
        Self {
            store,
            mailer,
            catalog,
            config,
        }
    }

    /// Submit an order.
    ///
    /// Every field is validated before anything is persisted; a failing
    /// submission is never partially saved. On success the order is stored
    /// as `pending` with a zero total, the optional submitter identity is
    /// attached, and a confirmation email is dispatched best-effort.
    pub async fn submit_order(
        &self,
        submission: OrderSubmission,
        submitter: Option<Uuid>,
    ) -> Result<OrderRef, SilverpressError> {
        let clean = submission.validate()?;
        let order = Order::from_submission(clean, submitter);

        let order = self
            .store
            .insert(order)
            .await
            .map_err(SilverpressError::Storage)?;

        debug!(order_id = %order.id, "order persisted");
        self.dispatch_confirmation(&order);

        Ok(OrderRef { id: order.id })
    }

    /// Fire-and-forget confirmation send with a bounded timeout.
    ///
    /// The contract is explicit in the types: the mailer returns a
    /// `DeliveryError` which is logged and dropped here, so no notification
    /// outcome can affect the already-committed order.
    fn dispatch_confirmation(&self, order: &Order) {
        let message = confirmation_email(order, &self.config);
        let mailer = Arc::clone(&self.mailer);
        let timeout = self.config.notify_timeout();
        let order_id = order.id;

        tokio::spawn(async move {
            match tokio::time::timeout(timeout, mailer.send(message)).await {
                Ok(Ok(())) => debug!(order_id = %order_id, "confirmation email sent"),
                Ok(Err(err)) => {
                    warn!(order_id = %order_id, error = %err, "confirmation email failed")
                }
                Err(_) => {
                    warn!(order_id = %order_id, "confirmation email timed out")
                }
            }
        });
    }

    /// Look up an order for the confirmation view.
    ///
    /// A miss returns `None` ("no order to display"), not an error.
    pub async fn get_order(&self, id: &Uuid) -> Result<Option<Order>, SilverpressError> {
        self.store.get(id).await.map_err(SilverpressError::Storage)
    }

    /// Resolve an externally supplied item id for order-form context.
    ///
    /// Absent, malformed or unknown ids all yield `None`; this path never
    /// fails the surrounding request.
    pub async fn resolve_linked_item(&self, item_id: Option<&str>) -> Option<ItemSummary> {
        let raw = item_id?;
        let id = Uuid::from_str(raw).ok()?;
        match self.catalog.resolve(&id).await {
            Ok(found) => found,
            Err(err) => {
                warn!(item_id = %id, error = %err, "linked item lookup failed");
                None
            }
        }
    }

    /// Admin listing: newest first, optionally filtered by status
    pub async fn list_orders(
        &self,
        status: Option<OrderStatus>,
        page: Option<&str>,
    ) -> Result<Paginated<Order>, SilverpressError> {
        let mut orders = self
            .store
            .list()
            .await
            .map_err(SilverpressError::Storage)?;

        if let Some(status) = status {
            orders.retain(|o| o.status == status);
        }
        orders.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(paginate(orders, page, self.config.orders_page_size))
    }

    /// Administrative update. Only `status` and `total_amount` are mutable
    /// after creation; the customer and payment snapshots are not.
    pub async fn update_order(
        &self,
        id: &Uuid,
        update: OrderUpdate,
    ) -> Result<Order, SilverpressError> {
        let mut order = self
            .store
            .get(id)
            .await
            .map_err(SilverpressError::Storage)?
            .ok_or_else(|| SilverpressError::not_found("Order", *id))?;

        if let Some(status) = update.status {
            order.status = status;
        }
        if let Some(total) = update.total_amount {
            order.total_amount = total;
        }
        order.touch();

        self.store
            .update(id, order)
            .await
            .map_err(SilverpressError::Storage)
    }
}

/// Compose the confirmation email for a freshly created order
pub fn confirmation_email(order: &Order, config: &SiteConfig) -> EmailMessage {
    EmailMessage {
        subject: format!("Order Confirmation - {}", order.id),
        body: format!(
            "Dear {},\n\n\
             Thank you for your order! We've received your printing request.\n\n\
             Order ID: {}\n\
             Order Details: {}\n\n\
             We'll process your order and get back to you soon.\n\n\
             Best regards,\n\
             {}",
            order.first_name, order.id, order.order_details, config.site_name
        ),
        from: config.from_address.clone(),
        to: vec![order.email.clone()],
    }
}

/// Order-details prefill for a linked catalog item: `"<title> - €<price>"`,
/// or just the title when no price label exists.
pub fn prefill_order_details(item: &ItemSummary) -> String {
    match item.price_label.as_deref().filter(|p| !p.is_empty()) {
        Some(price) => format!("{} - €{}", item.title, price),
        None => item.title.clone(),
    }
}
