//! Orders service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{info, warn};

use nexus_core::orders::{Order, SubmitOrderRequest};

use crate::orders::{
    errors::OrdersServiceError, ids::generate_order_id, mailer::Mailer,
    repository::OrdersRepository, validation::validate_order,
};

/// Outcome of a successful submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_id: String,
    /// Notification preview reference; `None` when the mail channel offered
    /// none or the send failed.
    pub preview_url: Option<String>,
}

/// The single order-service operation.
#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Validate, persist, and confirm one order submission.
    async fn submit_order(
        &self,
        request: SubmitOrderRequest,
    ) -> Result<PlacedOrder, OrdersServiceError>;
}

/// Order service over a durable store and an injected mail capability.
#[derive(Debug)]
pub struct FileOrdersService<R, M> {
    repository: R,
    mailer: M,
}

impl<R: OrdersRepository, M: Mailer> FileOrdersService<R, M> {
    pub fn new(repository: R, mailer: M) -> Self {
        Self { repository, mailer }
    }
}

#[async_trait]
impl<R: OrdersRepository, M: Mailer> OrdersService for FileOrdersService<R, M> {
    async fn submit_order(
        &self,
        request: SubmitOrderRequest,
    ) -> Result<PlacedOrder, OrdersServiceError> {
        // Validation aborts before any side effect.
        let violations = validate_order(&request);
        if !violations.is_empty() {
            return Err(OrdersServiceError::Validation(violations));
        }

        let order = Order {
            id: generate_order_id(),
            timestamp: Timestamp::now(),
            user: request.user,
            cart: request.cart,
            total: request.total,
            payment: request.payment,
        };

        self.repository.append(&order).await?;
        info!(order_id = %order.id, total = %order.total, "order persisted");

        // The order is durable at this point; mail failure must not unwind it.
        let preview_url = match self.mailer.send_confirmation(&order).await {
            Ok(preview) => preview,
            Err(error) => {
                warn!(order_id = %order.id, "confirmation mail failed: {error}");
                None
            }
        };

        Ok(PlacedOrder {
            order_id: order.id,
            preview_url,
        })
    }
}
