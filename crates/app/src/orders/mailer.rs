//! Confirmation mail.
//!
//! The mail channel is a capability injected into the order service at
//! construction, built once at process start. Delivery is best-effort: the
//! order is already durable before any send is attempted.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use nexus_core::orders::Order;

use crate::orders::errors::MailerError;

/// Outbound confirmation channel. Returns a preview reference when the
/// transport offers one, `None` otherwise.
#[automock]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send the confirmation for a persisted order.
    async fn send_confirmation(&self, order: &Order) -> Result<Option<String>, MailerError>;
}

/// Mailer that renders the confirmation and emits it to the log instead of
/// a real transport. Used when no mail channel is configured.
#[derive(Debug, Clone)]
pub struct LogMailer {
    from: String,
}

impl LogMailer {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }

    /// Subject line referencing the order id.
    pub fn subject(order: &Order) -> String {
        format!("Order Confirmation #{}", order.id)
    }

    /// Plain-text body: greeting, order id, total, one line per item.
    pub fn text_body(order: &Order) -> String {
        let items: Vec<String> = order
            .cart
            .iter()
            .map(|line| format!("- {} x{}", line.name, line.quantity))
            .collect();

        format!(
            "Thank you {}!\n\nYour order #{} has been placed successfully.\n\
             Total Amount: ₹{}\n\nItems:\n{}\n\nWe will notify you when it ships!",
            order.user.full_name,
            order.id,
            order.total,
            items.join("\n"),
        )
    }

    /// HTML body with the same summary.
    pub fn html_body(order: &Order) -> String {
        let items: String = order
            .cart
            .iter()
            .map(|line| {
                format!(
                    "<li>{} (x{}) - ₹{}</li>",
                    line.name, line.quantity, line.price
                )
            })
            .collect();

        format!(
            "<div><h1>Order Confirmed!</h1>\
             <p>Hi <strong>{}</strong>,</p>\
             <p>Thank you for shopping with Nexus Gaming.</p>\
             <p><strong>Order ID:</strong> #{}</p>\
             <p><strong>Total:</strong> ₹{}</p>\
             <h3>Items:</h3><ul>{}</ul>\
             <p>You can track your order status on our website.</p></div>",
            order.user.full_name, order.id, order.total, items,
        )
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send_confirmation(&self, order: &Order) -> Result<Option<String>, MailerError> {
        info!(
            from = %self.from,
            to = %order.user.email,
            subject = %Self::subject(order),
            "confirmation mail (log channel)\n{}",
            Self::text_body(order),
        );

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use nexus_core::orders::{CheckoutUser, OrderLine, PaymentDescriptor};

    use super::*;

    fn order() -> Order {
        Order {
            id: "A1B2C3D4E".to_string(),
            timestamp: Timestamp::UNIX_EPOCH,
            user: CheckoutUser {
                full_name: "Asha Verma".to_string(),
                email: "asha@example.com".to_string(),
                phone: "9876543210".to_string(),
                street: "12 Indiranagar Main Road".to_string(),
                city: "Bengaluru".to_string(),
                zip_code: "560038".to_string(),
                country: "India".to_string(),
            },
            cart: vec![OrderLine {
                id: "2".to_string(),
                name: "Cyberpunk 2077: Phantom Liberty".to_string(),
                price: Decimal::new(2_999, 0),
                quantity: 2,
                image: "/images/products/cyberpunk2077.jpg".to_string(),
            }],
            total: Decimal::new(6_597_80, 2),
            payment: PaymentDescriptor {
                last4: "4242".to_string(),
                method: "card".to_string(),
            },
        }
    }

    #[test]
    fn subject_references_the_order_id() {
        assert_eq!(
            LogMailer::subject(&order()),
            "Order Confirmation #A1B2C3D4E"
        );
    }

    #[test]
    fn text_body_summarizes_items_and_total() {
        let body = LogMailer::text_body(&order());

        assert!(body.contains("Thank you Asha Verma!"));
        assert!(body.contains("#A1B2C3D4E"));
        assert!(body.contains("- Cyberpunk 2077: Phantom Liberty x2"));
        assert!(body.contains("₹6597.80"));
    }

    #[test]
    fn html_body_lists_each_line() {
        let body = LogMailer::html_body(&order());

        assert!(body.contains("<li>Cyberpunk 2077: Phantom Liberty (x2) - ₹2999</li>"));
        assert!(body.contains("Order Confirmed!"));
    }

    #[tokio::test]
    async fn log_channel_reports_no_preview() -> TestResult {
        let mailer = LogMailer::new("\"Nexus Gaming\" <orders@nexusgaming.com>");

        let preview = mailer.send_confirmation(&order()).await?;

        assert_eq!(preview, None);

        Ok(())
    }
}
