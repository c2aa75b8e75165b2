//! Order wire contract and the persisted order record.
//!
//! These shapes cross the client/server boundary as camelCase JSON and are
//! shared by the submission pipeline, the order service, and its store.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;

/// The validated customer block of a submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutUser {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

/// An immutable line-item snapshot copied from the cart at submission time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: String,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product.id.clone(),
            name: line.product.name.clone(),
            price: line.product.price,
            quantity: line.quantity,
            image: line.product.image.clone(),
        }
    }
}

/// Truncated payment reference. Never carries the full card number or CVC.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDescriptor {
    /// Final four digits of the normalized card number.
    pub last4: String,
    /// Payment method tag, currently always `"card"`.
    pub method: String,
}

/// The submission payload sent to the order service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmitOrderRequest {
    pub user: CheckoutUser,
    pub cart: Vec<OrderLine>,
    pub total: Decimal,
    pub payment: PaymentDescriptor,
}

/// Build the submission payload from the cart snapshot and the committed
/// checkout data.
pub fn compose_request(
    lines: &[CartLine],
    user: CheckoutUser,
    payment: PaymentDescriptor,
    total: Decimal,
) -> SubmitOrderRequest {
    SubmitOrderRequest {
        user,
        cart: lines.iter().map(OrderLine::from).collect(),
        total,
        payment,
    }
}

/// A single rejected payload field, reported back to the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Dotted path into the payload, e.g. `user.email`.
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Successful submission response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPlaced {
    pub success: bool,
    pub message: String,
    pub order_id: String,
    /// Notification preview reference, or a placeholder when the mail
    /// channel is unavailable.
    pub preview_url: String,
}

/// Rejected submission response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderRejected {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldViolation>,
}

/// Either wire response to a submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmitOrderResponse {
    Placed(OrderPlaced),
    Rejected(OrderRejected),
}

/// A durable order record. Created only by the order service, appended to
/// the order store, and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub timestamp: Timestamp,
    pub user: CheckoutUser,
    pub cart: Vec<OrderLine>,
    pub total: Decimal,
    pub payment: PaymentDescriptor,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        cart::{CartAction, CartState},
        fixtures,
    };

    use super::*;

    fn user() -> CheckoutUser {
        CheckoutUser {
            full_name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            street: "12 Indiranagar Main Road".to_string(),
            city: "Bengaluru".to_string(),
            zip_code: "560038".to_string(),
            country: "India".to_string(),
        }
    }

    fn payment() -> PaymentDescriptor {
        PaymentDescriptor {
            last4: "4242".to_string(),
            method: "card".to_string(),
        }
    }

    #[test]
    fn compose_snapshots_the_cart_lines() -> TestResult {
        let mut cart = CartState::default();
        cart.apply(CartAction::Add(
            fixtures::product("2").ok_or("missing fixture")?,
        ));
        cart.apply(CartAction::Add(
            fixtures::product("2").ok_or("missing fixture")?,
        ));
        cart.apply(CartAction::Add(
            fixtures::product("4").ok_or("missing fixture")?,
        ));

        let request = compose_request(cart.lines(), user(), payment(), cart.total());

        assert_eq!(request.cart.len(), 2);
        let first = request.cart.first().ok_or("no lines")?;
        assert_eq!(first.id, "2");
        assert_eq!(first.quantity, 2);
        assert_eq!(request.total, cart.total());
        assert_eq!(request.payment.last4, "4242");

        Ok(())
    }

    #[test]
    fn request_serializes_with_the_wire_keys() -> TestResult {
        let request = compose_request(&[], user(), payment(), rust_decimal::Decimal::ZERO);

        let json = serde_json::to_value(&request)?;

        assert!(json["user"].get("fullName").is_some());
        assert!(json["user"].get("zipCode").is_some());
        assert!(json["payment"].get("last4").is_some());

        Ok(())
    }

    #[test]
    fn responses_decode_untagged() -> TestResult {
        let placed: SubmitOrderResponse = serde_json::from_str(
            r#"{"success":true,"message":"Order placed successfully","orderId":"A1B2C3D4E","previewUrl":"Email service unavailable"}"#,
        )?;
        let rejected: SubmitOrderResponse = serde_json::from_str(
            r#"{"success":false,"error":"Validation Failed","details":[{"field":"user.email","message":"Invalid email address"}]}"#,
        )?;
        let internal: SubmitOrderResponse =
            serde_json::from_str(r#"{"success":false,"error":"Internal Server Error"}"#)?;

        assert!(matches!(placed, SubmitOrderResponse::Placed(ref p) if p.order_id == "A1B2C3D4E"));
        assert!(
            matches!(rejected, SubmitOrderResponse::Rejected(ref r) if r.details.len() == 1)
        );
        assert!(
            matches!(internal, SubmitOrderResponse::Rejected(ref r) if r.details.is_empty())
        );

        Ok(())
    }
}
