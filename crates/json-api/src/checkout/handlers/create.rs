//! Create Order Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use nexus_app::orders::OrdersServiceError;
use nexus_core::orders::{
    CheckoutUser, FieldViolation, OrderLine, PaymentDescriptor, SubmitOrderRequest,
};

use crate::{extensions::*, state::State};

/// Reported in place of a preview link when no mail went out.
const MAIL_UNAVAILABLE: &str = "Email service unavailable";

/// Shipping details of a submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutUserPayload {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

/// One purchased line of a submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutLinePayload {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub image: String,
}

/// Truncated payment reference of a submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentPayload {
    pub last4: String,
    pub method: String,
}

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutPayload {
    pub user: CheckoutUserPayload,
    pub cart: Vec<CheckoutLinePayload>,
    pub total: f64,
    pub payment: PaymentPayload,
}

impl From<CheckoutUserPayload> for CheckoutUser {
    fn from(payload: CheckoutUserPayload) -> Self {
        CheckoutUser {
            full_name: payload.full_name,
            email: payload.email,
            phone: payload.phone,
            street: payload.street,
            city: payload.city,
            zip_code: payload.zip_code,
            country: payload.country,
        }
    }
}

impl TryFrom<CheckoutPayload> for SubmitOrderRequest {
    type Error = Vec<FieldViolation>;

    /// Amounts arrive as JSON numbers; anything that does not fit a decimal
    /// is reported as a per-field violation rather than a parse failure.
    fn try_from(payload: CheckoutPayload) -> Result<Self, Self::Error> {
        let mut details = Vec::new();

        let total = Decimal::try_from(payload.total).unwrap_or_else(|_| {
            details.push(FieldViolation::new("total", "Invalid amount"));
            Decimal::ZERO
        });

        let cart = payload
            .cart
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                let price = Decimal::try_from(line.price).unwrap_or_else(|_| {
                    details.push(FieldViolation::new(
                        format!("cart.{index}.price"),
                        "Invalid amount",
                    ));
                    Decimal::ZERO
                });

                OrderLine {
                    id: line.id,
                    name: line.name,
                    price,
                    quantity: line.quantity,
                    image: line.image,
                }
            })
            .collect();

        if !details.is_empty() {
            return Err(details);
        }

        Ok(SubmitOrderRequest {
            user: payload.user.into(),
            cart,
            total,
            payment: PaymentDescriptor {
                last4: payload.payment.last4,
                method: payload.payment.method,
            },
        })
    }
}

/// Order Placed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderPlacedResponse {
    pub success: bool,
    pub message: String,
    /// Nine-character order reference
    pub order_id: String,
    /// Confirmation mail preview link, or a placeholder when unavailable
    pub preview_url: String,
}

/// One rejected payload field
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FieldDetail {
    pub field: String,
    pub message: String,
}

/// Order Rejected Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderRejectedResponse {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldDetail>,
}

fn render_rejection(res: &mut Response, details: Vec<FieldViolation>) {
    res.status_code(StatusCode::BAD_REQUEST).render(Json(OrderRejectedResponse {
        success: false,
        error: "Validation Failed".to_string(),
        details: details
            .into_iter()
            .map(|violation| FieldDetail {
                field: violation.field,
                message: violation.message,
            })
            .collect(),
    }));
}

/// Create Order Handler
#[endpoint(
    tags("checkout"),
    summary = "Submit Order",
    responses(
        (status_code = StatusCode::OK, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutPayload>,
    depot: &mut Depot,
    res: &mut Response,
) {
    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(status) => {
            res.render(status);

            return;
        }
    };

    let request = match SubmitOrderRequest::try_from(json.into_inner()) {
        Ok(request) => request,
        Err(details) => {
            render_rejection(res, details);

            return;
        }
    };

    match state.app.orders.submit_order(request).await {
        Ok(placed) => {
            res.render(Json(OrderPlacedResponse {
                success: true,
                message: "Order placed successfully".to_string(),
                order_id: placed.order_id,
                preview_url: placed
                    .preview_url
                    .unwrap_or_else(|| MAIL_UNAVAILABLE.to_string()),
            }));
        }
        Err(OrdersServiceError::Validation(details)) => render_rejection(res, details),
        Err(OrdersServiceError::Storage(source)) => {
            // Internals stay in the log; the wire only sees the generic body.
            error!("failed to persist order: {source}");

            res.status_code(StatusCode::INTERNAL_SERVER_ERROR)
                .render(Json(OrderRejectedResponse {
                    success: false,
                    error: "Internal Server Error".to_string(),
                    details: Vec::new(),
                }));
        }
    }
}
