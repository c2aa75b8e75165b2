//! Order submission pipeline.
//!
//! Drives the final transition of a checkout: compose the payload from the
//! committed cart and checkout data, call the order gateway exactly once,
//! and only on an affirmative confirmation flip the session into its placed
//! state and empty the cart. Any failure leaves both untouched so the user
//! can retry from the Review step.

use thiserror::Error;
use tracing::info;

use nexus_core::{
    cart::{CartStorage, CartStorageError, CartStore},
    checkout::{Checkout, CheckoutError, Step},
    orders::{FieldViolation, SubmitOrderResponse, compose_request},
};

use crate::checkout::gateway::{GatewayError, OrderGateway};

/// Confirmation details surfaced after a placed order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub order_id: String,
    /// Mail preview reference, or the service's placeholder when the mail
    /// channel was unavailable.
    pub preview_url: String,
}

/// Why a finalization did not place the order.
#[derive(Debug, Error)]
pub enum FinalizeError {
    /// Checkout is not at the Review step with committed address and payment.
    #[error("checkout is not ready to finalize: {0}")]
    NotReady(CheckoutError),

    /// The gateway call itself failed; nothing was placed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The order service rejected the payload.
    #[error("the order service rejected the submission: {error}")]
    Rejected {
        error: String,
        details: Vec<FieldViolation>,
    },

    /// The order was placed but the emptied cart could not be persisted.
    #[error(transparent)]
    Storage(#[from] CartStorageError),
}

/// Submit the order and, on confirmation, place the checkout and clear the
/// cart. The gateway is called at most once per invocation.
///
/// # Errors
///
/// [`FinalizeError::NotReady`] away from the Review step or with an empty
/// cart, [`FinalizeError::Gateway`] on transport failure,
/// [`FinalizeError::Rejected`] when the service declines the payload, and
/// [`FinalizeError::Storage`] when the cleared cart cannot be saved. In the
/// first three cases the cart and checkout are left exactly as they were.
pub async fn finalize<S: CartStorage, G: OrderGateway>(
    cart: &mut CartStore<S>,
    checkout: &mut Checkout,
    gateway: &G,
) -> Result<Confirmation, FinalizeError> {
    if checkout.step() != Some(Step::Review) {
        let actual = checkout.step().ok_or(FinalizeError::NotReady(
            CheckoutError::AlreadyPlaced,
        ))?;

        return Err(FinalizeError::NotReady(CheckoutError::WrongStep {
            expected: Step::Review,
            actual,
        }));
    }

    let (user, payment) = match (checkout.address(), checkout.payment()) {
        (Some(user), Some(payment)) => (user.clone(), payment.clone()),
        _ => {
            // Unreachable through the state machine's own transitions; the
            // Review step implies both commits.
            return Err(FinalizeError::NotReady(CheckoutError::WrongStep {
                expected: Step::Review,
                actual: Step::Address,
            }));
        }
    };

    let request = compose_request(cart.state().lines(), user, payment, cart.total());

    match gateway.submit(&request).await? {
        // Affirmative success is the flag, not the body shape.
        SubmitOrderResponse::Placed(placed) if placed.success => {
            info!(order_id = %placed.order_id, "order placed");

            // Order of effects matters: the terminal checkout state first,
            // then the cart, so a storage failure cannot strand a placed
            // order behind a repeatable Review step.
            checkout.mark_placed().map_err(FinalizeError::NotReady)?;
            cart.clear()?;

            Ok(Confirmation {
                order_id: placed.order_id,
                preview_url: placed.preview_url,
            })
        }
        SubmitOrderResponse::Placed(placed) => Err(FinalizeError::Rejected {
            error: placed.message,
            details: Vec::new(),
        }),
        SubmitOrderResponse::Rejected(rejected) => Err(FinalizeError::Rejected {
            error: rejected.error,
            details: rejected.details,
        }),
    }
}
