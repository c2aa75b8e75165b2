//! Checkout state machine.
//!
//! Linear three-step flow: Address → Payment → Review, with one-step-back
//! transitions and a terminal Placed state. Each forward transition commits
//! validated data; raw card details never survive past validation, only the
//! last four digits and the method tag.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::CartState,
    checkout::validation::FieldError,
    orders::{CheckoutUser, PaymentDescriptor},
};

pub mod validation;

/// One of the three data-collection steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Address,
    Payment,
    Review,
}

impl Step {
    /// 1-based position shown in the step indicator.
    pub fn index(self) -> u8 {
        match self {
            Step::Address => 1,
            Step::Payment => 2,
            Step::Review => 3,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Address => "address",
            Step::Payment => "payment",
            Step::Review => "review",
        };

        write!(f, "{name}")
    }
}

/// Raw shipping-address form fields, exactly as entered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddressInput {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

/// Raw payment form fields. Never persisted; dropped at commit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentInput {
    /// 16 digits, space grouping accepted.
    pub card_number: String,
    /// MM/YY.
    pub expiry: String,
    /// 3 digits.
    pub cvc: String,
}

/// Checkout transition failures.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// The operation belongs to a different step.
    #[error("expected the {expected} step, but checkout is at {actual}")]
    WrongStep { expected: Step, actual: Step },

    /// One or more fields failed validation; the step does not advance.
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),

    /// The order has already been placed; steps cannot be revisited.
    #[error("checkout has already been placed")]
    AlreadyPlaced,
}

/// The checkout state machine.
#[derive(Clone, Debug, Default)]
pub struct Checkout {
    step: Option<Step>,
    address: Option<CheckoutUser>,
    payment: Option<PaymentDescriptor>,
}

impl Checkout {
    /// Start a fresh checkout at the Address step.
    pub fn new() -> Self {
        Self {
            step: Some(Step::Address),
            address: None,
            payment: None,
        }
    }

    /// Entry guard: checkout only renders with cart contents, unless the
    /// order was already placed this session.
    pub fn can_begin(&self, cart: &CartState) -> bool {
        self.is_placed() || !cart.is_empty()
    }

    /// Current step, or `None` once placed.
    pub fn step(&self) -> Option<Step> {
        self.step
    }

    pub fn is_placed(&self) -> bool {
        self.step.is_none()
    }

    /// Committed shipping address, present from the Payment step onward.
    pub fn address(&self) -> Option<&CheckoutUser> {
        self.address.as_ref()
    }

    /// Committed payment reference (last4 + method), present from Review on.
    pub fn payment(&self) -> Option<&PaymentDescriptor> {
        self.payment.as_ref()
    }

    /// Email retained from the validated address, for the confirmation note.
    pub fn email(&self) -> Option<&str> {
        self.address.as_ref().map(|a| a.email.as_str())
    }

    fn require_step(&self, expected: Step) -> Result<(), CheckoutError> {
        match self.step {
            None => Err(CheckoutError::AlreadyPlaced),
            Some(actual) if actual == expected => Ok(()),
            Some(actual) => Err(CheckoutError::WrongStep { expected, actual }),
        }
    }

    /// Validate and commit the address, advancing to Payment.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::WrongStep`] away from the Address step, or
    /// [`CheckoutError::Invalid`] with per-field reasons; neither advances.
    pub fn submit_address(&mut self, input: &AddressInput) -> Result<(), CheckoutError> {
        self.require_step(Step::Address)?;

        let address = validation::validate_address(input).map_err(CheckoutError::Invalid)?;

        self.address = Some(address);
        self.step = Some(Step::Payment);

        Ok(())
    }

    /// Validate the payment fields locally (no network), commit the
    /// truncated card reference, and advance to Review.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::WrongStep`] away from the Payment step, or
    /// [`CheckoutError::Invalid`] with per-field reasons; neither advances.
    pub fn submit_payment(&mut self, input: &PaymentInput) -> Result<(), CheckoutError> {
        self.require_step(Step::Payment)?;

        let payment = validation::validate_payment(input).map_err(CheckoutError::Invalid)?;

        self.payment = Some(payment);
        self.step = Some(Step::Review);

        Ok(())
    }

    /// Step back one step. A no-op at the Address step.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::AlreadyPlaced`] once the order is placed.
    pub fn back(&mut self) -> Result<(), CheckoutError> {
        match self.step {
            None => Err(CheckoutError::AlreadyPlaced),
            Some(Step::Address) => Ok(()),
            Some(Step::Payment) => {
                self.step = Some(Step::Address);
                Ok(())
            }
            Some(Step::Review) => {
                self.step = Some(Step::Payment);
                Ok(())
            }
        }
    }

    /// Enter the terminal Placed state. Only legal from Review, and only the
    /// submission pipeline calls it, after the order service confirmed.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::WrongStep`] away from Review,
    /// [`CheckoutError::AlreadyPlaced`] if already placed.
    pub fn mark_placed(&mut self) -> Result<(), CheckoutError> {
        self.require_step(Step::Review)?;

        self.step = None;

        Ok(())
    }
}
