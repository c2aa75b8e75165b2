//! Checkout field validation and input formatting.
//!
//! These rules run client-side first; the order service re-checks the same
//! email and phone rules authoritatively on submission.

use crate::{
    checkout::{AddressInput, PaymentInput},
    orders::{CheckoutUser, PaymentDescriptor},
};

/// A single rejected form field with its inline reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Minimal syntactic email check: one `@`, non-empty local part, dotted
/// domain, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}

/// Indian mobile number: exactly 10 digits, leading digit 6 to 9.
pub fn is_valid_phone(value: &str) -> bool {
    value.len() == 10
        && value.chars().all(|c| c.is_ascii_digit())
        && matches!(value.chars().next(), Some('6'..='9'))
}

/// Strip grouping and return the canonical 16-digit card number, or `None`
/// when the digit count is wrong.
pub fn normalize_card_number(value: &str) -> Option<String> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();

    (digits.len() == 16).then_some(digits)
}

/// Valid `MM/YY` expiry with month 01 to 12.
pub fn is_valid_expiry(value: &str) -> bool {
    let Some((month, year)) = value.split_once('/') else {
        return false;
    };

    month.len() == 2
        && month.chars().all(|c| c.is_ascii_digit())
        && year.len() == 2
        && year.chars().all(|c| c.is_ascii_digit())
        && month.parse::<u8>().is_ok_and(|m| (1..=12).contains(&m))
}

/// Validate the address form, returning the committed user on success.
///
/// # Errors
///
/// Returns every rejected field with its reason; the caller shows them
/// inline and the step does not advance.
pub fn validate_address(input: &AddressInput) -> Result<CheckoutUser, Vec<FieldError>> {
    let mut errors = Vec::new();

    if input.full_name.trim().chars().count() < 2 {
        errors.push(FieldError::new("fullName", "Name is too short"));
    }
    if !is_valid_email(input.email.trim()) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }
    if !is_valid_phone(input.phone.trim()) {
        errors.push(FieldError::new(
            "phone",
            "Invalid Indian Phone Number (10 digits)",
        ));
    }
    if input.street.trim().chars().count() < 5 {
        errors.push(FieldError::new("street", "Address is too short"));
    }
    if input.city.trim().chars().count() < 2 {
        errors.push(FieldError::new("city", "City is required"));
    }
    let zip = input.zip_code.trim();
    if zip.len() < 5 || !zip.chars().all(|c| c.is_ascii_digit()) {
        errors.push(FieldError::new("zipCode", "Invalid ZIP code"));
    }
    if input.country.trim().chars().count() < 2 {
        errors.push(FieldError::new("country", "Country is required"));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(CheckoutUser {
        full_name: input.full_name.trim().to_string(),
        email: input.email.trim().to_string(),
        phone: input.phone.trim().to_string(),
        street: input.street.trim().to_string(),
        city: input.city.trim().to_string(),
        zip_code: zip.to_string(),
        country: input.country.trim().to_string(),
    })
}

/// Validate the payment form. On success only the truncated reference
/// survives; the raw card number and CVC are dropped here.
///
/// # Errors
///
/// Returns every rejected field with its reason.
pub fn validate_payment(input: &PaymentInput) -> Result<PaymentDescriptor, Vec<FieldError>> {
    let mut errors = Vec::new();

    let normalized = normalize_card_number(&input.card_number);
    if normalized.is_none() {
        errors.push(FieldError::new(
            "cardNumber",
            "Card number must be 16 digits",
        ));
    }
    if !is_valid_expiry(input.expiry.trim()) {
        errors.push(FieldError::new("expiry", "Invalid Format (MM/YY)"));
    }
    let cvc = input.cvc.trim();
    if cvc.len() != 3 || !cvc.chars().all(|c| c.is_ascii_digit()) {
        errors.push(FieldError::new("cvc", "Invalid CVC (3 digits)"));
    }

    let Some(mut digits) = normalized else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    let last4 = digits.split_off(12);

    Ok(PaymentDescriptor {
        last4,
        method: "card".to_string(),
    })
}

/// Re-group a card number into blocks of four as the user types.
pub fn format_card_number(value: &str) -> String {
    let digits: Vec<char> = value.chars().filter(char::is_ascii_digit).take(16).collect();

    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Insert the `/` separator once two expiry digits are present.
pub fn format_expiry(value: &str) -> String {
    let digits: Vec<char> = value.chars().filter(char::is_ascii_digit).take(4).collect();

    if digits.len() < 2 {
        return digits.iter().collect();
    }

    let (month, year) = digits.split_at(2);
    let month: String = month.iter().collect();
    let year: String = year.iter().collect();

    format!("{month}/{year}")
}

/// Keep at most three CVC digits.
pub fn format_cvc(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).take(3).collect()
}

/// Keep at most six postal-code digits.
pub fn format_zip_code(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).take(6).collect()
}
