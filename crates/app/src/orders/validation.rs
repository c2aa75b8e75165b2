//! Server-side payload validation.
//!
//! The authoritative re-check: the client validates first, but the order
//! service never trusts it. Fails closed, before any side effect, and
//! reports every violated field by its dotted path.

use rust_decimal::Decimal;

use nexus_core::{
    checkout::validation::{is_valid_email, is_valid_phone},
    orders::{FieldViolation, SubmitOrderRequest},
};

/// Check a submission against the order schema. An empty result means the
/// payload is acceptable.
pub fn validate_order(request: &SubmitOrderRequest) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    let user = &request.user;
    if user.full_name.trim().is_empty() {
        violations.push(FieldViolation::new("user.fullName", "Required"));
    }
    if !is_valid_email(&user.email) {
        violations.push(FieldViolation::new("user.email", "Invalid email"));
    }
    if !is_valid_phone(&user.phone) {
        violations.push(FieldViolation::new(
            "user.phone",
            "Invalid phone number",
        ));
    }
    for (field, value) in [
        ("user.street", &user.street),
        ("user.city", &user.city),
        ("user.zipCode", &user.zip_code),
        ("user.country", &user.country),
    ] {
        if value.trim().is_empty() {
            violations.push(FieldViolation::new(field, "Required"));
        }
    }

    for (index, line) in request.cart.iter().enumerate() {
        if line.id.trim().is_empty() {
            violations.push(FieldViolation::new(format!("cart.{index}.id"), "Required"));
        }
        if line.name.trim().is_empty() {
            violations.push(FieldViolation::new(format!("cart.{index}.name"), "Required"));
        }
        if line.price < Decimal::ZERO {
            violations.push(FieldViolation::new(
                format!("cart.{index}.price"),
                "Must not be negative",
            ));
        }
        if line.quantity == 0 {
            violations.push(FieldViolation::new(
                format!("cart.{index}.quantity"),
                "Must be at least 1",
            ));
        }
        if line.image.trim().is_empty() {
            violations.push(FieldViolation::new(
                format!("cart.{index}.image"),
                "Required",
            ));
        }
    }

    if request.total < Decimal::ZERO {
        violations.push(FieldViolation::new("total", "Must not be negative"));
    }

    let payment = &request.payment;
    if payment.last4.len() != 4 || !payment.last4.chars().all(|c| c.is_ascii_digit()) {
        violations.push(FieldViolation::new("payment.last4", "Expected 4 digits"));
    }
    if payment.method.trim().is_empty() {
        violations.push(FieldViolation::new("payment.method", "Required"));
    }

    violations
}

#[cfg(test)]
mod tests {
    use nexus_core::orders::{CheckoutUser, OrderLine, PaymentDescriptor};

    use super::*;

    fn valid_request() -> SubmitOrderRequest {
        SubmitOrderRequest {
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
                quantity: 1,
                image: "/images/products/cyberpunk2077.jpg".to_string(),
            }],
            total: Decimal::new(3_298_90, 2),
            payment: PaymentDescriptor {
                last4: "4242".to_string(),
                method: "card".to_string(),
            },
        }
    }

    #[test]
    fn a_well_formed_payload_passes() {
        assert!(validate_order(&valid_request()).is_empty());
    }

    #[test]
    fn missing_email_is_reported_by_path() {
        let mut request = valid_request();
        request.user.email = String::new();

        let violations = validate_order(&request);

        assert!(
            violations.iter().any(|v| v.field == "user.email"),
            "expected a user.email violation, got {violations:?}"
        );
    }

    #[test]
    fn bad_phone_prefix_fails() {
        let mut request = valid_request();
        request.user.phone = "1234567890".to_string();

        let violations = validate_order(&request);

        assert!(violations.iter().any(|v| v.field == "user.phone"));
    }

    #[test]
    fn every_blank_user_field_is_reported() {
        let mut request = valid_request();
        request.user.street = String::new();
        request.user.country = "  ".to_string();

        let fields: Vec<String> = validate_order(&request)
            .into_iter()
            .map(|v| v.field)
            .collect();

        assert!(fields.contains(&"user.street".to_string()));
        assert!(fields.contains(&"user.country".to_string()));
    }

    #[test]
    fn cart_lines_are_checked_by_index() {
        let mut request = valid_request();
        request.cart.push(OrderLine {
            id: String::new(),
            name: "Mystery".to_string(),
            price: Decimal::new(-1, 0),
            quantity: 0,
            image: "/images/mystery.jpg".to_string(),
        });

        let fields: Vec<String> = validate_order(&request)
            .into_iter()
            .map(|v| v.field)
            .collect();

        assert!(fields.contains(&"cart.1.id".to_string()));
        assert!(fields.contains(&"cart.1.price".to_string()));
        assert!(fields.contains(&"cart.1.quantity".to_string()));
    }

    #[test]
    fn payment_reference_must_be_four_digits() {
        let mut request = valid_request();
        request.payment.last4 = "42".to_string();

        let violations = validate_order(&request);

        assert!(violations.iter().any(|v| v.field == "payment.last4"));
    }
}
