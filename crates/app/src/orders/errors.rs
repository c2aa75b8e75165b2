//! Order service errors.

use std::io;

use thiserror::Error;

use nexus_core::orders::FieldViolation;

/// Failure of the durable order store.
#[derive(Debug, Error)]
pub enum OrdersRepositoryError {
    #[error("failed to access the order store: {0}")]
    Io(#[from] io::Error),

    #[error("the order store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Failure of the confirmation mail channel. Never fatal to an order.
#[derive(Debug, Error)]
pub enum MailerError {
    #[error("mail channel unavailable: {0}")]
    Channel(String),
}

/// Failure of a submission. Validation aborts before any side effect;
/// storage failures mean the order was NOT placed.
#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("{} payload field(s) failed validation", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("failed to persist the order")]
    Storage(#[from] OrdersRepositoryError),
}
