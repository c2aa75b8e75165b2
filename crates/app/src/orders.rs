//! Order service: validation, persistence, and confirmation mail.

pub mod errors;
pub mod ids;
pub mod mailer;
pub mod repository;
pub mod service;
pub mod validation;

pub use errors::{MailerError, OrdersRepositoryError, OrdersServiceError};
pub use mailer::{LogMailer, Mailer, MockMailer};
pub use repository::{JsonFileOrdersRepository, MockOrdersRepository, OrdersRepository};
pub use service::{FileOrdersService, MockOrdersService, OrdersService, PlacedOrder};
