//! Storefront services.
//!
//! The catalog lookup service, the server-side order service (validation,
//! persistence, confirmation mail), and the client-side order submission
//! pipeline. Collaborators are traits with mockall mocks; everything is
//! wired explicitly through [`context::AppContext`].

pub mod catalog;
pub mod checkout;
pub mod context;
pub mod orders;
