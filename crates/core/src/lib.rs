//! Nexus storefront domain.
//!
//! Catalog data types, the cart store and its tagged-action reducer, the
//! three-step checkout state machine, and the order wire contract. This crate
//! is pure domain logic: no I/O beyond the [`cart::CartStorage`] port.

pub mod cart;
pub mod checkout;
pub mod fixtures;
pub mod orders;
pub mod products;
