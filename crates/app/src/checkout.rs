//! Client-side order submission.

pub mod gateway;
pub mod pipeline;
pub mod storage;

pub use gateway::{GatewayError, HttpOrderGateway, MockOrderGateway, OrderGateway};
pub use pipeline::{Confirmation, FinalizeError, finalize};
pub use storage::JsonFileCartStorage;
