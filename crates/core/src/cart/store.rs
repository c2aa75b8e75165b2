//! Cart store: reducer state coupled to a durable storage port.
//!
//! Every dispatched action is written through synchronously, so the cart
//! survives a reload of the client process. The port is pluggable: tests use
//! [`MemoryCartStorage`], the real client uses a JSON file.

use std::cell::RefCell;

use rust_decimal::Decimal;

use crate::{
    cart::{CartAction, CartState, CartStorageError},
    products::Product,
};

/// Durable single-key persistence for the serialized cart.
pub trait CartStorage {
    /// Read the previously saved cart, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be read or decoded.
    fn load(&self) -> Result<Option<CartState>, CartStorageError>;

    /// Replace the saved cart with the given state.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be written.
    fn save(&self, state: &CartState) -> Result<(), CartStorageError>;
}

/// The cart store: current state plus its storage port.
#[derive(Debug)]
pub struct CartStore<S: CartStorage> {
    state: CartState,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Open the store, restoring the saved cart or starting empty.
    ///
    /// # Errors
    ///
    /// Returns an error when the saved cart cannot be loaded.
    pub fn open(storage: S) -> Result<Self, CartStorageError> {
        let state = storage.load()?.unwrap_or_default();

        Ok(Self { state, storage })
    }

    /// Apply an action and persist the resulting state.
    ///
    /// # Errors
    ///
    /// Returns an error when the new state cannot be saved; the in-memory
    /// state is already updated at that point.
    pub fn dispatch(&mut self, action: CartAction) -> Result<(), CartStorageError> {
        self.state.apply(action);

        self.storage.save(&self.state)
    }

    /// Add one unit of the product.
    ///
    /// # Errors
    ///
    /// Propagates storage failures from [`Self::dispatch`].
    pub fn add(&mut self, product: Product) -> Result<(), CartStorageError> {
        self.dispatch(CartAction::Add(product))
    }

    /// Remove the line for the given product id.
    ///
    /// # Errors
    ///
    /// Propagates storage failures from [`Self::dispatch`].
    pub fn remove(&mut self, id: &str) -> Result<(), CartStorageError> {
        self.dispatch(CartAction::Remove(id.to_string()))
    }

    /// Set a line's quantity, removing it at zero.
    ///
    /// # Errors
    ///
    /// Propagates storage failures from [`Self::dispatch`].
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> Result<(), CartStorageError> {
        self.dispatch(CartAction::UpdateQuantity {
            id: id.to_string(),
            quantity,
        })
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Propagates storage failures from [`Self::dispatch`].
    pub fn clear(&mut self) -> Result<(), CartStorageError> {
        self.dispatch(CartAction::Clear)
    }

    /// Flip the drawer flag.
    ///
    /// # Errors
    ///
    /// Propagates storage failures from [`Self::dispatch`].
    pub fn toggle_open(&mut self) -> Result<(), CartStorageError> {
        self.dispatch(CartAction::ToggleOpen)
    }

    /// Current cart state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Subtotal plus tax, recomputed from the current lines.
    pub fn total(&self) -> Decimal {
        self.state.total()
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCartStorage {
    saved: RefCell<Option<CartState>>,
}

impl MemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the storage with an existing cart, as if left by a prior session.
    pub fn with_saved(state: CartState) -> Self {
        Self {
            saved: RefCell::new(Some(state)),
        }
    }
}

impl CartStorage for MemoryCartStorage {
    fn load(&self) -> Result<Option<CartState>, CartStorageError> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, state: &CartState) -> Result<(), CartStorageError> {
        *self.saved.borrow_mut() = Some(state.clone());

        Ok(())
    }
}
