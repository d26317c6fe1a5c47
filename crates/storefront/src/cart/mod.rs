//! Shopping cart.
//!
//! [`CartStore`] is the single owner of the cart's lines. It is created
//! explicitly, handed to whatever presents the cart, and persisted through a
//! pluggable [`CartStorage`] backend under [`STORAGE_KEY`].

mod line_item;
pub mod persisted;
mod storage;
mod store;
mod view;

pub use line_item::{LineItem, LineKey};
pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};
pub use store::CartStore;
pub use view::{CartItemView, CartView};

/// Storage key the cart is saved under.
pub const STORAGE_KEY: &str = "cart-storage";
