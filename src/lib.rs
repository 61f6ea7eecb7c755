//! # Fridge Keeper
//!
//! Tracks perishable items in a household fridge: what was bought, when it
//! expires, and what needs eating (or throwing out) soon.
//!
//! ## Components
//!
//! - **Store**: loads and saves the whole inventory as one CSV table
//! - **Inventory**: add, delete, list and expiry-check operations
//! - **Shell**: the numbered text menu driving those operations
//!
//! ## Example
//!
//! ```no_run
//! use fridgekeeper::{Inventory, Store, StoreConfig};
//!
//! let inventory = Inventory::new(Store::new(StoreConfig::new("./fridge.csv")));
//! inventory.add("milk", "2024-01-01", "2024-01-05")?;
//!
//! for entry in inventory.check_expiry_now()?.expiring_soon {
//!     println!("{} expires in {} days", entry.record.name, entry.days);
//! }
//! # Ok::<(), fridgekeeper::FridgeError>(())
//! ```

pub mod error;
pub mod inventory;
pub mod render;
pub mod shell;
pub mod store;
pub mod types;

// Re-exports
pub use error::{FridgeError, Result};
pub use inventory::Inventory;
pub use shell::Shell;
pub use store::{Store, StoreConfig, DEFAULT_TABLE_PATH};
pub use types::*;
