//! # delta-store
//!
//! Persistent JSON key-value store for the DELTA evaluation tool.
//!
//! [`DeltaStore`] loads every collection into memory at open, serves reads
//! from memory, and writes the affected collection back through an injected
//! [`StorageMedium`] on every mutation. Load failure is fatal; persist
//! failure logs a warning and the session continues in memory.
//!
//! Repositories are `impl DeltaStore` blocks under [`repos`], one file per
//! entity family.

pub mod auth;
pub mod envelope;
pub mod error;
pub mod keys;
pub mod medium;
pub mod repos;
pub mod schema;
pub mod seed;
pub mod store;
pub mod updates;

pub use error::StoreError;
pub use medium::{JsonFileMedium, MemoryMedium, StorageMedium};
pub use schema::SchemaRegistry;
pub use store::DeltaStore;
