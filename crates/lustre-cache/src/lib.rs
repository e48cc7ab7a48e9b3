//! Type-safe key-value storage for the Lustre storefront.
//!
//! The storefront keeps its cart and wishlist in a small key-value store, the
//! way a browser keeps them in local storage. [`KeyValueStore`] is the port;
//! [`MemoryStore`] and [`FileStore`] are the shipped backends, and [`Cache`]
//! adds JSON serialization on top.
//!
//! # Example
//!
//! ```rust,ignore
//! use lustre_cache::Cache;
//!
//! let cache = Cache::open_dir(".lustre")?;
//!
//! // Store a value
//! cache.set("wishlist", &ids)?;
//!
//! // Retrieve a value
//! let ids: Option<Vec<String>> = cache.get("wishlist")?;
//!
//! // Delete a value
//! cache.delete("wishlist")?;
//! ```

mod error;
mod file;
mod kv;
mod store;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::Cache;
pub use store::{KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
