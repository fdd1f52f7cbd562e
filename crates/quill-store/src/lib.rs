//! quill-store: Storage layer for the Quill document platform
//!
//! This crate provides:
//! - PostgreSQL storage for documents and their access policies
//! - The partition queries behind directory listing and search
//! - Single-statement atomic sharing mutations
//! - Migration management
//!
//! # Architecture
//!
//! The store relies on PostgreSQL per-row atomicity for all mutations: a
//! grant, revoke, rename, or visibility toggle is one read-modify-write
//! statement, so this layer holds no lock of its own and never carries
//! state across an await.
//!
//! # Usage
//!
//! ```rust,ignore
//! use quill_store::{Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let owned = store.list_owned(owner).await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::{DocumentRow, NewDocument, UserRow};
pub use store::{Store, StoreConfig};

// Re-export quill-core for downstream crates
pub use quill_core;
