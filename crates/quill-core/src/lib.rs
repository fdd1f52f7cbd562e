//! quill-core: Core types and decisions for the Quill document platform
//!
//! This crate holds the parts of the system with real invariants and no I/O:
//!
//! - Document and identity types (`types`)
//! - The access-control decision table (`access`)
//! - The partition-merge combinator behind directory listing and search
//!   (`directory`)
//!
//! Everything here is deterministic and side-effect free. Persistence and
//! transport live in `quill-store` and `quill-server`.

pub mod access;
pub mod directory;
pub mod types;

pub use access::{Capability, Decision, authorize, public_read};
pub use directory::{merge_partitions, sort_by_recency};
pub use types::{Document, DocumentId, UserId, UserProfile};
