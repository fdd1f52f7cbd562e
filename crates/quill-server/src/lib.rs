//! quill-server: HTTP API server for the Quill document platform
//!
//! This crate provides:
//! - The authenticated document surface (directory listing, search, CRUD)
//! - The Share Registry endpoints
//! - The unauthenticated public share-link surface
//! - The permission/commit hooks the external collaborative sync engine
//!   calls during its own protocol
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use quill_server::{config::ServerConfig, routes, state::AppState};
//!
//! let config = ServerConfig::from_env()?;
//! let app = routes::build_router(state);
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod presence;
pub mod routes;
pub mod state;
pub mod sync;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
pub use sync::SyncGateway;

// Re-export dependent crates
pub use quill_core;
pub use quill_store;
