//! Middleware for the HTTP API.

pub mod request_id;
