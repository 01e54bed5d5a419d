//! # Opayo Client
//!
//! Request message layer for the Opayo Pi gateway API.
//!
//! Messages are thin value objects: each kind knows its resource path and
//! HTTP method, derives its URL from an [`AuthContext`], and can produce
//! its Basic-Authentication header and outbound body. Sending them is the
//! transport's job, not this crate's.

pub mod auth;
pub mod error;
pub mod message;
pub mod transaction;

// Re-export commonly used types
pub use auth::{Auth, AuthContext, Endpoint};
pub use error::ClientError;
pub use message::Request;
pub use transaction::TransactionRequest;
