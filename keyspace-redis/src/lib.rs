//! Namespaced, latency-instrumented facade over the [`redis`] crate.
//!
//! [`RedisKeyspace`] unifies all keys of one application under an optional
//! namespace prefix, serializes values through a pluggable format and reports
//! commands that run slower than a configured threshold. Everything else —
//! protocol, connections, reconnects — is delegated to
//! [`redis::aio::ConnectionManager`].
//!
//! # Examples
//! ```no_run
//! use keyspace_redis::RedisKeyspace;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), keyspace_redis::KeyspaceError> {
//!     let keyspace = RedisKeyspace::builder()
//!         .server("redis://127.0.0.1/")
//!         .namespace("orders")
//!         .build()?;
//!
//!     keyspace.set("27", &"zyp").await?; // stored under "orders.27"
//!     let value: Option<String> = keyspace.get("27").await?;
//!     assert_eq!(value.as_deref(), Some("zyp"));
//!     Ok(())
//! }
//! ```

pub mod client;
mod commands;
pub mod error;

#[doc(inline)]
pub use crate::client::{RedisKeyspace, RedisKeyspaceBuilder};
pub use crate::error::Error;
pub use keyspace_core::{
    BincodeFormat, JsonFormat, KeyspaceConfig, KeyspaceError, Namespace, SlowThreshold, ValueFormat,
};
