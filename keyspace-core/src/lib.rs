//! Store-agnostic building blocks for the keyspace facade.
//!
//! This crate carries everything that does not touch a concrete store client:
//! namespace resolution and key qualification, hash-field encoding, the
//! configuration surface, the slow-call threshold, the error taxonomy and the
//! pluggable value serialization formats. Store implementations (for example
//! `keyspace-redis`) build on top of these types.

pub mod config;
pub mod error;
pub mod format;
pub mod key;
pub mod observe;

pub use config::KeyspaceConfig;
pub use error::KeyspaceError;
pub use format::{BincodeFormat, FormatError, JsonFormat, ValueFormat};
pub use key::{Namespace, encode_field};
pub use observe::SlowThreshold;
