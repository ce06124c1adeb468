//! Command families of the facade, grouped the way Redis groups them.
//!
//! Every operation follows the same shape: qualify the key, run the command,
//! report it when it crosses the slow threshold, and wrap any client error
//! into [`KeyspaceError::Store`](keyspace_core::KeyspaceError::Store). No
//! retries, no command-specific recovery.

mod hashes;
mod lists;
mod scripts;
mod sets;
mod sorted_sets;
mod strings;
