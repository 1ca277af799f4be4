//! Durable key-value storage contracts and implementations.
//!
//! # Responsibility
//! - Define the minimal get/set/remove contract the persistence cache
//!   relies on.
//! - Keep SQL details behind the repository boundary.
//!
//! # Invariants
//! - `set` fully replaces any prior value under the same key.
//! - A missing key is `Ok(None)`, never an error.

pub mod kv_repo;
