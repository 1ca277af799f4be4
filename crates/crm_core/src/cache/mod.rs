//! Typed persistence cache over the key-value repository.
//!
//! # Responsibility
//! - Read a typed value under one key, falling back to a default.
//! - Write every mutation through to the repository.
//!
//! # Invariants
//! - Reading a missing key never writes the default back.
//! - A failed write never fails the caller; the in-memory value stays
//!   authoritative and the cell is marked degraded.

pub mod persisted_cell;
