//! CRM domain store.
//!
//! # Responsibility
//! - Own the ordered deal and contact collections for a session.
//! - Enforce the deal-creation contact auto-create rule.
//! - Apply stage transitions.
//!
//! # Invariants
//! - The store is the only writer of both collections; the key-value cache
//!   is a mirror.
//! - Insertion order is display order; updates never reorder.
//! - Mutations of unknown ids are silent no-ops.

pub mod clock;
pub mod crm_store;
pub mod ids;
