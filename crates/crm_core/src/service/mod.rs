//! Use-case helpers layered over the store.
//!
//! # Responsibility
//! - Project store state into board columns and analytics figures.
//! - Translate raw UI input (form fields, drop payloads) into store calls.
//!
//! # Invariants
//! - Services never mutate collections except through `CrmStore`.

pub mod analytics;
pub mod board;
pub mod contact_search;
pub mod forms;
