//! CRM domain model.
//!
//! # Responsibility
//! - Define the deal, contact and email-tracking records owned or read by
//!   the core.
//! - Define the closed pipeline stage enumeration.
//!
//! # Invariants
//! - Every deal and contact carries a unique string identifier.
//! - A deal's stage is always one of the six `PipelineStage` values.
//! - Deals keep a denormalized copy of contact name/email, never a live
//!   reference.

pub mod contact;
pub mod deal;
pub mod email_track;
pub mod sample;
pub mod stage;
