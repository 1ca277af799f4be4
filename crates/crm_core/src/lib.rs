//! Core domain logic for the CRM pipeline board and contacts list.
//! This crate is the single source of truth for deal/contact invariants.

pub mod cache;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use cache::persisted_cell::{read_value, write_value, PersistedCell};
pub use config::{ConfigError, CrmConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactId, ContactPatch, NewContact, AUTO_CONTACT_TAG};
pub use model::deal::{parse_deal_value, Deal, DealId, DealPatch, NewDeal, DEFAULT_CURRENCY};
pub use model::email_track::EmailTrack;
pub use model::sample::{sample_contacts, sample_deals, sample_email_tracks};
pub use model::stage::{ParseStageError, Pipeline, PipelineStage};
pub use repo::kv_repo::{KvError, KvRepository, KvResult, MemoryKvRepository, SqliteKvRepository};
pub use service::board::{board, handle_drop, pipeline_summary, BoardColumn, DropOutcome};
pub use service::forms::{ContactForm, DealForm, FormError};
pub use store::clock::{Clock, FixedClock, SystemClock};
pub use store::crm_store::{
    CrmStore, StoreError, StoreOptions, StoreResult, CONTACTS_KEY, DEALS_KEY,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
