//! Deal/contact store with write-through persistence.
//!
//! # Responsibility
//! - Provide create/update/delete entry points for deals and contacts.
//! - Auto-create a `lead` contact when a deal names an unknown email.
//! - Mirror both collections to the key-value repository on every change.
//!
//! # Invariants
//! - `add_deal` appends exactly one deal with an id not already present.
//! - At most one contact is auto-created per email (case-insensitive).
//! - Every deal update refreshes `updated_at` unless the patch sets it.

use crate::cache::persisted_cell::PersistedCell;
use crate::model::contact::{Contact, ContactId, ContactPatch, NewContact};
use crate::model::deal::{Deal, DealId, DealPatch, NewDeal};
use crate::model::sample::{sample_contacts, sample_deals};
use crate::model::stage::{ParseStageError, PipelineStage};
use crate::repo::kv_repo::KvRepository;
use crate::store::clock::{Clock, SystemClock};
use crate::store::ids::{new_contact_id, new_deal_id};
use chrono::NaiveDate;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Repository key holding the JSON deal list.
pub const DEALS_KEY: &str = "crm.deals";
/// Repository key holding the JSON contact list.
pub const CONTACTS_KEY: &str = "crm.contacts";

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised at the store's string boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    UnknownStage(ParseStageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownStage(err) => Some(err),
        }
    }
}

impl From<ParseStageError> for StoreError {
    fn from(value: ParseStageError) -> Self {
        Self::UnknownStage(value)
    }
}

/// Load-time options for `CrmStore::load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Use sample deals/contacts when a collection has never been stored.
    pub seed_sample_data: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
        }
    }
}

/// Session-owned CRM state.
///
/// Callers hold the store by value or `&mut`, so there is exactly one
/// writer and every mutation runs to completion before the next one.
pub struct CrmStore<R: KvRepository> {
    repo: R,
    clock: Box<dyn Clock>,
    deals: PersistedCell<Vec<Deal>>,
    contacts: PersistedCell<Vec<Contact>>,
}

impl<R: KvRepository> CrmStore<R> {
    /// Loads both collections from `repo`.
    ///
    /// Missing (or unreadable) entries fall back to the sample data or to an
    /// empty list; nothing is written until the first mutation.
    pub fn load(repo: R, options: StoreOptions) -> Self {
        let seed = options.seed_sample_data;
        let deals = PersistedCell::load(&repo, DEALS_KEY, || {
            if seed {
                sample_deals()
            } else {
                Vec::new()
            }
        });
        let contacts = PersistedCell::load(&repo, CONTACTS_KEY, || {
            if seed {
                sample_contacts()
            } else {
                Vec::new()
            }
        });

        info!(
            "event=store_load module=store status=ok deals={} contacts={} seed_sample_data={seed}",
            deals.get().len(),
            contacts.get().len()
        );

        Self {
            repo,
            clock: Box::new(SystemClock),
            deals,
            contacts,
        }
    }

    /// Replaces the date source used for new and updated records.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn deals(&self) -> &[Deal] {
        self.deals.get()
    }

    pub fn contacts(&self) -> &[Contact] {
        self.contacts.get()
    }

    pub fn deal(&self, id: &str) -> Option<&Deal> {
        self.deals.get().iter().find(|deal| deal.id == id)
    }

    pub fn contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.get().iter().find(|contact| contact.id == id)
    }

    /// First contact whose email matches case-insensitively.
    pub fn contact_by_email(&self, email: &str) -> Option<&Contact> {
        self.contacts
            .get()
            .iter()
            .find(|contact| contact.has_email(email))
    }

    /// Returns whether any write-through has failed this session.
    ///
    /// In-memory state stays authoritative either way.
    pub fn persistence_degraded(&self) -> bool {
        self.deals.is_degraded() || self.contacts.is_degraded()
    }

    /// Appends a deal and returns its new id.
    ///
    /// When the input has a non-blank contact name and email and no contact
    /// has that email yet, a `lead`-tagged contact is appended as well.
    pub fn add_deal(&mut self, input: NewDeal) -> DealId {
        let id = self.fresh_id(new_deal_id, |store, id| store.deal(id).is_some());
        let auto_contact = match (&input.contact_email, input.contact_name.trim()) {
            (Some(email), name) if !email.trim().is_empty() && !name.is_empty() => {
                Some((name.to_string(), email.clone()))
            }
            _ => None,
        };

        let deal = Deal::from_new(id.clone(), input);
        self.deals.update(&self.repo, |deals| deals.push(deal));
        info!("event=deal_add module=store status=ok deal_id={id}");

        if let Some((name, email)) = auto_contact {
            self.ensure_contact_for_email(name, email);
        }

        id
    }

    /// Merges `patch` into the deal with `id`; unknown ids are ignored.
    pub fn update_deal(&mut self, id: &str, mut patch: DealPatch) {
        let Some(index) = self.deal_index(id) else {
            debug!("event=deal_update module=store status=skipped reason=not_found deal_id={id}");
            return;
        };

        if patch.updated_at.is_none() {
            patch.updated_at = Some(self.clock.today());
        }
        self.deals
            .update(&self.repo, |deals| patch.apply_to(&mut deals[index]));
        debug!("event=deal_update module=store status=ok deal_id={id}");
    }

    /// Removes the deal with `id`; contacts are never touched.
    pub fn delete_deal(&mut self, id: &str) {
        if self.deal_index(id).is_none() {
            debug!("event=deal_delete module=store status=skipped reason=not_found deal_id={id}");
            return;
        }

        self.deals
            .update(&self.repo, |deals| deals.retain(|deal| deal.id != id));
        info!("event=deal_delete module=store status=ok deal_id={id}");
    }

    /// Moves a deal to `stage` and stamps today as its last update.
    ///
    /// Any stage may follow any other; moving onto the current stage still
    /// refreshes the date.
    pub fn move_deal(&mut self, id: &str, stage: PipelineStage) {
        let today = self.clock.today();
        self.update_deal(id, DealPatch::move_to(stage, today));
    }

    /// `move_deal` for callers holding a stage name, e.g. a drop target.
    ///
    /// # Errors
    /// - `StoreError::UnknownStage` when `stage` names no pipeline stage; the
    ///   deal is left untouched.
    pub fn move_deal_named(&mut self, id: &str, stage: &str) -> StoreResult<()> {
        let stage = stage.parse::<PipelineStage>()?;
        self.move_deal(id, stage);
        Ok(())
    }

    /// Appends a contact. Duplicate emails are allowed on this path.
    pub fn add_contact(&mut self, input: NewContact) -> ContactId {
        let id = self.fresh_id(new_contact_id, |store, id| store.contact(id).is_some());
        let contact = Contact::from_new(id.clone(), input);
        self.contacts
            .update(&self.repo, |contacts| contacts.push(contact));
        info!("event=contact_add module=store status=ok contact_id={id}");
        id
    }

    pub fn update_contact(&mut self, id: &str, patch: ContactPatch) {
        let Some(index) = self.contact_index(id) else {
            debug!(
                "event=contact_update module=store status=skipped reason=not_found contact_id={id}"
            );
            return;
        };

        self.contacts
            .update(&self.repo, |contacts| patch.apply_to(&mut contacts[index]));
        debug!("event=contact_update module=store status=ok contact_id={id}");
    }

    /// Removes the contact with `id`; deals keep their denormalized copy.
    pub fn delete_contact(&mut self, id: &str) {
        if self.contact_index(id).is_none() {
            debug!(
                "event=contact_delete module=store status=skipped reason=not_found contact_id={id}"
            );
            return;
        }

        self.contacts.update(&self.repo, |contacts| {
            contacts.retain(|contact| contact.id != id)
        });
        info!("event=contact_delete module=store status=ok contact_id={id}");
    }

    fn ensure_contact_for_email(&mut self, name: String, email: String) {
        if self.contact_by_email(&email).is_some() {
            debug!("event=contact_auto_create module=store status=skipped reason=email_exists");
            return;
        }

        let today = self.clock.today();
        let id = self.add_contact(NewContact::auto_lead(name, email, today));
        info!("event=contact_auto_create module=store status=ok contact_id={id}");
    }

    fn deal_index(&self, id: &str) -> Option<usize> {
        self.deals.get().iter().position(|deal| deal.id == id)
    }

    fn contact_index(&self, id: &str) -> Option<usize> {
        self.contacts
            .get()
            .iter()
            .position(|contact| contact.id == id)
    }

    fn fresh_id(&self, mint: fn() -> String, taken: impl Fn(&Self, &str) -> bool) -> String {
        loop {
            let id = mint();
            if !taken(self, &id) {
                return id;
            }
        }
    }
}
