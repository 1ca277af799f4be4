//! Contact domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a contact (`c` + random suffix for new contacts).
pub type ContactId = String;

/// Tag given to contacts created as a side effect of deal creation.
pub const AUTO_CONTACT_TAG: &str = "lead";

/// One person in the contacts list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub notes: String,
    /// Free-text tags in insertion order; duplicates are kept.
    #[serde(default)]
    pub tags: Vec<String>,
    pub last_contacted: Option<NaiveDate>,
    pub created_at: NaiveDate,
}

impl Contact {
    pub fn from_new(id: ContactId, input: NewContact) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            company: input.company,
            notes: input.notes,
            tags: input.tags,
            last_contacted: input.last_contacted,
            created_at: input.created_at,
        }
    }

    /// Case-insensitive email comparison used for contact dedup.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

/// Creation input for `CrmStore::add_contact`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub notes: String,
    pub tags: Vec<String>,
    pub last_contacted: Option<NaiveDate>,
    pub created_at: NaiveDate,
}

impl NewContact {
    /// Contact synthesized for a deal whose email matched nobody.
    pub fn auto_lead(name: impl Into<String>, email: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            company: String::new(),
            notes: String::new(),
            tags: vec![AUTO_CONTACT_TAG.to_string()],
            last_contacted: None,
            created_at: today,
        }
    }
}

/// Field-level partial update for a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub last_contacted: Option<Option<NaiveDate>>,
}

impl ContactPatch {
    pub fn apply_to(self, contact: &mut Contact) {
        if let Some(name) = self.name {
            contact.name = name;
        }
        if let Some(email) = self.email {
            contact.email = email;
        }
        if let Some(phone) = self.phone {
            contact.phone = phone;
        }
        if let Some(company) = self.company {
            contact.company = company;
        }
        if let Some(notes) = self.notes {
            contact.notes = notes;
        }
        if let Some(tags) = self.tags {
            contact.tags = tags;
        }
        if let Some(last_contacted) = self.last_contacted {
            contact.last_contacted = last_contacted;
        }
    }
}
