//! Deal domain model.
//!
//! # Invariants
//! - `stage` is always a `PipelineStage`; unknown names never reach a deal.
//! - `value` produced by `parse_deal_value` is finite and non-negative.
//! - `updated_at` moves forward on every store mutation.

use crate::model::stage::PipelineStage;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a deal (`d` + random suffix for new deals).
pub type DealId = String;

/// Currency assigned to deals created from the board form.
pub const DEFAULT_CURRENCY: &str = "USD";

/// One sales opportunity on the pipeline board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: DealId,
    pub name: String,
    /// Denormalized contact id; empty for deals created from the board form.
    #[serde(default)]
    pub contact_id: String,
    pub contact_name: String,
    /// Denormalized contact email captured at creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    pub stage: PipelineStage,
    pub value: f64,
    pub currency: String,
    pub close_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl Deal {
    /// Builds a stored deal from creation input and a freshly minted id.
    pub fn from_new(id: DealId, input: NewDeal) -> Self {
        Self {
            id,
            name: input.name,
            contact_id: input.contact_id,
            contact_name: input.contact_name,
            contact_email: input.contact_email,
            stage: input.stage,
            value: input.value,
            currency: input.currency,
            close_date: input.close_date,
            notes: input.notes,
            created_at: input.created_at,
            updated_at: input.updated_at,
        }
    }

    /// Whole days since the last update, never negative.
    pub fn days_in_stage(&self, today: NaiveDate) -> i64 {
        (today - self.updated_at).num_days().max(0)
    }
}

/// Creation input for `CrmStore::add_deal`; everything but the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDeal {
    pub name: String,
    pub contact_id: String,
    pub contact_name: String,
    /// When set together with a non-blank `contact_name`, the store makes
    /// sure a contact with this email exists.
    pub contact_email: Option<String>,
    pub stage: PipelineStage,
    pub value: f64,
    pub currency: String,
    pub close_date: Option<NaiveDate>,
    pub notes: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl NewDeal {
    /// Creates input with defaults for everything except name and dates.
    pub fn new(name: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            name: name.into(),
            contact_id: String::new(),
            contact_name: String::new(),
            contact_email: None,
            stage: PipelineStage::default(),
            value: 0.0,
            currency: DEFAULT_CURRENCY.to_string(),
            close_date: None,
            notes: String::new(),
            created_at: today,
            updated_at: today,
        }
    }
}

/// Field-level partial update; `None` leaves the field untouched.
///
/// Nested options (`close_date`, `contact_email`) distinguish "leave as is"
/// (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DealPatch {
    pub name: Option<String>,
    pub contact_id: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<Option<String>>,
    pub stage: Option<PipelineStage>,
    pub value: Option<f64>,
    pub currency: Option<String>,
    pub close_date: Option<Option<NaiveDate>>,
    pub notes: Option<String>,
    pub created_at: Option<NaiveDate>,
    pub updated_at: Option<NaiveDate>,
}

impl DealPatch {
    /// Patch produced by a stage transition.
    pub fn move_to(stage: PipelineStage, today: NaiveDate) -> Self {
        Self {
            stage: Some(stage),
            updated_at: Some(today),
            ..Self::default()
        }
    }

    /// Merges set fields into `deal`.
    pub fn apply_to(self, deal: &mut Deal) {
        if let Some(name) = self.name {
            deal.name = name;
        }
        if let Some(contact_id) = self.contact_id {
            deal.contact_id = contact_id;
        }
        if let Some(contact_name) = self.contact_name {
            deal.contact_name = contact_name;
        }
        if let Some(contact_email) = self.contact_email {
            deal.contact_email = contact_email;
        }
        if let Some(stage) = self.stage {
            deal.stage = stage;
        }
        if let Some(value) = self.value {
            deal.value = value;
        }
        if let Some(currency) = self.currency {
            deal.currency = currency;
        }
        if let Some(close_date) = self.close_date {
            deal.close_date = close_date;
        }
        if let Some(notes) = self.notes {
            deal.notes = notes;
        }
        if let Some(created_at) = self.created_at {
            deal.created_at = created_at;
        }
        if let Some(updated_at) = self.updated_at {
            deal.updated_at = updated_at;
        }
    }
}

/// Parses a user-entered deal value.
///
/// Accepts the longest leading decimal prefix (`"1200 USD"` -> 1200).
/// Anything unparseable, negative or non-finite becomes `0.0`.
pub fn parse_deal_value(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let parsed = trimmed
        .parse::<f64>()
        .ok()
        .or_else(|| leading_number(trimmed));

    match parsed {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

fn leading_number(text: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (idx, ch) in text.char_indices() {
        match ch {
            '+' | '-' if idx == 0 => {}
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = idx + ch.len_utf8();
    }
    text[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_deal_value, DealPatch, NewDeal};
    use crate::model::deal::Deal;
    use crate::model::stage::PipelineStage;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_deal_value_falls_back_to_zero() {
        assert_eq!(parse_deal_value("48000"), 48000.0);
        assert_eq!(parse_deal_value(" 12.5 "), 12.5);
        assert_eq!(parse_deal_value("1200 USD"), 1200.0);
        assert_eq!(parse_deal_value(""), 0.0);
        assert_eq!(parse_deal_value("abc"), 0.0);
        assert_eq!(parse_deal_value("-40"), 0.0);
        assert_eq!(parse_deal_value("inf"), 0.0);
    }

    #[test]
    fn patch_only_touches_set_fields() {
        let mut deal = Deal::from_new("d1".to_string(), NewDeal::new("Pilot", date(2026, 2, 1)));
        deal.close_date = Some(date(2026, 3, 1));

        DealPatch {
            notes: Some("call back".to_string()),
            close_date: Some(None),
            ..DealPatch::default()
        }
        .apply_to(&mut deal);

        assert_eq!(deal.notes, "call back");
        assert_eq!(deal.close_date, None);
        assert_eq!(deal.name, "Pilot");
        assert_eq!(deal.stage, PipelineStage::Lead);
    }

    #[test]
    fn days_in_stage_is_floored_at_zero() {
        let deal = Deal::from_new("d1".to_string(), NewDeal::new("Pilot", date(2026, 2, 10)));
        assert_eq!(deal.days_in_stage(date(2026, 2, 15)), 5);
        assert_eq!(deal.days_in_stage(date(2026, 2, 1)), 0);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let deal = Deal::from_new("d1".to_string(), NewDeal::new("Pilot", date(2026, 2, 10)));
        let json = serde_json::to_value(&deal).unwrap();
        assert_eq!(json["contactName"], "");
        assert_eq!(json["updatedAt"], "2026-02-10");
        assert_eq!(json["stage"], "Lead");
        assert!(json.get("contactEmail").is_none());
    }
}
