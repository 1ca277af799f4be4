//! Normalization of raw "new deal" / "new contact" form input.
//!
//! # Invariants
//! - Deal names, contact names and contact emails are non-blank after trim.
//! - Deal values never fail to parse; bad input becomes `0`.
//! - Tags keep their typed order; blanks are dropped, duplicates kept.

use crate::model::contact::NewContact;
use crate::model::deal::{parse_deal_value, NewDeal, DEFAULT_CURRENCY};
use crate::model::stage::{ParseStageError, PipelineStage};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    BlankName,
    BlankEmail,
    InvalidDate(String),
    UnknownStage(ParseStageError),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::BlankEmail => write!(f, "email must not be blank"),
            Self::InvalidDate(value) => write!(f, "invalid date `{value}`; expected YYYY-MM-DD"),
            Self::UnknownStage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownStage(err) => Some(err),
            Self::BlankName | Self::BlankEmail | Self::InvalidDate(_) => None,
        }
    }
}

impl From<ParseStageError> for FormError {
    fn from(value: ParseStageError) -> Self {
        Self::UnknownStage(value)
    }
}

/// Raw field values of the "new deal" modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealForm {
    pub name: String,
    pub contact_name: String,
    pub contact_email: String,
    /// Stage name; blank selects the first stage.
    pub stage: String,
    pub value: String,
    /// `YYYY-MM-DD` or blank.
    pub close_date: String,
    pub notes: String,
}

impl DealForm {
    /// Validates the form into store input dated `today`.
    ///
    /// # Errors
    /// - `BlankName` when the deal name is blank.
    /// - `UnknownStage` when the stage names no pipeline stage.
    /// - `InvalidDate` when the close date is set but unparseable.
    pub fn into_new_deal(self, today: NaiveDate) -> Result<NewDeal, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::BlankName);
        }

        let stage = if self.stage.trim().is_empty() {
            PipelineStage::default()
        } else {
            self.stage.parse::<PipelineStage>()?
        };
        let contact_email = if self.contact_email.trim().is_empty() {
            None
        } else {
            Some(self.contact_email.trim().to_string())
        };

        Ok(NewDeal {
            name: self.name,
            contact_id: String::new(),
            contact_name: self.contact_name,
            contact_email,
            stage,
            value: parse_deal_value(&self.value),
            currency: DEFAULT_CURRENCY.to_string(),
            close_date: parse_optional_date(&self.close_date)?,
            notes: self.notes,
            created_at: today,
            updated_at: today,
        })
    }
}

/// Raw field values of the "new contact" modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    /// Comma-separated tags, e.g. `"Enterprise, Tech, VIP"`.
    pub tags: String,
    pub notes: String,
}

impl ContactForm {
    /// Validates the form into store input created `today`.
    ///
    /// # Errors
    /// - `BlankName` / `BlankEmail` when either required field is blank.
    pub fn into_new_contact(self, today: NaiveDate) -> Result<NewContact, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::BlankName);
        }
        if self.email.trim().is_empty() {
            return Err(FormError::BlankEmail);
        }

        Ok(NewContact {
            tags: parse_tags(&self.tags),
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            notes: self.notes,
            last_contacted: None,
            created_at: today,
        })
    }
}

/// Splits comma-separated tag input, trimming and dropping blanks.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_optional_date(raw: &str) -> Result<Option<NaiveDate>, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FormError::InvalidDate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_tags;

    #[test]
    fn parse_tags_trims_and_drops_blanks() {
        assert_eq!(
            parse_tags(" Enterprise, Tech ,,VIP, Tech "),
            vec!["Enterprise", "Tech", "VIP", "Tech"]
        );
        assert!(parse_tags("  ,  ").is_empty());
    }
}
