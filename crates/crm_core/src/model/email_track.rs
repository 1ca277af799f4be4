//! Read-only email tracking rows shown on the analytics page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Open/click statistics for one sent email. Never mutated by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTrack {
    pub id: String,
    pub recipient_email: String,
    pub subject: String,
    pub sent_at: DateTime<Utc>,
    pub open_count: u32,
    pub last_opened_at: Option<DateTime<Utc>>,
    pub link_clicks: u32,
}

impl EmailTrack {
    pub fn was_opened(&self) -> bool {
        self.open_count > 0
    }
}
