//! Sample data that seeds a fresh store and the analytics page.

use crate::model::contact::Contact;
use crate::model::deal::{Deal, DEFAULT_CURRENCY};
use crate::model::email_track::EmailTrack;
use crate::model::stage::PipelineStage;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

type ContactRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
    Option<(i32, u32, u32)>,
    (i32, u32, u32),
);

#[rustfmt::skip]
const CONTACTS: &[ContactRow] = &[
    ("c1", "Sarah Chen", "sarah@acmecorp.com", "+1 415-555-0101", "Acme Corp", "Decision maker, prefers email", &["Enterprise", "Tech"], Some((2026, 2, 18)), (2026, 1, 5)),
    ("c2", "James Rodriguez", "james@globex.io", "+1 212-555-0202", "Globex Inc", "VP of Operations", &["Mid-Market", "Operations"], Some((2026, 2, 15)), (2026, 1, 10)),
    ("c3", "Emily Watson", "emily@initech.com", "+44 20-7946-0303", "Initech", "Interested in annual plan", &["Enterprise", "Finance"], Some((2026, 2, 12)), (2026, 1, 12)),
    ("c4", "Michael Park", "mpark@umbrella.co", "+1 650-555-0404", "Umbrella Co", "Needs demo next week", &["Startup", "Tech"], Some((2026, 2, 19)), (2026, 1, 20)),
    ("c5", "Lisa Nakamura", "lisa@wayne.ent", "+1 310-555-0505", "Wayne Enterprises", "Referred by John", &["Enterprise", "Security"], None, (2026, 2, 1)),
    ("c6", "David Kim", "dkim@stark.ind", "+1 408-555-0606", "Stark Industries", "CTO, technical evaluation", &["Enterprise", "Tech"], Some((2026, 2, 10)), (2026, 2, 5)),
    ("c7", "Anna Petrov", "anna@oscorp.net", "+1 718-555-0707", "Oscorp", "Budget approved Q1", &["Mid-Market", "Biotech"], Some((2026, 2, 17)), (2026, 2, 8)),
];

type DealRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    PipelineStage,
    f64,
    Option<(i32, u32, u32)>,
    &'static str,
    (i32, u32, u32),
    (i32, u32, u32),
);

#[rustfmt::skip]
const DEALS: &[DealRow] = &[
    ("d1", "Acme Enterprise License", "c1", "Sarah Chen", PipelineStage::Proposal, 48000.0, Some((2026, 3, 15)), "Annual license, 50 seats", (2026, 1, 15), (2026, 2, 18)),
    ("d2", "Globex Integration Package", "c2", "James Rodriguez", PipelineStage::Negotiation, 32000.0, Some((2026, 3, 1)), "Custom API integration needed", (2026, 1, 18), (2026, 2, 15)),
    ("d3", "Initech Annual Plan", "c3", "Emily Watson", PipelineStage::Contacted, 24000.0, Some((2026, 4, 1)), "Follow up after demo", (2026, 1, 22), (2026, 2, 12)),
    ("d4", "Umbrella Starter Pack", "c4", "Michael Park", PipelineStage::Lead, 8000.0, None, "Inbound from website", (2026, 2, 10), (2026, 2, 19)),
    ("d5", "Wayne Security Suite", "c5", "Lisa Nakamura", PipelineStage::Lead, 96000.0, Some((2026, 6, 1)), "Large deal, needs executive approval", (2026, 2, 1), (2026, 2, 14)),
    ("d6", "Stark Tech Eval", "c6", "David Kim", PipelineStage::Proposal, 64000.0, Some((2026, 3, 20)), "Technical POC running", (2026, 2, 5), (2026, 2, 16)),
    ("d7", "Oscorp Q1 Deal", "c7", "Anna Petrov", PipelineStage::Won, 18000.0, Some((2026, 2, 15)), "Closed! Onboarding starts Monday", (2026, 2, 8), (2026, 2, 15)),
    ("d8", "Globex Phase 2", "c2", "James Rodriguez", PipelineStage::Lead, 15000.0, None, "Expansion opportunity", (2026, 2, 12), (2026, 2, 18)),
    ("d9", "Initech Addon", "c3", "Emily Watson", PipelineStage::Lost, 12000.0, Some((2026, 2, 10)), "Went with competitor", (2026, 1, 28), (2026, 2, 10)),
];

type TrackRow = (
    &'static str,
    &'static str,
    &'static str,
    (i32, u32, u32, u32, u32),
    u32,
    Option<(i32, u32, u32, u32, u32)>,
    u32,
);

#[rustfmt::skip]
const EMAIL_TRACKS: &[TrackRow] = &[
    ("t1", "sarah@acmecorp.com", "Acme Enterprise Proposal - Updated Pricing", (2026, 2, 18, 10, 30), 5, Some((2026, 2, 19, 14, 22)), 2),
    ("t2", "james@globex.io", "Re: Globex Integration Timeline", (2026, 2, 15, 9, 15), 3, Some((2026, 2, 17, 11, 5)), 1),
    ("t3", "emily@initech.com", "Initech Demo Follow-Up", (2026, 2, 12, 14, 0), 1, Some((2026, 2, 12, 16, 30)), 0),
    ("t4", "mpark@umbrella.co", "Welcome aboard - Getting Started", (2026, 2, 19, 8, 0), 2, Some((2026, 2, 20, 9, 10)), 3),
    ("t5", "dkim@stark.ind", "Technical Evaluation - Architecture Doc", (2026, 2, 16, 11, 45), 8, Some((2026, 2, 19, 16, 55)), 4),
    ("t6", "anna@oscorp.net", "Oscorp Onboarding Schedule", (2026, 2, 15, 13, 20), 4, Some((2026, 2, 18, 10, 0)), 2),
    ("t7", "lisa@wayne.ent", "Wayne Enterprises - Security Overview", (2026, 2, 14, 15, 30), 0, None, 0),
];

/// The seven sample contacts.
pub fn sample_contacts() -> Vec<Contact> {
    CONTACTS
        .iter()
        .map(|&row| {
            let (id, name, email, phone, company, notes, tags, last_contacted, created_at) = row;
            Contact {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                company: company.to_string(),
                notes: notes.to_string(),
                tags: tags.iter().map(|tag| tag.to_string()).collect(),
                last_contacted: last_contacted.map(day),
                created_at: day(created_at),
            }
        })
        .collect()
}

/// The nine sample deals spread across every stage.
pub fn sample_deals() -> Vec<Deal> {
    DEALS
        .iter()
        .map(|&row| {
            let (
                id,
                name,
                contact_id,
                contact_name,
                stage,
                value,
                close_date,
                notes,
                created_at,
                updated_at,
            ) = row;
            Deal {
                id: id.to_string(),
                name: name.to_string(),
                contact_id: contact_id.to_string(),
                contact_name: contact_name.to_string(),
                contact_email: None,
                stage,
                value,
                currency: DEFAULT_CURRENCY.to_string(),
                close_date: close_date.map(day),
                notes: notes.to_string(),
                created_at: day(created_at),
                updated_at: day(updated_at),
            }
        })
        .collect()
}

/// Static email tracking rows for the analytics page.
pub fn sample_email_tracks() -> Vec<EmailTrack> {
    EMAIL_TRACKS
        .iter()
        .map(|&row| {
            let (id, recipient, subject, sent_at, open_count, last_opened_at, link_clicks) = row;
            EmailTrack {
                id: id.to_string(),
                recipient_email: recipient.to_string(),
                subject: subject.to_string(),
                sent_at: instant(sent_at),
                open_count,
                last_opened_at: last_opened_at.map(instant),
                link_clicks,
            }
        })
        .collect()
}

fn day((year, month, date): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).unwrap_or_default()
}

fn instant((year, month, date, hour, minute): (i32, u32, u32, u32, u32)) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, hour, minute, 0)
        .single()
        .unwrap_or_default()
}
