use chrono::NaiveDate;
use crm_core::service::analytics::{
    deals_by_stage, email_stats, pipeline_value, value_by_stage, won_value,
};
use crm_core::service::contact_search::search_contacts;
use crm_core::{
    sample_deals, sample_email_tracks, ContactForm, CrmStore, DealForm, FixedClock, FormError,
    MemoryKvRepository, PipelineStage, StoreOptions, DEFAULT_CURRENCY,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 20).unwrap()
}

#[test]
fn deal_form_requires_a_name() {
    let err = DealForm {
        name: "   ".to_string(),
        ..DealForm::default()
    }
    .into_new_deal(today())
    .unwrap_err();

    assert_eq!(err, FormError::BlankName);
}

#[test]
fn deal_form_applies_defaults_and_value_fallback() {
    let deal = DealForm {
        name: "Enterprise License".to_string(),
        value: "lots".to_string(),
        ..DealForm::default()
    }
    .into_new_deal(today())
    .unwrap();

    assert_eq!(deal.stage, PipelineStage::Lead);
    assert_eq!(deal.value, 0.0);
    assert_eq!(deal.currency, DEFAULT_CURRENCY);
    assert_eq!(deal.close_date, None);
    assert_eq!(deal.contact_email, None);
    assert_eq!(deal.contact_id, "");
    assert_eq!(deal.created_at, today());
    assert_eq!(deal.updated_at, today());
}

#[test]
fn deal_form_parses_stage_value_and_close_date() {
    let deal = DealForm {
        name: "Stark Expansion".to_string(),
        contact_name: "David Kim".to_string(),
        contact_email: " dkim@stark.ind ".to_string(),
        stage: "Proposal".to_string(),
        value: "64000".to_string(),
        close_date: "2026-03-20".to_string(),
        notes: "Second POC".to_string(),
    }
    .into_new_deal(today())
    .unwrap();

    assert_eq!(deal.stage, PipelineStage::Proposal);
    assert_eq!(deal.value, 64000.0);
    assert_eq!(deal.close_date, NaiveDate::from_ymd_opt(2026, 3, 20));
    assert_eq!(deal.contact_email.as_deref(), Some("dkim@stark.ind"));
}

#[test]
fn deal_form_rejects_bad_stage_and_date() {
    let bad_stage = DealForm {
        name: "X".to_string(),
        stage: "Parked".to_string(),
        ..DealForm::default()
    }
    .into_new_deal(today())
    .unwrap_err();
    assert!(matches!(bad_stage, FormError::UnknownStage(_)));

    let bad_date = DealForm {
        name: "X".to_string(),
        close_date: "03/20/2026".to_string(),
        ..DealForm::default()
    }
    .into_new_deal(today())
    .unwrap_err();
    assert_eq!(bad_date, FormError::InvalidDate("03/20/2026".to_string()));
}

#[test]
fn submitted_deal_form_auto_creates_contact_in_store() {
    let mut store = CrmStore::load(
        MemoryKvRepository::new(),
        StoreOptions {
            seed_sample_data: false,
        },
    )
    .with_clock(FixedClock(today()));
    let input = DealForm {
        name: "X".to_string(),
        contact_name: "Y".to_string(),
        contact_email: "y@z.com".to_string(),
        value: "100".to_string(),
        ..DealForm::default()
    }
    .into_new_deal(store.today())
    .unwrap();

    store.add_deal(input);

    assert_eq!(store.deals()[0].value, 100.0);
    assert_eq!(store.contacts()[0].email, "y@z.com");
}

#[test]
fn contact_form_requires_name_and_email_and_splits_tags() {
    let missing_email = ContactForm {
        name: "Jane Doe".to_string(),
        ..ContactForm::default()
    }
    .into_new_contact(today())
    .unwrap_err();
    assert_eq!(missing_email, FormError::BlankEmail);

    let missing_name = ContactForm {
        email: "jane@company.com".to_string(),
        ..ContactForm::default()
    }
    .into_new_contact(today())
    .unwrap_err();
    assert_eq!(missing_name, FormError::BlankName);

    let contact = ContactForm {
        name: "Jane Doe".to_string(),
        email: "jane@company.com".to_string(),
        tags: "Enterprise, Tech, , VIP".to_string(),
        ..ContactForm::default()
    }
    .into_new_contact(today())
    .unwrap();
    assert_eq!(contact.tags, vec!["Enterprise", "Tech", "VIP"]);
    assert_eq!(contact.last_contacted, None);
    assert_eq!(contact.created_at, today());
}

#[test]
fn contact_search_runs_over_store_contacts() {
    let store = CrmStore::load(MemoryKvRepository::new(), StoreOptions::default());

    let hits = search_contacts(store.contacts(), "tech");
    let ids: Vec<&str> = hits.iter().map(|contact| contact.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c4", "c6", "c7"]);
}

#[test]
fn analytics_over_sample_data() {
    let deals = sample_deals();

    let counts: Vec<(PipelineStage, usize)> = deals_by_stage(&deals)
        .into_iter()
        .map(|figure| (figure.stage, figure.value))
        .collect();
    assert_eq!(
        counts,
        vec![
            (PipelineStage::Lead, 3),
            (PipelineStage::Contacted, 1),
            (PipelineStage::Proposal, 2),
            (PipelineStage::Negotiation, 1),
            (PipelineStage::Won, 1),
            (PipelineStage::Lost, 1),
        ]
    );

    let values = value_by_stage(&deals);
    assert_eq!(values.len(), 5);
    assert!(values.iter().all(|figure| figure.stage != PipelineStage::Lost));
    assert_eq!(values[2].value, 112000.0);

    assert_eq!(pipeline_value(&deals), 317000.0);
    assert_eq!(won_value(&deals), 18000.0);
}

#[test]
fn email_stats_over_sample_tracks() {
    let stats = email_stats(&sample_email_tracks());
    assert_eq!(stats.sent, 7);
    assert_eq!(stats.opens, 23);
    assert_eq!(stats.clicks, 12);
    assert_eq!(stats.open_rate_percent, 86);

    let empty = email_stats(&[]);
    assert_eq!(empty.sent, 0);
    assert_eq!(empty.open_rate_percent, 0);
}
