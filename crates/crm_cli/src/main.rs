//! CLI probe for the CRM core.
//!
//! # Responsibility
//! - Verify `crm_core` linkage and the configured store end to end.
//! - Print the pipeline board as plain, deterministic text.

use crm_core::service::analytics::{email_stats, won_value};
use crm_core::{
    board, pipeline_summary, sample_email_tracks, CrmConfig, CrmStore, SqliteKvRepository,
};
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("crm_core ping={}", crm_core::ping());
    println!("crm_core version={}", crm_core::core_version());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_run module=cli status=error error={message}");
            eprintln!("crm_cli: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let config = CrmConfig::from_env().map_err(|err| err.to_string())?;
    config.init_logging()?;

    let conn = config.open_db().map_err(|err| err.to_string())?;
    let store = CrmStore::load(SqliteKvRepository::new(&conn), config.store_options());

    for column in board(store.deals()) {
        println!(
            "stage={} deals={} value={:.0}",
            column.stage,
            column.count(),
            column.total_value
        );
    }

    let summary = pipeline_summary(store.deals());
    println!(
        "active_deals={} total_value={:.0} won_value={:.0} contacts={}",
        summary.active_deals,
        summary.total_value,
        won_value(store.deals()),
        store.contacts().len()
    );

    let emails = email_stats(&sample_email_tracks());
    println!(
        "emails_sent={} opens={} clicks={} open_rate={}%",
        emails.sent, emails.opens, emails.clicks, emails.open_rate_percent
    );
    Ok(())
}
