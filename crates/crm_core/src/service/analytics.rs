//! Aggregate figures for the analytics page.

use crate::model::deal::Deal;
use crate::model::email_track::EmailTrack;
use crate::model::stage::PipelineStage;

/// Count or sum attached to one stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageFigure<T> {
    pub stage: PipelineStage,
    pub value: T,
}

/// Email tracking totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailStats {
    pub sent: usize,
    pub opens: u32,
    pub clicks: u32,
    /// Whole percent of sent emails opened at least once.
    pub open_rate_percent: u32,
}

/// Deal count per stage, every stage in board order.
pub fn deals_by_stage(deals: &[Deal]) -> Vec<StageFigure<usize>> {
    PipelineStage::ALL
        .into_iter()
        .map(|stage| StageFigure {
            stage,
            value: deals.iter().filter(|deal| deal.stage == stage).count(),
        })
        .collect()
}

/// Summed deal value per stage, Lost excluded.
pub fn value_by_stage(deals: &[Deal]) -> Vec<StageFigure<f64>> {
    PipelineStage::ALL
        .into_iter()
        .filter(|stage| *stage != PipelineStage::Lost)
        .map(|stage| StageFigure {
            stage,
            value: stage_value(deals, stage),
        })
        .collect()
}

pub fn pipeline_value(deals: &[Deal]) -> f64 {
    deals.iter().map(|deal| deal.value).sum()
}

pub fn won_value(deals: &[Deal]) -> f64 {
    stage_value(deals, PipelineStage::Won)
}

pub fn email_stats(tracks: &[EmailTrack]) -> EmailStats {
    let sent = tracks.len();
    let opened = tracks.iter().filter(|track| track.was_opened()).count();
    let open_rate_percent = if sent == 0 {
        0
    } else {
        ((opened as f64 / sent as f64) * 100.0).round() as u32
    };

    EmailStats {
        sent,
        opens: tracks.iter().map(|track| track.open_count).sum(),
        clicks: tracks.iter().map(|track| track.link_clicks).sum(),
        open_rate_percent,
    }
}

fn stage_value(deals: &[Deal], stage: PipelineStage) -> f64 {
    deals
        .iter()
        .filter(|deal| deal.stage == stage)
        .map(|deal| deal.value)
        .sum()
}
