//! Kanban board projection and drag-and-drop stage transitions.
//!
//! # Invariants
//! - Columns always appear in `PipelineStage::ALL` order, empty or not.
//! - Deals inside a column keep store order.
//! - A drop with an empty payload never reaches the store.

use crate::model::deal::Deal;
use crate::model::stage::PipelineStage;
use crate::repo::kv_repo::KvRepository;
use crate::store::crm_store::{CrmStore, StoreResult};
use log::debug;

/// One board column.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn<'a> {
    pub stage: PipelineStage,
    pub deals: Vec<&'a Deal>,
    pub total_value: f64,
}

impl BoardColumn<'_> {
    pub fn count(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }
}

/// Header figures shown above the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineSummary {
    /// Deals not yet Won or Lost.
    pub active_deals: usize,
    /// Sum of every deal value regardless of stage.
    pub total_value: f64,
}

/// Groups deals into the six stage columns.
pub fn board(deals: &[Deal]) -> Vec<BoardColumn<'_>> {
    PipelineStage::ALL
        .into_iter()
        .map(|stage| {
            let stage_deals: Vec<&Deal> = deals.iter().filter(|deal| deal.stage == stage).collect();
            let total_value = stage_deals.iter().map(|deal| deal.value).sum();
            BoardColumn {
                stage,
                deals: stage_deals,
                total_value,
            }
        })
        .collect()
}

pub fn pipeline_summary(deals: &[Deal]) -> PipelineSummary {
    PipelineSummary {
        active_deals: deals.iter().filter(|deal| deal.stage.is_active()).count(),
        total_value: deals.iter().map(|deal| deal.value).sum(),
    }
}

/// Result of handling one drop gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Payload was empty; nothing happened.
    Ignored,
    /// Payload named no current deal; store left unchanged.
    Missing { deal_id: String },
    Moved {
        deal_id: String,
        stage: PipelineStage,
    },
}

/// Applies a drop of `payload` (the dragged deal id) onto `target_column`.
///
/// # Errors
/// - `StoreError::UnknownStage` when the column name is not a stage.
pub fn handle_drop<R: KvRepository>(
    store: &mut CrmStore<R>,
    payload: &str,
    target_column: &str,
) -> StoreResult<DropOutcome> {
    let deal_id = payload.trim();
    if deal_id.is_empty() {
        debug!("event=board_drop module=service status=skipped reason=empty_payload");
        return Ok(DropOutcome::Ignored);
    }

    let stage = target_column.parse::<PipelineStage>()?;
    if store.deal(deal_id).is_none() {
        debug!("event=board_drop module=service status=skipped reason=not_found deal_id={deal_id}");
        return Ok(DropOutcome::Missing {
            deal_id: deal_id.to_string(),
        });
    }

    store.move_deal(deal_id, stage);
    Ok(DropOutcome::Moved {
        deal_id: deal_id.to_string(),
        stage,
    })
}
