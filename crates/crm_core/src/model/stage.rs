//! Pipeline stage enumeration and the pipeline definition.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One kanban column of the sales pipeline.
///
/// Variant order is board order. Serialized with the display name
/// (`"Lead"`, `"Won"`, ...); deserialized through `FromStr`, so stored
/// names are matched the same way as drop targets.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String")]
pub enum PipelineStage {
    #[default]
    Lead,
    Contacted,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

impl PipelineStage {
    /// All stages in board order.
    pub const ALL: [PipelineStage; 6] = [
        PipelineStage::Lead,
        PipelineStage::Contacted,
        PipelineStage::Proposal,
        PipelineStage::Negotiation,
        PipelineStage::Won,
        PipelineStage::Lost,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lead => "Lead",
            Self::Contacted => "Contacted",
            Self::Proposal => "Proposal",
            Self::Negotiation => "Negotiation",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }

    /// Returns whether deals in this stage still count as open work.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Won | Self::Lost)
    }
}

impl Display for PipelineStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected stage name from a string boundary (drop target, form select).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStageError(pub String);

impl Display for ParseStageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown pipeline stage `{}`; expected Lead|Contacted|Proposal|Negotiation|Won|Lost",
            self.0
        )
    }
}

impl Error for ParseStageError {}

impl FromStr for PipelineStage {
    type Err = ParseStageError;

    /// Accepts the display name, ignoring case and surrounding whitespace.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseStageError(trimmed.to_string()))
    }
}

impl TryFrom<String> for PipelineStage {
    type Error = ParseStageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Named, ordered set of stages a board renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: String,
    pub name: String,
    pub stages: Vec<PipelineStage>,
}

impl Pipeline {
    /// The default six-stage sales pipeline.
    pub fn sales() -> Self {
        Self {
            id: "p1".to_string(),
            name: "Sales Pipeline".to_string(),
            stages: PipelineStage::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Pipeline, PipelineStage};

    #[test]
    fn parse_accepts_display_names_case_insensitively() {
        assert_eq!("won".parse::<PipelineStage>().unwrap(), PipelineStage::Won);
        assert_eq!(
            " Negotiation ".parse::<PipelineStage>().unwrap(),
            PipelineStage::Negotiation
        );
    }

    #[test]
    fn parse_rejects_unknown_stage() {
        let err = "Archived".parse::<PipelineStage>().unwrap_err();
        assert_eq!(err.0, "Archived");
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&PipelineStage::Proposal).unwrap();
        assert_eq!(json, "\"Proposal\"");
    }

    #[test]
    fn serde_reads_stage_names_like_from_str() {
        let stages: Vec<PipelineStage> =
            serde_json::from_str(r#"["won", " negotiation ", "LOST"]"#).unwrap();
        assert_eq!(
            stages,
            vec![
                PipelineStage::Won,
                PipelineStage::Negotiation,
                PipelineStage::Lost
            ]
        );
        assert!(serde_json::from_str::<PipelineStage>("\"Archived\"").is_err());
    }

    #[test]
    fn sales_pipeline_lists_stages_in_board_order() {
        let pipeline = Pipeline::sales();
        assert_eq!(pipeline.stages.first(), Some(&PipelineStage::Lead));
        assert_eq!(pipeline.stages.last(), Some(&PipelineStage::Lost));
        assert!(!PipelineStage::Won.is_active());
        assert!(PipelineStage::Proposal.is_active());
    }
}
