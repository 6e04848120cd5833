use crate::models::case_status::CaseStatus;
use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A workflow lane on the board, ordered by rank
///
/// The mapping column -> status is a total bijection over the four active
/// statuses; terminal statuses have no column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageColumn {
    Quotation,
    Approval,
    Invoice,
    Delivery,
}

impl StageColumn {
    /// All columns in board order
    pub const ALL: [StageColumn; 4] = [
        Self::Quotation,
        Self::Approval,
        Self::Invoice,
        Self::Delivery,
    ];

    /// Rank 0..=3, defines forward/backward movement
    pub fn rank(&self) -> usize {
        match self {
            Self::Quotation => 0,
            Self::Approval => 1,
            Self::Invoice => 2,
            Self::Delivery => 3,
        }
    }

    /// The last column; drags out of it are subject to the one-way rule and
    /// the sink acts as "Complete" for them.
    pub fn last() -> Self {
        Self::Delivery
    }

    /// The status a card takes on when placed in this column
    pub fn status_value(&self) -> CaseStatus {
        match self {
            Self::Quotation => CaseStatus::Quotation,
            Self::Approval => CaseStatus::Approved,
            Self::Invoice => CaseStatus::Invoicing,
            Self::Delivery => CaseStatus::Delivery,
        }
    }

    /// The column a status belongs to; None for terminal statuses
    pub fn for_status(status: CaseStatus) -> Option<Self> {
        match status {
            CaseStatus::Quotation => Some(Self::Quotation),
            CaseStatus::Approved => Some(Self::Approval),
            CaseStatus::Invoicing => Some(Self::Invoice),
            CaseStatus::Delivery => Some(Self::Delivery),
            CaseStatus::Completed | CaseStatus::Deleted => None,
        }
    }

    /// Display title for board rendering
    pub fn title(&self) -> &'static str {
        match self {
            Self::Quotation => "Quotation",
            Self::Approval => "Approval",
            Self::Invoice => "Invoice",
            Self::Delivery => "Delivery",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quotation => "quotation",
            Self::Approval => "approval",
            Self::Invoice => "invoice",
            Self::Delivery => "delivery",
        }
    }
}

impl FromStr for StageColumn {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "quotation" => Ok(Self::Quotation),
            "approval" => Ok(Self::Approval),
            "invoice" => Ok(Self::Invoice),
            "delivery" => Ok(Self::Delivery),
            _ => Err(CoreError::InvalidStageColumn {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for StageColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
