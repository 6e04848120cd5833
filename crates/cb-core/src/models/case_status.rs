use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Workflow status of a case
///
/// The first four values map 1:1 onto the board columns. `Completed` and
/// `Deleted` are terminal: a case carrying either never appears on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// Quotation drafted, awaiting client approval
    #[default]
    Quotation,
    /// Client approved the quotation
    Approved,
    /// Invoice issued
    Invoicing,
    /// Goods in delivery
    Delivery,
    /// Delivered and closed (terminal)
    Completed,
    /// Trashed (terminal)
    Deleted,
}

impl CaseStatus {
    /// Convert to the canonical API string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quotation => "quotation",
            Self::Approved => "approved",
            Self::Invoicing => "invoicing",
            Self::Delivery => "delivery",
            Self::Completed => "completed",
            Self::Deleted => "deleted",
        }
    }

    /// Terminal statuses remove a case from the visible board
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Deleted)
    }
}

impl FromStr for CaseStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "quotation" => Ok(Self::Quotation),
            "approved" => Ok(Self::Approved),
            "invoicing" => Ok(Self::Invoicing),
            "delivery" => Ok(Self::Delivery),
            "completed" => Ok(Self::Completed),
            "deleted" => Ok(Self::Deleted),
            _ => Err(CoreError::InvalidCaseStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
