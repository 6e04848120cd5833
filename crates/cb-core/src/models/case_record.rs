use crate::models::case_status::CaseStatus;
use crate::models::created_by::CreatedBy;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A client order/quotation moving through the sales-to-delivery workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Stable identifier, immutable once created
    pub id: String,

    // Workflow
    pub status: CaseStatus,

    // Display fields
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,

    #[serde(default)]
    pub grand_total: Decimal,
    #[serde(default)]
    pub item_count: u32,

    // Audit
    pub created_by: CreatedBy,

    /// Promised delivery date, opaque to the engine
    #[serde(default)]
    pub lead_time: Option<String>,
}

impl CaseRecord {
    pub fn new(id: impl Into<String>, status: CaseStatus, created_by: CreatedBy) -> Self {
        Self {
            id: id.into(),
            status,
            client_name: None,
            business_name: None,
            grand_total: Decimal::ZERO,
            item_count: 0,
            created_by,
            lead_time: None,
        }
    }

    /// Copy of this record with a new status. Records are never mutated in
    /// place; the store swaps the whole record so no aliased copy can drift.
    pub fn with_status(&self, status: CaseStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}
