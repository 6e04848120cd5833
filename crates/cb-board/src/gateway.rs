use std::sync::Arc;

use async_trait::async_trait;
use cb_core::{Actor, CaseRecord, CaseStatus};
use error_location::ErrorLocation;
use thiserror::Error;

/// A finalized status change to be persisted remotely
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub card_id: String,
    pub new_status: CaseStatus,
    pub actor: Actor,
}

/// Remote acknowledgement of a status update
///
/// Only an explicit `success == true` counts as persisted; anything else is
/// treated as a failure and reconciled by a full reload.
#[derive(Debug, Clone, Default)]
pub struct UpdateAck {
    pub success: bool,
    pub message: Option<String>,
}

impl UpdateAck {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Remote call failed: {message} {location}")]
    Remote {
        message: String,
        location: ErrorLocation,
    },
}

impl GatewayError {
    #[track_caller]
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Remote case-list / status-update operations the engine consumes
#[async_trait]
pub trait CaseGateway: Send + Sync {
    /// Fetch all cases, normalized to a flat list
    async fn list_cases(&self) -> GatewayResult<Vec<CaseRecord>>;

    /// Persist a status change
    async fn update_case_status(&self, change: &StatusChange) -> GatewayResult<UpdateAck>;
}

#[async_trait]
impl<T: CaseGateway + ?Sized> CaseGateway for Arc<T> {
    async fn list_cases(&self) -> GatewayResult<Vec<CaseRecord>> {
        (**self).list_cases().await
    }

    async fn update_case_status(&self, change: &StatusChange) -> GatewayResult<UpdateAck> {
        (**self).update_case_status(change).await
    }
}
