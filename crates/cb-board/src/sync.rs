use crate::board_state::BoardState;
use crate::gateway::{CaseGateway, StatusChange};
use crate::notify::{Notifier, NotifyLevel};

use log::{debug, error, warn};

/// Translates finalized in-memory changes into persisted updates and keeps
/// the store consistent when the remote side disagrees.
pub struct SyncCoordinator<G> {
    gateway: G,
}

impl<G: CaseGateway> SyncCoordinator<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Load the board from the remote list
    ///
    /// A failed fetch leaves empty columns; there is no automatic retry.
    pub async fn refresh(&self, board: &mut BoardState) {
        match self.gateway.list_cases().await {
            Ok(records) => {
                debug!("Loaded {} cases", records.len());
                board.load(records);
            }
            Err(e) => {
                error!("Failed to load cases: {e}");
                board.load(Vec::new());
            }
        }
    }

    /// Persist a status change already applied optimistically to the board
    ///
    /// On transport error or a non-success acknowledgement, the optimistic
    /// change is discarded by reloading the full list. The write is never
    /// retried: under network ambiguity a re-sent status could be stale or
    /// duplicated, so reconciliation is reload-and-compare only.
    pub async fn persist_status(
        &self,
        board: &mut BoardState,
        change: StatusChange,
        notifier: &dyn Notifier,
    ) {
        debug!(
            "Persisting status {} for case {}",
            change.new_status, change.card_id
        );

        let persisted = match self.gateway.update_case_status(&change).await {
            Ok(ack) if ack.success => true,
            Ok(ack) => {
                warn!(
                    "Status update for case {} rejected: {}",
                    change.card_id,
                    ack.message.as_deref().unwrap_or("no message")
                );
                false
            }
            Err(e) => {
                warn!("Status update for case {} failed: {e}", change.card_id);
                false
            }
        };

        if !persisted {
            self.refresh(board).await;
            notifier.notify(
                &format!("Could not save case {}, board reloaded", change.card_id),
                NotifyLevel::Error,
            );
        }
    }
}
