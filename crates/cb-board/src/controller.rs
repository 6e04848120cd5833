use crate::board_state::BoardState;
use crate::drag::{DragSession, DragTarget, Placement, SinkMode};
use crate::gateway::{CaseGateway, StatusChange};
use crate::notify::{Notifier, NotifyLevel};
use crate::policy::TransitionPolicy;
use crate::sync::SyncCoordinator;

use cb_core::{Actor, CaseRecord, StageColumn};
use log::debug;

/// Drives one drag session at a time over the board
///
/// Owns the board, the sync coordinator, and the notification sink. All
/// handlers are defensive no-ops on inconsistent input (unknown card,
/// unresolvable target, no active session); network failures never reach
/// this layer, they are absorbed by the sync coordinator.
pub struct BoardController<G, N> {
    board: BoardState,
    session: Option<DragSession>,
    snapshot: Option<BoardState>,
    sync: SyncCoordinator<G>,
    notifier: N,
    actor: Actor,
}

impl<G: CaseGateway, N: Notifier> BoardController<G, N> {
    pub fn new(sync: SyncCoordinator<G>, notifier: N, actor: Actor) -> Self {
        Self {
            board: BoardState::new(),
            session: None,
            snapshot: None,
            sync,
            notifier,
            actor,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Fetch the case list and (re)load the board
    pub async fn refresh(&mut self) {
        self.sync.refresh(&mut self.board).await;
    }

    /// Load the board from an already-fetched list
    pub fn load(&mut self, records: Vec<CaseRecord>) {
        self.board.load(records);
    }

    /// Begin a drag session for a card
    ///
    /// Unknown cards and nested drags are ignored. The board is snapshotted
    /// so a cancelled drag restores the pre-drag arrangement.
    pub fn start(&mut self, card_id: &str) {
        if self.session.is_some() {
            return;
        }
        let Some(origin) = self.board.find_container(card_id) else {
            debug!("Drag start ignored, card {card_id} is not on the board");
            return;
        };
        self.snapshot = Some(self.board.clone());
        self.session = Some(DragSession::begin(card_id, origin));
    }

    /// Preview a hover over a potential drop target
    ///
    /// Cross-column hovers relocate the card so the user sees where it would
    /// land; rejected moves leave the board untouched without any feedback.
    /// Same-column hovers are resolved only at drop, and the sink has no
    /// hover preview.
    pub fn hover(&mut self, target: &DragTarget, placement: Placement) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let (target_column, over_card) = match target {
            DragTarget::Sink => return,
            DragTarget::Column(column) => (*column, None),
            DragTarget::Card(over_id) => {
                if *over_id == session.card_id {
                    return;
                }
                match self.board.find_container(over_id) {
                    Some(column) => (column, Some(over_id.as_str())),
                    None => return,
                }
            }
        };

        let Some(present) = self.board.find_container(&session.card_id) else {
            return;
        };
        if target_column == present {
            return;
        }
        if !TransitionPolicy::allows(session.origin, target_column) {
            return;
        }

        let index = match over_card {
            Some(over_id) => {
                let base = self
                    .board
                    .index_of(target_column, over_id)
                    .unwrap_or_else(|| self.board.cards_in(target_column).len());
                match placement {
                    Placement::Before => base,
                    Placement::After => base + 1,
                }
            }
            None => self.board.cards_in(target_column).len(),
        };

        self.board
            .relocate(&session.card_id, present, target_column, index);
        session.current = target_column;
    }

    /// Finalize the drag on a drop target and end the session
    pub async fn drop(&mut self, target: DragTarget) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.snapshot = None;

        match target {
            DragTarget::Sink => self.sink_drop(session).await,
            DragTarget::Column(column) => self.stage_drop(session, column, None).await,
            DragTarget::Card(over_id) => {
                let Some(column) = self.board.find_container(&over_id) else {
                    return;
                };
                self.stage_drop(session, column, Some(over_id)).await;
            }
        }
    }

    /// Abort the drag and restore the pre-drag arrangement
    ///
    /// Never reaches the sync coordinator; nothing was committed.
    pub fn cancel(&mut self) {
        if self.session.take().is_none() {
            return;
        }
        if let Some(snapshot) = self.snapshot.take() {
            self.board = snapshot;
        }
    }

    async fn sink_drop(&mut self, session: DragSession) {
        let Some(record) = self.board.remove(&session.card_id) else {
            return;
        };

        let (message, level) = match session.sink_mode {
            SinkMode::Complete => (
                format!("Case {} marked Completed", record.id),
                NotifyLevel::Success,
            ),
            SinkMode::Delete => (
                format!("Case {} moved to Trash", record.id),
                NotifyLevel::Info,
            ),
        };
        self.notifier.notify(&message, level);

        let change = StatusChange {
            card_id: record.id,
            new_status: session.sink_mode.terminal_status(),
            actor: self.actor.clone(),
        };
        self.sync
            .persist_status(&mut self.board, change, &self.notifier)
            .await;
    }

    async fn stage_drop(
        &mut self,
        session: DragSession,
        target_column: StageColumn,
        over_id: Option<String>,
    ) {
        let Some(present) = self.board.find_container(&session.card_id) else {
            return;
        };

        if !TransitionPolicy::allows(session.origin, target_column) {
            self.notifier.notify(
                &format!(
                    "Case {} cannot be moved back to previous stages",
                    session.card_id
                ),
                NotifyLevel::Error,
            );
            return;
        }

        // Drag began and ended in the same column: in-column reorder only,
        // ordering is not persisted remotely.
        if target_column == session.origin && present == session.origin {
            if let Some(over_id) = over_id {
                let from = self.board.index_of(present, &session.card_id);
                let to = self.board.index_of(present, &over_id);
                if let (Some(from), Some(to)) = (from, to)
                    && from != to
                {
                    self.board.reorder(present, from, to);
                }
            }
            return;
        }

        // Cross-column: hover normally previewed the relocation already; a
        // drop without a preview (keyboard, programmatic) settles here.
        if present != target_column {
            let index = over_id
                .as_deref()
                .and_then(|id| self.board.index_of(target_column, id))
                .unwrap_or_else(|| self.board.cards_in(target_column).len());
            self.board
                .relocate(&session.card_id, present, target_column, index);
        }

        let new_status = target_column.status_value();
        let updated = match self.board.card(&session.card_id) {
            Some(record) if record.status != new_status => record.with_status(new_status),
            _ => return,
        };

        // Optimistic update: swap in a fresh record, then confirm remotely.
        self.board.replace(updated);
        let change = StatusChange {
            card_id: session.card_id,
            new_status,
            actor: self.actor.clone(),
        };
        self.sync
            .persist_status(&mut self.board, change, &self.notifier)
            .await;
    }
}
