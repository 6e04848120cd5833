//! Kanban workflow engine for the case board
//!
//! Cases are cards distributed across four ordered stage columns. A drag
//! session moves a card between or within columns under a one-way rule for
//! the last stage, the sink drop zone completes or trashes a card, and every
//! finalized move is persisted optimistically with reload-on-failure
//! reconciliation.

pub mod board_state;
pub mod controller;
pub mod drag;
pub mod error;
pub mod gateway;
pub mod notify;
pub mod policy;
pub mod sync;

#[cfg(test)]
mod tests;

pub use board_state::{BoardState, BoardView};
pub use controller::BoardController;
pub use drag::{DragSession, DragTarget, Placement, SinkMode};
pub use error::{BoardError, Result};
pub use gateway::{CaseGateway, GatewayError, GatewayResult, StatusChange, UpdateAck};
pub use notify::{LogNotifier, Notifier, NotifyLevel};
pub use policy::TransitionPolicy;
pub use sync::SyncCoordinator;
