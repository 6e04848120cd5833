use crate::{BoardError, Result as BoardErrorResult};

use std::panic::Location;

use cb_core::StageColumn;
use error_location::ErrorLocation;

/// Stage-progression rule for cross-column moves
///
/// A session that originated in the last column may not move to any column
/// of lower rank. Every other cross-column move, forward or backward, is
/// permitted. Sink drops are never evaluated here.
pub struct TransitionPolicy;

impl TransitionPolicy {
    #[track_caller]
    pub fn validate(origin: StageColumn, target: StageColumn) -> BoardErrorResult<()> {
        if origin == StageColumn::last() && target.rank() < origin.rank() {
            return Err(BoardError::IllegalTransition {
                from: origin,
                to: target,
                reason: "cases in the last stage cannot move back".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    pub fn allows(origin: StageColumn, target: StageColumn) -> bool {
        Self::validate(origin, target).is_ok()
    }
}
