use std::result::Result as StdResult;

use cb_core::StageColumn;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Illegal transition from {from} to {to}: {reason} {location}")]
    IllegalTransition {
        from: StageColumn,
        to: StageColumn,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Card not found: {card_id} {location}")]
    CardNotFound {
        card_id: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, BoardError>;
