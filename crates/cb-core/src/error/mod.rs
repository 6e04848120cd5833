use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid case status: {value} {location}")]
    InvalidCaseStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid stage column: {value} {location}")]
    InvalidStageColumn {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
