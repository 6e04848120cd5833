pub mod error;
pub mod models;
pub mod stage;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::actor::Actor;
pub use models::case_record::CaseRecord;
pub use models::case_status::CaseStatus;
pub use models::created_by::{CreatedBy, UserProfile};
pub use stage::StageColumn;
