pub mod actor;
pub mod case_record;
pub mod case_status;
pub mod created_by;
