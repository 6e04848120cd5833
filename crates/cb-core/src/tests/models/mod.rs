mod case_record;
mod case_status;
mod created_by;
