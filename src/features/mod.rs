pub mod approval;
pub mod dpm;
pub mod listing;
pub mod submission;
