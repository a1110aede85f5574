//! Report submission page.
//!
//! Loads the person directory for name autocompletion, validates the form and
//! posts the report to `/dpm`.

mod controller;
mod form;

pub use controller::{SubmissionController, SubmitOutcome};
pub use form::{Rejection, SubmissionForm};
