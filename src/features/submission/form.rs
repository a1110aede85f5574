use validator::Validate;

use crate::features::dpm::dtos::NewReportDto;
use crate::features::dpm::models::{Directory, DirectoryEntry};
use crate::shared::constants::{
    MSG_INVALID_NAME, MSG_MISSING_DATE, MSG_MISSING_TIME, NEW_REPORT_POINTS,
};
use crate::shared::format;

/// Field values of the report form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct SubmissionForm {
    pub name: String,
    pub block: String,
    pub location: String,
    #[validate(length(min = 1, code = "date"))]
    pub date: String,
    #[validate(length(min = 1, code = "time"))]
    pub start_time: String,
    #[validate(length(min = 1, code = "time"))]
    pub end_time: String,
    pub notes: String,
    pub dpm_type: String,
}

/// Why a submission was blocked before reaching the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    UnknownName,
    MissingDate,
    MissingTime,
}

impl Rejection {
    pub fn message(self) -> &'static str {
        match self {
            Rejection::UnknownName => MSG_INVALID_NAME,
            Rejection::MissingDate => MSG_MISSING_DATE,
            Rejection::MissingTime => MSG_MISSING_TIME,
        }
    }
}

impl SubmissionForm {
    /// Empty form with the date picker's default of today.
    pub fn blank() -> Self {
        Self {
            date: format::today(),
            ..Default::default()
        }
    }

    /// Checks run in a fixed order: name, then date, then times.
    pub fn check<'d>(&self, directory: &'d Directory) -> Result<&'d DirectoryEntry, Rejection> {
        let entry = directory
            .resolve(&self.name)
            .ok_or(Rejection::UnknownName)?;

        if let Err(errors) = self.validate() {
            let fields = errors.field_errors();
            if fields.contains_key("date") {
                return Err(Rejection::MissingDate);
            }
            return Err(Rejection::MissingTime);
        }

        Ok(entry)
    }

    pub fn to_report(&self, entry: &DirectoryEntry, sender: &str) -> NewReportDto {
        NewReportDto {
            name: self.name.clone(),
            block: self.block.to_uppercase(),
            location: self.location.to_uppercase(),
            date: self.date.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            notes: self.notes.clone(),
            dpm_type: self.dpm_type.clone(),
            sender: sender.to_string(),
            id: entry.id.clone(),
            points: NEW_REPORT_POINTS.to_string(),
        }
    }
}
