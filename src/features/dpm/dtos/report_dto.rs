use serde::{Deserialize, Serialize};

use super::string_or_number;

/// Report as served by `/dpm/all` and `/dpm/approve`.
///
/// The two feeds carry different subsets: the listing has `firstName` and
/// `lastName`, the approval queue has `id`, `name`, `supName` and `created`.
/// Missing fields deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportDto {
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub id: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub sup_name: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub points: String,
    #[serde(rename = "dpmtype")]
    pub dpm_type: String,
    pub block: String,
    pub location: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub notes: String,
    pub created: String,
}

impl ReportDto {
    /// Subject's display name, preferring `name` over `firstName lastName`
    pub fn display_name(&self) -> String {
        if !self.name.is_empty() {
            return self.name.clone();
        }
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Body of `POST /dpm`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReportDto {
    pub name: String,
    pub block: String,
    pub location: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub notes: String,
    pub dpm_type: String,
    /// Identifier of the submitting user
    pub sender: String,
    /// Directory identifier of the subject
    pub id: String,
    pub points: String,
}

/// Body of `POST /dpm/approve/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproveDto {
    pub points: String,
    pub name: String,
}
