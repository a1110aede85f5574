use serde::{Deserialize, Serialize};

use super::string_or_number;

/// Response of `GET /users`.
///
/// `names` and `ids` are parallel arrays; names arrive HTML-escaped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryResponseDto {
    #[serde(default, deserialize_with = "string_or_number::deserialize_vec")]
    pub ids: Vec<String>,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(rename = "userID", default, deserialize_with = "string_or_number::deserialize")]
    pub user_id: String,
}
