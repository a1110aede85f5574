mod directory_dto;
mod report_dto;

pub use directory_dto::DirectoryResponseDto;
pub use report_dto::{ApproveDto, NewReportDto, ReportDto};

/// Accept identifiers and point values sent either as JSON strings or numbers.
pub(crate) mod string_or_number {
    use serde::de::{self, Deserializer};
    use serde::Deserialize;
    use serde_json::Value;

    fn to_string<E: de::Error>(value: Value) -> Result<String, E> {
        match value {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Null => Ok(String::new()),
            other => Err(E::custom(format!(
                "expected a string or number, got {}",
                other
            ))),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        to_string(Value::deserialize(deserializer)?)
    }

    pub fn deserialize_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Value>::deserialize(deserializer)?
            .into_iter()
            .map(to_string)
            .collect()
    }
}
