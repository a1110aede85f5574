use crate::features::dpm::dtos::DirectoryResponseDto;
use crate::shared::html::decode_entities;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Display name with HTML entities decoded
    pub name: String,
    pub id: String,
}

/// Name-to-identifier mapping used to resolve the typed subject name.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    entries: Vec<DirectoryEntry>,
    user_id: String,
}

impl Directory {
    pub fn from_response(dto: DirectoryResponseDto) -> Self {
        if dto.names.len() != dto.ids.len() {
            tracing::warn!(
                "Directory names and ids differ in length ({} vs {}), extra entries dropped",
                dto.names.len(),
                dto.ids.len()
            );
        }

        let entries = dto
            .names
            .iter()
            .zip(dto.ids)
            .map(|(name, id)| DirectoryEntry {
                name: decode_entities(name).into_owned(),
                id,
            })
            .collect();

        Self {
            entries,
            user_id: dto.user_id,
        }
    }

    /// Autocomplete data source, in server order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Exact-match lookup; the first entry wins when names repeat.
    pub fn resolve(&self, name: &str) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Identifier of the user the directory was served to
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
