//! In-memory repository: insertion-ordered, store-assigned surrogate keys. Used by tests and local demos.

use super::CharacterRepository;
use crate::error::AppError;
use crate::model::{Character, CharacterId};
use async_trait::async_trait;
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCharacterRepository {
    rows: RwLock<Vec<Character>>,
}

impl InMemoryCharacterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character, assigning the next surrogate key. Rejects a duplicate `api_id`.
    pub fn insert(&self, api_id: i64, name: &str, image: &str) -> Result<Character, AppError> {
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        if rows.iter().any(|c| c.api_id == api_id) {
            return Err(AppError::Conflict(format!("api_id {} already exists", api_id)));
        }
        let id = rows.last().map(|c| c.id + 1).unwrap_or(1);
        let character = Character {
            id,
            api_id,
            name: name.to_string(),
            image: image.to_string(),
        };
        rows.push(character.clone());
        Ok(character)
    }
}

#[async_trait]
impl CharacterRepository for InMemoryCharacterRepository {
    async fn list_by_name_contains(&self, name: Option<&str>) -> Result<Vec<Character>, AppError> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        let needle = name.map(str::to_lowercase);
        Ok(rows
            .iter()
            .filter(|c| match &needle {
                Some(n) => c.name.to_lowercase().contains(n.as_str()),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: CharacterId) -> Result<Option<Character>, AppError> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        Ok(rows.iter().find(|c| c.id == id).cloned())
    }

    async fn all_ids(&self) -> Result<Vec<CharacterId>, AppError> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        Ok(rows.iter().map(|c| c.id).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
