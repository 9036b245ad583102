//! Catalog queries over an injected repository and picker.

use crate::error::AppError;
use crate::model::Character;
use crate::repository::CharacterRepository;
use crate::service::IdPicker;
use std::sync::Arc;

#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn CharacterRepository>,
    picker: Arc<dyn IdPicker>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CharacterRepository>, picker: Arc<dyn IdPicker>) -> Self {
        Self { repo, picker }
    }

    /// All characters whose name contains `name` case-insensitively; all of them when `None`.
    pub async fn list(&self, name: Option<&str>) -> Result<Vec<Character>, AppError> {
        self.repo.list_by_name_contains(name).await
    }

    /// One character chosen by the picker from the full id set.
    /// An empty catalog, or a picked row that disappeared before the read, is `NotFound`.
    pub async fn random(&self) -> Result<Character, AppError> {
        let ids = self.repo.all_ids().await?;
        let id = self
            .picker
            .pick(&ids)
            .ok_or_else(|| AppError::NotFound("no characters available".into()))?;
        tracing::debug!(id, candidates = ids.len(), "picked random character");
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("character {}", id)))
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.repo.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryCharacterRepository;
    use crate::service::picker::MockIdPicker;
    use std::collections::HashSet;

    fn seeded() -> Arc<InMemoryCharacterRepository> {
        let repo = InMemoryCharacterRepository::new();
        repo.insert(1, "Rick", "rick.png").unwrap();
        repo.insert(2, "Morty", "morty.png").unwrap();
        Arc::new(repo)
    }

    #[tokio::test]
    async fn random_offers_every_id_exactly_once() {
        let repo = seeded();
        let morty = repo.list_by_name_contains(Some("morty")).await.unwrap().remove(0);
        let all: HashSet<i64> = repo.all_ids().await.unwrap().into_iter().collect();

        let mut picker = MockIdPicker::new();
        let expected = all.clone();
        let morty_id = morty.id;
        picker
            .expect_pick()
            .withf(move |ids| {
                let offered: HashSet<i64> = ids.iter().copied().collect();
                offered.len() == ids.len() && offered == expected
            })
            .times(1)
            .returning(move |_| Some(morty_id));

        let service = CatalogService::new(repo, Arc::new(picker));
        let picked = service.random().await.unwrap();
        assert_eq!(picked, morty);
    }

    #[tokio::test]
    async fn random_on_empty_catalog_is_not_found() {
        let repo = Arc::new(InMemoryCharacterRepository::new());
        let mut picker = MockIdPicker::new();
        picker.expect_pick().times(1).returning(|_| None);

        let service = CatalogService::new(repo, Arc::new(picker));
        let err = service.random().await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn random_with_vanished_row_is_not_found() {
        let mut picker = MockIdPicker::new();
        picker.expect_pick().returning(|_| Some(404));

        let service = CatalogService::new(seeded(), Arc::new(picker));
        let err = service.random().await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_delegates_filter() {
        let service = CatalogService::new(seeded(), Arc::new(crate::service::RandomPicker));
        let rows = service.list(Some("RI")).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Rick");
        assert_eq!(service.list(None).await.unwrap().len(), 2);
    }
}
