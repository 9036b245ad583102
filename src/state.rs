//! Shared application state for all routes.

use crate::repository::CharacterRepository;
use crate::service::{CatalogService, IdPicker, RandomPicker};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

impl AppState {
    /// State backed by `repo` with uniform random selection.
    pub fn new(repo: Arc<dyn CharacterRepository>) -> Self {
        Self::with_picker(repo, Arc::new(RandomPicker))
    }

    pub fn with_picker(repo: Arc<dyn CharacterRepository>, picker: Arc<dyn IdPicker>) -> Self {
        AppState {
            catalog: CatalogService::new(repo, picker),
        }
    }
}
