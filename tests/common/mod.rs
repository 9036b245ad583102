#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use character_catalog::{
    app, AppError, AppState, Character, CharacterId, CharacterRepository, IdPicker,
    InMemoryCharacterRepository,
};
use tower::ServiceExt;

/// Seed the three characters used across the API tests, in insertion order.
pub fn seeded_repo() -> Arc<InMemoryCharacterRepository> {
    let repo = InMemoryCharacterRepository::new();
    repo.insert(1, "Rick Sanchez", "rick.png").unwrap();
    repo.insert(2, "Morty Smith", "morty.png").unwrap();
    repo.insert(3, "Summer Smith", "summer.png").unwrap();
    Arc::new(repo)
}

pub fn build_test_app(repo: Arc<dyn CharacterRepository>) -> Router {
    app(AppState::new(repo))
}

pub fn build_test_app_with_picker(repo: Arc<dyn CharacterRepository>, picker: Arc<dyn IdPicker>) -> Router {
    app(AppState::with_picker(repo, picker))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Picker that records every candidate set it is offered and returns a fixed id.
pub struct RecordingPicker {
    choice: Option<CharacterId>,
    pub offered: Mutex<Vec<Vec<CharacterId>>>,
}

impl RecordingPicker {
    pub fn choosing(choice: Option<CharacterId>) -> Self {
        RecordingPicker {
            choice,
            offered: Mutex::new(Vec::new()),
        }
    }
}

impl IdPicker for RecordingPicker {
    fn pick(&self, ids: &[CharacterId]) -> Option<CharacterId> {
        self.offered.lock().unwrap().push(ids.to_vec());
        self.choice
    }
}

/// Repository whose every call fails like a dropped database connection.
pub struct UnavailableRepository;

#[async_trait]
impl CharacterRepository for UnavailableRepository {
    async fn list_by_name_contains(&self, _name: Option<&str>) -> Result<Vec<Character>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn get_by_id(&self, _id: CharacterId) -> Result<Option<Character>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn all_ids(&self) -> Result<Vec<CharacterId>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
}
