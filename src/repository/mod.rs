//! Character persistence port and its adapters.

mod memory;
mod postgres;

pub use memory::InMemoryCharacterRepository;
pub use postgres::PgCharacterRepository;

use crate::error::AppError;
use crate::model::{Character, CharacterId};
use async_trait::async_trait;

/// Read access to the character catalog. Injected into handlers through `AppState`.
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Characters whose name contains `name` case-insensitively (all when `None`), in insertion order.
    async fn list_by_name_contains(&self, name: Option<&str>) -> Result<Vec<Character>, AppError>;

    async fn get_by_id(&self, id: CharacterId) -> Result<Option<Character>, AppError>;

    /// Every surrogate key currently stored.
    async fn all_ids(&self) -> Result<Vec<CharacterId>, AppError>;

    /// Cheap round-trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
