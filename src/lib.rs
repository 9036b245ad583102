//! Character catalog: read-only REST API over a PostgreSQL characters table.

pub mod config;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use gate::{retry_until_ready, wait_for_database};
pub use model::{Character, CharacterBody, CharacterId};
pub use repository::{CharacterRepository, InMemoryCharacterRepository, PgCharacterRepository};
pub use routes::{app, character_routes, common_routes};
pub use service::{CatalogService, IdPicker, RandomPicker};
pub use state::AppState;
pub use store::ensure_catalog_tables;
