//! Character record and its wire representation.

use serde::{Deserialize, Serialize};

/// Surrogate key assigned by the store.
pub type CharacterId = i64;

/// A catalog row. `id` is the store's surrogate key; `api_id` is the upstream source identifier.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Character {
    pub id: CharacterId,
    pub api_id: i64,
    pub name: String,
    pub image: String,
}

/// Serialized form returned by the API. The surrogate key is never exposed; `id` carries `api_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterBody {
    pub id: i64,
    pub name: String,
    pub image: String,
}

impl From<&Character> for CharacterBody {
    fn from(c: &Character) -> Self {
        CharacterBody {
            id: c.api_id,
            name: c.name.clone(),
            image: c.image.clone(),
        }
    }
}

impl From<Character> for CharacterBody {
    fn from(c: Character) -> Self {
        CharacterBody {
            id: c.api_id,
            name: c.name,
            image: c.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_exposes_source_id_not_surrogate() {
        let c = Character {
            id: 42,
            api_id: 7,
            name: "Rick".into(),
            image: "rick.png".into(),
        };
        let json = serde_json::to_value(CharacterBody::from(&c)).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "name": "Rick", "image": "rick.png"}));
    }
}
