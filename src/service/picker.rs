//! Selection step for the random-character endpoint.

use crate::model::CharacterId;
use rand::Rng;

/// Chooses one id out of a candidate set.
#[cfg_attr(test, mockall::automock)]
pub trait IdPicker: Send + Sync {
    /// Returns `None` only when `ids` is empty.
    fn pick(&self, ids: &[CharacterId]) -> Option<CharacterId>;
}

/// Uniform choice using the thread-local RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPicker;

impl IdPicker for RandomPicker {
    fn pick(&self, ids: &[CharacterId]) -> Option<CharacterId> {
        if ids.is_empty() {
            return None;
        }
        let idx = rand::rng().random_range(0..ids.len());
        ids.get(idx).copied()
    }
}
