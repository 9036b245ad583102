//! Character routes. Both the trailing-slash and bare forms are served.

use crate::handlers::characters::{list, random};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn character_routes(state: AppState) -> Router {
    Router::new()
        .route("/characters/", get(list))
        .route("/characters", get(list))
        .route("/characters/random/", get(random))
        .route("/characters/random", get(random))
        .with_state(state)
}
