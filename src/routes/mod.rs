//! Route table.

mod characters;
mod common;

pub use characters::character_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application router: operational endpoints plus the character API, with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(character_routes(state))
        .layer(TraceLayer::new_for_http())
}
