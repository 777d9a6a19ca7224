//! HTTP route handlers.

pub mod block;
pub mod front;
pub mod health;
pub mod helpers;

use axum::Router;

use crate::state::AppState;

/// Assemble the application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(front::router())
        .merge(block::router())
        .merge(health::router())
}
