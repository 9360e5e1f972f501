mod get_health;
mod get_options;
mod get_suggest;
mod post_advisory;

use crate::state::ServerState;
use axum::{
    routing::{get, post},
    Router,
};

pub use get_health::get_health;
pub use get_options::get_options;
pub use get_suggest::get_suggest;
pub use post_advisory::post_advisory;

pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(get_health))
        .route("/options", get(get_options))
        .route("/suggest", get(get_suggest))
        .route("/advisory", post(post_advisory))
        .with_state(state)
}
