use axum::{routing::get, Router};

use crate::{controller::health, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::index))
        .route("/keep_alive", get(health::keep_alive))
}
