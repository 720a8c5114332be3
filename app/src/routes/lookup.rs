use axum::{Router, routing::get};

use infra::{AppState, http::handler::lookup::item_type};

pub fn create_item_type_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(item_type::list))
        .route("/{code}", get(item_type::by_code))
        .with_state(app_state)
}
