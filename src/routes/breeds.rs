//! Breed routes. `/search` is registered before the `/:id` capture so the
//! static segment wins dispatch.

use crate::handlers::breeds::{
    create_breed, delete_breed, get_breed, list_breeds, search_breeds, update_breed,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn breed_routes(state: AppState) -> Router {
    Router::new()
        .route("/search", get(search_breeds))
        .route("/", get(list_breeds).post(create_breed))
        .route(
            "/:id",
            get(get_breed).put(update_breed).delete(delete_breed),
        )
        .with_state(state)
}
