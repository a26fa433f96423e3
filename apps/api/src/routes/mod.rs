pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enhance::handlers as enhance;
use crate::state::AppState;
use crate::store::handlers as store;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/ai-enhance", post(enhance::handle_enhance))
        .route("/save-resume", post(store::handle_save_resume))
        .route("/resumes", get(store::handle_list_resumes))
        .route(
            "/resume/:id",
            get(store::handle_get_resume).delete(store::handle_delete_resume),
        )
        .with_state(state)
}
