use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/login", post(handlers::login))
        .route("/api/logout", post(handlers::logout))
        .route(
            "/api/document",
            get(handlers::get_document).put(handlers::put_document),
        )
        .route("/api/tasks", post(handlers::add_task))
        .route("/api/tasks/:id/toggle", post(handlers::toggle_task))
        .route("/api/tasks/:id", delete(handlers::delete_task))
        .route("/api/categories", post(handlers::add_category))
        .route("/api/categories/:id", delete(handlers::delete_category))
        .route("/api/assistant/first_step", post(handlers::assistant_first_step))
        .route("/api/assistant/plan", post(handlers::assistant_plan))
        .route("/api/assistant/sort", post(handlers::assistant_sort))
        .route("/api/assistant/parse", post(handlers::assistant_parse))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/achievements", get(handlers::get_achievements))
        .with_state(state)
}
