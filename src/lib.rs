pub mod app;
pub mod assistant;
pub mod auth;
pub mod errors;
pub mod gamification;
pub mod handlers;
pub mod models;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{load_store, resolve_data_path};
