pub mod health;

use axum::{routing::get, Router};

use crate::errors::AppError;
use crate::resume::handlers;
use crate::state::AppState;

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn not_found() -> AppError {
    AppError::NotFound
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(health::test_handler).fallback(method_not_allowed))
        .route(
            "/health",
            get(health::health_handler).fallback(method_not_allowed),
        )
        .route(
            "/resume/:kind",
            get(handlers::handle_list)
                .post(handlers::handle_create)
                .put(handlers::handle_update)
                .delete(handlers::handle_remove)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
}
