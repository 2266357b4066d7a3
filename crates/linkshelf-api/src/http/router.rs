//! Axum router configuration with middleware.
//!
//! Middleware: CORS, tracing. Auth routes and `/health` are public; user
//! and bookmark routes authenticate through the [`CurrentUser`] extractor.
//!
//! [`CurrentUser`]: crate::http::extractors::auth::CurrentUser

use axum::Router;
use axum::routing::{get, patch, post};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Auth
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/signin", post(handlers::auth::signin))
        // Profile
        .route("/users/me", get(handlers::user::get_me))
        .route("/users", patch(handlers::user::edit_user))
        // Bookmarks
        .route(
            "/bookmarks",
            get(handlers::bookmark::list_bookmarks).post(handlers::bookmark::create_bookmark),
        )
        .route(
            "/bookmarks/{id}",
            get(handlers::bookmark::get_bookmark)
                .patch(handlers::bookmark::edit_bookmark)
                .delete(handlers::bookmark::delete_bookmark),
        )
        // Health
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness probe.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
