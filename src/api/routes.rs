//! API Routes
//!
//! Configures the Axum router with all posting API endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::models::MAX_POST_BYTES;

use super::handlers::{
    add_post_handler, delete_post_handler, get_posts_handler, health_handler, login_handler,
    signup_handler, AppState,
};

/// Request body cap. A JSON string escape can take 6 bytes per input byte
/// (`\u0001`), so a post at the text limit needs up to six times that on the
/// wire.
pub const MAX_BODY_BYTES: usize = 6 * MAX_POST_BYTES + 64 * 1024;

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - Body limit: [`MAX_BODY_BYTES`]
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/signup", post(signup_handler))
        .route("/login", post(login_handler))
        .route("/addpost", post(add_post_handler))
        .route("/getposts", get(get_posts_handler))
        .route("/deletepost/:post_id", delete(delete_post_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
