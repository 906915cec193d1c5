//! API Handlers
//!
//! HTTP request handlers for each posting API endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Form, Json,
};
use tracing::{debug, info, warn};

use crate::auth::{Authenticator, BearerToken, TokenService};
use crate::cache::PostCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    DeleteResponse, HealthResponse, LoginForm, Post, PostCreate, SignupRequest, TokenResponse,
};
use crate::storage::{InMemoryStorage, Storage};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Credential and post persistence
    pub storage: Arc<dyn Storage>,
    /// Password checks and token handling
    pub authenticator: Arc<Authenticator>,
    /// Per-user post list cache
    pub cache: Arc<RwLock<PostCache>>,
}

impl AppState {
    /// Creates a new AppState around the given storage, authenticator and cache.
    pub fn new(storage: Arc<dyn Storage>, authenticator: Authenticator, cache: PostCache) -> Self {
        Self {
            storage,
            authenticator: Arc::new(authenticator),
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration, backed by in-memory storage.
    pub fn from_config(config: &Config) -> Self {
        let storage: Arc<dyn Storage> = Arc::new(InMemoryStorage::new());
        let tokens = TokenService::new(&config.token_secret, config.token_ttl_minutes);
        let authenticator = Authenticator::new(storage.clone(), tokens);
        let cache = PostCache::new(config.cache_capacity, config.cache_ttl);
        Self::new(storage, authenticator, cache)
    }
}

/// Handler for POST /signup
///
/// Registers an account and returns an access token for it.
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<TokenResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    // Duplicate emails are accepted; login resolves to the earliest account.
    if state.storage.find_user_by_email(&req.email).await?.is_some() {
        warn!(email = %req.email, "signup for an email that is already registered");
    }

    let user = state.storage.create_user(&req.email, &req.password).await?;
    let token = state.authenticator.create_token(&user.email)?;
    info!(user_id = user.id, "user signed up");

    Ok(Json(TokenResponse::bearer(token)))
}

/// Handler for POST /login
///
/// Exchanges form credentials for an access token.
pub async fn login_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>> {
    let user = state
        .authenticator
        .authenticate(&form.username, &form.password)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Incorrect email or password".to_string()))?;

    let token = state.authenticator.create_token(&user.email)?;
    info!(user_id = user.id, "user logged in");

    Ok(Json(TokenResponse::bearer(token)))
}

/// Handler for POST /addpost
///
/// The size limit is enforced before the token is resolved.
pub async fn add_post_handler(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Json(req): Json<PostCreate>,
) -> Result<Json<Post>> {
    if req.exceeds_limit() {
        return Err(ApiError::PayloadTooLarge("Payload too large".to_string()));
    }

    let user = state.authenticator.resolve(&token).await?;
    let post = state.storage.create_post(user.id, &req.text).await?;
    debug!(user_id = user.id, post_id = post.id, bytes = req.text.len(), "post created");

    Ok(Json(post))
}

/// Handler for GET /getposts
///
/// Serves the caller's post list from the cache while it is fresh. Writes never
/// invalidate the cache, so a list may lag behind storage for up to the TTL.
pub async fn get_posts_handler(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<Vec<Post>>> {
    let user = state.authenticator.resolve(&token).await?;

    // Write lock: a hit updates LRU order and stats
    let cached = state.cache.write().await.get(&user.id);
    if let Some(posts) = cached {
        debug!(user_id = user.id, count = posts.len(), "post list served from cache");
        return Ok(Json(posts));
    }

    let posts = state.storage.list_posts_by_owner(user.id).await?;
    state.cache.write().await.put(user.id, posts.clone());
    debug!(user_id = user.id, count = posts.len(), "post list loaded from storage");

    Ok(Json(posts))
}

/// Handler for DELETE /deletepost/:post_id
///
/// Only the owner can delete a post; anything else is reported as not found.
pub async fn delete_post_handler(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(post_id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    let user = state.authenticator.resolve(&token).await?;

    if !state.storage.delete_post_owned_by(post_id, user.id).await? {
        return Err(ApiError::NotFound("Post not found".to_string()));
    }
    info!(user_id = user.id, post_id, "post deleted");

    Ok(Json(DeleteResponse::deleted()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::from_config(&Config::default())
    }

    async fn signup(state: &AppState, email: &str, password: &str) -> String {
        let req = SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        signup_handler(State(state.clone()), Json(req))
            .await
            .unwrap()
            .0
            .access_token
    }

    #[tokio::test]
    async fn test_signup_then_empty_post_list() {
        let state = test_state();
        let token = signup(&state, "ada@example.com", "pw").await;

        let posts = get_posts_handler(State(state), BearerToken(token))
            .await
            .unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_signup_invalid_email() {
        let state = test_state();
        let req = SignupRequest {
            email: "nope".to_string(),
            password: "pw".to_string(),
        };

        let result = signup_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_login_success_and_failure() {
        let state = test_state();
        signup(&state, "ada@example.com", "pw").await;

        let ok = login_handler(
            State(state.clone()),
            Form(LoginForm {
                username: "ada@example.com".to_string(),
                password: "pw".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(ok.token_type, "bearer");

        let bad = login_handler(
            State(state),
            Form(LoginForm {
                username: "ada@example.com".to_string(),
                password: "wrong".to_string(),
            }),
        )
        .await;
        assert!(matches!(bad, Err(ApiError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_add_post_too_large_checked_before_token() {
        let state = test_state();
        let req = PostCreate {
            text: "x".repeat(crate::models::MAX_POST_BYTES + 1),
        };

        let result = add_post_handler(
            State(state),
            BearerToken("not-a-real-token".to_string()),
            Json(req),
        )
        .await;
        assert!(matches!(result, Err(ApiError::PayloadTooLarge(_))));
    }

    #[tokio::test]
    async fn test_add_then_delete_post() {
        let state = test_state();
        let token = signup(&state, "ada@example.com", "pw").await;

        let post = add_post_handler(
            State(state.clone()),
            BearerToken(token.clone()),
            Json(PostCreate {
                text: "hello".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(post.text, "hello");

        let deleted = delete_post_handler(
            State(state.clone()),
            BearerToken(token.clone()),
            Path(post.id),
        )
        .await
        .unwrap();
        assert_eq!(deleted.detail, "Post deleted");

        let again = delete_post_handler(State(state), BearerToken(token), Path(post.id)).await;
        assert!(matches!(again, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_posts_populates_cache() {
        let state = test_state();
        let token = signup(&state, "ada@example.com", "pw").await;

        get_posts_handler(State(state.clone()), BearerToken(token))
            .await
            .unwrap();

        let cache = state.cache.read().await;
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().misses, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
