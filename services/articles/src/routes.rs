//! Articles service routes

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    middleware,
    response::IntoResponse,
    routing::{delete, get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    fixtures,
    middleware::{CurrentUser, SESSION_COOKIE, require_session},
};

/// Request for user login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

/// Create the router for the articles service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/members_only_articles", get(list_member_only_articles))
        .route("/members_only_articles/:id", get(get_member_only_article))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/login", post(login))
        .route("/logout", delete(logout))
        .route("/clear", get(clear))
        .merge(protected_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "articles-service"
    }))
}

/// User login endpoint
///
/// Identity is established by username alone; an unknown username fails
/// with 404 and no session is created.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    info!("Login attempt for user: {}", payload.username);

    let user = state
        .user_repository
        .find_by_username(&payload.username)
        .await
        .map_err(|e| {
            error!("Failed to look up user: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let session_id = state.sessions.create_session(user.id).await;

    let cookie = Cookie::build((SESSION_COOKIE, session_id.to_string()))
        .path("/")
        .http_only(true)
        .build();

    Ok((jar.add(cookie), Json(user)))
}

/// Logout endpoint
///
/// Idempotent: clearing an already-anonymous session is not an error.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<impl IntoResponse> {
    let session_id = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

    if let Some(session_id) = session_id {
        state.sessions.delete_session(session_id).await;
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/").build());

    Ok((jar, Json(json!({"message": "Logged out successfully"}))))
}

/// Reset endpoint used to isolate test runs
///
/// Drops every session binding and re-establishes the seed fixtures.
pub async fn clear(State(state): State<AppState>, jar: CookieJar) -> ApiResult<impl IntoResponse> {
    info!("Resetting sessions and seed fixtures");

    state.sessions.clear_all().await;

    fixtures::ensure_seed(&state.user_repository, &state.article_repository)
        .await
        .map_err(|e| {
            error!("Failed to reset fixtures: {}", e);
            ApiError::InternalServerError
        })?;

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/").build());

    Ok((jar, Json(json!({"message": "State cleared"}))))
}

/// List all member-only articles
pub async fn list_member_only_articles(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> ApiResult<impl IntoResponse> {
    info!(
        "Listing member-only articles for user: {}",
        current_user.user_id
    );

    let articles = state
        .article_repository
        .find_member_only()
        .await
        .map_err(|e| {
            error!("Failed to list member-only articles: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(articles))
}

/// Get a single article by ID
///
/// The gate controls access to the route; the article itself is returned
/// regardless of its member-only flag.
pub async fn get_member_only_article(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    info!(
        "Fetching article {} for user: {}",
        id, current_user.user_id
    );

    let article = state
        .article_repository
        .find_by_id(id)
        .await
        .map_err(|e| {
            error!("Failed to get article: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;

    Ok(Json(article))
}
