//! Session gate middleware for protected routes

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

/// Name of the cookie carrying the session id
pub const SESSION_COOKIE: &str = "session_id";

/// Identity of the logged-in user, inserted into request extensions by
/// [`require_session`]
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: i64,
}

/// Session gate middleware
///
/// Resolves the session cookie against the session store. Authorized
/// requests proceed with a [`CurrentUser`] extension; everything else is
/// rejected with 401. There are no partial or degraded states.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let cookie = jar.get(SESSION_COOKIE).ok_or(ApiError::Unauthorized)?;

    let session_id = Uuid::parse_str(cookie.value()).map_err(|_| ApiError::Unauthorized)?;

    let user_id = state
        .sessions
        .resolve(session_id)
        .await
        .ok_or(ApiError::Unauthorized)?;

    req.extensions_mut().insert(CurrentUser { user_id });

    Ok(next.run(req).await)
}
