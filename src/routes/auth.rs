//! Auth routes: password sign-in, current user, logout.
//!
//! The backend access token lives in an HTTP-only cookie; the browser only
//! ever sees the normalized `User`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::{FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use stockdesk_client::net::types::{LoginRequest, User};
use time::Duration;

use crate::backend::BackendError;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "stockdesk_session";

pub(crate) fn session_cookie(token: String, expires_in_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::seconds(expires_in_secs))
        .build()
}

/// Expire the session cookie in the browser.
pub(crate) fn clear_session(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(COOKIE_NAME).path("/"))
}

pub(crate) fn unauthenticated() -> Response {
    (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "message": "not authenticated" }))).into_response()
}

// =============================================================================
// SESSION EXTRACTOR
// =============================================================================

/// Backend access token taken from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct SessionToken(pub String);

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        match jar.get(COOKIE_NAME).map(Cookie::value) {
            Some(token) if !token.is_empty() => Ok(Self(token.to_owned())),
            _ => Err(unauthenticated()),
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/login`: exchange credentials, set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<User>), BackendError> {
    let session = state
        .backend
        .sign_in_with_password(req.email.trim(), &req.password)
        .await?;
    let user = User::from(session.user);
    tracing::info!(user_id = %user.id, "user signed in");

    let cookie = session_cookie(session.access_token, session.expires_in, state.config.cookie_secure);
    Ok((jar.add(cookie), Json(user)))
}

/// `GET /api/auth/me`: the user behind the session cookie. A token the backend
/// rejects is dropped so later page loads skip the round trip.
pub async fn me(State(state): State<AppState>, jar: CookieJar, SessionToken(token): SessionToken) -> Response {
    match state.backend.current_user(&token).await {
        Ok(user) => Json(user).into_response(),
        Err(e) if e.is_unauthorized() => {
            tracing::debug!("session token rejected by backend; clearing cookie");
            (clear_session(jar), e).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// `POST /api/auth/logout`: revoke the token (best effort) and clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    if let Some(token) = jar.get(COOKIE_NAME).map(|c| c.value().to_owned()) {
        if let Err(e) = state.backend.sign_out(&token).await {
            tracing::warn!(error = %e, "backend sign-out failed; clearing cookie anyway");
        }
    }
    (clear_session(jar), StatusCode::NO_CONTENT)
}
