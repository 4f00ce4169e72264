//! Auth endpoints: register/login/logout, current user, and the external
//! OAuth session exchange.

use std::time::Duration;

use axum::extract::{Extension, Json, State};
use axum::http::{header, HeaderMap};
use axum::response::{AppendHeaders, IntoResponse};
use chrono::Duration as ChronoDuration;
use coords::models::{
    generate_id, utc_now, LoginRequest, LoginResponse, RegisterRequest, Session, User, UserRole,
};
use coords::CoordsError;
use serde::Deserialize;
use serde_json::json;

use crate::auth::{
    clear_session_cookie, extract_session_token, generate_jwt, hash_password, session_cookie,
    verify_password, SESSION_EXPIRY_DAYS,
};
use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

async fn store_session(state: &AppState, user_id: &str, token: &str) -> Result<(), CoordsError> {
    state
        .stores
        .sessions
        .put(Session {
            session_id: generate_id("sess_"),
            user_id: user_id.to_string(),
            session_token: token.to_string(),
            expires_at: utc_now() + ChronoDuration::days(SESSION_EXPIRY_DAYS),
            created_at: utc_now(),
        })
        .await
}

#[derive(Debug, Deserialize)]
pub struct SessionExchangeRequest {
    pub session_id: String,
}

/// POST /api/auth/session — exchange an external OAuth session id for a
/// local session.
pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<SessionExchangeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.oauth_session_url.clone().ok_or_else(|| {
        CoordsError::Unavailable("OAuth session exchange is not configured".into())
    })?;

    let response = reqwest::Client::new()
        .get(&url)
        .header("X-Session-ID", &req.session_id)
        .timeout(Duration::from_secs(10))
        .send()
        .await
        .map_err(|e| CoordsError::Unavailable(format!("session exchange failed: {e}")))?;

    if !response.status().is_success() {
        return Err(CoordsError::Unauthorized("invalid session_id".into()).into());
    }

    let data: serde_json::Value = response
        .json()
        .await
        .map_err(|e| CoordsError::Unavailable(format!("session exchange failed: {e}")))?;

    let email = data["email"]
        .as_str()
        .ok_or_else(|| CoordsError::Unauthorized("invalid session_id".into()))?
        .to_string();
    let name = data["name"].as_str().unwrap_or(&email).to_string();
    let picture = data["picture"].as_str().map(str::to_string);
    let session_token = data["session_token"]
        .as_str()
        .ok_or_else(|| CoordsError::Unauthorized("invalid session_id".into()))?
        .to_string();

    let user = match state.stores.users.find_by_email(&email).await? {
        Some(mut existing) => {
            existing.name = name;
            existing.picture = picture;
            existing.updated_at = utc_now();
            state.stores.users.put(existing.clone()).await?;
            existing
        }
        None => {
            let user = User {
                user_id: generate_id("user_"),
                email,
                name,
                picture,
                role: UserRole::Operator,
                tenant_id: "default".into(),
                password_hash: None,
                created_at: utc_now(),
                updated_at: utc_now(),
            };
            state.stores.users.put(user.clone()).await?;
            user
        }
    };

    store_session(&state, &user.user_id, &session_token).await?;

    Ok((
        AppendHeaders([(header::SET_COOKIE, session_cookie(&session_token))]),
        Json(json!({ "success": true, "user": user })),
    ))
}

/// POST /api/auth/login — email/password login.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .stores
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| CoordsError::Unauthorized("invalid credentials".into()))?;

    let valid = user
        .password_hash
        .as_deref()
        .is_some_and(|hash| verify_password(&req.password, hash));
    if !valid {
        return Err(CoordsError::Unauthorized("invalid credentials".into()).into());
    }

    let token = generate_jwt(&state.auth, &user)?;
    store_session(&state, &user.user_id, &token).await?;

    Ok((
        AppendHeaders([(header::SET_COOKIE, session_cookie(&token))]),
        Json(LoginResponse { token, user }),
    ))
}

/// POST /api/auth/register — create an operator account.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(CoordsError::InvalidInput("email and password required".into()).into());
    }
    if state.stores.users.find_by_email(&req.email).await?.is_some() {
        return Err(CoordsError::InvalidInput("user already exists".into()).into());
    }

    let name = req
        .name
        .unwrap_or_else(|| req.email.split('@').next().unwrap_or(&req.email).to_string());

    let user = User {
        user_id: generate_id("user_"),
        email: req.email,
        name,
        picture: None,
        role: UserRole::Operator,
        tenant_id: "default".into(),
        password_hash: Some(hash_password(&req.password)),
        created_at: utc_now(),
        updated_at: utc_now(),
    };
    state.stores.users.put(user.clone()).await?;

    let token = generate_jwt(&state.auth, &user)?;
    store_session(&state, &user.user_id, &token).await?;

    Ok((
        AppendHeaders([(header::SET_COOKIE, session_cookie(&token))]),
        Json(json!({ "success": true, "user": user, "token": token })),
    ))
}

/// GET /api/auth/me — the authenticated user.
pub async fn me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<User> {
    Json(user)
}

/// POST /api/auth/logout — drop the session and clear the cookie.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    if let Some(token) = extract_session_token(&headers) {
        state.stores.sessions.delete_by_token(&token).await?;
    }
    Ok((
        AppendHeaders([(header::SET_COOKIE, clear_session_cookie())]),
        Json(json!({ "success": true })),
    ))
}
