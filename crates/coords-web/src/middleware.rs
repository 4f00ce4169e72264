//! Session authentication middleware.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use coords::models::{utc_now, User};
use coords::CoordsError;

use crate::auth::extract_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated user, inserted as a request extension.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Reject the request unless it carries a live session; on success the
/// handler sees [`CurrentUser`].
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_session_token(request.headers())
        .ok_or_else(|| CoordsError::Unauthorized("no session token provided".into()))?;

    let session = state
        .stores
        .sessions
        .find_by_token(&token)
        .await?
        .ok_or_else(|| CoordsError::Unauthorized("invalid session token".into()))?;

    if session.expires_at < utc_now() {
        return Err(CoordsError::Unauthorized("session expired".into()).into());
    }

    let user = state
        .stores
        .users
        .find_by_id(&session.user_id)
        .await?
        .ok_or_else(|| CoordsError::Unauthorized("user not found".into()))?;

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}
