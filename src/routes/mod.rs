mod admin;
mod auth;
mod health;
mod learning;

use std::sync::Arc;

use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;

use crate::auth::{extract_token, verify_session_token, AuthError, Learner, SessionContext};
use crate::db::operations::user;
use crate::db::DatabaseProxy;
use crate::response::{json_error, AppError};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/auth", auth::router())
        .nest("/api/learning", learning::router())
        .nest("/api/admin", admin::router())
        .nest("/health", health::router())
        .fallback(fallback_handler)
        .with_state(state)
}

/// Decodes the request's session and refreshes a registered learner from storage, so the
/// tier is always current and deleted accounts stop authenticating.
pub(crate) async fn require_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<(Arc<DatabaseProxy>, SessionContext), AppError> {
    let token = extract_token(headers).ok_or(AuthError::MissingToken)?;
    let mut session = verify_session_token(&token, &state.config().session_secret)?;
    let proxy = state.db_proxy();

    if let Learner::Registered { id, .. } = session.learner {
        let row = user::get_user(proxy.as_ref(), id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Account no longer exists"))?;

        let tier_id = row.tier_id.unwrap_or(state.config().default_tier);
        session.learner = Learner::Registered { id, tier_id };
        session.username = row.username;
        session.age = row.age;

        if let Err(err) = user::touch_last_active(proxy.as_ref(), id).await {
            tracing::warn!(error = %err, user_id = id, "failed to update last_active");
        }
    }

    Ok((proxy, session))
}

async fn fallback_handler() -> Response {
    json_error(StatusCode::NOT_FOUND, "NOT_FOUND", "Endpoint not found").into_response()
}
