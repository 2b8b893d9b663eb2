use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::auth::{clear_session_cookie, session_cookie, sign_session_token, SessionContext};
use crate::db::operations::{content, user};
use crate::db::DatabaseProxy;
use crate::response::{ok, AppError};
use crate::routes::require_session;
use crate::state::AppState;

const ANCHOR_TIER_NAME: &str = "Elementary";
const DEMO_USERNAME: &str = "Demo User";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/demo", get(demo))
        .route("/logout", post(logout))
        .route("/session", get(current_session))
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    username: Option<String>,
    age: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    username: Option<String>,
    email: Option<String>,
    age: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct DemoQuery {
    tier: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionView {
    user_id: Option<i64>,
    username: String,
    age: Option<i64>,
    tier_id: i64,
    tier_name: Option<String>,
    is_ephemeral: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionIssued {
    session: SessionView,
    token: String,
    expires_at: String,
}

async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::validation("Invalid JSON body"))?;
    let username = required_field(payload.username, "username")?;
    let age = payload
        .age
        .ok_or_else(|| AppError::validation("age is required"))?;
    let proxy = state.db_proxy();

    let row = match user::find_by_username(&proxy, &username).await? {
        Some(existing) => existing,
        None => {
            let tier_id = tier_for_age(&proxy, Some(age), state.config().default_tier).await?;
            let created = user::insert_user(&proxy, &username, None, Some(age), tier_id).await?;
            tracing::info!(user_id = created.id, tier_id, "learner created on login");
            created
        }
    };
    user::touch_last_active(&proxy, row.id).await?;

    let tier_id = row.tier_id.unwrap_or(state.config().default_tier);
    let session = SessionContext::registered(row.id, tier_id, row.username, row.age);
    issue_session(&state, &proxy, StatusCode::OK, session).await
}

async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::validation("Invalid JSON body"))?;
    let username = required_field(payload.username, "username")?;
    let email = required_field(payload.email, "email")?;
    let proxy = state.db_proxy();

    if user::find_by_username(&proxy, &username).await?.is_some() {
        return Err(AppError::conflict("Username already taken"));
    }
    if user::email_exists(&proxy, &email).await? {
        return Err(AppError::conflict("Email already registered"));
    }

    let tier_id = tier_for_age(&proxy, payload.age, state.config().default_tier).await?;
    let row = user::insert_user(&proxy, &username, Some(&email), payload.age, tier_id)
        .await
        .map_err(|err| {
            let duplicate = err
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation());
            if duplicate {
                AppError::conflict("Username or email already registered")
            } else {
                AppError::from(err)
            }
        })?;
    tracing::info!(user_id = row.id, tier_id, "learner registered");

    let session = SessionContext::registered(row.id, tier_id, row.username, row.age);
    issue_session(&state, &proxy, StatusCode::CREATED, session).await
}

async fn demo(
    State(state): State<AppState>,
    Query(query): Query<DemoQuery>,
) -> Result<Response, AppError> {
    let proxy = state.db_proxy();

    let requested = match query.tier {
        Some(tier_id) => content::get_tier(&proxy, tier_id).await?,
        None => None,
    };
    let tier = match requested {
        Some(tier) => Some(tier),
        None => match content::find_tier_by_name(&proxy, ANCHOR_TIER_NAME).await? {
            Some(tier) => Some(tier),
            None => content::first_tier(&proxy).await?,
        },
    };
    let tier_id = tier.map_or(state.config().default_tier, |tier| tier.id);

    let session = SessionContext::ephemeral(tier_id, DEMO_USERNAME);
    issue_session(&state, &proxy, StatusCode::OK, session).await
}

async fn logout() -> Result<Response, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, cookie_header(&clear_session_cookie())?);

    Ok((
        StatusCode::OK,
        headers,
        Json(serde_json::json!({ "success": true, "message": "Logged out" })),
    )
        .into_response())
}

async fn current_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let (proxy, session) = require_session(&state, &headers).await?;
    Ok(ok(session_view(&proxy, &session).await?))
}

async fn session_view(
    proxy: &DatabaseProxy,
    session: &SessionContext,
) -> Result<SessionView, AppError> {
    let tier_name = content::get_tier(proxy, session.tier_id())
        .await?
        .map(|tier| tier.name);

    Ok(SessionView {
        user_id: session.learner.registered_id(),
        username: session.username.clone(),
        age: session.age,
        tier_id: session.tier_id(),
        tier_name,
        is_ephemeral: session.is_ephemeral(),
    })
}

async fn issue_session(
    state: &AppState,
    proxy: &DatabaseProxy,
    status: StatusCode,
    session: SessionContext,
) -> Result<Response, AppError> {
    let ttl_ms = state.config().session_ttl_ms;
    let (token, expires_at) = sign_session_token(&session, &state.config().session_secret, ttl_ms)
        .map_err(|err| AppError::internal(format!("failed to sign session: {err}")))?;

    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, cookie_header(&session_cookie(&token, ttl_ms))?);

    let body = SessionIssued {
        session: session_view(proxy, &session).await?,
        token,
        expires_at: expires_at.to_rfc3339(),
    };

    Ok((status, headers, ok(body)).into_response())
}

/// Tier whose age range contains `age`, else the anchor tier, else `fallback`.
async fn tier_for_age(
    proxy: &DatabaseProxy,
    age: Option<i64>,
    fallback: i64,
) -> Result<i64, sqlx::Error> {
    if let Some(age) = age {
        if let Some(tier) = content::find_tier_for_age(proxy, age).await? {
            return Ok(tier.id);
        }
    }
    Ok(content::find_tier_by_name(proxy, ANCHOR_TIER_NAME)
        .await?
        .map_or(fallback, |tier| tier.id))
}

fn required_field(value: Option<String>, name: &str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation(format!("{name} is required")))
}

fn cookie_header(cookie: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(cookie).map_err(|_| AppError::internal("invalid cookie header"))
}
