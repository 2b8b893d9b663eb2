use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::config::default_words_per_session;
use crate::db::operations::{content, WordSnapshot};
use crate::response::{ok, AppError};
use crate::routes::require_session;
use crate::services::{mastery, practice, progress, CoreError};
use crate::state::AppState;

const VOCABULARY_PAGE_SIZE: i64 = 20;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/vocabulary", get(vocabulary))
        .route("/practice", get(practice_words))
        .route("/practice/submit", post(submit_practice))
        .route("/achievements", get(achievements))
}

#[derive(Debug, Deserialize)]
struct SubmitPracticeRequest {
    word_id: Option<i64>,
    #[serde(default)]
    is_correct: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WordList {
    tier_id: i64,
    words: Vec<WordSnapshot>,
}

async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let (proxy, session) = require_session(&state, &headers).await?;
    let summary = progress::dashboard(&proxy, &session).await?;
    Ok(ok(summary))
}

async fn vocabulary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let (proxy, session) = require_session(&state, &headers).await?;
    let tier_id = session.tier_id();
    let words = content::list_tier_words(&proxy, tier_id, VOCABULARY_PAGE_SIZE).await?;
    Ok(ok(WordList { tier_id, words }))
}

async fn practice_words(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let (proxy, session) = require_session(&state, &headers).await?;
    let tier_id = session.tier_id();

    let limit = match state.config().practice_session_size {
        Some(size) => size,
        None => content::get_tier(&proxy, tier_id)
            .await?
            .and_then(|tier| tier.words_per_session)
            .unwrap_or_else(|| default_words_per_session(tier_id)),
    };

    let words = practice::select_practice_words(&proxy, &session.learner, tier_id, limit).await?;
    Ok(ok(WordList { tier_id, words }))
}

async fn submit_practice(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SubmitPracticeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (proxy, session) = require_session(&state, &headers).await?;

    let Json(payload) = payload.map_err(|rejection| {
        CoreError::InvalidInput(format!("malformed practice submission: {}", rejection.body_text()))
    })?;
    let word_id = payload
        .word_id
        .ok_or_else(|| CoreError::InvalidInput("word_id is required".to_string()))?;
    let was_correct = payload.is_correct.unwrap_or(false);

    let outcome = mastery::record_attempt(&proxy, &session.learner, word_id, was_correct).await?;
    Ok(Json(outcome.summary()))
}

async fn achievements(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let (proxy, session) = require_session(&state, &headers).await?;
    let board = progress::achievements(&proxy, &session).await?;
    Ok(ok(board))
}
