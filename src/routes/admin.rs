use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::operations::{content, user, CatalogWord, NewWord, TierLearnerCount};
use crate::response::{ok, AppError};
use crate::routes::require_session;
use crate::services::CoreError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats))
        .route("/words", get(list_words).post(add_word))
        .route("/tiers", get(list_tiers))
        .route("/users", get(list_users))
}

#[derive(Debug, Deserialize)]
struct WordsQuery {
    tier_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct AddWordRequest {
    word: Option<String>,
    definition: Option<String>,
    tier_id: Option<i64>,
    pronunciation: Option<String>,
    part_of_speech: Option<String>,
    category: Option<String>,
    difficulty_level: Option<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdminStats {
    total_users: i64,
    total_words: i64,
    total_tiers: i64,
    tier_distribution: Vec<TierLearnerCount>,
}

async fn stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let (proxy, _session) = require_session(&state, &headers).await?;

    Ok(ok(AdminStats {
        total_users: user::count_users(&proxy).await?,
        total_words: content::count_words(&proxy).await?,
        total_tiers: content::count_tiers(&proxy).await?,
        tier_distribution: user::count_users_by_tier(&proxy).await?,
    }))
}

async fn list_words(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<WordsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (proxy, _session) = require_session(&state, &headers).await?;
    let words = content::list_catalog_words(&proxy, query.tier_id).await?;
    Ok(ok(words))
}

async fn add_word(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AddWordRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (proxy, session) = require_session(&state, &headers).await?;
    let Json(payload) = payload.map_err(|_| AppError::validation("Invalid JSON body"))?;

    let (Some(word), Some(definition), Some(tier_id)) = (
        non_blank(payload.word),
        non_blank(payload.definition),
        payload.tier_id,
    ) else {
        return Err(CoreError::InvalidInput(
            "word, definition and tier_id are required".to_string(),
        )
        .into());
    };

    let difficulty_level = payload.difficulty_level.unwrap_or(1);
    if difficulty_level < 1 {
        return Err(
            CoreError::InvalidInput("difficulty_level must be at least 1".to_string()).into(),
        );
    }

    if content::get_tier(&proxy, tier_id).await?.is_none() {
        return Err(CoreError::NotFound(format!("tier {tier_id}")).into());
    }

    let new_word = NewWord {
        tier_id,
        word,
        definition,
        pronunciation: non_blank(payload.pronunciation),
        part_of_speech: non_blank(payload.part_of_speech),
        category: non_blank(payload.category),
        difficulty_level,
    };
    let id = content::insert_word(&proxy, &new_word).await?;
    tracing::info!(
        word_id = id,
        tier_id,
        added_by = %session.username,
        "catalog word added"
    );

    let created = CatalogWord {
        id,
        tier_id: Some(new_word.tier_id),
        word: new_word.word,
        definition: new_word.definition,
        pronunciation: new_word.pronunciation,
        part_of_speech: new_word.part_of_speech,
        category: new_word.category,
        difficulty_level: new_word.difficulty_level,
    };
    Ok((StatusCode::CREATED, ok(created)))
}

async fn list_tiers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let (proxy, _session) = require_session(&state, &headers).await?;
    Ok(ok(content::list_tiers(&proxy).await?))
}

async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let (proxy, _session) = require_session(&state, &headers).await?;
    Ok(ok(user::list_users(&proxy).await?))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
