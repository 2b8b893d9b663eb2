use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::db::DatabaseProxy;

/// Cumulative practice history for one (learner, word) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryRecord {
    pub learner_id: i64,
    pub word_id: i64,
    pub attempts: i64,
    pub correct: i64,
    pub mastery: i64,
    pub last_practiced_at: DateTime<Utc>,
}

pub async fn get_mastery_record(
    proxy: &DatabaseProxy,
    learner_id: i64,
    word_id: i64,
) -> Result<Option<MasteryRecord>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT "learner_id", "word_id", "attempts", "correct", "mastery", "last_practiced_at"
        FROM "mastery_records"
        WHERE "learner_id" = ? AND "word_id" = ?
        "#,
    )
    .bind(learner_id)
    .bind(word_id)
    .fetch_optional(proxy.pool())
    .await?;
    row.as_ref().map(map_mastery_record).transpose()
}

/// Adds one attempt to the pair's record, creating it on first practice, and returns
/// the stored row. Counters and mastery are recomputed in a single statement so
/// concurrent submissions for the same pair serialize on the write lock.
pub async fn apply_attempt(
    proxy: &DatabaseProxy,
    learner_id: i64,
    word_id: i64,
    was_correct: bool,
    practiced_at: DateTime<Utc>,
) -> Result<MasteryRecord, sqlx::Error> {
    let correct = i64::from(was_correct);
    let row = sqlx::query(
        r#"
        INSERT INTO "mastery_records"
          ("learner_id", "word_id", "attempts", "correct", "mastery", "last_practiced_at")
        VALUES (?, ?, 1, ?, ?, ?)
        ON CONFLICT ("learner_id", "word_id") DO UPDATE SET
          "attempts" = "attempts" + 1,
          "correct" = "correct" + excluded."correct",
          "mastery" = MIN(100, 100 * ("correct" + excluded."correct") / ("attempts" + 1)),
          "last_practiced_at" = excluded."last_practiced_at"
        RETURNING "learner_id", "word_id", "attempts", "correct", "mastery", "last_practiced_at"
        "#,
    )
    .bind(learner_id)
    .bind(word_id)
    .bind(correct)
    .bind(100 * correct)
    .bind(practiced_at)
    .fetch_one(proxy.pool())
    .await?;
    map_mastery_record(&row)
}

pub async fn count_learner_records(
    proxy: &DatabaseProxy,
    learner_id: i64,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "mastery_records" WHERE "learner_id" = ?"#)
        .bind(learner_id)
        .fetch_one(proxy.pool())
        .await
}

pub async fn count_mastered_words(
    proxy: &DatabaseProxy,
    learner_id: i64,
    threshold: i64,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"SELECT COUNT(*) FROM "mastery_records" WHERE "learner_id" = ? AND "mastery" >= ?"#,
    )
    .bind(learner_id)
    .bind(threshold)
    .fetch_one(proxy.pool())
    .await
}

pub async fn list_practice_times(
    proxy: &DatabaseProxy,
    learner_id: i64,
) -> Result<Vec<DateTime<Utc>>, sqlx::Error> {
    sqlx::query_scalar(
        r#"SELECT "last_practiced_at" FROM "mastery_records" WHERE "learner_id" = ?"#,
    )
    .bind(learner_id)
    .fetch_all(proxy.pool())
    .await
}

fn map_mastery_record(row: &SqliteRow) -> Result<MasteryRecord, sqlx::Error> {
    Ok(MasteryRecord {
        learner_id: row.try_get("learner_id")?,
        word_id: row.try_get("word_id")?,
        attempts: row.try_get("attempts")?,
        correct: row.try_get("correct")?,
        mastery: row.try_get("mastery")?,
        last_practiced_at: row.try_get("last_practiced_at")?,
    })
}
