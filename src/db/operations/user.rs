use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::db::DatabaseProxy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub age: Option<i64>,
    pub tier_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierLearnerCount {
    pub tier_id: i64,
    pub tier_name: String,
    pub learners: i64,
}

pub async fn get_user(proxy: &DatabaseProxy, user_id: i64) -> Result<Option<UserRow>, sqlx::Error> {
    let row = sqlx::query(r#"SELECT * FROM "users" WHERE "id" = ?"#)
        .bind(user_id)
        .fetch_optional(proxy.pool())
        .await?;
    row.as_ref().map(map_user).transpose()
}

pub async fn find_by_username(
    proxy: &DatabaseProxy,
    username: &str,
) -> Result<Option<UserRow>, sqlx::Error> {
    let row = sqlx::query(r#"SELECT * FROM "users" WHERE "username" = ?"#)
        .bind(username)
        .fetch_optional(proxy.pool())
        .await?;
    row.as_ref().map(map_user).transpose()
}

pub async fn email_exists(proxy: &DatabaseProxy, email: &str) -> Result<bool, sqlx::Error> {
    let found: Option<i64> = sqlx::query_scalar(r#"SELECT "id" FROM "users" WHERE "email" = ?"#)
        .bind(email)
        .fetch_optional(proxy.pool())
        .await?;
    Ok(found.is_some())
}

pub async fn insert_user(
    proxy: &DatabaseProxy,
    username: &str,
    email: Option<&str>,
    age: Option<i64>,
    tier_id: i64,
) -> Result<UserRow, sqlx::Error> {
    let now = Utc::now();
    let result = sqlx::query(
        r#"
        INSERT INTO "users" ("username", "email", "age", "tier_id", "created_at", "last_active")
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(age)
    .bind(tier_id)
    .bind(now)
    .bind(now)
    .execute(proxy.pool())
    .await?;

    Ok(UserRow {
        id: result.last_insert_rowid(),
        username: username.to_string(),
        email: email.map(str::to_string),
        age,
        tier_id: Some(tier_id),
        created_at: now,
        last_active: now,
    })
}

pub async fn touch_last_active(proxy: &DatabaseProxy, user_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query(r#"UPDATE "users" SET "last_active" = ? WHERE "id" = ?"#)
        .bind(Utc::now())
        .bind(user_id)
        .execute(proxy.pool())
        .await?;
    Ok(())
}

pub async fn list_users(proxy: &DatabaseProxy) -> Result<Vec<UserRow>, sqlx::Error> {
    let rows = sqlx::query(r#"SELECT * FROM "users" ORDER BY "id""#)
        .fetch_all(proxy.pool())
        .await?;
    rows.iter().map(map_user).collect()
}

pub async fn count_users(proxy: &DatabaseProxy) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "users""#)
        .fetch_one(proxy.pool())
        .await
}

/// Learner count for every tier, including tiers nobody is assigned to.
pub async fn count_users_by_tier(
    proxy: &DatabaseProxy,
) -> Result<Vec<TierLearnerCount>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT t."id" AS "tier_id", t."name" AS "tier_name", COUNT(u."id") AS "learners"
        FROM "age_tiers" t
        LEFT JOIN "users" u ON u."tier_id" = t."id"
        GROUP BY t."id", t."name"
        ORDER BY t."id"
        "#,
    )
    .fetch_all(proxy.pool())
    .await?;

    rows.iter()
        .map(|row| {
            Ok(TierLearnerCount {
                tier_id: row.try_get("tier_id")?,
                tier_name: row.try_get("tier_name")?,
                learners: row.try_get("learners")?,
            })
        })
        .collect()
}

fn map_user(row: &SqliteRow) -> Result<UserRow, sqlx::Error> {
    Ok(UserRow {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        age: row.try_get("age")?,
        tier_id: row.try_get("tier_id")?,
        created_at: row.try_get("created_at")?,
        last_active: row.try_get("last_active")?,
    })
}
