use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::db::DatabaseProxy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeTier {
    pub id: i64,
    pub name: String,
    pub min_age: i64,
    pub max_age: i64,
    pub description: Option<String>,
    pub cognitive_stage: Option<String>,
    pub attention_span_minutes: Option<i64>,
    pub words_per_session: Option<i64>,
}

/// Read-only view of a catalog word handed out to practice and listing callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSnapshot {
    pub id: i64,
    pub word: String,
    pub definition: String,
    pub part_of_speech: Option<String>,
    pub category: Option<String>,
    pub difficulty_level: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogWord {
    pub id: i64,
    pub tier_id: Option<i64>,
    pub word: String,
    pub definition: String,
    pub pronunciation: Option<String>,
    pub part_of_speech: Option<String>,
    pub category: Option<String>,
    pub difficulty_level: i64,
}

#[derive(Debug, Clone)]
pub struct NewWord {
    pub tier_id: i64,
    pub word: String,
    pub definition: String,
    pub pronunciation: Option<String>,
    pub part_of_speech: Option<String>,
    pub category: Option<String>,
    pub difficulty_level: i64,
}

impl NewWord {
    pub fn new(
        tier_id: i64,
        word: impl Into<String>,
        definition: impl Into<String>,
        part_of_speech: &str,
        category: &str,
    ) -> Self {
        Self {
            tier_id,
            word: word.into(),
            definition: definition.into(),
            pronunciation: None,
            part_of_speech: Some(part_of_speech.to_string()),
            category: Some(category.to_string()),
            difficulty_level: 1,
        }
    }

    pub fn with_difficulty(mut self, difficulty_level: i64) -> Self {
        self.difficulty_level = difficulty_level;
        self
    }
}

const TIER_COLUMNS: &str = r#""id", "name", "min_age", "max_age", "description", "cognitive_stage",
    "attention_span_minutes", "words_per_session""#;

const SNAPSHOT_COLUMNS: &str = r#"w."id", w."word", w."definition", w."part_of_speech", w."category",
    w."difficulty_level""#;

pub async fn list_tiers(proxy: &DatabaseProxy) -> Result<Vec<AgeTier>, sqlx::Error> {
    let sql = format!(r#"SELECT {TIER_COLUMNS} FROM "age_tiers" ORDER BY "id""#);
    let rows = sqlx::query(&sql).fetch_all(proxy.pool()).await?;
    rows.iter().map(map_tier).collect()
}

pub async fn get_tier(proxy: &DatabaseProxy, tier_id: i64) -> Result<Option<AgeTier>, sqlx::Error> {
    let sql = format!(r#"SELECT {TIER_COLUMNS} FROM "age_tiers" WHERE "id" = ?"#);
    let row = sqlx::query(&sql)
        .bind(tier_id)
        .fetch_optional(proxy.pool())
        .await?;
    row.as_ref().map(map_tier).transpose()
}

pub async fn find_tier_for_age(
    proxy: &DatabaseProxy,
    age: i64,
) -> Result<Option<AgeTier>, sqlx::Error> {
    let sql = format!(
        r#"SELECT {TIER_COLUMNS} FROM "age_tiers" WHERE "min_age" <= ? AND "max_age" >= ? ORDER BY "id" LIMIT 1"#
    );
    let row = sqlx::query(&sql)
        .bind(age)
        .bind(age)
        .fetch_optional(proxy.pool())
        .await?;
    row.as_ref().map(map_tier).transpose()
}

pub async fn find_tier_by_name(
    proxy: &DatabaseProxy,
    name: &str,
) -> Result<Option<AgeTier>, sqlx::Error> {
    let sql = format!(r#"SELECT {TIER_COLUMNS} FROM "age_tiers" WHERE "name" = ? LIMIT 1"#);
    let row = sqlx::query(&sql)
        .bind(name)
        .fetch_optional(proxy.pool())
        .await?;
    row.as_ref().map(map_tier).transpose()
}

pub async fn first_tier(proxy: &DatabaseProxy) -> Result<Option<AgeTier>, sqlx::Error> {
    let sql = format!(r#"SELECT {TIER_COLUMNS} FROM "age_tiers" ORDER BY "id" LIMIT 1"#);
    let row = sqlx::query(&sql).fetch_optional(proxy.pool()).await?;
    row.as_ref().map(map_tier).transpose()
}

pub async fn count_tiers(proxy: &DatabaseProxy) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "age_tiers""#)
        .fetch_one(proxy.pool())
        .await
}

pub async fn insert_tier(proxy: &DatabaseProxy, tier: &AgeTier) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO "age_tiers"
          ("id", "name", "min_age", "max_age", "description", "cognitive_stage",
           "attention_span_minutes", "words_per_session")
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(tier.id)
    .bind(&tier.name)
    .bind(tier.min_age)
    .bind(tier.max_age)
    .bind(&tier.description)
    .bind(&tier.cognitive_stage)
    .bind(tier.attention_span_minutes)
    .bind(tier.words_per_session)
    .execute(proxy.pool())
    .await?;
    Ok(())
}

pub async fn count_words(proxy: &DatabaseProxy) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "vocabulary_words""#)
        .fetch_one(proxy.pool())
        .await
}

pub async fn count_words_in_tier(proxy: &DatabaseProxy, tier_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "vocabulary_words" WHERE "tier_id" = ?"#)
        .bind(tier_id)
        .fetch_one(proxy.pool())
        .await
}

/// First `limit` words of a tier in ascending id order.
pub async fn list_tier_words(
    proxy: &DatabaseProxy,
    tier_id: i64,
    limit: i64,
) -> Result<Vec<WordSnapshot>, sqlx::Error> {
    let sql = format!(
        r#"SELECT {SNAPSHOT_COLUMNS} FROM "vocabulary_words" w WHERE w."tier_id" = ? ORDER BY w."id" LIMIT ?"#
    );
    let rows = sqlx::query(&sql)
        .bind(tier_id)
        .bind(limit)
        .fetch_all(proxy.pool())
        .await?;
    rows.iter().map(map_snapshot).collect()
}

/// Words of a tier that the learner has never attempted or holds below `threshold` mastery.
pub async fn list_reinforcement_words(
    proxy: &DatabaseProxy,
    learner_id: i64,
    tier_id: i64,
    threshold: i64,
    limit: i64,
) -> Result<Vec<WordSnapshot>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT {SNAPSHOT_COLUMNS}
        FROM "vocabulary_words" w
        LEFT JOIN "mastery_records" m
          ON m."word_id" = w."id" AND m."learner_id" = ?
        WHERE w."tier_id" = ?
          AND (m."learner_id" IS NULL OR m."mastery" < ?)
        ORDER BY w."id"
        LIMIT ?
        "#
    );
    let rows = sqlx::query(&sql)
        .bind(learner_id)
        .bind(tier_id)
        .bind(threshold)
        .bind(limit)
        .fetch_all(proxy.pool())
        .await?;
    rows.iter().map(map_snapshot).collect()
}

pub async fn list_catalog_words(
    proxy: &DatabaseProxy,
    tier_id: Option<i64>,
) -> Result<Vec<CatalogWord>, sqlx::Error> {
    let rows = match tier_id {
        Some(tier_id) => {
            sqlx::query(r#"SELECT * FROM "vocabulary_words" WHERE "tier_id" = ? ORDER BY "id""#)
                .bind(tier_id)
                .fetch_all(proxy.pool())
                .await?
        }
        None => {
            sqlx::query(r#"SELECT * FROM "vocabulary_words" ORDER BY "tier_id", "id""#)
                .fetch_all(proxy.pool())
                .await?
        }
    };
    rows.iter().map(map_catalog_word).collect()
}

pub async fn insert_word(proxy: &DatabaseProxy, word: &NewWord) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO "vocabulary_words"
          ("word", "definition", "pronunciation", "part_of_speech", "difficulty_level",
           "tier_id", "category")
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&word.word)
    .bind(&word.definition)
    .bind(&word.pronunciation)
    .bind(&word.part_of_speech)
    .bind(word.difficulty_level)
    .bind(word.tier_id)
    .bind(&word.category)
    .execute(proxy.pool())
    .await?;
    Ok(result.last_insert_rowid())
}

/// Inserts a batch inside one transaction; either every word lands or none do.
pub async fn insert_words(proxy: &DatabaseProxy, words: &[NewWord]) -> Result<u64, sqlx::Error> {
    let mut tx = proxy.pool().begin().await?;
    let mut inserted = 0;
    for word in words {
        let result = sqlx::query(
            r#"
            INSERT INTO "vocabulary_words"
              ("word", "definition", "pronunciation", "part_of_speech", "difficulty_level",
               "tier_id", "category")
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&word.word)
        .bind(&word.definition)
        .bind(&word.pronunciation)
        .bind(&word.part_of_speech)
        .bind(word.difficulty_level)
        .bind(word.tier_id)
        .bind(&word.category)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }
    tx.commit().await?;
    Ok(inserted)
}

/// Lower-cased spellings already present in a tier.
pub async fn list_tier_spellings(
    proxy: &DatabaseProxy,
    tier_id: i64,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT LOWER("word") FROM "vocabulary_words" WHERE "tier_id" = ?"#)
        .bind(tier_id)
        .fetch_all(proxy.pool())
        .await
}

fn map_tier(row: &SqliteRow) -> Result<AgeTier, sqlx::Error> {
    Ok(AgeTier {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        min_age: row.try_get("min_age")?,
        max_age: row.try_get("max_age")?,
        description: row.try_get("description")?,
        cognitive_stage: row.try_get("cognitive_stage")?,
        attention_span_minutes: row.try_get("attention_span_minutes")?,
        words_per_session: row.try_get("words_per_session")?,
    })
}

fn map_snapshot(row: &SqliteRow) -> Result<WordSnapshot, sqlx::Error> {
    Ok(WordSnapshot {
        id: row.try_get("id")?,
        word: row.try_get("word")?,
        definition: row.try_get("definition")?,
        part_of_speech: row.try_get("part_of_speech")?,
        category: row.try_get("category")?,
        difficulty_level: row.try_get("difficulty_level")?,
    })
}

fn map_catalog_word(row: &SqliteRow) -> Result<CatalogWord, sqlx::Error> {
    Ok(CatalogWord {
        id: row.try_get("id")?,
        tier_id: row.try_get("tier_id")?,
        word: row.try_get("word")?,
        definition: row.try_get("definition")?,
        pronunciation: row.try_get("pronunciation")?,
        part_of_speech: row.try_get("part_of_speech")?,
        category: row.try_get("category")?,
        difficulty_level: row.try_get("difficulty_level")?,
    })
}
