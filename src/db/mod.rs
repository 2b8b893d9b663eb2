pub mod operations;
pub mod schema;

use std::str::FromStr;
use std::time::{Duration, Instant};

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::db::schema::{split_sql_statements, SCHEMA_SQL, SCHEMA_VERSION};

const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct DatabaseProxy {
    pool: SqlitePool,
    url: String,
}

impl DatabaseProxy {
    pub async fn connect(url: &str) -> Result<Self, DbInitError> {
        let in_memory = is_in_memory_url(url);

        let mut options = SqliteConnectOptions::from_str(url)
            .map_err(DbInitError::Config)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(BUSY_TIMEOUT);
        if !in_memory {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        // Every connection to `:memory:` opens its own database, so the pool is pinned to one
        // connection that is never recycled.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
        };

        let pool = pool_options
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await
            .map_err(DbInitError::Sqlx)?;

        tracing::info!(in_memory, "database pool ready");

        Ok(Self {
            pool,
            url: url.to_string(),
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn connection_string(&self) -> &str {
        &self.url
    }

    pub async fn migrate(&self) -> Result<(), DbInitError> {
        for stmt in split_sql_statements(SCHEMA_SQL) {
            sqlx::query(&stmt)
                .execute(&self.pool)
                .await
                .map_err(DbInitError::Sqlx)?;
        }

        sqlx::query(
            r#"INSERT OR REPLACE INTO "_db_metadata" ("key", "value") VALUES ('schema_version', ?)"#,
        )
        .bind(SCHEMA_VERSION)
        .execute(&self.pool)
        .await
        .map_err(DbInitError::Sqlx)?;

        tracing::debug!(version = SCHEMA_VERSION, "schema applied");
        Ok(())
    }

    pub async fn schema_version(&self) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar(r#"SELECT "value" FROM "_db_metadata" WHERE "key" = 'schema_version'"#)
            .fetch_optional(&self.pool)
            .await
    }

    /// Round-trips a trivial query and reports its latency.
    pub async fn ping(&self) -> Result<Duration, sqlx::Error> {
        let started = Instant::now();
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(started.elapsed())
    }
}

fn is_in_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[derive(Debug, Error)]
pub enum DbInitError {
    #[error("invalid database url: {0}")]
    Config(#[source] sqlx::Error),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

#[cfg(test)]
pub(crate) async fn test_proxy() -> DatabaseProxy {
    let proxy = DatabaseProxy::connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    proxy.migrate().await.expect("schema");
    proxy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory_url("sqlite::memory:"));
        assert!(is_in_memory_url("sqlite://file:shared?mode=memory&cache=shared"));
        assert!(!is_in_memory_url("sqlite://bolaquent.db"));
    }

    #[tokio::test]
    async fn migrate_is_idempotent() {
        let proxy = test_proxy().await;
        proxy.migrate().await.unwrap();
        assert_eq!(
            proxy.schema_version().await.unwrap().as_deref(),
            Some(SCHEMA_VERSION)
        );
        assert!(proxy.ping().await.is_ok());
    }
}
