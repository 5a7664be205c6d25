use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use zipline_core::registry::{Registry, Result};
use zipline_core::{ShortCode, StorageError};

/// MySQL implementation of the registry contract.
///
/// The `url_mappings` table carries unique keys on both `long_url` and
/// `short_code`, so insert-if-absent is enforced by the database rather
/// than an application-level check-then-write.
#[derive(Debug, Clone)]
pub struct MySqlRegistry {
    pool: MySqlPool,
}

impl MySqlRegistry {
    /// Creates a registry from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a registry by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl Registry for MySqlRegistry {
    async fn find_code(&self, long_url: &str) -> Result<Option<ShortCode>> {
        let row = sqlx::query(
            r#"
            SELECT short_code
            FROM url_mappings
            WHERE long_url = ?
            LIMIT 1
            "#,
        )
        .bind(long_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let short_code: String = row.try_get("short_code").map_err(map_sqlx_error)?;
        Ok(Some(ShortCode::new(short_code).map_err(|e| {
            StorageError::InvalidData(e.to_string())
        })?))
    }

    async fn find_long(&self, code: &ShortCode) -> Result<Option<String>> {
        let row = sqlx::query(
            r#"
            SELECT long_url
            FROM url_mappings
            WHERE short_code = ?
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(|row| row.try_get("long_url").map_err(map_sqlx_error))
            .transpose()
    }

    async fn insert(&self, long_url: &str, code: &ShortCode) -> Result<ShortCode> {
        let result = sqlx::query(
            r#"
            INSERT INTO url_mappings (long_url, short_code)
            VALUES (?, ?)
            "#,
        )
        .bind(long_url)
        .bind(code.as_str())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(code.clone()),
            Err(err) if is_unique_violation(&err) => {
                // Either a concurrent writer won the long-URL key, or the
                // candidate code is already assigned to a different URL.
                match self.find_code(long_url).await? {
                    Some(winner) => Ok(winner),
                    None => Err(StorageError::Conflict(code.to_string())),
                }
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }
}
