use log::warn;
use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{SqliteArguments, SqliteQueryResult, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};
use std::sync::Arc;

use super::ResultExt;
use focusflow_domain::shared::DomainError;

/// Shared pool handle plus the error mapping every SQLite repository uses.
///
/// Every helper:
/// - runs the query on the shared pool
/// - logs a failure as `[db] <context> failed: <error>` at warn level
/// - maps the sqlx error to `DomainError::Repository("<context>: <error>")`
///
/// `context` names the operation (for example "Load streak by user ID") and
/// is the only place a repository describes what it was doing.
pub struct SqliteRepositoryBase {
    pool: Arc<SqlitePool>,
}

impl SqliteRepositoryBase {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Statement without a result set. Callers that need to know whether a
    /// row matched read `rows_affected()` from the result.
    pub async fn execute<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<SqliteQueryResult, DomainError> {
        query
            .execute(self.pool())
            .await
            .inspect_err(|e| warn!("[db] {} failed: {}", context, e))
            .map_repo_error(context)
    }

    pub async fn fetch_optional<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<Option<T>, DomainError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, SqliteRow>,
    {
        query
            .fetch_optional(self.pool())
            .await
            .inspect_err(|e| warn!("[db] {} failed: {}", context, e))
            .map_repo_error(context)
    }

    pub async fn fetch_all<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<Vec<T>, DomainError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, SqliteRow>,
    {
        query
            .fetch_all(self.pool())
            .await
            .inspect_err(|e| warn!("[db] {} failed: {}", context, e))
            .map_repo_error(context)
    }
}
