//! explorer_sqlite: client for a remotely hosted SQLite database.
//! - Typed statements, scalar values and result sets shared with the engine
//! - `SqliteClient` talks to `/v1/sqlite/execute` and `/v1/sqlite/batch`
//! - `Sqlite` is the seam handlers depend on, so tests can swap the backend

mod client;
mod error;
mod types;

pub use client::{DEFAULT_API_URL, SqliteClient, SqliteClientConfig};
pub use error::{Result, SqliteError};
pub use types::{Args, ResultSet, Statement, TransactionMode, Value};

/// A database that can run statements.
#[async_trait::async_trait]
pub trait Sqlite: Send + Sync + 'static {
    async fn execute(&self, statement: Statement) -> Result<ResultSet>;

    async fn batch(
        &self,
        statements: Vec<Statement>,
        mode: Option<TransactionMode>,
    ) -> Result<Vec<ResultSet>>;
}

#[async_trait::async_trait]
impl Sqlite for SqliteClient {
    async fn execute(&self, statement: Statement) -> Result<ResultSet> {
        SqliteClient::execute(self, &statement).await
    }

    async fn batch(
        &self,
        statements: Vec<Statement>,
        mode: Option<TransactionMode>,
    ) -> Result<Vec<ResultSet>> {
        SqliteClient::batch(self, &statements, mode).await
    }
}
