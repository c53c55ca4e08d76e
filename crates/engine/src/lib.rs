//! explorer_engine: the web console in front of a remote SQLite database.
//! - `GET /` page with the schema listing and the SQL editor
//! - `POST /query` result or error fragment for htmx
//! - `GET /download/{filetype}` CSV or JSON export

pub mod config;
pub mod engine;
pub mod http;
pub mod routes;
pub mod schema;
mod style;
pub mod templates;

use explorer_sqlite::SqliteError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("missing valtown token")]
    MissingToken,

    #[error(transparent)]
    Client(#[from] SqliteError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
