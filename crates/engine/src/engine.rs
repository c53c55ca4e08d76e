use crate::EngineError;
use crate::config::EngineConfig;
use crate::http::HttpServer;
use crate::routes::{AppState, create_router};
use axum::Router;
use explorer_sqlite::{Sqlite, SqliteClient};
use std::sync::Arc;

pub struct Engine {
    config: EngineConfig,
    state: AppState,
}

impl Engine {
    /// Build an engine backed by the remote platform; fails without a token.
    pub fn new_with_config(config: EngineConfig) -> Result<Self, EngineError> {
        let client = SqliteClient::new(config.sqlite()?)?;
        Ok(Self::with_backend(config, Arc::new(client)))
    }

    pub fn with_backend(config: EngineConfig, db: Arc<dyn Sqlite>) -> Self {
        Self {
            config,
            state: AppState::new(db),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn router(&self) -> Router {
        create_router(self.state.clone())
    }

    pub async fn run(&self) -> Result<(), EngineError> {
        tracing::info!(api_url = %self.config.api_url, "starting SQLite explorer");
        let server = HttpServer::new(self.config.http(), self.router());
        server.start().await?;
        Ok(())
    }
}
