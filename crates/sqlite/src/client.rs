use crate::error::{Result, SqliteError};
use crate::types::{ResultSet, Statement, TransactionMode};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const DEFAULT_API_URL: &str = "https://api.val.town";

/// Configuration for the remote SQLite client.
#[derive(Clone)]
pub struct SqliteClientConfig {
    /// Base URL of the hosting platform API, without a trailing slash.
    pub api_url: String,
    /// Bearer token sent with every request.
    pub token: String,
}

impl SqliteClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: token.into(),
        }
    }

    pub fn set_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn execute_url(&self) -> String {
        format!("{}/v1/sqlite/execute", self.api_url)
    }

    pub fn batch_url(&self) -> String {
        format!("{}/v1/sqlite/batch", self.api_url)
    }
}

// keep the token out of logs
impl std::fmt::Debug for SqliteClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteClientConfig")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct ExecuteBody<'a> {
    statement: &'a Statement,
}

#[derive(Serialize)]
struct BatchBody<'a> {
    statements: &'a [Statement],
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<TransactionMode>,
}

/// HTTP client for the platform's `/v1/sqlite` endpoints.
#[derive(Debug, Clone)]
pub struct SqliteClient {
    config: SqliteClientConfig,
    client: reqwest::Client,
}

impl SqliteClient {
    pub fn new(config: SqliteClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &SqliteClientConfig {
        &self.config
    }

    /// Executes a single statement.
    pub async fn execute(&self, statement: &Statement) -> Result<ResultSet> {
        let rs: ResultSet = self
            .post(&self.config.execute_url(), &ExecuteBody { statement })
            .await?;
        check_shape(&rs)?;
        Ok(rs)
    }

    /// Executes several statements in one round-trip; results follow input order.
    pub async fn batch(
        &self,
        statements: &[Statement],
        mode: Option<TransactionMode>,
    ) -> Result<Vec<ResultSet>> {
        let results: Vec<ResultSet> = self
            .post(&self.config.batch_url(), &BatchBody { statements, mode })
            .await?;
        if results.len() != statements.len() {
            return Err(SqliteError::Decode(format!(
                "expected {} results, got {}",
                statements.len(),
                results.len()
            )));
        }
        for rs in &results {
            check_shape(rs)?;
        }
        Ok(results)
    }

    async fn post<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(url, "sqlite request");
        let res = self
            .client
            .post(url)
            .bearer_auth(&self.config.token)
            .json(body)
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            tracing::debug!(%status, "sqlite request failed");
            return Err(SqliteError::from_response_body(&text));
        }
        serde_json::from_str(&text).map_err(|e| SqliteError::Decode(e.to_string()))
    }
}

fn check_shape(rs: &ResultSet) -> Result<()> {
    match rs.ragged_row() {
        Some(idx) => Err(SqliteError::Decode(format!(
            "row {} has {} values for {} columns",
            idx,
            rs.rows[idx].len(),
            rs.columns.len()
        ))),
        None => Ok(()),
    }
}
