use crate::EngineError;
use explorer_sqlite::{DEFAULT_API_URL, SqliteClientConfig};

#[derive(Clone)]
pub struct EngineConfig {
    pub host: String,
    pub port: u16,
    pub api_url: String,
    pub token: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}

impl std::fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl EngineConfig {
    pub fn addr(&self) -> String {
        self.http().addr()
    }

    pub fn set_token<S: Into<String>>(mut self, token: S) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_api_url<S: Into<String>>(mut self, url: S) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn http(&self) -> HttpServerConfig {
        self.into()
    }

    /// Client settings for the remote database; a token is mandatory.
    pub fn sqlite(&self) -> Result<SqliteClientConfig, EngineError> {
        match self.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => {
                Ok(SqliteClientConfig::new(token).set_api_url(self.api_url.clone()))
            }
            _ => Err(EngineError::MissingToken),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl HttpServerConfig {
    pub fn addr(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl From<&EngineConfig> for HttpServerConfig {
    fn from(cfg: &EngineConfig) -> Self {
        Self {
            host: cfg.host.clone(),
            port: cfg.port,
        }
    }
}
