use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum SqliteError {
    /// Structured error reported by the remote engine.
    #[error("{code}: {message}")]
    Api {
        message: String,
        code: String,
        raw_code: Option<i64>,
    },

    /// Non-2xx response whose body was not a structured error.
    #[error("{0}")]
    Response(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    message: String,
    code: String,
    raw_code: Option<i64>,
}

impl SqliteError {
    /// Build an error from the body of a failed response.
    ///
    /// The remote message already embeds the code (`"SQLITE_ERROR: near ..."`)
    /// and `Display` prepends it again, so the first occurrence is removed here.
    pub fn from_response_body(body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(e) => {
                let message = e.message.replacen(&e.code, "", 1);
                let stripped = message
                    .strip_prefix(':')
                    .filter(|rest| rest.starts_with(char::is_whitespace))
                    .map(|rest| rest.trim_start().to_string());
                let message = stripped.unwrap_or(message);
                SqliteError::Api {
                    message,
                    code: e.code,
                    raw_code: e.raw_code,
                }
            }
            Err(_) => SqliteError::Response(body.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SqliteError>;
