use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use explorer_sqlite::{
    Args, SqliteClient, SqliteClientConfig, SqliteError, Statement, TransactionMode, Value,
};
use serde_json::{Value as JsonValue, json};

const TOKEN: &str = "test-token";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TOKEN))
        .unwrap_or(false)
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
}

// Fake of the platform API, keyed on the SQL text it receives.
fn answer(statement: &JsonValue) -> Result<JsonValue, Response> {
    let sql = statement
        .as_str()
        .or_else(|| statement.get("sql").and_then(|v| v.as_str()))
        .unwrap_or("");
    match sql {
        "SELEC 1" => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "message": "SQLITE_ERROR: near \"SELEC\": syntax error",
                "code": "SQLITE_ERROR",
                "rawCode": 1
            })),
        )
            .into_response()),
        "CRASH" => Err((StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response()),
        "RAGGED" => Ok(json!({
            "columns": ["a", "b"],
            "columnTypes": ["", ""],
            "rows": [[1]],
            "rowsAffected": 0,
            "lastInsertRowid": null
        })),
        "ECHO ARGS" => Ok(json!({
            "columns": ["args"],
            "columnTypes": [""],
            "rows": [[statement.get("args").map(|a| a.to_string()).unwrap_or_default()]],
            "rowsAffected": 0,
            "lastInsertRowid": null
        })),
        other => Ok(json!({
            "columns": ["sql", "n"],
            "columnTypes": ["TEXT", "INTEGER"],
            "rows": [[other, 1], [other, null]],
            "rowsAffected": 0,
            "lastInsertRowid": null
        })),
    }
}

async fn execute(headers: HeaderMap, Json(body): Json<JsonValue>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    match answer(&body["statement"]) {
        Ok(rs) => Json(rs).into_response(),
        Err(res) => res,
    }
}

async fn batch(headers: HeaderMap, Json(body): Json<JsonValue>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut out = Vec::new();
    for st in body["statements"].as_array().cloned().unwrap_or_default() {
        match answer(&st) {
            Ok(rs) => out.push(rs),
            Err(res) => return res,
        }
    }
    // report the mode back through an extra result so the test can see it
    if let Some(mode) = body.get("mode").and_then(|m| m.as_str()) {
        if mode == "read" {
            out.truncate(out.len().saturating_sub(1));
            out.push(json!({"columns": ["mode"], "rows": [["read"]]}));
        }
    }
    Json(JsonValue::Array(out)).into_response()
}

async fn spawn_fake_api() -> String {
    let router = Router::new()
        .route("/v1/sqlite/execute", post(execute))
        .route("/v1/sqlite/batch", post(batch));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn client_with_token(token: &str) -> SqliteClient {
    let url = spawn_fake_api().await;
    SqliteClient::new(SqliteClientConfig::new(token).set_api_url(url)).unwrap()
}

#[tokio::test]
async fn execute_returns_typed_rows() {
    let client = client_with_token(TOKEN).await;
    let rs = client
        .execute(&Statement::from("SELECT sql, n FROM t"))
        .await
        .unwrap();
    assert_eq!(rs.columns, vec!["sql", "n"]);
    assert_eq!(rs.column_types, vec!["TEXT", "INTEGER"]);
    assert_eq!(rs.rows.len(), 2);
    assert_eq!(rs.rows[0][0], Value::from("SELECT sql, n FROM t"));
    assert_eq!(rs.rows[0][1], Value::from(1));
    assert!(rs.rows[1][1].is_null());
    assert_eq!(rs.last_insert_rowid, None);
}

#[tokio::test]
async fn execute_forwards_arguments() {
    let client = client_with_token(TOKEN).await;
    let st = Statement::WithArgs {
        sql: "ECHO ARGS".into(),
        args: Args::Positional(vec![Value::from(2020), Value::Null]),
    };
    let rs = client.execute(&st).await.unwrap();
    assert_eq!(rs.rows[0][0], Value::from("[2020,null]"));
}

#[tokio::test]
async fn structured_error_is_typed() {
    let client = client_with_token(TOKEN).await;
    let err = client.execute(&Statement::from("SELEC 1")).await.unwrap_err();
    match &err {
        SqliteError::Api { code, raw_code, .. } => {
            assert_eq!(code, "SQLITE_ERROR");
            assert_eq!(*raw_code, Some(1));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "SQLITE_ERROR: near \"SELEC\": syntax error");
}

#[tokio::test]
async fn plain_error_keeps_raw_text() {
    let client = client_with_token(TOKEN).await;
    let err = client.execute(&Statement::from("CRASH")).await.unwrap_err();
    assert_eq!(err.to_string(), "upstream exploded");
}

#[tokio::test]
async fn bad_token_is_reported() {
    let client = client_with_token("wrong").await;
    let err = client.execute(&Statement::from("SELECT 1")).await.unwrap_err();
    assert!(matches!(err, SqliteError::Response(ref m) if m == "Unauthorized"));
}

#[tokio::test]
async fn ragged_rows_are_rejected() {
    let client = client_with_token(TOKEN).await;
    let err = client.execute(&Statement::from("RAGGED")).await.unwrap_err();
    assert!(matches!(err, SqliteError::Decode(_)));
}

#[tokio::test]
async fn batch_preserves_order() {
    let client = client_with_token(TOKEN).await;
    let statements = vec![Statement::from("first"), Statement::from("second")];
    let results = client.batch(&statements, None).await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].rows[0][0], Value::from("first"));
    assert_eq!(results[1].rows[0][0], Value::from("second"));
}

#[tokio::test]
async fn batch_sends_mode() {
    let client = client_with_token(TOKEN).await;
    let statements = vec![Statement::from("first"), Statement::from("second")];
    let results = client
        .batch(&statements, Some(TransactionMode::Read))
        .await
        .unwrap();
    assert_eq!(results[1].rows[0][0], Value::from("read"));
}

#[tokio::test]
async fn batch_error_aborts_everything() {
    let client = client_with_token(TOKEN).await;
    let statements = vec![Statement::from("first"), Statement::from("SELEC 1")];
    let err = client.batch(&statements, None).await.unwrap_err();
    assert!(matches!(err, SqliteError::Api { .. }));
}

#[tokio::test]
async fn unreachable_host_is_http_error() {
    let cfg = SqliteClientConfig::new(TOKEN).set_api_url("http://127.0.0.1:1");
    let client = SqliteClient::new(cfg).unwrap();
    let err = client.execute(&Statement::from("SELECT 1")).await.unwrap_err();
    assert!(matches!(err, SqliteError::Http(_)));
}
