use crate::{schema, templates};
use axum::{
    Form, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use explorer_export::ExportFormat;
use explorer_sqlite::{Sqlite, Statement};
use serde::Deserialize;
use std::sync::Arc;

/// State shared by every handler; immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn Sqlite>,
}

impl AppState {
    pub fn new(db: Arc<dyn Sqlite>) -> Self {
        Self { db }
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryForm {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct DownloadParams {
    pub query: Option<String>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/query", post(run_query))
        .route("/download/{filetype}", get(download))
        .with_state(state)
}

async fn index_page(State(state): State<AppState>) -> Html<String> {
    match schema::list_schema(state.db.as_ref()).await {
        Ok(entries) => Html(templates::page(&entries, None)),
        Err(e) => {
            tracing::warn!(error = %e, "failed to list schema");
            Html(templates::page(&[], Some(&e.to_string())))
        }
    }
}

/// Failures are rendered into the fragment with a 200 so the htmx swap still happens.
async fn run_query(State(state): State<AppState>, Form(form): Form<QueryForm>) -> Html<String> {
    tracing::info!(query = %form.query, "executing query");
    match state.db.execute(Statement::from(form.query)).await {
        Ok(rs) => Html(templates::results_table(&rs)),
        Err(e) => {
            tracing::warn!(error = %e, "query failed");
            Html(templates::error_fragment(&e.to_string()))
        }
    }
}

async fn download(
    State(state): State<AppState>,
    Path(filetype): Path<String>,
    Query(params): Query<DownloadParams>,
) -> Response {
    let Some(query) = params.query.filter(|q| !q.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "query parameter is required").into_response();
    };
    let format = match filetype.parse::<ExportFormat>() {
        Ok(format) => format,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    tracing::info!(query = %query, %format, "exporting query");
    match state.db.execute(Statement::from(query)).await {
        Ok(rs) => (
            [
                (header::CONTENT_TYPE, format.content_type().to_string()),
                (header::CONTENT_DISPOSITION, format.disposition()),
            ],
            format.encode(&rs),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "export query failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to run query").into_response()
        }
    }
}
