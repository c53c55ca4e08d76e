//! Encoders turning a fetched result set into downloadable files.

use explorer_sqlite::ResultSet;
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn file_name(&self) -> String {
        format!("results.{}", self.extension())
    }

    /// Value for the `Content-Disposition` header.
    pub fn disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name())
    }

    pub fn encode(&self, result: &ResultSet) -> String {
        match self {
            ExportFormat::Csv => to_csv(result),
            ExportFormat::Json => to_json(result),
        }
    }
}

/// Reshape rows into objects keyed by column name, keeping row and column order.
pub fn to_records(result: &ResultSet) -> Vec<Map<String, JsonValue>> {
    result
        .rows
        .iter()
        .map(|row| {
            result
                .columns
                .iter()
                .cloned()
                .zip(row.iter().cloned().map(JsonValue::from))
                .collect()
        })
        .collect()
}

pub fn to_json(result: &ResultSet) -> String {
    JsonValue::Array(to_records(result).into_iter().map(JsonValue::Object).collect()).to_string()
}

/// Header line plus one line per row, CRLF separated, no trailing newline.
pub fn to_csv(result: &ResultSet) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(result.rows.len() + 1);
    lines.push(
        result
            .columns
            .iter()
            .map(|c| escape_csv(c))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in &result.rows {
        lines.push(
            row.iter()
                .map(|v| escape_csv(&v.to_string()))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\r\n")
}

fn escape_csv(field: &str) -> String {
    let needs_quotes = field.contains([',', '"', '\n', '\r'])
        || field.starts_with(' ')
        || field.ends_with(' ');
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
