//! HTML for the explorer page and the fragments swapped in by htmx.
//!
//! Plain string building; every interpolated value goes through `html_escape`.

use crate::schema::{SchemaEntry, SchemaKind};
use crate::style::STYLE;
use explorer_sqlite::ResultSet;

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.9/dist/htmx.min.js";

const DOWNLOAD_SCRIPT: &str = r#"
document.querySelectorAll("[data-download]").forEach((button) => {
  button.addEventListener("click", () => {
    const query = document.getElementById("editor").value;
    if (!query.trim()) return;
    window.location.href =
      "/download/" + button.dataset.download + "?query=" + encodeURIComponent(query);
  });
});
"#;

const TABLE_ICON: &str = r#"<svg width="15" height="15" viewBox="0 0 15 15" fill="none" aria-hidden="true"><rect x="1.5" y="2.5" width="12" height="10" rx="1" stroke="currentColor"/><path d="M1.5 5.5h12M5.5 5.5v7" stroke="currentColor"/></svg>"#;
const VIEW_ICON: &str = r#"<svg width="15" height="15" viewBox="0 0 15 15" fill="none" aria-hidden="true"><path d="M1 7.5C2.5 4.5 5 3 7.5 3S12.5 4.5 14 7.5C12.5 10.5 10 12 7.5 12S2.5 10.5 1 7.5Z" stroke="currentColor"/><circle cx="7.5" cy="7.5" r="2" stroke="currentColor"/></svg>"#;
const RUN_ICON: &str = r#"<svg width="15" height="15" viewBox="0 0 15 15" fill="none" aria-hidden="true"><path d="M4 2.5v10l8-5-8-5Z" fill="currentColor"/></svg>"#;

/// Full page: sidebar with the schema listing, editor form and an empty result pane.
pub fn page(entries: &[SchemaEntry], schema_error: Option<&str>) -> String {
    let sidebar = match schema_error {
        Some(message) => format!(
            r#"<div class="schema-error"><b>{}</b></div>"#,
            html_escape(message)
        ),
        None => tables_list(entries),
    };
    let editor = editor_section();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>SQLite Explorer</title>
    <style>{STYLE}</style>
    <script src="{HTMX_SRC}"></script>
</head>
<body>
    <div class="root-container">
        <header>
            <h1>SQLite Explorer</h1>
        </header>
        <main class="sidebar-layout">
            <div class="sidebar">
                {sidebar}
            </div>
            <div class="not-sidebar">
                {editor}
                <div class="bottom-container">
                    <div id="results-table" class="bottom"></div>
                </div>
            </div>
        </main>
    </div>
    <script>{DOWNLOAD_SCRIPT}</script>
</body>
</html>"#
    )
}

pub fn tables_list(entries: &[SchemaEntry]) -> String {
    let items: String = entries
        .iter()
        .map(|entry| {
            let icon = match entry.kind {
                SchemaKind::Table => TABLE_ICON,
                SchemaKind::View => VIEW_ICON,
            };
            let name = html_escape(&entry.name);
            format!(
                r#"<div class="tables-list-item" id="{name}" data-type="{}">{icon}{name}</div>"#,
                entry.kind.as_str()
            )
        })
        .collect();
    format!(r#"<div class="tables-list">{items}</div>"#)
}

fn editor_section() -> String {
    format!(
        r##"<form class="top-container" id="sql-editor"
      hx-post="/query"
      hx-target="#results-table"
      hx-trigger="submit, keydown[(metaKey||ctrlKey)&&key=='Enter'] from:#editor"
      hx-indicator=".htmx-indicator">
    <textarea class="editor" id="editor" name="query" spellcheck="false"
              placeholder="SELECT * FROM ..."></textarea>
    <div class="button-container">
        <button id="run" type="submit">{RUN_ICON}Run</button>
        <button id="download-json" type="button" data-download="json">Download JSON</button>
        <button id="download-csv" type="button" data-download="csv">Download CSV</button>
        <span class="htmx-indicator loading">loading...</span>
    </div>
</form>"##
    )
}

/// Result fragment for `POST /query`.
pub fn results_table(result: &ResultSet) -> String {
    let headers: String = result
        .columns
        .iter()
        .map(|c| format!("<th>{}</th>", html_escape(c)))
        .collect();

    let body: String = if result.rows.iter().all(|row| row.is_empty()) {
        // placeholder row keeps the header visible for empty results
        let cells: String = result
            .columns
            .iter()
            .map(|_| r#"<td class="empty-row">&nbsp;</td>"#)
            .collect();
        format!("<tr>{cells}</tr>")
    } else {
        result
            .rows
            .iter()
            .map(|row| {
                let cells: String = row
                    .iter()
                    .map(|v| format!("<td>{}</td>", html_escape(&v.to_string())))
                    .collect();
                format!("<tr>{cells}</tr>")
            })
            .collect()
    };

    format!(
        r#"<div><p class="result-meta">{}</p><table><thead><tr>{headers}</tr></thead><tbody>{body}</tbody></table></div>"#,
        summary(result)
    )
}

fn summary(result: &ResultSet) -> String {
    let n = result.rows.len();
    let mut parts = vec![format!("{} row{}", n, if n == 1 { "" } else { "s" })];
    if result.rows_affected > 0 {
        parts.push(format!("{} affected", result.rows_affected));
    }
    if let Some(id) = result.last_insert_rowid {
        parts.push(format!("last insert rowid {}", id));
    }
    parts.join(", ")
}

/// Inline error for a failed query.
pub fn error_fragment(message: &str) -> String {
    format!(
        r#"<div class="query-error"><b>{}</b></div>"#,
        html_escape(message)
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
