use explorer_sqlite::{ResultSet, Sqlite, SqliteError, Statement};

const TABLES_SQL: &str =
    "SELECT name FROM sqlite_schema WHERE type ='table' AND name NOT LIKE 'sqlite_%';";
const VIEWS_SQL: &str =
    "SELECT name FROM sqlite_schema WHERE type ='view' AND name NOT LIKE 'sqlite_%';";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Table,
    View,
}

impl SchemaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Table => "table",
            SchemaKind::View => "view",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pub name: String,
    pub kind: SchemaKind,
}

/// Tables first, then views, skipping SQLite's internal objects.
pub async fn list_schema(db: &dyn Sqlite) -> Result<Vec<SchemaEntry>, SqliteError> {
    let results = db
        .batch(
            vec![Statement::from(TABLES_SQL), Statement::from(VIEWS_SQL)],
            None,
        )
        .await?;

    let mut results = results.into_iter();
    let tables = results.next().unwrap_or_default();
    let views = results.next().unwrap_or_default();

    let mut entries = entries_of(tables, SchemaKind::Table);
    entries.extend(entries_of(views, SchemaKind::View));
    Ok(entries)
}

fn entries_of(rs: ResultSet, kind: SchemaKind) -> Vec<SchemaEntry> {
    rs.rows
        .into_iter()
        .filter_map(|row| row.into_iter().next())
        .map(|name| name.to_string())
        // enforced here too, whatever the backend returned
        .filter(|name| !name.starts_with("sqlite_"))
        .map(|name| SchemaEntry { name, kind })
        .collect()
}
