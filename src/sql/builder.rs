//! Builds parameterized SELECT and DDL statements for the characters table.

pub const CHARACTERS_TABLE: &str = "characters";

/// Columns in the order `Character` is decoded from.
const COLUMNS: &[&str] = &["id", "api_id", "name", "image"];

/// Quote identifier for PostgreSQL (safe: only from constants).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn select_column_list() -> String {
    COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<String>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: String) -> u32 {
        self.params.push(v);
        self.params.len() as u32
    }
}

/// Escape LIKE metacharacters so the needle matches literally, then wrap it in `%...%`.
pub fn contains_pattern(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len() + 2);
    out.push('%');
    for ch in needle.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('%');
    out
}

/// SELECT all characters, optionally filtered by case-insensitive name substring, in insertion order.
pub fn select_list(name_contains: Option<&str>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_clause = match name_contains {
        Some(needle) => {
            let n = q.push_param(contains_pattern(needle));
            format!(" WHERE {} ILIKE ${} ESCAPE '\\'", quoted("name"), n)
        }
        None => String::new(),
    };
    q.sql = format!(
        "SELECT {} FROM {}{} ORDER BY {}",
        select_column_list(),
        quoted(CHARACTERS_TABLE),
        where_clause,
        quoted("id")
    );
    q
}

/// SELECT by surrogate key. Caller binds the id as `$1`.
pub fn select_by_id() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = $1",
        select_column_list(),
        quoted(CHARACTERS_TABLE),
        quoted("id")
    );
    q
}

/// SELECT every surrogate key.
pub fn select_ids() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        quoted("id"),
        quoted(CHARACTERS_TABLE),
        quoted("id")
    );
    q
}

/// Idempotent DDL for the characters table. `api_id` is unique per source.
pub fn create_characters_table() -> String {
    format!(
        r#"CREATE TABLE IF NOT EXISTS {} (
            "id" BIGSERIAL PRIMARY KEY,
            "api_id" BIGINT NOT NULL UNIQUE,
            "name" TEXT NOT NULL,
            "image" TEXT NOT NULL
        )"#,
        quoted(CHARACTERS_TABLE)
    )
}
