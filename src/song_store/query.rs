//! SELECT builder for song listings.
//!
//! Only column names chosen from [`SearchableColumn`] ever reach the SQL text;
//! every user-supplied value is bound as a parameter.

use rusqlite::types::Value;

pub(super) const SONG_COLUMNS: &str = "id, group_name, song_name, release_date, text, link";

/// Name of the SQL function registered on the connection to fold case beyond ASCII.
pub(super) const LOWER_FN: &str = "unicode_lower";

const LIKE_ESCAPE: char = '\\';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SearchableColumn {
    GroupName,
    SongName,
}

impl SearchableColumn {
    fn name(&self) -> &'static str {
        match self {
            SearchableColumn::GroupName => "group_name",
            SearchableColumn::SongName => "song_name",
        }
    }
}

#[derive(Debug, Default)]
pub(super) struct SelectSongs {
    conditions: Vec<String>,
    params: Vec<Value>,
    page: Option<(u32, i64)>,
}

impl SelectSongs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps rows whose `column` contains `needle`, ignoring case.
    /// An empty needle adds no condition.
    pub fn containing(mut self, column: SearchableColumn, needle: &str) -> Self {
        if needle.is_empty() {
            return self;
        }
        self.params.push(Value::Text(format!(
            "%{}%",
            escape_like(&needle.to_lowercase())
        )));
        self.conditions.push(format!(
            "{}({}) LIKE ?{} ESCAPE '{}'",
            LOWER_FN,
            column.name(),
            self.params.len(),
            LIKE_ESCAPE
        ));
        self
    }

    pub fn paginate(mut self, limit: u32, offset: i64) -> Self {
        self.page = Some((limit, offset));
        self
    }

    pub fn build(self) -> (String, Vec<Value>) {
        let mut sql = format!("SELECT {} FROM songs", SONG_COLUMNS);
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY id");

        let mut params = self.params;
        if let Some((limit, offset)) = self.page {
            sql.push_str(&format!(
                " LIMIT ?{} OFFSET ?{}",
                params.len() + 1,
                params.len() + 2
            ));
            params.push(Value::Integer(limit as i64));
            params.push(Value::Integer(offset));
        }
        (sql, params)
    }
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == LIKE_ESCAPE || c == '%' || c == '_' {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
