//! Listing query builder for the `songs` table.
//!
//! Predicates are composed from the closed [`SongFilterField`] set; column
//! names come from [`SongFilterField::column`] and every value (including
//! limit and offset) is a bound parameter. The builder is pure so the exact
//! SQL and argument order can be asserted without a database.
//!
//! [`SongFilterField`]: songbook_core::filter::SongFilterField
//! [`SongFilterField::column`]: songbook_core::filter::SongFilterField::column

use songbook_core::filter::SongFilter;
use songbook_core::pagination::PageRequest;

/// Column list shared across song queries.
pub const SONG_COLUMNS: &str = "id, group_name, song_title, release_date, text, link";

/// A positional argument for a built query, in `$n` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryArg {
    Text(String),
    Int(i64),
}

/// A parameterized SQL statement with its ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub sql: String,
    pub args: Vec<QueryArg>,
}

/// Build the filtered, id-ordered, paginated listing query.
pub fn build_list_query(filter: &SongFilter, page: PageRequest) -> ListQuery {
    let mut conditions: Vec<String> = Vec::with_capacity(filter.len());
    let mut args: Vec<QueryArg> = Vec::with_capacity(filter.len() + 2);

    for (field, value) in filter.iter() {
        args.push(QueryArg::Text(value.to_string()));
        conditions.push(format!("{} = ${}", field.column(), args.len()));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };

    args.push(QueryArg::Int(page.limit()));
    let limit_idx = args.len();
    args.push(QueryArg::Int(page.offset()));
    let offset_idx = args.len();

    let sql = format!(
        "SELECT {SONG_COLUMNS} FROM songs{where_clause} \
         ORDER BY id ASC \
         LIMIT ${limit_idx} OFFSET ${offset_idx}"
    );

    ListQuery { sql, args }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
