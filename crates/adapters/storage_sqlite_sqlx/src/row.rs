//! Column decoding helpers shared by the repositories.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use navhub_domain::time::Timestamp;

/// Decode an RFC 3339 `TEXT` column into a UTC timestamp.
pub(crate) fn timestamp(row: &SqliteRow, column: &str) -> Result<Timestamp, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    chrono::DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}
