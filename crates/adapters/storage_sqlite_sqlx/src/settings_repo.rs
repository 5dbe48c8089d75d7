//! `SQLite` implementation of [`SettingsRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use navhub_app::ports::SettingsRepository;
use navhub_domain::error::NavHubError;
use navhub_domain::id::SettingId;
use navhub_domain::setting::Setting;

use crate::error::StorageError;

struct Wrapper(Setting);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Setting {
            id: SettingId::new(row.try_get("id")?),
            key: row.try_get("key")?,
            value: row.try_get("value")?,
        }))
    }
}

const SELECT_ALL: &str = "SELECT id, key, value FROM settings ORDER BY id";

/// `SQLite`-backed settings repository. Read-only.
pub struct SqliteSettingsRepository {
    pool: SqlitePool,
}

impl SqliteSettingsRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SettingsRepository for SqliteSettingsRepository {
    async fn get_all(&self) -> Result<Vec<Setting>, NavHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
