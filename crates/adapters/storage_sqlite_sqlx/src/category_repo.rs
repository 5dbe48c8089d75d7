//! `SQLite` implementation of [`CategoryRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use navhub_app::ports::CategoryRepository;
use navhub_domain::category::{Category, NewCategory};
use navhub_domain::error::{NavHubError, ValidationError};
use navhub_domain::id::CategoryId;
use navhub_domain::time::now;

use crate::error::StorageError;
use crate::row::timestamp;

/// Wrapper for converting database rows into domain [`Category`].
struct Wrapper(Category);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Category {
            id: CategoryId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            created_at: timestamp(row, "created_at")?,
            updated_at: timestamp(row, "updated_at")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO categories (name, slug, created_at, updated_at) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM categories WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM categories ORDER BY id";
const COUNT: &str = "SELECT COUNT(*) FROM categories";

/// `SQLite`-backed category repository.
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CategoryRepository for SqliteCategoryRepository {
    async fn create(&self, category: NewCategory) -> Result<Category, NavHubError> {
        let ts = now();
        let result = sqlx::query(INSERT)
            .bind(&category.name)
            .bind(&category.slug)
            .bind(ts.to_rfc3339())
            .bind(ts.to_rfc3339())
            .execute(&self.pool)
            .await;

        let done = match result {
            Ok(done) => done,
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                return Err(ValidationError::DuplicateCategorySlug.into());
            }
            Err(err) => return Err(StorageError::from(err).into()),
        };

        Ok(Category {
            id: CategoryId::new(done.last_insert_rowid()),
            name: category.name,
            slug: category.slug,
            created_at: ts,
            updated_at: ts,
        })
    }

    async fn get_by_id(&self, id: CategoryId) -> Result<Option<Category>, NavHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<Category>, NavHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn count(&self) -> Result<i64, NavHubError> {
        let count: i64 = sqlx::query_scalar(COUNT)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteCategoryRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteCategoryRepository::new(db.pool().clone())
    }

    fn category(name: &str, slug: &str) -> NewCategory {
        NewCategory::builder().name(name).slug(slug).build().unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_category() {
        let repo = setup().await;
        let created = repo.create(category("对话", "chat")).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "对话");
        assert_eq!(fetched.slug, "chat");
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn should_return_none_when_category_not_found() {
        let repo = setup().await;
        assert!(repo.get_by_id(CategoryId::new(12)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_reject_duplicate_slug() {
        let repo = setup().await;
        repo.create(category("对话", "chat")).await.unwrap();

        let result = repo.create(category("聊天", "chat")).await;
        assert!(matches!(
            result,
            Err(NavHubError::Validation(ValidationError::DuplicateCategorySlug))
        ));
    }

    #[tokio::test]
    async fn should_list_and_count_categories() {
        let repo = setup().await;
        repo.create(category("对话", "chat")).await.unwrap();
        repo.create(category("绘画", "image")).await.unwrap();

        let slugs: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.slug)
            .collect();
        assert_eq!(slugs, ["chat", "image"]);
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
