//! `SQLite` implementation of [`ServiceRepository`].
//!
//! Search uses `LIKE` with an escaped pattern, so the query is matched as a
//! literal substring. `SQLite`'s `LIKE` folds case for ASCII letters only;
//! every other character, CJK included, must match exactly.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqliteConnection, SqlitePool};

use navhub_app::ports::ServiceRepository;
use navhub_domain::error::{NavHubError, ValidationError};
use navhub_domain::id::{CategoryId, ServiceId};
use navhub_domain::search::SearchQuery;
use navhub_domain::service::{NewService, SearchHit, Service, ServiceRecord};
use navhub_domain::time::now;

use crate::error::StorageError;
use crate::row::timestamp;

fn service_from_row(row: &SqliteRow) -> Result<Service, sqlx::Error> {
    Ok(Service {
        id: ServiceId::new(row.try_get("id")?),
        name: row.try_get("name")?,
        url: row.try_get("url")?,
        description: row.try_get("description")?,
        icon: row.try_get("icon")?,
        category_id: CategoryId::new(row.try_get("category_id")?),
        click_count: row.try_get("click_count")?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}

/// Wrapper for converting a bare `services` row into a domain [`Service`].
struct ServiceWrapper(Service);

impl<'r> FromRow<'r, SqliteRow> for ServiceWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        service_from_row(row).map(Self)
    }
}

/// Wrapper for a `services` row joined with its category name.
struct RecordWrapper(ServiceRecord);

impl<'r> FromRow<'r, SqliteRow> for RecordWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(ServiceRecord {
            service: service_from_row(row)?,
            category_name: row.try_get("category_name")?,
        }))
    }
}

/// Wrapper for a flattened search result row.
struct HitWrapper(SearchHit);

impl<'r> FromRow<'r, SqliteRow> for HitWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(SearchHit {
            id: ServiceId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            url: row.try_get("url")?,
            description: row.try_get("description")?,
            icon: row.try_get("icon")?,
            click_count: row.try_get("click_count")?,
            category_id: CategoryId::new(row.try_get("category_id")?),
            category_name: row.try_get("category_name")?,
            category_slug: row.try_get("category_slug")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO services (name, url, description, icon, category_id, click_count, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, 0, ?, ?)
";

const UPDATE: &str = r"
    UPDATE services
    SET name = ?, url = ?, description = ?, icon = ?, category_id = ?, updated_at = ?
    WHERE id = ?
";

const SELECT_RECORD_BY_ID: &str = r"
    SELECT s.*, c.name AS category_name
    FROM services s
    JOIN categories c ON c.id = s.category_id
    WHERE s.id = ?
";

const SELECT_RECORDS_NEWEST_FIRST: &str = r"
    SELECT s.*, c.name AS category_name
    FROM services s
    JOIN categories c ON c.id = s.category_id
    ORDER BY s.id DESC
";

const SEARCH: &str = r"
    SELECT s.id, s.name, s.url, s.description, s.icon, s.click_count, s.category_id,
           c.name AS category_name, c.slug AS category_slug
    FROM services s
    JOIN categories c ON c.id = s.category_id
    WHERE s.name LIKE ? ESCAPE '\' OR s.description LIKE ? ESCAPE '\'
    ORDER BY s.click_count DESC, s.id ASC
    LIMIT ?
";

const SELECT_BY_ID: &str = "SELECT * FROM services WHERE id = ?";
const SERVICE_EXISTS: &str = "SELECT EXISTS (SELECT 1 FROM services WHERE id = ?)";
const CATEGORY_EXISTS: &str = "SELECT EXISTS (SELECT 1 FROM categories WHERE id = ?)";
const COUNT: &str = "SELECT COUNT(*) FROM services";
const TOTAL_CLICKS: &str = "SELECT COALESCE(SUM(click_count), 0) FROM services";
const INCREMENT_CLICKS: &str = "UPDATE services SET click_count = click_count + 1 WHERE id = ?";

/// `SQLite`-backed service repository.
pub struct SqliteServiceRepository {
    pool: SqlitePool,
}

impl SqliteServiceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

async fn exists(
    conn: &mut SqliteConnection,
    query: &'static str,
    id: i64,
) -> Result<bool, StorageError> {
    let found: i64 = sqlx::query_scalar(query).bind(id).fetch_one(conn).await?;
    Ok(found != 0)
}

async fn fetch_record(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<ServiceRecord, StorageError> {
    let row: RecordWrapper = sqlx::query_as(SELECT_RECORD_BY_ID)
        .bind(id)
        .fetch_one(conn)
        .await?;
    Ok(row.0)
}

impl ServiceRepository for SqliteServiceRepository {
    async fn create(&self, service: NewService) -> Result<ServiceRecord, NavHubError> {
        // The category check and the insert share one transaction.
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        if !exists(&mut *tx, CATEGORY_EXISTS, service.category_id.get()).await? {
            return Err(ValidationError::CategoryNotFound.into());
        }

        let ts = now().to_rfc3339();
        let done = sqlx::query(INSERT)
            .bind(&service.name)
            .bind(&service.url)
            .bind(&service.description)
            .bind(service.icon.as_deref())
            .bind(service.category_id.get())
            .bind(&ts)
            .bind(&ts)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        let record = fetch_record(&mut *tx, done.last_insert_rowid()).await?;
        tx.commit().await.map_err(StorageError::from)?;

        Ok(record)
    }

    async fn update(
        &self,
        id: ServiceId,
        service: NewService,
    ) -> Result<Option<ServiceRecord>, NavHubError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        if !exists(&mut *tx, SERVICE_EXISTS, id.get()).await? {
            return Ok(None);
        }
        if !exists(&mut *tx, CATEGORY_EXISTS, service.category_id.get()).await? {
            return Err(ValidationError::CategoryNotFound.into());
        }

        sqlx::query(UPDATE)
            .bind(&service.name)
            .bind(&service.url)
            .bind(&service.description)
            .bind(service.icon.as_deref())
            .bind(service.category_id.get())
            .bind(now().to_rfc3339())
            .bind(id.get())
            .execute(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        let record = fetch_record(&mut *tx, id.get()).await?;
        tx.commit().await.map_err(StorageError::from)?;

        Ok(Some(record))
    }

    async fn get_by_id(&self, id: ServiceId) -> Result<Option<Service>, NavHubError> {
        let row: Option<ServiceWrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<ServiceRecord>, NavHubError> {
        let rows: Vec<RecordWrapper> = sqlx::query_as(SELECT_RECORDS_NEWEST_FIRST)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn search(
        &self,
        query: &SearchQuery,
        limit: usize,
    ) -> Result<Vec<SearchHit>, NavHubError> {
        let pattern = query.like_pattern();
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows: Vec<HitWrapper> = sqlx::query_as(SEARCH)
            .bind(&pattern)
            .bind(&pattern)
            .bind(limit)
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

    async fn total_clicks(&self) -> Result<i64, NavHubError> {
        let total: i64 = sqlx::query_scalar(TOTAL_CLICKS)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(total)
    }

    async fn record_click(&self, id: ServiceId) -> Result<Option<Service>, NavHubError> {
        let done = sqlx::query(INCREMENT_CLICKS)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if done.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category_repo::SqliteCategoryRepository;
    use crate::pool::Config;
    use navhub_app::ports::CategoryRepository;
    use navhub_domain::category::NewCategory;
    use navhub_domain::search::SEARCH_LIMIT;

    async fn setup() -> (SqliteServiceRepository, CategoryId, SqlitePool) {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let pool = db.pool().clone();
        let category = SqliteCategoryRepository::new(pool.clone())
            .create(
                NewCategory::builder()
                    .name("对话")
                    .slug("chat")
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        (SqliteServiceRepository::new(pool.clone()), category.id, pool)
    }

    fn new_service(name: &str, description: &str, category_id: CategoryId) -> NewService {
        NewService {
            name: name.to_string(),
            url: format!("https://{name}.example.com"),
            description: description.to_string(),
            category_id,
            icon: None,
        }
    }

    async fn set_clicks(pool: &SqlitePool, id: ServiceId, clicks: i64) {
        sqlx::query("UPDATE services SET click_count = ? WHERE id = ?")
            .bind(clicks)
            .bind(id.get())
            .execute(pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn should_create_service_with_category_name() {
        let (repo, category_id, _) = setup().await;

        let mut service = new_service("claude", "AI 助手", category_id);
        service.icon = Some("https://cdn.example.com/claude.png".to_string());
        let record = repo.create(service).await.unwrap();

        assert_eq!(record.category_name, "对话");
        assert_eq!(record.service.category_id, category_id);
        assert_eq!(record.service.click_count, 0);
        assert_eq!(
            record.service.icon.as_deref(),
            Some("https://cdn.example.com/claude.png")
        );

        let fetched = repo.get_by_id(record.service.id).await.unwrap().unwrap();
        assert_eq!(fetched, record.service);
    }

    #[tokio::test]
    async fn should_reject_missing_category_without_inserting() {
        let (repo, _, _) = setup().await;

        let result = repo
            .create(new_service("claude", "AI 助手", CategoryId::new(999)))
            .await;
        assert!(matches!(
            result,
            Err(NavHubError::Validation(ValidationError::CategoryNotFound))
        ));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_list_newest_first() {
        let (repo, category_id, _) = setup().await;
        repo.create(new_service("first", "a", category_id))
            .await
            .unwrap();
        repo.create(new_service("second", "b", category_id))
            .await
            .unwrap();

        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.service.name)
            .collect();
        assert_eq!(names, ["second", "first"]);
    }

    #[tokio::test]
    async fn should_update_existing_service() {
        let (repo, category_id, _) = setup().await;
        let created = repo
            .create(new_service("claude", "AI 助手", category_id))
            .await
            .unwrap();

        let updated = repo
            .update(
                created.service.id,
                new_service("claude", "Anthropic 出品", category_id),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.service.description, "Anthropic 出品");
        assert_eq!(updated.service.created_at, created.service.created_at);
    }

    #[tokio::test]
    async fn should_return_none_when_updating_missing_service() {
        let (repo, category_id, _) = setup().await;
        let result = repo
            .update(ServiceId::new(77), new_service("x", "y", category_id))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_match_name_or_description_ordered_by_clicks() {
        let (repo, category_id, pool) = setup().await;
        let by_name = repo
            .create(new_service("Writer", "写作", category_id))
            .await
            .unwrap();
        let by_description = repo
            .create(new_service("Scribe", "AI writer for blogs", category_id))
            .await
            .unwrap();
        repo.create(new_service("Painter", "绘画", category_id))
            .await
            .unwrap();
        set_clicks(&pool, by_name.service.id, 3).await;
        set_clicks(&pool, by_description.service.id, 10).await;

        let query = SearchQuery::parse(Some("writer")).unwrap();
        let hits = repo.search(&query, SEARCH_LIMIT).await.unwrap();

        let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Scribe", "Writer"]);
        assert_eq!(hits[0].category_slug, "chat");
        assert_eq!(hits[0].category_name, "对话");
    }

    #[tokio::test]
    async fn should_treat_like_wildcards_literally() {
        let (repo, category_id, _) = setup().await;
        repo.create(new_service("Percent", "100% free", category_id))
            .await
            .unwrap();
        repo.create(new_service("Other", "1000 free", category_id))
            .await
            .unwrap();

        let query = SearchQuery::parse(Some("100%")).unwrap();
        let hits = repo.search(&query, SEARCH_LIMIT).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Percent");
    }

    #[tokio::test]
    async fn should_cap_search_results() {
        let (repo, category_id, _) = setup().await;
        for i in 0..(SEARCH_LIMIT + 5) {
            repo.create(new_service(&format!("tool{i}"), "AI 工具", category_id))
                .await
                .unwrap();
        }

        let query = SearchQuery::parse(Some("工具")).unwrap();
        let hits = repo.search(&query, SEARCH_LIMIT).await.unwrap();
        assert_eq!(hits.len(), SEARCH_LIMIT);
        assert!(hits.windows(2).all(|w| w[0].click_count >= w[1].click_count));
    }

    #[tokio::test]
    async fn should_report_zero_clicks_when_empty() {
        let (repo, _, _) = setup().await;
        assert_eq!(repo.total_clicks().await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_increment_clicks_and_sum_them() {
        let (repo, category_id, _) = setup().await;
        let a = repo
            .create(new_service("a", "x", category_id))
            .await
            .unwrap();
        let b = repo
            .create(new_service("b", "y", category_id))
            .await
            .unwrap();

        repo.record_click(a.service.id).await.unwrap();
        let clicked = repo.record_click(b.service.id).await.unwrap().unwrap();
        repo.record_click(b.service.id).await.unwrap();

        assert_eq!(clicked.click_count, 1);
        assert_eq!(repo.total_clicks().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn should_return_none_when_clicking_missing_service() {
        let (repo, _, _) = setup().await;
        assert!(repo.record_click(ServiceId::new(8)).await.unwrap().is_none());
    }
}
