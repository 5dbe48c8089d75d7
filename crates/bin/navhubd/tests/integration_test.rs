//! End-to-end tests for the full navhubd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use navhub_adapter_http_axum::auth::StaticTokenVerifier;
use navhub_adapter_http_axum::router;
use navhub_adapter_http_axum::state::AppState;
use navhub_adapter_storage_sqlite_sqlx::{
    Config, SqliteCategoryRepository, SqliteServiceRepository, SqliteSettingsRepository,
};
use navhub_app::services::category_service::CategoryService;
use navhub_app::services::directory_service::DirectoryService;
use navhub_app::services::settings_service::SettingsService;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

const TOKEN: &str = "integration-token";

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> (axum::Router, SqlitePool) {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let state = AppState::new(
        DirectoryService::new(
            SqliteServiceRepository::new(pool.clone()),
            SqliteCategoryRepository::new(pool.clone()),
        ),
        CategoryService::new(SqliteCategoryRepository::new(pool.clone())),
        SettingsService::new(SqliteSettingsRepository::new(pool.clone())),
        StaticTokenVerifier::new(TOKEN),
    );

    (router::build(state, None), pool)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn admin_get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TOKEN}"))
        .body(Body::empty())
        .unwrap()
}

fn admin_post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TOKEN}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn create_category(app: &axum::Router, name: &str, slug: &str) -> i64 {
    let (status, body) = send(
        app,
        admin_post("/api/admin/categories", &json!({"name": name, "slug": slug})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_i64().unwrap()
}

async fn create_service(app: &axum::Router, name: &str, description: &str, category: i64) -> i64 {
    let (status, body) = send(
        app,
        admin_post(
            "/api/admin/services",
            &json!({
                "name": name,
                "url": format!("https://{}.example.com", name.to_lowercase()),
                "description": description,
                "categoryId": category,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (app, _) = app().await;
    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Admin API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_admin_routes_without_token() {
    let (app, _) = app().await;
    for uri in ["/api/admin/services", "/api/admin/stats", "/api/admin/categories"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body["error"], "未授权访问");
    }
}

#[tokio::test]
async fn should_create_service_with_category_name() {
    let (app, _) = app().await;
    let category = create_category(&app, "对话", "chat").await;

    let (status, body) = send(
        &app,
        admin_post(
            "/api/admin/services",
            &json!({
                "name": "Claude",
                "url": "https://claude.ai",
                "description": "AI 助手",
                "categoryId": category,
                "icon": "https://claude.ai/favicon.ico",
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "创建服务成功");
    assert_eq!(body["data"]["categoryName"], "对话");
    assert_eq!(body["data"]["categoryId"], category);
    assert_eq!(body["data"]["clickCount"], 0);
    assert_eq!(body["data"]["icon"], "https://claude.ai/favicon.ico");
}

#[tokio::test]
async fn should_validate_fields_in_order() {
    let (app, _) = app().await;
    let category = create_category(&app, "对话", "chat").await;

    let cases = [
        (json!({}), "服务名称不能为空"),
        (json!({"name": 7, "url": ""}), "服务名称不能为空"),
        (json!({"name": "a"}), "服务网址不能为空"),
        (json!({"name": "a", "url": "u"}), "服务简介不能为空"),
        (json!({"name": "a", "url": "u", "description": "d"}), "所属分类不能为空"),
        (
            json!({"name": "a", "url": "u", "description": "d", "categoryId": "1"}),
            "所属分类不能为空",
        ),
        (
            json!({"name": "a", "url": "u", "description": "d", "categoryId": 0}),
            "所属分类不能为空",
        ),
        (
            json!({"name": "a", "url": "u", "description": "d", "categoryId": category + 100}),
            "所选分类不存在",
        ),
        (
            json!({"name": "a", "url": "u", "description": "d", "categoryId": -3}),
            "所选分类不存在",
        ),
        (
            json!({"name": "a", "url": "u", "description": "d", "categoryId": 2.5}),
            "所选分类不存在",
        ),
    ];

    for (payload, expected) in cases {
        let (status, body) = send(&app, admin_post("/api/admin/services", &payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], expected, "{payload}");
    }

    let (_, body) = send(&app, admin_get("/api/admin/services")).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn should_list_services_newest_first() {
    let (app, _) = app().await;
    let category = create_category(&app, "对话", "chat").await;
    let first = create_service(&app, "First", "one", category).await;
    let second = create_service(&app, "Second", "two", category).await;

    let (status, body) = send(&app, admin_get("/api/admin/services")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [second, first]);
}

#[tokio::test]
async fn should_update_service() {
    let (app, _) = app().await;
    let chat = create_category(&app, "对话", "chat").await;
    let image = create_category(&app, "绘画", "image").await;
    let id = create_service(&app, "Tool", "before", chat).await;

    let (status, body) = send(
        &app,
        Request::builder()
            .method("PUT")
            .uri(format!("/api/admin/services/{id}"))
            .header(header::AUTHORIZATION, format!("Bearer {TOKEN}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "name": "Tool",
                    "url": "https://tool.example.com",
                    "description": "after",
                    "categoryId": image,
                })
                .to_string(),
            ))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "更新服务成功");
    assert_eq!(body["data"]["description"], "after");
    assert_eq!(body["data"]["categoryName"], "绘画");
}

#[tokio::test]
async fn should_reject_duplicate_category_slug() {
    let (app, _) = app().await;
    create_category(&app, "对话", "chat").await;

    let (status, body) = send(
        &app,
        admin_post("/api/admin/categories", &json!({"name": "聊天", "slug": "chat"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "分类别名已存在");
}

#[tokio::test]
async fn should_fetch_category_by_id() {
    let (app, _) = app().await;
    let category = create_category(&app, "绘画", "image").await;

    let (status, body) = send(&app, admin_get(&format!("/api/admin/categories/{category}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["slug"], "image");

    let (status, body) = send(&app, admin_get(&format!("/api/admin/categories/{}", category + 1))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, body) = send(&app, admin_get("/api/admin/categories/image")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "无效的ID");
}

#[tokio::test]
async fn should_report_zero_clicks_for_empty_directory() {
    let (app, _) = app().await;
    let (status, body) = send(&app, admin_get("/api/admin/stats")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({"serviceCount": 0, "categoryCount": 0, "totalClicks": 0})
    );
}

#[tokio::test]
async fn should_sum_clicks_in_stats() {
    let (app, _) = app().await;
    let category = create_category(&app, "对话", "chat").await;
    let a = create_service(&app, "A", "x", category).await;
    let b = create_service(&app, "B", "y", category).await;

    for id in [a, b, b] {
        let req = Request::builder()
            .method("POST")
            .uri(format!("/api/services/{id}/click"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], id);
    }

    let (_, body) = send(&app, admin_get("/api/admin/stats")).await;
    assert_eq!(
        body["data"],
        json!({"serviceCount": 2, "categoryCount": 1, "totalClicks": 3})
    );
}

// ---------------------------------------------------------------------------
// Public search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_missing_or_empty_query() {
    let (app, _) = app().await;
    for uri in ["/api/search", "/api/search?q="] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "搜索关键词不能为空");
    }
}

#[tokio::test]
async fn should_search_ordered_by_clicks() {
    let (app, pool) = app().await;
    let category = create_category(&app, "写作", "writing").await;
    let quiet = create_service(&app, "Quiet", "AI 写作助手", category).await;
    let popular = create_service(&app, "Popular", "AI 写作工具", category).await;
    create_service(&app, "Painter", "绘画", category).await;

    sqlx::query("UPDATE services SET click_count = 9 WHERE id = ?")
        .bind(popular)
        .execute(&pool)
        .await
        .unwrap();

    let (status, body) = send(&app, get("/api/search?q=%E5%86%99%E4%BD%9C")).await;
    assert_eq!(status, StatusCode::OK);
    let hits = body["data"].as_array().unwrap();
    let ids: Vec<i64> = hits.iter().map(|h| h["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, [popular, quiet]);
    assert_eq!(hits[0]["categorySlug"], "writing");
    assert_eq!(hits[0]["categoryName"], "写作");
}

#[tokio::test]
async fn should_cap_search_at_fifty_results() {
    let (app, _) = app().await;
    let category = create_category(&app, "工具", "tools").await;
    for i in 0..55 {
        create_service(&app, &format!("Tool{i}"), "handy tool", category).await;
    }

    let (status, body) = send(&app, get("/api/search?q=TOOL")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 50);
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_default_settings_when_none_stored() {
    let (app, _) = app().await;
    let (status, body) = send(&app, get("/api/settings")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["degraded"], false);
    assert_eq!(body["settings"]["siteName"], "AI导航");
    assert_eq!(body["settings"]["siteDescription"], "收录优质AI服务和应用的导航网站");
    assert_eq!(body["settings"]["statisticsCode"], "");
}

#[tokio::test]
async fn should_prefer_stored_settings() {
    let (app, pool) = app().await;
    for (key, value) in [("siteName", "我的导航"), ("seoTitle", "最好的 AI 导航")] {
        sqlx::query("INSERT INTO settings (key, value) VALUES (?, ?)")
            .bind(key)
            .bind(value)
            .execute(&pool)
            .await
            .unwrap();
    }

    let (_, body) = send(&app, get("/api/settings")).await;
    assert_eq!(body["settings"]["siteName"], "我的导航");
    assert_eq!(body["settings"]["seoTitle"], "最好的 AI 导航");
    assert_eq!(body["metadata"]["title"], "最好的 AI 导航");
    assert_eq!(body["metadata"]["description"], "收录优质AI服务和应用的导航网站");
}
