use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use admin_api::{build_router, cors_layer, AppState};
use admin_core::error::DomainError;
use admin_core::repositories::VersionSource;
use admin_core::services::{CategoryService, ConfigService, MenuService, SecurityService, UpdateService};
use admin_infrastructure::{LocalHostEnvironment, RuleTableOracle, SeededStores};
use admin_shared::config::{HostSettings, PermissionRuleSettings, SeedCategory, SeedModule, SeedSettings};

const CSRF: &str = "0123456789abcdef";

struct FixedVersion(&'static str);

#[async_trait]
impl VersionSource for FixedVersion {
    async fn fetch_latest(&self) -> Result<String, DomainError> {
        Ok(self.0.to_string())
    }
}

fn rule(principal: &str, component: &str, instance: &str, level: &str) -> PermissionRuleSettings {
    PermissionRuleSettings {
        principal: principal.into(),
        component: component.into(),
        instance: instance.into(),
        level: level.into(),
    }
}

fn seed_module(name: &str, category: &str, sort_order: i32) -> SeedModule {
    SeedModule {
        name: name.into(),
        display_name: name.trim_end_matches("Module").into(),
        description: String::new(),
        icon_path: String::new(),
        kind: "system".into(),
        category: Some(category.into()),
        sort_order,
    }
}

async fn app(install_dir: &std::path::Path) -> Router {
    let mut system_vars = HashMap::new();
    system_vars.insert("updatecheck".to_string(), json!(true));
    let mut vars = HashMap::new();
    vars.insert("System".to_string(), system_vars);

    let seed = SeedSettings {
        categories: vec![
            SeedCategory { name: "System".into(), description: "Core".into() },
            SeedCategory { name: "Layout".into(), description: "Look and feel".into() },
        ],
        modules: vec![seed_module("UsersModule", "System", 1), seed_module("ThemeModule", "Layout", 0)],
        vars,
    };
    let stores = SeededStores::from_settings(&seed).await.unwrap();

    let oracle = Arc::new(
        RuleTableOracle::from_settings(&[
            rule("admin", ".*", ".*", "admin"),
            rule("editor", "AdminModule::.*", ".*", "edit"),
        ])
        .unwrap(),
    );

    let host = Arc::new(LocalHostEnvironment::new(
        HostSettings {
            document_root: "/var/www".into(),
            app_dir: None,
            install_dir: install_dir.display().to_string(),
            config_file: "config.toml".into(),
            recovery_console_file: "install.html".into(),
            legacy_directives: Vec::new(),
            available_modules: Vec::new(),
        },
        false,
    ));

    let state = AppState {
        menu: Arc::new(MenuService::new(
            stores.categories.clone(),
            stores.modules.clone(),
            stores.config.clone(),
            oracle.clone(),
            host.clone(),
        )),
        categories: Arc::new(CategoryService::new(stores.categories.clone(), stores.config.clone(), oracle.clone())),
        config: Arc::new(ConfigService::new(
            stores.categories.clone(),
            stores.modules.clone(),
            stores.config.clone(),
            oracle,
        )),
        updates: Arc::new(UpdateService::new(
            stores.config.clone(),
            Arc::new(FixedVersion("9.9.9")),
            "1.0.0".into(),
        )),
        security: Arc::new(SecurityService::new(host, stores.config.clone())),
    };

    build_router(state)
}

fn request(method: &str, uri: &str, principal: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-csrf-token", CSRF)
        .header(header::COOKIE, format!("admin_csrf={}", CSRF));
    if let Some(principal) = principal {
        builder = builder.header("x-principal", principal);
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn menu_modules(menu: &Value, option: usize) -> Vec<String> {
    menu["data"]["menu"]["options"][option]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["module_name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_is_public() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path()).await;

    let response = app.oneshot(Request::get("/health").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_menu_lists_categories_and_notices() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path()).await;

    let response = app.oneshot(request("GET", "/admin", Some("admin"), None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["data"]["menu"]["current_category_id"], json!(1));
    assert_eq!(body["data"]["menu"]["options"].as_array().unwrap().len(), 2);
    assert_eq!(menu_modules(&body, 0), vec!["UsersModule"]);
    assert_eq!(body["data"]["notices"]["update"]["show"], json!(true));
    assert_eq!(body["data"]["notices"]["update"]["version"], json!("9.9.9"));
}

#[tokio::test]
async fn anonymous_menu_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path()).await;

    let response = app.oneshot(request("GET", "/admin", None, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert!(body["data"]["menu"]["options"].as_array().unwrap().is_empty());
    assert!(body["data"].get("notices").is_none());
}

#[tokio::test]
async fn mutating_requests_require_csrf_token() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path()).await;

    let request = Request::post("/admin/categories")
        .header("x-principal", "admin")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "name": "Blocks" }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn create_then_duplicate_category() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path()).await;
    let payload = json!({ "name": "Blocks", "description": "Side blocks" });

    let response = app
        .clone()
        .oneshot(request("POST", "/admin/categories", Some("admin"), Some(payload.clone())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(read_json(response).await["data"]["id"], json!(3));

    let response = app
        .oneshot(request("POST", "/admin/categories", Some("admin"), Some(payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn delete_needs_confirmation_and_orphans_fall_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path()).await;

    let response = app
        .clone()
        .oneshot(request("DELETE", "/admin/categories/2", Some("admin"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["data"]["status"], json!("pending_confirmation"));

    let menu = read_json(app.clone().oneshot(request("GET", "/admin", Some("admin"), None)).await.unwrap()).await;
    assert_eq!(menu["data"]["menu"]["options"].as_array().unwrap().len(), 2);

    let response = app
        .clone()
        .oneshot(request("DELETE", "/admin/categories/2?confirmed=true", Some("admin"), None))
        .await
        .unwrap();
    assert_eq!(read_json(response).await["data"]["status"], json!("deleted"));

    let menu = read_json(app.clone().oneshot(request("GET", "/admin", Some("admin"), None)).await.unwrap()).await;
    assert_eq!(menu["data"]["menu"]["options"].as_array().unwrap().len(), 1);
    assert_eq!(menu_modules(&menu, 0), vec!["ThemeModule", "UsersModule"]);

    let response = app
        .oneshot(request("DELETE", "/admin/categories/2?confirmed=true", Some("admin"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_config_is_rejected_with_field_details() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path()).await;

    let response = app
        .clone()
        .oneshot(request("PUT", "/admin/config", Some("admin"), Some(json!({ "items_per_page": "abc" }))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert!(body["error"]["fields"].get("items_per_page").is_some());

    let form = read_json(app.oneshot(request("GET", "/admin/config", Some("admin"), None)).await.unwrap()).await;
    assert_eq!(form["data"]["config"]["items_per_page"], json!(5));
}

#[tokio::test]
async fn config_update_moves_modules() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path()).await;

    let payload = json!({
        "items_per_page": "10",
        "modules_per_row": "3",
        "module_categories": { "ThemeModule": 1, "UsersModule": 42 }
    });
    let response = app
        .clone()
        .oneshot(request("PUT", "/admin/config", Some("admin"), Some(payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["data"]["config"]["items_per_page"], json!(10));
    assert_eq!(body["data"]["warnings"][0]["module_name"], json!("UsersModule"));

    let menu = read_json(app.oneshot(request("GET", "/admin", Some("admin"), None)).await.unwrap()).await;
    assert_eq!(menu_modules(&menu, 0), vec!["ThemeModule", "UsersModule"]);
}

#[tokio::test]
async fn config_update_requires_admin() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path()).await;

    let response = app
        .oneshot(request("PUT", "/admin/config", Some("editor"), Some(json!({ "items_per_page": "10" }))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn panel_shows_start_category_links() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path()).await;

    let response = app.oneshot(request("GET", "/admin/panel", Some("admin"), None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["data"]["view"], json!("panel"));
    assert_eq!(body["data"]["category"]["name"], json!("System"));
    assert_eq!(body["data"]["links"][0]["module_name"], json!("UsersModule"));
}

fn preflight(origin: &str, requested_headers: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri("/admin/config")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, requested_headers)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn cors_only_answers_configured_origins() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path())
        .await
        .layer(cors_layer(&["https://admin.example".to_string()]).unwrap());

    let response = app
        .clone()
        .oneshot(preflight("https://evil.example", "x-principal"))
        .await
        .unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());

    let response = app
        .oneshot(preflight("https://admin.example", "x-csrf-token"))
        .await
        .unwrap();
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://admin.example");
    let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS].to_str().unwrap().to_ascii_lowercase();
    assert!(allowed.contains("x-csrf-token"));
    assert!(!allowed.contains("x-principal"));
}
