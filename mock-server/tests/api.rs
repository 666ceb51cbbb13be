use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_server::{app, app_with_state, AppState, Certification, ContactMessage, Project, Store};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

async fn create_project(app: &Router, title: &str, featured: bool) -> Project {
    let body = format!(
        r#"{{"title":"{title}","description":"D","technologies":["Rust"],"category":"Web","featured":{featured}}}"#
    );
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/projects", &body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await
}

// --- health ---

#[tokio::test]
async fn health_reports_connected() {
    let resp = app().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

// --- projects ---

#[tokio::test]
async fn list_projects_empty() {
    let resp = app().oneshot(get("/api/projects")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let projects: Vec<Project> = body_json(resp).await;
    assert!(projects.is_empty());
}

#[tokio::test]
async fn projects_are_newest_first_and_filterable() {
    let app = app();
    create_project(&app, "Old", true).await;
    create_project(&app, "New", false).await;

    let all: Vec<Project> = body_json(app.clone().oneshot(get("/api/projects")).await.unwrap()).await;
    let titles: Vec<&str> = all.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["New", "Old"]);

    let featured: Vec<Project> = body_json(
        app.clone()
            .oneshot(get("/api/projects?featured_only=true"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].title, "Old");
}

#[tokio::test]
async fn get_project_by_id() {
    let app = app();
    let created = create_project(&app, "Lookup", false).await;
    let resp = app
        .clone()
        .oneshot(get(&format!("/api/projects/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Project = body_json(resp).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_project_not_found_has_detail() {
    let resp = app().oneshot(get("/api/projects/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body["detail"], "Project not found");
}

#[tokio::test]
async fn create_project_missing_fields_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/projects", r#"{"title":"Only title"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(resp.headers()[http::header::CONTENT_TYPE], "application/json");
    let body: Value = body_json(resp).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("description"), "{detail}");
}

#[tokio::test]
async fn malformed_json_returns_400_with_detail() {
    let resp = app()
        .oneshot(json_request("POST", "/api/contact", "{not json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert!(!body["detail"].as_str().unwrap().is_empty());
}

// --- certifications ---

#[tokio::test]
async fn certifications_sorted_by_date_earned() {
    let app = app();
    for year in ["2022", "2024", "2023"] {
        let body = format!(r#"{{"title":"Cert {year}","issuer":"Coursera","date_earned":"{year}"}}"#);
        let resp = app
            .clone()
            .oneshot(json_request("POST", "/api/certifications", &body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
    let certs: Vec<Certification> =
        body_json(app.clone().oneshot(get("/api/certifications")).await.unwrap()).await;
    let years: Vec<&str> = certs.iter().map(|c| c.date_earned.as_str()).collect();
    assert_eq!(years, vec!["2024", "2023", "2022"]);
}

// --- artwork ---

#[tokio::test]
async fn create_artwork_with_optional_fields_absent() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/artwork",
            r#"{"title":"Sketch","image_url":"https://img","category":"Traditional"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert!(body["medium"].is_null());

    let list: Vec<Value> = body_json(app.clone().oneshot(get("/api/artwork")).await.unwrap()).await;
    assert_eq!(list.len(), 1);
}

// --- about ---

#[tokio::test]
async fn about_defaults_then_updates_in_place() {
    let app = app();
    let body: Value = body_json(app.clone().oneshot(get("/api/about")).await.unwrap()).await;
    assert_eq!(body["id"], "default");

    let update = r#"{"bio":"Rustacean","skills":["Rust"],"social_links":{"github":"https://github.com/x"}}"#;
    let first: Value = body_json(
        app.clone()
            .oneshot(json_request("PUT", "/api/about", update))
            .await
            .unwrap(),
    )
    .await;
    let second: Value = body_json(
        app.clone()
            .oneshot(json_request("PUT", "/api/about", update))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(first["id"], second["id"]);
    assert_ne!(first["id"], "default");

    let body: Value = body_json(app.clone().oneshot(get("/api/about")).await.unwrap()).await;
    assert_eq!(body["bio"], "Rustacean");
}

// --- contact ---

#[tokio::test]
async fn contact_messages_are_stored() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/contact",
            r#"{"name":"Ada","email":"ada@example.com","message":"Hi"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let saved: ContactMessage = body_json(resp).await;
    assert!(saved.subject.is_none());

    let messages: Vec<ContactMessage> =
        body_json(app.clone().oneshot(get("/api/contact")).await.unwrap()).await;
    assert_eq!(messages, vec![saved]);
}

// --- outage ---

#[tokio::test]
async fn outage_fails_resources_with_detail() {
    let state = AppState::new(Store::default());
    state.set_outage(Some("DB down".to_string())).await;
    let app = app_with_state(state.clone());

    let resp = app.clone().oneshot(get("/api/certifications")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = body_json(resp).await;
    assert_eq!(body["detail"], "DB down");

    let health: Value = body_json(app.clone().oneshot(get("/api/health")).await.unwrap()).await;
    assert_eq!(health["status"], "unhealthy");
    assert_eq!(health["error"], "DB down");

    state.set_outage(None).await;
    let resp = app.clone().oneshot(get("/api/certifications")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn seeded_store_serves_records() {
    let app = app_with_state(AppState::new(Store::seeded()));
    let featured: Vec<Project> = body_json(
        app.clone()
            .oneshot(get("/api/projects?featured_only=true"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(featured.len(), 1);
}
