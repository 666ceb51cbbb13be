//! In-memory stand-in for the portfolio backend.
//!
//! Serves every `/api/*` endpoint the client core calls, keeps records in a
//! process-local store, and can be switched into an outage mode in which
//! resource endpoints fail with a 500 and a `detail` message.

pub mod error;
pub mod extract;
pub mod models;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub use error::{AppError, AppResult};
pub use extract::JsonBody;
pub use models::{
    About, AboutInput, Artwork, ArtworkInput, Certification, CertificationInput, ContactInput,
    ContactMessage, Project, ProjectInput,
};

/// Record collections. Lists are kept newest-first.
#[derive(Default)]
pub struct Store {
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub artwork: Vec<Artwork>,
    pub about: Option<About>,
    pub contact: Vec<ContactMessage>,
}

impl Store {
    /// One record per collection, for local demos.
    pub fn seeded() -> Self {
        let project = ProjectInput {
            title: "AI-Powered Chatbot".to_string(),
            description: "An intelligent chatbot using natural language processing and machine learning to provide helpful responses and automate customer service tasks.".to_string(),
            technologies: vec![
                "Python".to_string(),
                "OpenAI API".to_string(),
                "FastAPI".to_string(),
                "React".to_string(),
            ],
            github_url: Some("https://github.com/johnyohannan/ai-chatbot".to_string()),
            demo_url: Some("https://chatbot.johnyohannan.dev".to_string()),
            image_url: Some("https://images.unsplash.com/photo-1531746790731-6c087fecd65a?w=500&q=80".to_string()),
            category: "AI/ML".to_string(),
            featured: true,
        };
        let certification = CertificationInput {
            title: "Machine Learning Specialization".to_string(),
            issuer: "Stanford University - Coursera".to_string(),
            date_earned: "2024".to_string(),
            credential_id: Some("COURSERA_ML_2024".to_string()),
            credential_url: Some("https://coursera.org/verify/specialization/ML2024".to_string()),
            badge_url: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&q=80".to_string()),
        };
        let artwork = ArtworkInput {
            title: "Neural Network Visualization".to_string(),
            description: Some("Digital art representing the flow of information through a neural network, created using generative algorithms.".to_string()),
            image_url: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&q=80".to_string(),
            category: "Digital".to_string(),
            medium: Some("Digital Art".to_string()),
            year_created: Some("2024".to_string()),
        };
        Self {
            projects: vec![project.into_record(new_id())],
            certifications: vec![certification.into_record(new_id())],
            artwork: vec![artwork.into_record(new_id())],
            ..Self::default()
        }
    }
}

pub struct AppState {
    store: RwLock<Store>,
    outage: RwLock<Option<String>>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: Store) -> SharedState {
        Arc::new(Self {
            store: RwLock::new(store),
            outage: RwLock::new(None),
        })
    }

    /// `Some(reason)` makes resource endpoints fail with `reason` as detail.
    pub async fn set_outage(&self, reason: Option<String>) {
        *self.outage.write().await = reason;
    }

    async fn available(&self) -> AppResult<()> {
        match self.outage.read().await.as_ref() {
            Some(reason) => Err(AppError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn app() -> Router {
    app_with_state(AppState::new(Store::default()))
}

pub fn app_with_state(state: SharedState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/projects", get(list_projects).post(create_project))
        .route("/api/projects/{id}", get(get_project))
        .route(
            "/api/certifications",
            get(list_certifications).post(create_certification),
        )
        .route("/api/artwork", get(list_artwork).post(create_artwork))
        .route("/api/about", get(get_about).put(update_about))
        .route("/api/contact", get(list_contact).post(submit_contact))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_state(listener, AppState::new(Store::default())).await
}

pub async fn run_with_state(listener: TcpListener, state: SharedState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

async fn health(State(state): State<SharedState>) -> Json<Value> {
    match state.outage.read().await.as_ref() {
        Some(reason) => Json(json!({ "status": "unhealthy", "error": reason })),
        None => Json(json!({ "status": "healthy", "database": "connected" })),
    }
}

#[derive(Deserialize)]
struct ProjectsQuery {
    #[serde(default)]
    featured_only: bool,
}

async fn list_projects(
    State(state): State<SharedState>,
    Query(query): Query<ProjectsQuery>,
) -> AppResult<Json<Vec<Project>>> {
    state.available().await?;
    let store = state.store.read().await;
    let projects = store
        .projects
        .iter()
        .filter(|p| !query.featured_only || p.featured)
        .cloned()
        .collect();
    Ok(Json(projects))
}

async fn create_project(
    State(state): State<SharedState>,
    JsonBody(input): JsonBody<ProjectInput>,
) -> AppResult<Json<Project>> {
    state.available().await?;
    let project = input.into_record(new_id());
    state.store.write().await.projects.insert(0, project.clone());
    tracing::info!(id = %project.id, "project created");
    Ok(Json(project))
}

async fn get_project(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    state.available().await?;
    let store = state.store.read().await;
    store
        .projects
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or(AppError::NotFound("Project"))
}

async fn list_certifications(State(state): State<SharedState>) -> AppResult<Json<Vec<Certification>>> {
    state.available().await?;
    let mut certifications = state.store.read().await.certifications.clone();
    certifications.sort_by(|a, b| b.date_earned.cmp(&a.date_earned));
    Ok(Json(certifications))
}

async fn create_certification(
    State(state): State<SharedState>,
    JsonBody(input): JsonBody<CertificationInput>,
) -> AppResult<Json<Certification>> {
    state.available().await?;
    let certification = input.into_record(new_id());
    state
        .store
        .write()
        .await
        .certifications
        .insert(0, certification.clone());
    tracing::info!(id = %certification.id, "certification created");
    Ok(Json(certification))
}

async fn list_artwork(State(state): State<SharedState>) -> AppResult<Json<Vec<Artwork>>> {
    state.available().await?;
    Ok(Json(state.store.read().await.artwork.clone()))
}

async fn create_artwork(
    State(state): State<SharedState>,
    JsonBody(input): JsonBody<ArtworkInput>,
) -> AppResult<Json<Artwork>> {
    state.available().await?;
    let artwork = input.into_record(new_id());
    state.store.write().await.artwork.insert(0, artwork.clone());
    tracing::info!(id = %artwork.id, "artwork created");
    Ok(Json(artwork))
}

async fn get_about(State(state): State<SharedState>) -> AppResult<Json<About>> {
    state.available().await?;
    let store = state.store.read().await;
    Ok(Json(store.about.clone().unwrap_or_else(About::fallback)))
}

async fn update_about(
    State(state): State<SharedState>,
    JsonBody(input): JsonBody<AboutInput>,
) -> AppResult<Json<About>> {
    state.available().await?;
    let mut store = state.store.write().await;
    let id = store
        .about
        .as_ref()
        .map(|a| a.id.clone())
        .unwrap_or_else(new_id);
    let about = input.into_record(id);
    store.about = Some(about.clone());
    Ok(Json(about))
}

async fn submit_contact(
    State(state): State<SharedState>,
    JsonBody(input): JsonBody<ContactInput>,
) -> AppResult<Json<ContactMessage>> {
    state.available().await?;
    let message = input.into_record(new_id());
    state.store.write().await.contact.insert(0, message.clone());
    tracing::info!(id = %message.id, "contact message received");
    Ok(Json(message))
}

async fn list_contact(State(state): State<SharedState>) -> AppResult<Json<Vec<ContactMessage>>> {
    state.available().await?;
    Ok(Json(state.store.read().await.contact.clone()))
}
