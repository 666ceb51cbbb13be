//! Resource API façade: one method per backend operation.
//!
//! Every method is a fixed mapping onto an HTTP verb and path of the
//! portfolio backend. Payloads are not validated here; the backend owns
//! validation.

use crate::adapter::HttpClient;
use crate::error::ApiError;
use crate::http::ApiResponse;
use crate::types::{
    AboutInfo, Artwork, Certification, ContactMessage, HealthStatus, NewArtwork,
    NewCertification, NewProject, Project,
};

pub const HEALTH_PATH: &str = "/api/health";
pub const PROJECTS_PATH: &str = "/api/projects";
pub const CERTIFICATIONS_PATH: &str = "/api/certifications";
pub const ARTWORK_PATH: &str = "/api/artwork";
pub const ABOUT_PATH: &str = "/api/about";
pub const CONTACT_PATH: &str = "/api/contact";

/// Path for the project list, with the featured filter when requested.
pub fn projects_path(featured_only: bool) -> String {
    if featured_only {
        format!("{PROJECTS_PATH}?featured_only=true")
    } else {
        PROJECTS_PATH.to_string()
    }
}

pub fn project_path(id: &str) -> String {
    format!("{PROJECTS_PATH}/{id}")
}

/// Named operations over the portfolio backend.
#[derive(Debug, Clone)]
pub struct PortfolioApi {
    http: HttpClient,
}

impl PortfolioApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Façade over a ureq-backed client configured from the environment.
    pub fn from_env() -> Self {
        Self::new(HttpClient::from_env())
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn health(&self) -> Result<ApiResponse<HealthStatus>, ApiError> {
        self.http.get(HEALTH_PATH)
    }

    pub fn get_projects(&self, featured_only: bool) -> Result<ApiResponse<Vec<Project>>, ApiError> {
        self.http.get(&projects_path(featured_only))
    }

    pub fn get_project(&self, id: &str) -> Result<ApiResponse<Project>, ApiError> {
        self.http.get(&project_path(id))
    }

    pub fn create_project(&self, input: &NewProject) -> Result<ApiResponse<Project>, ApiError> {
        self.http.post(PROJECTS_PATH, input)
    }

    pub fn get_certifications(&self) -> Result<ApiResponse<Vec<Certification>>, ApiError> {
        self.http.get(CERTIFICATIONS_PATH)
    }

    pub fn create_certification(
        &self,
        input: &NewCertification,
    ) -> Result<ApiResponse<Certification>, ApiError> {
        self.http.post(CERTIFICATIONS_PATH, input)
    }

    pub fn get_artwork(&self) -> Result<ApiResponse<Vec<Artwork>>, ApiError> {
        self.http.get(ARTWORK_PATH)
    }

    pub fn create_artwork(&self, input: &NewArtwork) -> Result<ApiResponse<Artwork>, ApiError> {
        self.http.post(ARTWORK_PATH, input)
    }

    pub fn get_about(&self) -> Result<ApiResponse<AboutInfo>, ApiError> {
        self.http.get(ABOUT_PATH)
    }

    pub fn update_about(&self, input: &AboutInfo) -> Result<ApiResponse<AboutInfo>, ApiError> {
        self.http.put(ABOUT_PATH, input)
    }

    pub fn submit_contact(
        &self,
        input: &ContactMessage,
    ) -> Result<ApiResponse<ContactMessage>, ApiError> {
        self.http.post(CONTACT_PATH, input)
    }

    pub fn get_contact_messages(&self) -> Result<ApiResponse<Vec<ContactMessage>>, ApiError> {
        self.http.get(CONTACT_PATH)
    }
}
