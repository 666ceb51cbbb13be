//! Resource-specific fetch hooks.
//!
//! Each constructor binds a [`UseApi`] to one façade operation. Hooks are
//! per call site: every section builds its own and nothing is shared or
//! cached between them.

use crate::api::PortfolioApi;
use crate::contact::UseContactForm;
use crate::fetch::UseApi;
use crate::types::{AboutInfo, Artwork, Certification, Project};

/// Project list; the dependency is the `featured_only` filter.
pub fn use_projects(api: &PortfolioApi) -> UseApi<Vec<Project>, bool> {
    let api = api.clone();
    UseApi::new(move |featured_only: &bool| api.get_projects(*featured_only))
}

pub fn use_certifications(api: &PortfolioApi) -> UseApi<Vec<Certification>> {
    let api = api.clone();
    UseApi::new(move |_: &()| api.get_certifications())
}

pub fn use_artwork(api: &PortfolioApi) -> UseApi<Vec<Artwork>> {
    let api = api.clone();
    UseApi::new(move |_: &()| api.get_artwork())
}

pub fn use_about(api: &PortfolioApi) -> UseApi<AboutInfo> {
    let api = api.clone();
    UseApi::new(move |_: &()| api.get_about())
}

/// Contact form submission. Unlike the other hooks it never fetches on its
/// own; see [`UseContactForm::submit_form`].
pub fn use_contact_form(api: &PortfolioApi) -> UseContactForm {
    let api = api.clone();
    UseContactForm::new(move |message| api.submit_contact(message))
}
