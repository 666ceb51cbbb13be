//! Data behind each page section: which records to show and how the
//! section's filters narrow them. Rendering lives elsewhere.

use std::collections::HashSet;

use crate::fetch::FetchState;
use crate::samples::{self, Skill};
use crate::types::{AboutInfo, Artwork, Certification, Project};

/// Filter value that matches every category.
pub const ALL_CATEGORIES: &str = "all";

/// Where a section's records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Backend,
    Samples,
}

/// Records grouped under a category label.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for Project {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for Artwork {
    fn category(&self) -> &str {
        &self.category
    }
}

/// The records a list section renders once its fetch has settled.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<T> {
    pub items: Vec<T>,
    pub origin: Origin,
    /// Fetch error, kept so the view can show it next to the samples.
    pub error: Option<String>,
}

impl<T: Clone> Section<T> {
    /// `None` while the fetch is still loading.
    pub fn resolve(state: &FetchState<Vec<T>>, samples: impl FnOnce() -> Vec<T>) -> Option<Self> {
        let resolved = state.resolve()?;
        let origin = if resolved.needs_fallback() {
            Origin::Samples
        } else {
            Origin::Backend
        };
        Some(Self {
            items: resolved.or_samples(samples),
            origin,
            error: resolved.failure().map(str::to_string),
        })
    }
}

impl<T: Categorized> Section<T> {
    /// `"all"` followed by each distinct category in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for item in &self.items {
            if seen.insert(item.category()) {
                categories.push(item.category().to_string());
            }
        }
        categories
    }

    pub fn in_category(&self, category: &str) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| category == ALL_CATEGORIES || item.category() == category)
            .collect()
    }
}

impl Section<Project> {
    pub fn filtered(&self, category: &str, featured_only: bool) -> Vec<&Project> {
        self.in_category(category)
            .into_iter()
            .filter(|project| !featured_only || project.featured)
            .collect()
    }
}

pub fn projects_section(state: &FetchState<Vec<Project>>) -> Option<Section<Project>> {
    Section::resolve(state, samples::projects)
}

pub fn certifications_section(state: &FetchState<Vec<Certification>>) -> Option<Section<Certification>> {
    Section::resolve(state, samples::certifications)
}

pub fn artwork_section(state: &FetchState<Vec<Artwork>>) -> Option<Section<Artwork>> {
    Section::resolve(state, samples::artworks)
}

/// Bio and skills for the about section, each falling back independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutSection {
    pub bio: String,
    pub skills: Vec<Skill>,
    pub profile_image_url: Option<String>,
    pub resume_url: Option<String>,
}

impl AboutSection {
    pub fn resolve(state: &FetchState<AboutInfo>) -> Option<Self> {
        if state.loading {
            return None;
        }
        let about = state.data.as_ref();
        let bio = about
            .map(|a| a.bio.trim())
            .filter(|bio| !bio.is_empty())
            .unwrap_or(samples::DEFAULT_BIO)
            .to_string();
        let skills = match about {
            Some(a) if !a.skills.is_empty() => a
                .skills
                .iter()
                .map(|name| Skill {
                    name: name.clone(),
                    category: samples::skill_category(name).to_string(),
                })
                .collect(),
            _ => samples::default_skills(),
        };
        Some(Self {
            bio,
            skills,
            profile_image_url: about.and_then(|a| a.profile_image_url.clone()),
            resume_url: about.and_then(|a| a.resume_url.clone()),
        })
    }
}
