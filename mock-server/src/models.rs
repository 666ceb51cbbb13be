//! Wire records served by the mock backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub image_url: Option<String>,
    pub category: String,
    pub featured: bool,
}

#[derive(Deserialize)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub image_url: Option<String>,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
}

impl ProjectInput {
    pub fn into_record(self, id: String) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            technologies: self.technologies,
            github_url: self.github_url,
            demo_url: self.demo_url,
            image_url: self.image_url,
            category: self.category,
            featured: self.featured,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date_earned: String,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub badge_url: Option<String>,
}

#[derive(Deserialize)]
pub struct CertificationInput {
    pub title: String,
    pub issuer: String,
    pub date_earned: String,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub badge_url: Option<String>,
}

impl CertificationInput {
    pub fn into_record(self, id: String) -> Certification {
        Certification {
            id,
            title: self.title,
            issuer: self.issuer,
            date_earned: self.date_earned,
            credential_id: self.credential_id,
            credential_url: self.credential_url,
            badge_url: self.badge_url,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category: String,
    pub medium: Option<String>,
    pub year_created: Option<String>,
}

#[derive(Deserialize)]
pub struct ArtworkInput {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category: String,
    pub medium: Option<String>,
    pub year_created: Option<String>,
}

impl ArtworkInput {
    pub fn into_record(self, id: String) -> Artwork {
        Artwork {
            id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            category: self.category,
            medium: self.medium,
            year_created: self.year_created,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct About {
    pub id: String,
    pub bio: String,
    pub profile_image_url: Option<String>,
    pub skills: Vec<String>,
    pub social_links: BTreeMap<String, String>,
    pub resume_url: Option<String>,
}

impl About {
    /// Served until the first `PUT /api/about`.
    pub fn fallback() -> Self {
        Self {
            id: "default".to_string(),
            bio: "AI Developer & Creative Technologist passionate about building intelligent systems and creating digital art.".to_string(),
            profile_image_url: None,
            skills: ["Python", "Machine Learning", "Deep Learning", "React", "FastAPI", "Digital Art"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            social_links: ["github", "linkedin", "twitter"]
                .iter()
                .map(|k| (k.to_string(), String::new()))
                .collect(),
            resume_url: None,
        }
    }
}

#[derive(Deserialize)]
pub struct AboutInput {
    pub bio: String,
    pub profile_image_url: Option<String>,
    pub skills: Vec<String>,
    pub social_links: BTreeMap<String, String>,
    pub resume_url: Option<String>,
}

impl AboutInput {
    pub fn into_record(self, id: String) -> About {
        About {
            id,
            bio: self.bio,
            profile_image_url: self.profile_image_url,
            skills: self.skills,
            social_links: self.social_links,
            resume_url: self.resume_url,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactInput {
    pub fn into_record(self, id: String) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
        }
    }
}
