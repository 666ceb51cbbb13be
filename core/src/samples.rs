//! Bundled placeholder content shown when the backend yields nothing usable.

use crate::types::{Artwork, Certification, Project};

pub const DEFAULT_BIO: &str = "Hello! I'm John K Yohannan, a dedicated student and passionate AI learner on an exciting journey through the world of artificial intelligence and machine learning. My curiosity drives me to explore cutting-edge technologies and push the boundaries of what's possible.";

/// A skill with the group it is listed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub category: String,
}

const DEFAULT_SKILLS: &[(&str, &str)] = &[
    ("Python", "Languages"),
    ("JavaScript", "Languages"),
    ("React", "Frontend"),
    ("Node.js", "Backend"),
    ("TensorFlow", "AI/ML"),
    ("PyTorch", "AI/ML"),
    ("OpenAI API", "AI/ML"),
    ("Jupyter", "Tools"),
    ("Pandas", "Data Science"),
    ("NumPy", "Data Science"),
    ("Docker", "DevOps"),
    ("Git", "Tools"),
];

pub fn default_skills() -> Vec<Skill> {
    DEFAULT_SKILLS
        .iter()
        .map(|(name, category)| Skill {
            name: name.to_string(),
            category: category.to_string(),
        })
        .collect()
}

/// Category for a skill name, `"Other"` when it is not a default skill.
pub fn skill_category(name: &str) -> &'static str {
    DEFAULT_SKILLS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, category)| *category)
        .unwrap_or("Other")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    technologies: &[&str],
    image: &str,
    category: &str,
    featured: bool,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        technologies: strings(technologies),
        github_url: Some("#".to_string()),
        demo_url: Some("#".to_string()),
        image_url: Some(format!("https://images.unsplash.com/{image}?w=500&q=80")),
        category: category.to_string(),
        featured,
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "AI-Powered Image Classifier",
            "Deep learning model for classifying images using convolutional neural networks. Built with TensorFlow and deployed using Flask.",
            &["Python", "TensorFlow", "Flask", "CNN"],
            "photo-1555949963-aa79dcee981c",
            "AI/ML",
            true,
        ),
        project(
            "2",
            "Natural Language Processing Chatbot",
            "Intelligent chatbot using transformer models and OpenAI API for natural conversation and task assistance.",
            &["Python", "OpenAI API", "Transformers", "FastAPI"],
            "photo-1531746790731-6c087fecd65a",
            "AI/ML",
            true,
        ),
        project(
            "3",
            "Data Visualization Dashboard",
            "Interactive dashboard for analyzing and visualizing complex datasets using React and D3.js.",
            &["React", "D3.js", "Python", "Pandas"],
            "photo-1551288049-bebda4e38f71",
            "Web",
            false,
        ),
    ]
}

fn certification(id: &str, title: &str, issuer: &str, year: &str, credential: &str, badge: &str) -> Certification {
    Certification {
        id: id.to_string(),
        title: title.to_string(),
        issuer: issuer.to_string(),
        date_earned: year.to_string(),
        credential_id: Some(credential.to_string()),
        credential_url: Some("#".to_string()),
        badge_url: Some(format!("https://images.unsplash.com/{badge}?w=100&q=80")),
    }
}

pub fn certifications() -> Vec<Certification> {
    vec![
        certification(
            "1",
            "Machine Learning Specialization",
            "Coursera - Stanford University",
            "2024",
            "COURSERA_ML_2024",
            "photo-1507003211169-0a1dd7228f2d",
        ),
        certification(
            "2",
            "Deep Learning Specialization",
            "Coursera - DeepLearning.AI",
            "2024",
            "DL_AI_2024",
            "photo-1516321318423-f06f85e504b3",
        ),
        certification(
            "3",
            "Python for Data Science and AI",
            "IBM - Coursera",
            "2023",
            "IBM_PYTHON_2023",
            "photo-1526379095098-d400fd0bf935",
        ),
        certification(
            "4",
            "Google AI Fundamentals",
            "Google Cloud",
            "2023",
            "GOOGLE_AI_2023",
            "photo-1573164713988-8665fc963095",
        ),
        certification(
            "5",
            "Complete Web Development Bootcamp",
            "Udemy",
            "2023",
            "UDEMY_WEB_2023",
            "photo-1498050108023-c5249f4df085",
        ),
        certification(
            "6",
            "Neural Networks and Deep Learning",
            "Coursera",
            "2023",
            "COURSERA_NN_2023",
            "photo-1555949963-aa79dcee981c",
        ),
    ]
}

fn artwork(id: &str, title: &str, description: &str, image: &str, category: &str, medium: &str, year: &str) -> Artwork {
    Artwork {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        image_url: format!("https://images.unsplash.com/{image}?w=800&q=80"),
        category: category.to_string(),
        medium: Some(medium.to_string()),
        year_created: Some(year.to_string()),
    }
}

pub fn artworks() -> Vec<Artwork> {
    vec![
        artwork(
            "1",
            "Neural Network Visualization",
            "Digital art representation of neural network connections and data flow.",
            "photo-1558618666-fcd25c85cd64",
            "Digital",
            "Digital Painting",
            "2024",
        ),
        artwork(
            "2",
            "AI Dreams",
            "Abstract interpretation of artificial intelligence consciousness.",
            "photo-1550745165-9bc0b252726f",
            "Digital",
            "3D Render",
            "2024",
        ),
        artwork(
            "3",
            "Data Landscape",
            "Futuristic landscape inspired by data visualization concepts.",
            "photo-1516110833967-0b5716ca1387",
            "Digital",
            "Digital Art",
            "2023",
        ),
        artwork(
            "4",
            "Quantum Entanglement",
            "Visual representation of quantum physics principles.",
            "photo-1635070041078-e363dbe005cb",
            "Abstract",
            "Digital Mixed Media",
            "2023",
        ),
        artwork(
            "5",
            "Machine Learning Flow",
            "Artistic visualization of machine learning algorithms at work.",
            "photo-1518709268805-4e9042af2176",
            "Tech Art",
            "Digital Illustration",
            "2024",
        ),
        artwork(
            "6",
            "Code Poetry",
            "Beautiful visualization of programming concepts as art.",
            "photo-1461749280684-dccba630e2f6",
            "Tech Art",
            "Digital Design",
            "2023",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_sets_have_expected_sizes() {
        assert_eq!(projects().len(), 3);
        assert_eq!(certifications().len(), 6);
        assert_eq!(artworks().len(), 6);
        assert_eq!(default_skills().len(), 12);
    }

    #[test]
    fn sample_ids_are_unique() {
        let ids: std::collections::HashSet<String> = artworks().into_iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn skill_category_lookup() {
        assert_eq!(skill_category("pytorch"), "AI/ML");
        assert_eq!(skill_category("Rust"), "Other");
    }
}
