use serde::{Deserialize, Serialize};

pub const UNKNOWN_NAME: &str = "Unknown";
pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const UNKNOWN_POSITION: &str = "Unknown Position";
pub const UNNAMED_PROJECT: &str = "Unnamed Project";

/// Structured record produced by `resume::parse_resume`.
///
/// Every field is always present. Absent information is an empty string,
/// an empty list, or the documented placeholder for `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub profile: String,
    pub education: Vec<Education>,
    /// Source order, which for most résumés means most recent first.
    pub experience: Vec<Experience>,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub awards: Vec<Award>,
}

impl Default for Resume {
    fn default() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            profile: String::new(),
            education: Vec::new(),
            experience: Vec::new(),
            skills: Skills::default(),
            projects: Vec::new(),
            awards: Vec::new(),
        }
    }
}

impl Resume {
    /// The first experience entry, treated as the most recent role.
    pub fn latest_experience(&self) -> Option<&Experience> {
        self.experience.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: Option<String>,
    pub grade: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: Option<String>,
    pub technologies: Vec<String>,
    pub description: Vec<String>,
}

/// Skill buckets. A token lands in exactly one of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub other: Vec<String>,
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
            && self.frontend.is_empty()
            && self.backend.is_empty()
            && self.other.is_empty()
    }

    /// All skills in bucket order: languages, frontend, backend, other.
    pub fn flatten(&self) -> Vec<&str> {
        self.languages
            .iter()
            .chain(&self.frontend)
            .chain(&self.backend)
            .chain(&self.other)
            .map(String::as_str)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub duration: String,
    pub technologies: Vec<String>,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub date: Option<String>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resume_uses_placeholders() {
        let resume = Resume::default();
        assert_eq!(resume.name, "Unknown");
        assert!(resume.email.is_empty());
        assert!(resume.skills.is_empty());
        assert!(resume.latest_experience().is_none());
    }

    #[test]
    fn test_resume_serializes_with_stable_field_names() {
        let value = serde_json::to_value(Resume::default()).unwrap();
        for key in [
            "name",
            "email",
            "phone",
            "location",
            "profile",
            "education",
            "experience",
            "skills",
            "projects",
            "awards",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert!(value["skills"].get("languages").is_some());
        assert!(value["skills"].get("other").is_some());
    }

    #[test]
    fn test_skills_flatten_keeps_bucket_order() {
        let skills = Skills {
            languages: vec!["Rust".to_string()],
            frontend: vec!["React".to_string()],
            backend: vec!["PostgreSQL".to_string()],
            other: vec!["Git".to_string()],
        };
        assert_eq!(skills.flatten(), vec!["Rust", "React", "PostgreSQL", "Git"]);
    }
}
