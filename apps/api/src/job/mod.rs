//! Job posting parsing: labeled details plus requirement lines.

pub mod details;
pub mod handlers;
pub mod requirements;

use serde::Deserialize;
use tracing::debug;

use crate::models::job::JobDescription;

/// Values the caller already knows. Non-empty ones beat extracted values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobOverrides {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
}

pub fn parse_job_description(text: &str, overrides: JobOverrides) -> JobDescription {
    let details = details::extract_job_details(text);

    let job = JobDescription {
        company: prefer(overrides.company).unwrap_or(details.company),
        position: prefer(overrides.position).unwrap_or(details.position),
        requirements: requirements::extract_requirements(text),
        job_description: text.to_string(),
        location: prefer(overrides.location).or(details.location),
    };

    debug!(
        company = %job.company,
        position = %job.position,
        requirements = job.requirements.len(),
        "Parsed job description"
    );
    job
}

fn prefer(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTING: &str = "Job Title: Backend Engineer\n\
        Company: Acme Corp\n\
        Location: Berlin, Germany\n\
        \n\
        Requirements:\n\
        • Rust\n\
        • PostgreSQL\n";

    #[test]
    fn test_extracted_values() {
        let job = parse_job_description(POSTING, JobOverrides::default());
        assert_eq!(job.company, "Acme Corp");
        assert_eq!(job.position, "Backend Engineer");
        assert_eq!(job.location.as_deref(), Some("Berlin, Germany"));
        assert_eq!(job.requirements, vec!["Rust", "PostgreSQL"]);
        assert_eq!(job.job_description, POSTING);
    }

    #[test]
    fn test_overrides_win_when_non_empty() {
        let overrides = JobOverrides {
            company: Some("Globex".to_string()),
            position: Some("   ".to_string()),
            location: None,
        };
        let job = parse_job_description(POSTING, overrides);
        assert_eq!(job.company, "Globex");
        assert_eq!(job.position, "Backend Engineer");
        assert_eq!(job.location.as_deref(), Some("Berlin, Germany"));
    }
}
