//! Cover letter writers, pluggable behind one trait.
//!
//! `LlmCoverLetterWriter` asks Claude for a tailored letter.
//! `TemplateCoverLetterWriter` fills the deterministic template and never fails.
//!
//! `AppState` holds an `Arc<dyn CoverLetterWriter>`, chosen at startup from config.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::letter::prompts::{COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM};
use crate::letter::template::render_template;
use crate::llm_client::prompts::GROUNDING_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::models::job::JobDescription;
use crate::models::resume::Resume;

/// Raw posting text beyond this many characters is cut from the prompt.
const MAX_JOB_DESCRIPTION_CHARS: usize = 6000;

/// Which writer produced a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterSource {
    Llm,
    Template,
}

#[async_trait]
pub trait CoverLetterWriter: Send + Sync {
    fn source(&self) -> LetterSource;

    async fn write(&self, resume: &Resume, job: &JobDescription) -> Result<String, AppError>;
}

pub struct LlmCoverLetterWriter {
    llm: LlmClient,
}

impl LlmCoverLetterWriter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl CoverLetterWriter for LlmCoverLetterWriter {
    fn source(&self) -> LetterSource {
        LetterSource::Llm
    }

    async fn write(&self, resume: &Resume, job: &JobDescription) -> Result<String, AppError> {
        let prompt = build_prompt(resume, job);
        let letter = self.llm.call_text(&prompt, COVER_LETTER_SYSTEM).await?;
        Ok(letter)
    }
}

pub struct TemplateCoverLetterWriter;

#[async_trait]
impl CoverLetterWriter for TemplateCoverLetterWriter {
    fn source(&self) -> LetterSource {
        LetterSource::Template
    }

    async fn write(&self, resume: &Resume, job: &JobDescription) -> Result<String, AppError> {
        let today = chrono::Local::now().date_naive();
        Ok(render_template(resume, job, today))
    }
}

fn build_prompt(resume: &Resume, job: &JobDescription) -> String {
    let requirements = if job.requirements.is_empty() {
        "(none listed)".to_string()
    } else {
        job.requirements
            .iter()
            .map(|r| format!("- {r}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let job_description: String = job
        .job_description
        .chars()
        .take(MAX_JOB_DESCRIPTION_CHARS)
        .collect();

    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{candidate}", &describe_candidate(resume))
        .replace("{company}", &job.company)
        .replace("{position}", &job.position)
        .replace("{requirements}", &requirements)
        .replace("{job_description}", &job_description)
}

/// Plain-text summary of the résumé fields a letter can draw on.
fn describe_candidate(resume: &Resume) -> String {
    let mut lines = vec![format!("Name: {}", resume.name)];

    if !resume.profile.is_empty() {
        lines.push(format!("Profile: {}", resume.profile));
    }
    if !resume.skills.is_empty() {
        lines.push(format!("Skills: {}", resume.skills.flatten().join(", ")));
    }

    if !resume.experience.is_empty() {
        lines.push("Experience:".to_string());
        for exp in &resume.experience {
            lines.push(format!("- {} at {} ({})", exp.position, exp.company, exp.duration));
            lines.extend(exp.description.iter().map(|d| format!("  * {d}")));
        }
    }

    if !resume.projects.is_empty() {
        lines.push("Projects:".to_string());
        for project in &resume.projects {
            if project.technologies.is_empty() {
                lines.push(format!("- {}", project.title));
            } else {
                lines.push(format!(
                    "- {} ({})",
                    project.title,
                    project.technologies.join(", ")
                ));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, Skills};

    #[test]
    fn test_prompt_carries_resume_and_job() {
        let resume = Resume {
            name: "Jane Doe".to_string(),
            skills: Skills {
                languages: vec!["Rust".to_string()],
                ..Skills::default()
            },
            experience: vec![Experience {
                company: "Acme Corp".to_string(),
                position: "Backend Engineer".to_string(),
                duration: "2021 - Present".to_string(),
                location: None,
                technologies: vec![],
                description: vec!["Cut p99 latency by 40%".to_string()],
            }],
            ..Resume::default()
        };
        let job = JobDescription {
            company: "Globex".to_string(),
            position: "Staff Engineer".to_string(),
            requirements: vec!["Rust".to_string()],
            job_description: "Globex is hiring.".to_string(),
            location: None,
        };

        let prompt = build_prompt(&resume, &job);
        assert!(prompt.contains("Staff Engineer role at Globex"));
        assert!(prompt.contains("Name: Jane Doe"));
        assert!(prompt.contains("Skills: Rust"));
        assert!(prompt.contains("- Backend Engineer at Acme Corp (2021 - Present)"));
        assert!(prompt.contains("  * Cut p99 latency by 40%"));
        assert!(prompt.contains("REQUIREMENTS:\n- Rust"));
        assert!(prompt.contains("Globex is hiring."));
        assert!(!prompt.contains("{candidate}"));
    }

    #[tokio::test]
    async fn test_template_writer_never_fails() {
        let letter = TemplateCoverLetterWriter
            .write(&Resume::default(), &JobDescription::default())
            .await
            .unwrap();
        assert!(letter.contains("Dear Hiring Manager at ,"));
        assert_eq!(TemplateCoverLetterWriter.source(), LetterSource::Template);
    }
}
