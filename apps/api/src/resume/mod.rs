//! Heuristic résumé parser.
//!
//! Every extractor is a pure, total function over the same text: an absent
//! field yields its default, never an error. `parse_resume` runs them all.

pub mod awards;
pub mod education;
pub mod experience;
pub mod fields;
pub mod handlers;
pub mod items;
pub mod patterns;
pub mod pdf;
pub mod projects;
pub mod section;
pub mod skills;

use tracing::debug;

use crate::models::resume::Resume;

pub fn parse_resume(text: &str) -> Resume {
    let resume = Resume {
        name: fields::extract_name(text),
        email: fields::extract_email(text),
        phone: fields::extract_phone(text),
        location: fields::extract_location(text),
        profile: fields::extract_profile(text),
        education: education::extract_education(text),
        experience: experience::extract_experience(text),
        skills: skills::extract_skills(text),
        projects: projects::extract_projects(text),
        awards: awards::extract_awards(text),
    };

    debug!(
        name = %resume.name,
        education = resume.education.len(),
        experience = resume.experience.len(),
        skills = resume.skills.flatten().len(),
        projects = resume.projects.len(),
        awards = resume.awards.len(),
        "Parsed résumé"
    );

    resume
}
