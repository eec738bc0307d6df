use chrono::NaiveDate;

use crate::models::job::JobDescription;
use crate::models::resume::Resume;

const DEFAULT_BACKGROUND: &str = "software development";
const DEFAULT_PREVIOUS_COMPANY: &str = "my previous company";
const LOCATION_PLACEHOLDER: &str = "Location";
const DEFAULT_PROFILE: &str = "As a dedicated professional, I have consistently delivered \
    high-quality results while focusing on efficiency and collaboration.";
const DEFAULT_ACHIEVEMENTS: [&str; 3] = [
    "Successfully delivered projects on time and within budget",
    "Collaborated effectively with cross-functional teams",
    "Implemented best practices in development and testing",
];

/// Deterministic cover letter assembled from the parsed records.
///
/// The most recent role is the first experience entry. Missing pieces are
/// replaced with generic wording so the letter always reads end to end.
pub fn render_template(resume: &Resume, job: &JobDescription, date: NaiveDate) -> String {
    let recent = resume.latest_experience();
    let company = &job.company;
    let position = &job.position;

    let background = recent.map_or(DEFAULT_BACKGROUND, |exp| exp.position.as_str());
    let previous_company = recent.map_or(DEFAULT_PREVIOUS_COMPANY, |exp| exp.company.as_str());
    let location = job
        .location
        .as_deref()
        .filter(|loc| !loc.trim().is_empty())
        .unwrap_or(LOCATION_PLACEHOLDER);
    let profile = match resume.profile.trim() {
        "" => DEFAULT_PROFILE,
        profile => profile,
    };

    let achievements: Vec<&str> = match recent {
        Some(exp) if !exp.description.is_empty() => {
            exp.description.iter().map(String::as_str).collect()
        }
        _ => DEFAULT_ACHIEVEMENTS.to_vec(),
    };
    let achievements = achievements
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n");

    let letter = format!(
        "{date}\n\
        \n\
        Hiring Manager\n\
        {company}\n\
        {location}\n\
        \n\
        Dear Hiring Manager at {company},\n\
        \n\
        I am writing to express my strong interest in the {position} position at {company}. \
        With my background in {background}, I believe I would be a valuable addition to your team.\n\
        \n\
        {profile}\n\
        \n\
        During my time at {previous_company}, I have:\n\
        {achievements}\n\
        \n\
        I am particularly excited about the opportunity to join {company} because of your \
        reputation for innovation and commitment to excellence. I believe my skills and \
        experience align well with what you're looking for in a {position}.\n\
        \n\
        I would welcome the opportunity to discuss how my background, skills, and achievements \
        can benefit your team. Thank you for considering my application.\n\
        \n\
        Sincerely,\n\
        {name}\n\
        {email}\n\
        {phone}",
        date = date.format("%B %-d, %Y"),
        name = resume.name,
        email = resume.email,
        phone = resume.phone,
    );
    letter.trim().to_string()
}
