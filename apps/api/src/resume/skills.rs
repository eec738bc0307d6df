//! Skills classification.
//!
//! Labeled sections (`Languages: Python, Go`) are bucketed by label. Anything
//! else is split into tokens and each token classified by keyword, in bucket
//! order: languages, frontend, backend, other.

use crate::models::resume::Skills;
use crate::resume::items::{split_list, strip_marker};
use crate::resume::patterns::{SKILL_LABEL, SKILL_SEPARATOR};
use crate::resume::section::SectionKind;

/// Longer tokens are prose, not skills.
const MAX_SKILL_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Languages,
    Frontend,
    Backend,
    Other,
}

/// How a keyword is tested against a lowercased token.
enum Keyword {
    /// Anywhere in the token.
    Contains(&'static str),
    /// As a whole word, so `go` does not match `django`.
    Word(&'static str),
}

impl Keyword {
    fn matches(&self, token: &str) -> bool {
        match self {
            Keyword::Contains(needle) => token.contains(needle),
            Keyword::Word(needle) => token.match_indices(needle).any(|(idx, _)| {
                let before = token[..idx].chars().next_back();
                let after = token[idx + needle.len()..].chars().next();
                !before.is_some_and(char::is_alphanumeric)
                    && !after.is_some_and(char::is_alphanumeric)
            }),
        }
    }
}

/// Checked in order; the first bucket with a matching keyword wins.
const CLASSIFIERS: &[(Bucket, &[Keyword])] = &[
    (
        Bucket::Languages,
        &[
            Keyword::Contains("java"),
            Keyword::Contains("python"),
            Keyword::Contains("c++"),
            Keyword::Contains("c#"),
            Keyword::Contains("ruby"),
            Keyword::Contains("swift"),
            Keyword::Contains("kotlin"),
            Keyword::Contains("rust"),
            Keyword::Contains("php"),
            Keyword::Contains("scala"),
            Keyword::Contains("perl"),
            Keyword::Contains("haskell"),
            Keyword::Contains("golang"),
            Keyword::Contains("elixir"),
            Keyword::Word("go"),
            Keyword::Word("c"),
            Keyword::Word("r"),
        ],
    ),
    (
        Bucket::Frontend,
        &[
            Keyword::Contains("html"),
            Keyword::Contains("css"),
            Keyword::Contains("react"),
            Keyword::Contains("angular"),
            Keyword::Contains("vue"),
            Keyword::Contains("svelte"),
            Keyword::Contains("typescript"),
            Keyword::Contains("jquery"),
            Keyword::Contains("redux"),
            Keyword::Contains("next.js"),
            Keyword::Contains("sass"),
            Keyword::Contains("tailwind"),
            Keyword::Contains("bootstrap"),
            Keyword::Contains("frontend"),
            Keyword::Word("ui"),
            Keyword::Word("ux"),
            Keyword::Word("dom"),
            Keyword::Word("less"),
        ],
    ),
    (
        Bucket::Backend,
        &[
            Keyword::Contains("node"),
            Keyword::Contains("express"),
            Keyword::Contains("django"),
            Keyword::Contains("flask"),
            Keyword::Contains("fastapi"),
            Keyword::Contains("spring"),
            Keyword::Contains("rails"),
            Keyword::Contains("graphql"),
            Keyword::Contains("sql"),
            Keyword::Contains("postgres"),
            Keyword::Contains("mongo"),
            Keyword::Contains("redis"),
            Keyword::Contains("database"),
            Keyword::Contains("server"),
            Keyword::Contains("backend"),
            Keyword::Word("rest"),
            Keyword::Word("api"),
            Keyword::Word("apis"),
        ],
    ),
];

/// Label synonyms, compared case-insensitively after trimming.
const LABELS: &[(Bucket, &[&str])] = &[
    (
        Bucket::Languages,
        &[
            "languages",
            "language",
            "programming languages",
            "programming",
            "coding languages",
        ],
    ),
    (
        Bucket::Frontend,
        &[
            "frontend",
            "front-end",
            "front end",
            "frontend technologies",
            "web",
            "web technologies",
            "ui/ux",
        ],
    ),
    (
        Bucket::Backend,
        &[
            "backend",
            "back-end",
            "back end",
            "backend technologies",
            "server-side",
            "server side",
            "databases",
            "database",
        ],
    ),
    (
        Bucket::Other,
        &[
            "other",
            "others",
            "tools",
            "tools & technologies",
            "libraries",
            "frameworks",
            "frameworks & libraries",
            "libraries/frameworks",
            "devops",
            "cloud",
            "misc",
        ],
    ),
];

pub fn extract_skills(text: &str) -> Skills {
    let Some(body) = SectionKind::Skills.locate(text) else {
        return Skills::default();
    };
    labeled_skills(body).unwrap_or_else(|| flat_skills(body))
}

/// Buckets by label. `None` when no line carries a recognised label.
///
/// Unknown labels and unlabeled lines go to `other`.
fn labeled_skills(body: &str) -> Option<Skills> {
    let mut skills = Skills::default();
    let mut found_known = false;
    let mut current: Option<Bucket> = None;

    for line in body.lines() {
        if line.trim().is_empty() {
            current = None;
            continue;
        }

        if let Some(caps) = SKILL_LABEL.captures(line) {
            let label = label_bucket(&caps[1]);
            found_known |= label.is_some();
            let bucket = label.unwrap_or(Bucket::Other);
            bucket_mut(&mut skills, bucket).extend(split_list(&caps[2]));
            current = Some(bucket);
            continue;
        }

        let bucket = current.unwrap_or(Bucket::Other);
        bucket_mut(&mut skills, bucket).extend(split_list(line));
    }

    found_known.then_some(skills)
}

fn flat_skills(body: &str) -> Skills {
    let mut skills = Skills::default();

    for line in body.lines() {
        let values = match SKILL_LABEL.captures(line) {
            Some(caps) => caps.get(2).map_or("", |m| m.as_str()),
            None => line,
        };

        for token in SKILL_SEPARATOR.split(values) {
            let token = strip_marker(token).trim_end_matches('.').trim();
            if token.is_empty() || token.chars().count() > MAX_SKILL_CHARS {
                continue;
            }
            bucket_mut(&mut skills, classify(token)).push(token.to_string());
        }
    }

    skills
}

fn classify(token: &str) -> Bucket {
    let lower = token.to_lowercase();
    CLASSIFIERS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| keyword.matches(&lower)))
        .map_or(Bucket::Other, |(bucket, _)| *bucket)
}

/// Whether `label` names a skill group (`Languages`, `Databases`, ...).
pub fn is_skill_label(label: &str) -> bool {
    label_bucket(label).is_some()
}

fn label_bucket(label: &str) -> Option<Bucket> {
    let label = label.trim();
    LABELS
        .iter()
        .find(|(_, names)| names.iter().any(|name| label.eq_ignore_ascii_case(name)))
        .map(|(bucket, _)| *bucket)
}

fn bucket_mut(skills: &mut Skills, bucket: Bucket) -> &mut Vec<String> {
    match bucket {
        Bucket::Languages => &mut skills.languages,
        Bucket::Frontend => &mut skills.frontend,
        Bucket::Backend => &mut skills.backend,
        Bucket::Other => &mut skills.other,
    }
}
