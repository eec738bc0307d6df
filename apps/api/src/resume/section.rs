//! Section locator: the single boundary rule shared by every résumé extractor.
//!
//! A section starts at a header line naming one of its keywords and runs until
//! the next line that looks like a section header, or the end of the text.

use crate::resume::skills::is_skill_label;

/// The résumé sections the parser knows how to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Profile,
    Education,
    Experience,
    Skills,
    Projects,
    Awards,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Profile,
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Awards,
    ];

    /// Header keywords for this section, compared case-insensitively.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            SectionKind::Profile => &[
                "profile",
                "professional profile",
                "summary",
                "professional summary",
                "career summary",
                "about",
                "about me",
                "objective",
                "career objective",
            ],
            SectionKind::Education => &[
                "education",
                "academic background",
                "academics",
                "educational qualifications",
            ],
            SectionKind::Experience => &[
                "professional experience",
                "work experience",
                "experience",
                "employment history",
                "work history",
                "employment",
            ],
            SectionKind::Skills => &[
                "technical skills",
                "skills",
                "core competencies",
                "key skills",
                "skills summary",
            ],
            SectionKind::Projects => &[
                "projects",
                "personal projects",
                "academic projects",
                "key projects",
            ],
            SectionKind::Awards => &[
                "awards",
                "achievements",
                "honors",
                "honours",
                "awards and achievements",
                "awards & achievements",
                "honors and awards",
                "honors & awards",
                "accomplishments",
            ],
        }
    }

    pub fn locate(self, text: &str) -> Option<&str> {
        locate_section(text, self.headers())
    }
}

/// Sections the parser does not extract but which still close the preceding one.
const OTHER_HEADERS: &[&str] = &[
    "certifications",
    "certificates",
    "publications",
    "interests",
    "hobbies",
    "references",
    "volunteer experience",
    "volunteering",
    "activities",
    "extracurricular activities",
    "leadership",
    "courses",
    "coursework",
    "relevant coursework",
    "contact",
    "contact information",
];

/// Minimum letter count for an all-caps line to read as a header.
const MIN_CAPS_HEADER_LETTERS: usize = 4;

/// Returns the body of the first section introduced by one of `headers`.
///
/// The body starts right after the header (after its colon when the header
/// carries inline content) and stops before the next header-looking line.
pub fn locate_section<'a>(text: &'a str, headers: &[&str]) -> Option<&'a str> {
    let mut offset = 0;
    let mut body_start = None;
    let mut prev_blank = true;

    for raw_line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += raw_line.len();
        let line = raw_line.trim_end_matches(['\n', '\r']);

        match body_start {
            None => {
                if let Some(consumed) = match_header(line, headers) {
                    body_start = Some(line_start + consumed);
                }
            }
            Some(start) => {
                if is_section_header(line, prev_blank) {
                    return Some(&text[start..line_start]);
                }
            }
        }
        prev_blank = line.trim().is_empty();
    }

    body_start.map(|start| &text[start..])
}

/// Whether `line` opens a new section.
pub fn is_section_header(line: &str, prev_blank: bool) -> bool {
    let trimmed = line.trim();
    let core = trimmed.trim_end_matches(':').trim_end();
    if core.is_empty() {
        return false;
    }

    if is_known_header(core) {
        return true;
    }
    // `LANGUAGES:` under Skills is a sub-label.
    if is_skill_label(core) {
        return false;
    }

    is_all_caps(core) && (prev_blank || trimmed.ends_with(':'))
}

/// Whether `line`, minus a trailing colon, is one of the recognised header words.
pub fn is_known_header(line: &str) -> bool {
    let core = line.trim().trim_end_matches(':').trim_end();
    SectionKind::ALL
        .iter()
        .flat_map(|kind| kind.headers().iter())
        .chain(OTHER_HEADERS.iter())
        .any(|header| core.eq_ignore_ascii_case(header))
}

/// Byte length of the header prefix when `line` is a header for one of `headers`.
fn match_header(line: &str, headers: &[&str]) -> Option<usize> {
    let indent = line.len() - line.trim_start().len();
    let rest = &line[indent..];

    headers.iter().find_map(|header| {
        let candidate = rest.get(..header.len())?;
        if !candidate.eq_ignore_ascii_case(header) {
            return None;
        }
        let tail = &rest[header.len()..];
        let tail_trimmed = tail.trim_start();
        if tail_trimmed.is_empty() {
            return Some(line.len());
        }
        let colon = tail_trimmed.strip_prefix(':')?;
        let inline_start = line.len() - colon.trim_start().len();
        Some(inline_start)
    })
}

fn is_all_caps(text: &str) -> bool {
    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    letters >= MIN_CAPS_HEADER_LETTERS
        && !text.chars().any(|c| c.is_lowercase() || c.is_ascii_digit())
}
