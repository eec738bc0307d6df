use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A line that is only a header, up to three leading words allowed
    /// (`Minimum Qualifications:`). Prose mentioning requirements is not one.
    static ref REQUIREMENTS_HEADER: Regex = Regex::new(
        r"(?im)^[ \t]*(?:[#*•]+[ \t]*)?(?:[\w'’]+[ \t]+){0,3}(?:requirements|qualifications|what you['’]ll need)[ \t]*:?[ \t\r]*$"
    ).expect("REQUIREMENTS_HEADER regex is valid");

    /// `•`, `*`, `-` or `N.` list line. The number needs whitespace after its dot.
    static ref REQUIREMENT_BULLET: Regex = Regex::new(
        r"^[ \t]*(?:•|\*|-|\d+\.[ \t])[ \t]*(.*?)[ \t]*$"
    ).expect("REQUIREMENT_BULLET regex is valid");

    static ref REQUIREMENT_PHRASING: Regex = Regex::new(
        r"(?i)\b(?:must|should|needs?|require[sd]?|experience[ \t]+(?:with|in|using|developing)|knowledge[ \t]+of|familiarity[ \t]+with|proficiency[ \t]+in)\b"
    ).expect("REQUIREMENT_PHRASING regex is valid");
}

/// Requirement lines from a job posting.
///
/// Bulleted or numbered lines under a requirements header win. Without any,
/// sentences phrased as requirements are taken from the whole posting.
pub fn extract_requirements(text: &str) -> Vec<String> {
    let listed = REQUIREMENTS_HEADER
        .find_iter(text)
        .map(|header| bullet_lines(requirements_block(&text[header.end()..])))
        .find(|lines| !lines.is_empty());
    if let Some(lines) = listed {
        return lines;
    }

    sentences(text)
        .filter(|sentence| REQUIREMENT_PHRASING.is_match(sentence))
        .map(String::from)
        .collect()
}

/// Text after a header up to the first blank line, skipping blank lines
/// right after the header.
fn requirements_block(after_header: &str) -> &str {
    let mut offset = 0;
    let mut seen_text = false;

    for raw_line in after_header.split_inclusive('\n') {
        let blank = raw_line.trim().is_empty();
        if blank && seen_text {
            return &after_header[..offset];
        }
        seen_text |= !blank;
        offset += raw_line.len();
    }
    after_header
}

fn bullet_lines(block: &str) -> Vec<String> {
    block
        .lines()
        .filter_map(|line| REQUIREMENT_BULLET.captures(line))
        .map(|caps| caps[1].to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Sentences ending in `.`, `!` or `?` followed by whitespace, punctuation kept.
fn sentences(text: &str) -> impl Iterator<Item = &str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let at_break = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
        if at_break {
            let end = idx + c.len_utf8();
            parts.push(&text[start..end]);
            start = end;
        }
    }
    parts.push(&text[start..]);

    parts.into_iter().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_bulleted_requirements() {
        let text = "Requirements:\n• 3+ years React\n• TypeScript";
        assert_eq!(extract_requirements(text), vec!["3+ years React", "TypeScript"]);
    }

    #[test]
    fn test_section_stops_at_blank_line() {
        let text = "Qualifications\n\n- Rust\n* Tokio\n1. Postgres\n\nBenefits:\n• Equity";
        assert_eq!(extract_requirements(text), vec!["Rust", "Tokio", "Postgres"]);
    }

    #[test]
    fn test_decimal_number_is_not_a_bullet() {
        let text = "What you'll need:\n3.5 years somewhere\n- Go";
        assert_eq!(extract_requirements(text), vec!["Go"]);
    }

    #[test]
    fn test_prose_mention_is_not_a_header() {
        let text = "We hire against clear requirements.\n• Ping pong table\n\nRequirements:\n• Kubernetes";
        assert_eq!(extract_requirements(text), vec!["Kubernetes"]);
    }

    #[test]
    fn test_bullet_mentioning_requirements_is_not_a_header() {
        let text = "Responsibilities:\n\
            • Gather requirements from stakeholders\n\
            • Build features\n\
            \n\
            Qualifications:\n\
            • 5+ years Rust";
        assert_eq!(extract_requirements(text), vec!["5+ years Rust"]);
    }

    #[test]
    fn test_header_with_leading_words() {
        let text = "## Minimum Qualifications\n- Go\n\nPreferred Qualifications:\n- Rust";
        assert_eq!(extract_requirements(text), vec!["Go"]);
    }

    #[test]
    fn test_sentence_fallback_keeps_full_sentence() {
        let text = "Join our team! You must have 3+ years of React experience. We like dogs.";
        assert_eq!(
            extract_requirements(text),
            vec!["You must have 3+ years of React experience."]
        );
    }

    #[test]
    fn test_nothing_found() {
        assert!(extract_requirements("").is_empty());
        assert!(extract_requirements("We make great coffee.").is_empty());
    }

    #[test]
    fn test_posting_fixture() {
        let text = "Job Title: Senior Frontend Developer\n\
            Company: TechNova Solutions\n\
            \n\
            Responsibilities:\n\
            • Develop responsive web applications\n\
            \n\
            Requirements:\n\
            • 3+ years of experience with React.js\n\
            • Strong proficiency in TypeScript and JavaScript\n\
            \n\
            Nice to Have:\n\
            • Experience with Next.js\n";
        assert_eq!(
            extract_requirements(text),
            vec![
                "3+ years of experience with React.js",
                "Strong proficiency in TypeScript and JavaScript",
            ]
        );
    }

    fn arb_posting() -> impl Strategy<Value = String> {
        let line = prop_oneof![
            Just("Requirements:".to_string()),
            Just("Qualifications".to_string()),
            Just("• 3+ years React".to_string()),
            Just("- Gather requirements".to_string()),
            Just("1. Postgres".to_string()),
            Just("You must know SQL.".to_string()),
            Just(String::new()),
            "[A-Za-z0-9 •*:,.!?'-]{0,50}",
        ];
        prop::collection::vec(line, 0..20).prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        /// Every requirement is a non-empty slice of the posting.
        #[test]
        fn prop_requirements_come_from_the_posting(text in arb_posting()) {
            for requirement in extract_requirements(&text) {
                prop_assert!(!requirement.is_empty());
                prop_assert!(text.contains(&requirement), "{requirement:?} not in posting");
            }
        }

        #[test]
        fn prop_any_text_is_accepted(text in any::<String>()) {
            for requirement in extract_requirements(&text) {
                prop_assert!(!requirement.is_empty());
            }
        }

        #[test]
        fn prop_extraction_is_deterministic(text in arb_posting()) {
            prop_assert_eq!(extract_requirements(&text), extract_requirements(&text));
        }
    }
}
