//! Scalar field extractors. Each one is total: no match yields the default.

use crate::models::resume::UNKNOWN_NAME;
use crate::resume::patterns::{
    CITY_STATE, EMAIL, LABELED_LOCATION, LABELED_NAME, LOCATION_KEYWORD, NAME_AT_START,
    PARAGRAPH_BREAK, PHONE, PROMINENT_NAME,
};
use crate::resume::section::{is_known_header, SectionKind};

/// How many leading lines the last-resort name search looks at.
const NAME_SEARCH_LINES: usize = 5;
/// How many leading paragraphs may stand in for a missing profile section.
const PROFILE_SEARCH_PARAGRAPHS: usize = 3;
/// A stand-in profile paragraph must be longer than this many characters.
const PROFILE_MIN_CHARS: usize = 100;

/// Name: a run of at least two capitalized words.
///
/// Tried in order: at the very start of the document, after a `Name:` label,
/// anywhere in the first few lines. All-caps and single-word names are not
/// recognised.
pub fn extract_name(text: &str) -> String {
    if let Some(caps) = NAME_AT_START.captures(text) {
        return caps[1].trim().to_string();
    }
    if let Some(caps) = LABELED_NAME.captures(text) {
        return caps[1].trim().to_string();
    }

    let head = text
        .lines()
        .take(NAME_SEARCH_LINES)
        .collect::<Vec<_>>()
        .join("\n");
    PROMINENT_NAME
        .captures(&head)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

/// First email-shaped substring.
pub fn extract_email(text: &str) -> String {
    EMAIL
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First phone-shaped substring. No validation beyond the shape.
pub fn extract_phone(text: &str) -> String {
    PHONE
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Location: a `Location:`/`Address:` label anywhere, else a `City, ST` or
/// place-keyword line in the contact block.
pub fn extract_location(text: &str) -> String {
    if let Some(caps) = LABELED_LOCATION.captures(text) {
        return caps[1].trim().to_string();
    }

    let contact = contact_block(text);
    if let Some(caps) = CITY_STATE.captures(contact) {
        return caps[1].trim().to_string();
    }
    contact
        .lines()
        .find(|line| LOCATION_KEYWORD.is_match(line))
        .map(|line| line.trim().to_string())
        .unwrap_or_default()
}

/// Profile section body, or the first long free-text paragraph near the top.
pub fn extract_profile(text: &str) -> String {
    if let Some(body) = SectionKind::Profile.locate(text) {
        let body = body.trim();
        if !body.is_empty() {
            return body.to_string();
        }
    }

    PARAGRAPH_BREAK
        .split(text)
        .take(PROFILE_SEARCH_PARAGRAPHS)
        .map(str::trim)
        .find(|para| {
            para.chars().count() > PROFILE_MIN_CHARS
                && !para.contains(':')
                && !is_upper_block(para)
        })
        .map(String::from)
        .unwrap_or_default()
}

/// Text before the first recognised section header, or all of it.
fn contact_block(text: &str) -> &str {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if is_known_header(line) {
            return &text[..offset];
        }
        offset += line.len();
    }
    text
}

/// Whether a paragraph is entirely uppercase letters and whitespace.
fn is_upper_block(para: &str) -> bool {
    para.chars()
        .all(|c| c.is_whitespace() || (c.is_alphabetic() && c.is_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_at_document_start_with_initial() {
        let text = "Jane Q. Public\n\nSoftware engineer with ten years of experience.";
        assert_eq!(extract_name(text), "Jane Q. Public");
    }

    #[test]
    fn test_name_with_inner_capital() {
        assert_eq!(extract_name("John McDonald\njohn@example.com"), "John McDonald");
        assert_eq!(extract_name("Ana Smith-Jones\n"), "Ana Smith-Jones");
    }

    #[test]
    fn test_name_from_label() {
        let text = "RESUME\nName: Arjun Mehta\nPhone: 555-123-4567";
        assert_eq!(extract_name(text), "Arjun Mehta");
    }

    #[test]
    fn test_name_from_first_lines() {
        let text = "CURRICULUM VITAE\n\nprepared for review by Maria Lopez\nmaria@example.com";
        assert_eq!(extract_name(text), "Maria Lopez");
    }

    #[test]
    fn test_all_caps_or_single_word_name_is_unknown() {
        assert_eq!(extract_name("JOHN SMITH\njohn@example.com"), "Unknown");
        assert_eq!(extract_name("Madonna\n"), "Unknown");
        assert_eq!(extract_name(""), "Unknown");
    }

    #[test]
    fn test_email_first_occurrence() {
        let text = "Email: jane@example.com\nAlt: jane.public@work.io";
        assert_eq!(extract_email(text), "jane@example.com");
        assert_eq!(extract_email("no address here"), "");
    }

    #[test]
    fn test_phone_formats() {
        assert_eq!(extract_phone("Call (555) 123-4567 today"), "(555) 123-4567");
        assert_eq!(extract_phone("Phone: +1 555.987.6543"), "+1 555.987.6543");
        assert_eq!(extract_phone("2019 - 2021"), "");
    }

    #[test]
    fn test_location_prefers_label() {
        let text = "Jane Doe\nLocation: Berlin, Germany\nAustin, TX";
        assert_eq!(extract_location(text), "Berlin, Germany");
    }

    #[test]
    fn test_location_city_state() {
        let text = "Jane Doe | jane@example.com | Austin, TX";
        assert_eq!(extract_location(text), "Austin, TX");
    }

    #[test]
    fn test_location_ignores_section_bodies() {
        let text = "Jane Doe\njane@example.com\n\nSKILLS\nPython, ML\n\nEXPERIENCE\nShipped the State Department portal";
        assert_eq!(extract_location(text), "");
    }

    #[test]
    fn test_location_label_found_below_headers() {
        let text = "Jane Doe\n\nCONTACT\nLocation: Lisbon, Portugal";
        assert_eq!(extract_location(text), "Lisbon, Portugal");
    }

    #[test]
    fn test_location_keyword_line_fallback() {
        let text = "Jane Doe\nCity of Pune, India\n";
        assert_eq!(extract_location(text), "City of Pune, India");
        assert_eq!(extract_location("nothing useful"), "");
    }

    #[test]
    fn test_profile_from_section() {
        let text = "Jane Doe\n\nSUMMARY\nBackend engineer focused on reliability.\n\nEXPERIENCE\n2020 - 2021";
        assert_eq!(
            extract_profile(text),
            "Backend engineer focused on reliability."
        );
    }

    #[test]
    fn test_profile_from_long_paragraph() {
        let para = "Backend engineer with eight years of experience building payment systems, \
                    distributed queues and the observability tooling that keeps them healthy";
        let text = format!("Jane Doe\njane@example.com\n\n{para}\n\nEDUCATION\nMIT");
        assert_eq!(extract_profile(&text), para);
    }

    #[test]
    fn test_profile_skips_short_or_labeled_paragraphs() {
        let text = "Jane Doe\n\nEmail: jane@example.com\n\nShort intro.";
        assert_eq!(extract_profile(text), "");
    }
}
