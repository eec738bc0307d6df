use crate::models::resume::{Experience, UNKNOWN_COMPANY, UNKNOWN_POSITION};
use crate::resume::items::{
    bullet_text, date_boundary, is_bullet, split_items, split_list, trim_separators,
};
use crate::resume::patterns::{
    COMPANY_AFTER_SEPARATOR, COMPANY_AT, COMPANY_LABEL, DATE_RANGE, POSITION, TECHNOLOGIES_LINE,
    TRAILING_PLACE,
};
use crate::resume::section::SectionKind;

/// Words that end a `Name, Suffix` company rather than a place.
const COMPANY_SUFFIXES: &[&str] = &["Inc", "Llc", "Ltd", "Corp", "Co", "Gmbh", "Plc", "Limited"];

/// Work history in source order. Items need a duration, position or company.
pub fn extract_experience(text: &str) -> Vec<Experience> {
    let Some(body) = SectionKind::Experience.locate(text) else {
        return Vec::new();
    };

    split_items(body, date_boundary)
        .into_iter()
        .filter_map(parse_experience_item)
        .collect()
}

fn parse_experience_item(item: &str) -> Option<Experience> {
    let header_lines: Vec<&str> = item
        .lines()
        .filter(|line| !line.trim().is_empty() && !is_bullet(line))
        .filter(|line| !TECHNOLOGIES_LINE.is_match(line))
        .collect();

    let duration = DATE_RANGE.find(item).map(|m| m.as_str().trim().to_string());
    let position = find_position(&header_lines);
    let company = find_company(&header_lines, position.as_ref());

    if duration.is_none() && position.is_none() && company.is_none() {
        return None;
    }

    let technologies = item
        .lines()
        .find_map(|line| TECHNOLOGIES_LINE.captures(line))
        .map(|caps| split_list(&caps[1]))
        .unwrap_or_default();

    let description = item
        .lines()
        .filter(|line| !TECHNOLOGIES_LINE.is_match(line))
        .filter_map(bullet_text)
        .map(String::from)
        .collect();

    let location = find_location(&header_lines, position.as_ref());

    Some(Experience {
        company: company.unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
        position: position
            .map(|p| p.text)
            .unwrap_or_else(|| UNKNOWN_POSITION.to_string()),
        duration: duration.unwrap_or_default(),
        location,
        technologies,
        description,
    })
}

/// A matched job title and where it sits in the header lines.
struct PositionMatch {
    text: String,
    line: usize,
    start: usize,
    end: usize,
}

fn find_position(lines: &[&str]) -> Option<PositionMatch> {
    lines.iter().enumerate().find_map(|(idx, line)| {
        let caps = POSITION.captures(line)?;
        let m = caps.get(1)?;
        Some(PositionMatch {
            text: m.as_str().trim().to_string(),
            line: idx,
            start: m.start(),
            end: m.end(),
        })
    })
}

/// `at Acme`, else the name beside the title (`Engineer, Acme` or
/// `Acme | Engineer`), else a `Company:` label.
fn find_company(lines: &[&str], position: Option<&PositionMatch>) -> Option<String> {
    let explicit = lines
        .iter()
        .find_map(|line| COMPANY_AT.captures(line))
        .map(|caps| caps[1].to_string());

    let beside_title = || {
        let pos = position?;
        let line = lines[pos.line];
        COMPANY_AFTER_SEPARATOR
            .captures(&line[pos.end..])
            .map(|caps| caps[1].to_string())
            .or_else(|| {
                let raw = line[..pos.start].trim_end();
                let separated = raw.ends_with(['|', ',', '-', '–', '—', '@']);
                let before = trim_separators(raw);
                let starts_upper = before.chars().next().is_some_and(char::is_uppercase);
                (separated && starts_upper && !DATE_RANGE.is_match(before))
                    .then(|| before.to_string())
            })
    };

    let labeled = || {
        lines
            .iter()
            .find_map(|line| COMPANY_LABEL.captures(line))
            .map(|caps| caps[1].to_string())
    };

    explicit
        .or_else(beside_title)
        .or_else(labeled)
        .map(|company| trim_separators(company.trim_end_matches('.')).to_string())
        .filter(|company| !company.is_empty())
}

/// `City, ST` closing a header line. On the title line only the text after
/// the title is considered, so `Developer, Globex` is not read as a place.
fn find_location(lines: &[&str], position: Option<&PositionMatch>) -> Option<String> {
    lines.iter().enumerate().find_map(|(idx, line)| {
        let line = match position {
            Some(pos) if pos.line == idx => &line[pos.end..],
            _ => *line,
        };
        let caps = TRAILING_PLACE.captures(line)?;
        let place = caps[1].trim();
        let tail = place.rsplit(',').next().unwrap_or_default().trim();
        let is_company_suffix = COMPANY_SUFFIXES
            .iter()
            .any(|suffix| tail.eq_ignore_ascii_case(suffix));
        (!is_company_suffix).then(|| place.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        \n\
        EXPERIENCE\n\
        2021 - Present\n\
        Senior Software Engineer at Acme Corp, San Francisco, CA\n\
        • Led migration of billing services to Rust\n\
        • Cut p99 latency by 40%\n\
        Technologies: Rust, PostgreSQL, Kafka\n\
        Jun 2018 - Dec 2020\n\
        Frontend Developer, Globex\n\
        - Built the design system\n\
        \n\
        EDUCATION\n\
        MIT\n";

    #[test]
    fn test_two_date_prefixed_blocks_in_source_order() {
        let experience = extract_experience(RESUME);
        assert_eq!(experience.len(), 2);

        let latest = &experience[0];
        assert_eq!(latest.duration, "2021 - Present");
        assert_eq!(latest.position, "Senior Software Engineer");
        assert_eq!(latest.company, "Acme Corp");
        assert_eq!(latest.location.as_deref(), Some("San Francisco, CA"));
        assert_eq!(latest.technologies, vec!["Rust", "PostgreSQL", "Kafka"]);
        assert_eq!(
            latest.description,
            vec!["Led migration of billing services to Rust", "Cut p99 latency by 40%"]
        );

        let earlier = &experience[1];
        assert_eq!(earlier.duration, "Jun 2018 - Dec 2020");
        assert_eq!(earlier.position, "Frontend Developer");
        assert_eq!(earlier.company, "Globex");
        assert!(earlier.location.is_none());
        assert_eq!(earlier.description, vec!["Built the design system"]);
    }

    #[test]
    fn test_line_opening_with_a_number_does_not_split_entry() {
        let text = "EXPERIENCE\n\
            2021 - Present\n\
            Senior Engineer at Acme\n\
            1000+ users onboarded in Q1\n\
            • Shipped billing\n";
        let experience = extract_experience(text);
        assert_eq!(experience.len(), 1);
        assert_eq!(experience[0].company, "Acme");
        assert_eq!(experience[0].description, vec!["Shipped billing"]);
    }

    #[test]
    fn test_company_before_title() {
        let text = "EXPERIENCE\n2019 - 2020\nInitech | Data Analyst\n• Built reports";
        let experience = extract_experience(text);
        assert_eq!(experience[0].company, "Initech");
        assert_eq!(experience[0].position, "Data Analyst");
    }

    #[test]
    fn test_defaults_when_only_duration_matches() {
        let text = "Work Experience\n2015 - 2017\n• Answered support tickets";
        let experience = extract_experience(text);
        assert_eq!(experience.len(), 1);
        assert_eq!(experience[0].company, "Unknown Company");
        assert_eq!(experience[0].position, "Unknown Position");
        assert_eq!(experience[0].description, vec!["Answered support tickets"]);
    }

    #[test]
    fn test_item_without_signal_is_dropped() {
        let text = "EXPERIENCE\nvarious odd jobs\n";
        assert!(extract_experience(text).is_empty());
    }

    #[test]
    fn test_company_suffix_is_not_a_location() {
        let text = "EXPERIENCE\n2020 - 2022\nBackend Engineer at Hooli, Inc\n";
        let experience = extract_experience(text);
        assert_eq!(experience[0].company, "Hooli");
        assert!(experience[0].location.is_none());
    }
}
