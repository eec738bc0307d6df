use crate::models::resume::Education;
use crate::resume::items::{block_boundary, split_items, strip_marker, trim_separators};
use crate::resume::patterns::{
    DATE_RANGE, DEGREE, FIELD_AFTER_IN, FIELD_IN_PARENS, GRADE, INSTITUTION_KEYWORD, SINGLE_DATE,
};
use crate::resume::section::SectionKind;

/// Education entries in source order. Entries without an institution are dropped.
pub fn extract_education(text: &str) -> Vec<Education> {
    let Some(body) = SectionKind::Education.locate(text) else {
        return Vec::new();
    };

    split_items(body, block_boundary)
        .into_iter()
        .filter_map(parse_education_item)
        .collect()
}

fn parse_education_item(item: &str) -> Option<Education> {
    let institution = find_institution(item)?;

    let degree = DEGREE
        .find(item)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    let grade = GRADE.captures(item).map(|caps| caps[1].trim().to_string());

    let year = DATE_RANGE
        .find(item)
        .or_else(|| SINGLE_DATE.find(item))
        .map(|m| m.as_str().to_string());

    Some(Education {
        institution,
        degree,
        field: find_field(item),
        grade,
        year,
    })
}

/// The line naming a school, or else the first line, with dates cut out.
fn find_institution(item: &str) -> Option<String> {
    let lines: Vec<&str> = item.lines().filter(|l| !l.trim().is_empty()).collect();
    let line = lines
        .iter()
        .find(|line| INSTITUTION_KEYWORD.is_match(line))
        .or_else(|| lines.first())?;

    let without_dates = DATE_RANGE.replace_all(strip_marker(line), "");
    let without_dates = SINGLE_DATE.replace_all(&without_dates, "");
    let without_grade = match GRADE.find(&without_dates) {
        Some(m) => without_dates[..m.start()].to_string(),
        None => without_dates.to_string(),
    };
    let institution = trim_separators(&without_grade).to_string();
    (!institution.is_empty()).then_some(institution)
}

/// Parenthesised field of study, else `in <Capitalized Words>`.
fn find_field(item: &str) -> Option<String> {
    let parenthesised = FIELD_IN_PARENS
        .captures_iter(item)
        .map(|caps| caps[1].trim().to_string())
        .find(|inner| !inner.is_empty() && !inner.chars().any(|c| c.is_ascii_digit()));
    if parenthesised.is_some() {
        return parenthesised;
    }

    FIELD_AFTER_IN.captures(item).and_then(|caps| {
        let field = caps[1]
            .trim()
            .trim_end_matches(" and")
            .trim_end_matches(" of")
            .trim()
            .to_string();
        (!field.is_empty()).then_some(field)
    })
}
