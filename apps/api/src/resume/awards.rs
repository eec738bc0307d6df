use crate::models::resume::Award;
use crate::resume::items::{block_boundary, split_items, strip_marker, trim_separators};
use crate::resume::patterns::{EMPTY_BRACKETS, SINGLE_DATE};
use crate::resume::section::SectionKind;

/// Awards in source order: the first line is the title, the rest the description.
pub fn extract_awards(text: &str) -> Vec<Award> {
    let Some(body) = SectionKind::Awards.locate(text) else {
        return Vec::new();
    };

    split_items(body, block_boundary)
        .into_iter()
        .filter_map(parse_award_item)
        .collect()
}

fn parse_award_item(item: &str) -> Option<Award> {
    let date = SINGLE_DATE.find(item).map(|m| m.as_str().to_string());
    let remaining = match &date {
        Some(date) => item.replacen(date.as_str(), "", 1),
        None => item.to_string(),
    };
    let remaining = EMPTY_BRACKETS.replace_all(&remaining, "");

    let mut lines = remaining
        .lines()
        .map(|line| trim_separators(strip_marker(line)))
        .filter(|line| !line.is_empty());

    let title = lines.next()?.to_string();
    let description = lines.collect::<Vec<_>>().join("\n");

    Some(Award {
        title,
        date,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_date_and_description() {
        let text = "AWARDS\n\
            Best Paper Award (2021)\n\
            IEEE Conference on Systems\n\
            \n\
            Dean's List, May 2019\n";
        let awards = extract_awards(text);
        assert_eq!(awards.len(), 2);

        assert_eq!(awards[0].title, "Best Paper Award");
        assert_eq!(awards[0].date.as_deref(), Some("2021"));
        assert_eq!(awards[0].description, "IEEE Conference on Systems");

        assert_eq!(awards[1].title, "Dean's List");
        assert_eq!(awards[1].date.as_deref(), Some("May 2019"));
        assert_eq!(awards[1].description, "");
    }

    #[test]
    fn test_undated_award() {
        let awards = extract_awards("Achievements\nEagle Scout\n");
        assert_eq!(awards.len(), 1);
        assert_eq!(awards[0].title, "Eagle Scout");
        assert!(awards[0].date.is_none());
    }

    #[test]
    fn test_date_only_item_is_dropped() {
        assert!(extract_awards("HONORS\n2020\n").is_empty());
    }
}
