use crate::models::resume::{Project, UNNAMED_PROJECT};
use crate::resume::items::{
    bullet_text, date_boundary, is_bullet, split_items, split_list, strip_marker,
    trim_separators, LineContext,
};
use crate::resume::patterns::{
    DATE_RANGE, EMPTY_BRACKETS, SINGLE_DATE, TECHNOLOGIES_LINE, TITLED_LINE,
};
use crate::resume::section::SectionKind;

/// Projects in source order. Items need a title or a duration.
pub fn extract_projects(text: &str) -> Vec<Project> {
    let Some(body) = SectionKind::Projects.locate(text) else {
        return Vec::new();
    };

    split_items(body, project_boundary)
        .into_iter()
        .filter_map(parse_project_item)
        .collect()
}

/// A dated line, or a `Title - subtitle` line once the current project has bullets.
fn project_boundary(line: &str, ctx: &LineContext) -> bool {
    date_boundary(line, ctx)
        || (ctx.item_has_bullet && !is_bullet(line) && TITLED_LINE.is_match(line))
}

fn parse_project_item(item: &str) -> Option<Project> {
    let duration = DATE_RANGE.find(item).map(|m| m.as_str().trim().to_string());

    let title = item
        .lines()
        .filter(|line| !is_bullet(line) && !TECHNOLOGIES_LINE.is_match(line))
        .map(clean_title)
        .find(|title| !title.is_empty());

    if title.is_none() && duration.is_none() {
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

    Some(Project {
        title: title.unwrap_or_else(|| UNNAMED_PROJECT.to_string()),
        duration: duration.unwrap_or_default(),
        technologies,
        description,
    })
}

/// Header line minus dates, empty brackets and any spaced subtitle.
fn clean_title(line: &str) -> String {
    let text = DATE_RANGE.replace_all(strip_marker(line), "");
    let text = SINGLE_DATE.replace_all(&text, "");
    let text = EMPTY_BRACKETS.replace_all(&text, "");

    let title = [" | ", " - ", " – ", " — "]
        .iter()
        .filter_map(|sep| text.find(sep))
        .min()
        .map_or(&text[..], |idx| &text[..idx]);
    trim_separators(title).to_string()
}
