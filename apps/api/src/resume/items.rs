//! Helpers for splitting a located section into item candidates and for
//! reading bullet and list lines inside an item.

use crate::resume::patterns::{ITEM_DATE_START, SINGLE_DATE};

/// What the splitter knows about the item being built when it reads a line.
#[derive(Debug, Clone, Copy)]
pub struct LineContext {
    pub prev_blank: bool,
    pub item_has_bullet: bool,
    pub item_has_date: bool,
}

/// Splits a section body into trimmed item candidates.
///
/// `is_boundary(line, ctx)` decides whether `line` opens a new item.
/// A boundary only splits once the current item holds some text.
pub fn split_items<F>(body: &str, is_boundary: F) -> Vec<&str>
where
    F: Fn(&str, &LineContext) -> bool,
{
    let mut items = Vec::new();
    let mut offset = 0;
    let mut item_start = 0;
    let mut item_has_text = false;
    let mut ctx = LineContext {
        prev_blank: true,
        item_has_bullet: false,
        item_has_date: false,
    };

    for raw_line in body.split_inclusive('\n') {
        let line_start = offset;
        offset += raw_line.len();
        let line = raw_line.trim_end_matches(['\n', '\r']);
        let blank = line.trim().is_empty();

        if !blank && item_has_text && is_boundary(line, &ctx) {
            items.push(body[item_start..line_start].trim());
            item_start = line_start;
            item_has_text = false;
            ctx.item_has_bullet = false;
            ctx.item_has_date = false;
        }
        item_has_text |= !blank;
        ctx.item_has_bullet |= is_bullet(line);
        ctx.item_has_date |= SINGLE_DATE.is_match(line);
        ctx.prev_blank = blank;
    }

    let last = body[item_start..].trim();
    if !last.is_empty() {
        items.push(last);
    }
    items
}

/// Experience and project boundary: a line opening with a date.
pub fn date_boundary(line: &str, _ctx: &LineContext) -> bool {
    ITEM_DATE_START.is_match(line)
}

/// Education and award boundary: a capitalized line after a blank line, or a
/// dated line after a blank line or once the current item already has a date.
///
/// An undated item keeps its own date line (`Stanford University` / `2016 - 2020`).
pub fn block_boundary(line: &str, ctx: &LineContext) -> bool {
    let starts_upper = line
        .trim_start()
        .chars()
        .next()
        .is_some_and(char::is_uppercase);
    let dated = ITEM_DATE_START.is_match(line) && (ctx.prev_blank || ctx.item_has_date);
    (ctx.prev_blank && starts_upper) || dated
}

/// Text of a `•` or `-` bullet line, marker stripped.
pub fn bullet_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let rest = trimmed
        .strip_prefix('•')
        .or_else(|| trimmed.strip_prefix('-'))?;
    let rest = rest.trim();
    (!rest.is_empty()).then_some(rest)
}

pub fn is_bullet(line: &str) -> bool {
    bullet_text(line).is_some()
}

/// Drops any leading list markers from a line.
pub fn strip_marker(line: &str) -> &str {
    line.trim()
        .trim_start_matches(['•', '-', '*', '·', '–'])
        .trim_start()
}

/// Splits an inline list such as `Rust, Go; Docker | Kafka`.
pub fn split_list(text: &str) -> Vec<String> {
    text.split([',', ';', '|'])
        .map(|part| strip_marker(part).trim_end_matches('.').trim())
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

/// Trims separators left behind after cutting dates out of a header line.
pub fn trim_separators(text: &str) -> &str {
    text.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '-' | '–' | '—' | '|' | ',' | ':' | '·')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_items_on_dates() {
        let body = "2021 - Present\nEngineer at Acme\n• Shipped\n2019 - 2021\nIntern at Beta";
        let items = split_items(body, date_boundary);
        assert_eq!(items.len(), 2);
        assert!(items[0].starts_with("2021"));
        assert!(items[1].ends_with("Intern at Beta"));
    }

    #[test]
    fn test_leading_boundary_does_not_create_empty_item() {
        let items = split_items("\n\n2021 - Present\nRole", date_boundary);
        assert_eq!(items, vec!["2021 - Present\nRole"]);
    }

    #[test]
    fn test_block_boundary_needs_blank_line_before_capital() {
        let body = "Stanford University\nB.S. Physics\n\nMIT\nM.S. Physics";
        let items = split_items(body, block_boundary);
        assert_eq!(items, vec!["Stanford University\nB.S. Physics", "MIT\nM.S. Physics"]);
    }

    #[test]
    fn test_block_keeps_date_line_of_undated_item() {
        let body = "Stanford University\n2016 - 2020\nB.S. Physics\n2012 - 2016\nHigh School";
        let items = split_items(body, block_boundary);
        assert_eq!(
            items,
            vec![
                "Stanford University\n2016 - 2020\nB.S. Physics",
                "2012 - 2016\nHigh School"
            ]
        );
    }

    #[test]
    fn test_bullet_text() {
        assert_eq!(bullet_text("  • Built a thing "), Some("Built a thing"));
        assert_eq!(bullet_text("- Fixed bugs"), Some("Fixed bugs"));
        assert_eq!(bullet_text("Plain line"), None);
        assert_eq!(bullet_text("•"), None);
    }

    #[test]
    fn test_split_list_strips_markers_and_periods() {
        assert_eq!(
            split_list("Rust, Node.js; • Docker | Kafka."),
            vec!["Rust", "Node.js", "Docker", "Kafka"]
        );
    }
}
