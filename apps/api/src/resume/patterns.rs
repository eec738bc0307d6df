// Compiled regex patterns shared by the résumé extractors.
// Everything here is compiled once on first use.

use lazy_static::lazy_static;
use regex::Regex;

/// Month names and their common abbreviations.
const MONTH: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)";

/// A single capitalized name word. Inner capitals (`McDonald`) and hyphenated
/// or apostrophe joins (`Smith-Jones`) are allowed; the word must end cleanly.
const NAME_WORD: &str = r"\p{Lu}\p{Ll}+(?:\p{Lu}\p{Ll}+)?(?:[-']\p{Lu}\p{Ll}+)?\b";

lazy_static! {
    // Contact details
    pub static ref NAME_AT_START: Regex = Regex::new(&format!(
        r"\A\s*({NAME_WORD}(?:[ \t]+(?:{NAME_WORD}|[A-Z]\.))+)"
    ))
    .expect("NAME_AT_START regex is valid");

    pub static ref LABELED_NAME: Regex = Regex::new(&format!(
        r"(?:Name|NAME)[ \t]*:[ \t]*({NAME_WORD}(?:[ \t]+(?:{NAME_WORD}|[A-Z]\.))+)"
    ))
    .expect("LABELED_NAME regex is valid");

    pub static ref PROMINENT_NAME: Regex = Regex::new(&format!(
        r"({NAME_WORD}(?:[ \t]+(?:{NAME_WORD}|[A-Z]\.))+)"
    ))
    .expect("PROMINENT_NAME regex is valid");

    pub static ref EMAIL: Regex = Regex::new(
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"
    ).expect("EMAIL regex is valid");

    pub static ref PHONE: Regex = Regex::new(
        r"(?:\+\d{1,3}[ .-]?)?(?:\(\d{3}\)|\d{3})[ .-]?\d{3}[ .-]?\d{4}\b"
    ).expect("PHONE regex is valid");

    // Locations
    pub static ref LABELED_LOCATION: Regex = Regex::new(
        r"(?im)^[ \t]*(?:Location|Address)[ \t]*:[ \t]*(\S[^\n]*)$"
    ).expect("LABELED_LOCATION regex is valid");

    pub static ref CITY_STATE: Regex = Regex::new(
        r"\b([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*,[ \t]*[A-Z]{2})\b"
    ).expect("CITY_STATE regex is valid");

    pub static ref LOCATION_KEYWORD: Regex = Regex::new(
        r"\b(?:City|State|Country|Location|Address)\b"
    ).expect("LOCATION_KEYWORD regex is valid");

    /// `City, ST` or `City, Country` closing a line.
    pub static ref TRAILING_PLACE: Regex = Regex::new(
        r"(?m)([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*,[ \t]*(?:[A-Z]{2}|[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*))[ \t]*$"
    ).expect("TRAILING_PLACE regex is valid");

    pub static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n")
        .expect("PARAGRAPH_BREAK regex is valid");

    // Dates
    /// A line opening with a date: `MM/YYYY`, `Month YYYY`, or a bare year
    /// standing alone or followed by a range or separator.
    pub static ref ITEM_DATE_START: Regex = Regex::new(&format!(
        r"(?i)^\s*(?:\d{{1,2}}/(?:19|20)\d{{2}}\b|{MONTH}\.?[ \t,]+(?:19|20)\d{{2}}\b|(?:19|20)\d{{2}}\b(?:[ \t]*(?:-|–|—|to\b|,|\||:)|[ \t]*$))"
    ))
    .expect("ITEM_DATE_START regex is valid");

    pub static ref DATE_RANGE: Regex = Regex::new(&format!(
        r"(?i)\b(?:{MONTH}\.?\s+\d{{4}}|\d{{1,2}}/\d{{4}}|\d{{4}})\s*(?:-|–|—|to)\s*(?:{MONTH}\.?\s+\d{{4}}|\d{{1,2}}/\d{{4}}|\d{{4}}|Present|Current|Now)\b"
    ))
    .expect("DATE_RANGE regex is valid");

    pub static ref SINGLE_DATE: Regex = Regex::new(&format!(
        r"(?i)\b(?:\d{{1,2}}/\d{{4}}|{MONTH}\.?\s+\d{{4}}|(?:19|20)\d{{2}})\b"
    ))
    .expect("SINGLE_DATE regex is valid");

    pub static ref EMPTY_BRACKETS: Regex = Regex::new(r"\(\s*\)|\[\s*\]")
        .expect("EMPTY_BRACKETS regex is valid");

    // Education
    pub static ref INSTITUTION_KEYWORD: Regex = Regex::new(
        r"(?i)\b(?:University|College|Institute|School|Academy|Polytechnic|Conservatory)\b"
    ).expect("INSTITUTION_KEYWORD regex is valid");

    pub static ref DEGREE: Regex = Regex::new(
        r"(?x)
        \b(?:
            [BM]\.?\s?Tech\b
          | [BM]\.Sc\.?
          | [BM]Sc\b
          | [BM]\.[SAE]\.?
          | (?:BS|MS|BA|MA|BE|BBA|MBA|BCA|MCA|MPhil)\b
          | Ph\.?\s?D\.?
          | (?i:bachelor(?:'s)?|master(?:'s)?|associate(?:'s)?|doctorate|diploma)(?:\s+of\s+[A-Z][a-z]+)?
          | Class\s+(?:XII|X|12|10)\b
        )"
    ).expect("DEGREE regex is valid");

    pub static ref FIELD_IN_PARENS: Regex = Regex::new(r"\(([^)\n]+)\)")
        .expect("FIELD_IN_PARENS regex is valid");

    pub static ref FIELD_AFTER_IN: Regex = Regex::new(
        r"\bin[ \t]+([A-Z][A-Za-z&]*(?:[ \t]+(?:and|of|[A-Z&][A-Za-z&]*))*)"
    ).expect("FIELD_AFTER_IN regex is valid");

    pub static ref GRADE: Regex = Regex::new(
        r"(?i)\b(?:CGPA|GPA|Percentage|Grade)\b[ \t]*[:\-]?[ \t]*(\d+(?:\.\d+)?(?:[ \t]*/[ \t]*\d+(?:\.\d+)?)?%?)"
    ).expect("GRADE regex is valid");

    // Experience and projects
    pub static ref POSITION: Regex = Regex::new(
        r"\b((?:[A-Z][A-Za-z+#./-]*[ \t]+){0,3}(?i:developer|engineer|designer|consultant|manager|internship|intern|analyst|architect|scientist|lead|director|administrator|specialist|programmer))\b"
    ).expect("POSITION regex is valid");

    pub static ref COMPANY_AT: Regex = Regex::new(
        r"(?:\bat|@)[ \t]+([A-Z0-9][A-Za-z0-9&.'-]*(?:[ \t]+[A-Z0-9&][A-Za-z0-9&.'-]*)*)"
    ).expect("COMPANY_AT regex is valid");

    pub static ref COMPANY_AFTER_SEPARATOR: Regex = Regex::new(
        r"^[ \t]*(?:,|\||-|–|—)[ \t]*([A-Z0-9][A-Za-z0-9&.'-]*(?:[ \t]+[A-Z0-9&][A-Za-z0-9&.'-]*)*)"
    ).expect("COMPANY_AFTER_SEPARATOR regex is valid");

    pub static ref COMPANY_LABEL: Regex = Regex::new(
        r"(?im)^[ \t]*(?:Company|Employer|Organization)[ \t]*:[ \t]*([^\n,|]+)"
    ).expect("COMPANY_LABEL regex is valid");

    pub static ref TECHNOLOGIES_LINE: Regex = Regex::new(
        r"(?i)^[ \t]*(?:[•*-][ \t]*)?(?:Technologies(?:[ \t]+used)?|Tech[ \t]+Stack|Tools(?:[ \t]+used)?|Stack|Built[ \t]+with)[ \t]*[:\-–][ \t]*(.+)$"
    ).expect("TECHNOLOGIES_LINE regex is valid");

    /// `Title - subtitle` style project header.
    pub static ref TITLED_LINE: Regex = Regex::new(
        r"^[ \t]*[A-Z][A-Za-z0-9 .&'+#]*?[ \t]+(?:-|–|—|\|)[ \t]+\S"
    ).expect("TITLED_LINE regex is valid");

    // Skills
    pub static ref SKILL_LABEL: Regex = Regex::new(
        r"^[ \t]*(?:[•*-][ \t]*)?([A-Za-z][A-Za-z /&+.-]{0,40}?)[ \t]*:[ \t]*(.*)$"
    ).expect("SKILL_LABEL regex is valid");

    pub static ref SKILL_SEPARATOR: Regex = Regex::new(
        r"(?m)[,;|•·\n]|(?:^|[ \t])[-–*][ \t]"
    ).expect("SKILL_SEPARATOR regex is valid");
}
