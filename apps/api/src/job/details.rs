use lazy_static::lazy_static;
use regex::Regex;

use crate::models::job::JobDetails;

lazy_static! {
    static ref POSITION_LABEL: Regex = Regex::new(
        r"(?im)^[ \t]*(?:Job[ \t]+Title|Position|Role)[ \t]*:[ \t]*(\S[^\n]*?)[ \t]*$"
    ).expect("POSITION_LABEL regex is valid");

    static ref COMPANY_LABEL: Regex = Regex::new(
        r"(?im)^[ \t]*(?:Company|Employer)[ \t]*:[ \t]*(\S[^\n]*?)[ \t]*$"
    ).expect("COMPANY_LABEL regex is valid");

    static ref LOCATION_LABEL: Regex = Regex::new(
        r"(?im)^[ \t]*Location[ \t]*:[ \t]*(\S[^\n]*?)[ \t]*$"
    ).expect("LOCATION_LABEL regex is valid");
}

/// Reads `Job Title:`, `Company:` and `Location:` style lines from a posting.
pub fn extract_job_details(text: &str) -> JobDetails {
    JobDetails {
        company: labeled_value(&COMPANY_LABEL, text).unwrap_or_default(),
        position: labeled_value(&POSITION_LABEL, text).unwrap_or_default(),
        location: labeled_value(&LOCATION_LABEL, text),
    }
}

fn labeled_value(label: &Regex, text: &str) -> Option<String> {
    label
        .captures(text)
        .map(|caps| caps[1].trim_end_matches(['.', ',']).trim().to_string())
        .filter(|value| !value.is_empty())
}
