use serde::{Deserialize, Serialize};

/// Job posting record handed to cover-letter generation alongside a `Resume`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobDescription {
    pub company: String,
    pub position: String,
    pub requirements: Vec<String>,
    /// Raw posting text.
    pub job_description: String,
    pub location: Option<String>,
}

/// Posting details read from labeled lines (`Company: Acme`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDetails {
    pub company: String,
    pub position: String,
    pub location: Option<String>,
}
