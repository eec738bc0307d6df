// Prompt constants for cover-letter generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for cover letters: plain prose, no markdown.
pub const COVER_LETTER_SYSTEM: &str = "You are an experienced career coach writing \
    concise, specific cover letters. \
    Respond with the letter text only, starting with the greeting. \
    Do NOT use markdown code fences, headings or bold text. \
    Do NOT include explanations, notes or apologies.";

/// Cover letter prompt template.
/// Replace: {grounding_instruction}, {candidate}, {company}, {position},
///          {requirements}, {job_description}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

Write a cover letter of three to four short paragraphs for the candidate below,
applying for the {position} role at {company}.

- Open with the role and why the candidate is interested in {company}.
- Connect two or three concrete achievements from the experience to the requirements.
- Close with a short call to action and sign with the candidate's name.
- Keep it under 350 words.

CANDIDATE:
{candidate}

REQUIREMENTS:
{requirements}

JOB DESCRIPTION:
{job_description}"#;
