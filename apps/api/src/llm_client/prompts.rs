// Shared prompt fragments. Each service that calls the LLM keeps its own
// prompts.rs alongside it and builds on these.

/// Appended to every generation prompt built from a parsed résumé.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Every claim about the candidate must come from the résumé data \
    provided. Do NOT invent employers, titles, dates, metrics or skills. \
    If the résumé does not support a claim, leave it out.";
