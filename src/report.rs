use crate::error::Result;
use crate::models::ScreeningOutcome;

const RULE_WIDTH: usize = 55;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl ReportFormat {
    /// Unknown names fall back to plain text.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "json" => ReportFormat::Json,
            "markdown" | "md" => ReportFormat::Markdown,
            _ => ReportFormat::Text,
        }
    }
}

pub fn render(outcome: &ScreeningOutcome, format: ReportFormat) -> Result<String> {
    let output = match format {
        ReportFormat::Json => serde_json::to_string_pretty(outcome)?,
        ReportFormat::Markdown => format_markdown(outcome),
        ReportFormat::Text => format_text(outcome),
    };
    Ok(output)
}

/// Banner printed before inputs are loaded.
pub fn header() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut output = String::new();

    output.push_str(&format!("\n{}\n", rule));
    output.push_str("          RESUME SCREENING SYSTEM\n");
    output.push_str(&format!("{}\n", rule));
    output.push_str("\nNote: JD file must contain 'REQUIRED_SKILLS:' tag\n");
    output.push_str("Example: REQUIRED_SKILLS: python, java, sql, teamwork\n");

    output
}

pub fn format_text(outcome: &ScreeningOutcome) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut output = String::new();

    output.push_str("\n--- ANALYSIS RESULTS ---\n\n");
    output.push_str(&format!("Overall Match Score: {}%\n\n", outcome.score));

    output.push_str("Skills Detected in Resume:\n");
    if outcome.matches.found.is_empty() {
        output.push_str("  (none found)\n");
    } else {
        for skill in &outcome.matches.found {
            output.push_str(&format!("  ✓ {}\n", skill));
        }
    }

    output.push_str("\nSkills Not Found:\n");
    if outcome.matches.missing.is_empty() {
        output.push_str("  (none)\n");
    } else {
        for skill in &outcome.matches.missing {
            output.push_str(&format!("  ✗ {}\n", skill));
        }
    }

    output.push_str(&format!("\n{}\n", rule));
    output.push_str(&format!("FINAL DECISION: {}\n", outcome.verdict.status));
    output.push_str(&format!("Reason: {}\n", outcome.verdict.explanation));
    output.push_str(&format!("{}\n", rule));

    output
}

pub fn format_markdown(outcome: &ScreeningOutcome) -> String {
    let mut output = String::new();

    output.push_str("# Resume Screening Report\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| Match Score | {}% |\n", outcome.score));
    output.push_str(&format!("| Pass Threshold | {}% |\n", outcome.threshold));
    output.push_str(&format!(
        "| Required Skills | {} |\n",
        outcome.required_skills.len()
    ));
    output.push_str(&format!("| Decision | **{}** |\n", outcome.verdict.status));

    output.push_str("\n## Skills\n\n");
    output.push_str("| Skill | Found |\n|-------|-------|\n");
    for skill in &outcome.matches.found {
        output.push_str(&format!("| {} | yes |\n", skill));
    }
    for skill in &outcome.matches.missing {
        output.push_str(&format!("| {} | no |\n", skill));
    }

    output.push_str(&format!("\n> {}\n", outcome.verdict.explanation));

    output
}
