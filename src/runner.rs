use crate::analysis::ScreeningPipeline;
use crate::config::{Config, ScreeningConfig};
use crate::error::Result;
use crate::models::ScreeningOutcome;
use crate::report::{self, ReportFormat};
use crate::storage::log::{FAILED_INVALID_INPUT, FAILED_NO_SKILLS};
use crate::storage::{load_inputs, ScreeningLog};

/// A completed screening together with its rendered report.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: ScreeningOutcome,
    pub rendered: String,
}

/// Loads both inputs, screens them and renders the report.
///
/// Every run appends exactly one line to `log` when one is given: the failure
/// reason for input and declaration failures, or the summary line once the
/// screening completes. The summary is recorded before rendering.
pub fn run(
    config: &Config,
    format: ReportFormat,
    log: Option<&ScreeningLog>,
) -> Result<RunReport> {
    let inputs = match load_inputs(&config.resume_path, &config.jd_path) {
        Ok(inputs) => inputs,
        Err(e) => {
            tracing::warn!("Could not load inputs: {}", e);
            record(log, FAILED_INVALID_INPUT);
            return Err(e);
        }
    };

    let pipeline = ScreeningPipeline::new(ScreeningConfig::from(config));
    let outcome = match pipeline.screen(&inputs.resume, &inputs.job_description) {
        Ok(outcome) => outcome,
        Err(e) => {
            if e.is_declaration_failure() {
                record(log, FAILED_NO_SKILLS);
            }
            return Err(e);
        }
    };

    record(log, &outcome.summary_line());

    let rendered = report::render(&outcome, format)?;
    Ok(RunReport { outcome, rendered })
}

fn record(log: Option<&ScreeningLog>, message: &str) {
    if let Some(log) = log {
        log.append(message);
    }
}
