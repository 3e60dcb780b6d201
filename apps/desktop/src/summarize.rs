//! Non-interactive mode: project a JSON answer file straight to a summary.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde_json::json;
use shared::AnswerSet;
use wizard_core::{project, render_text, FormCollector, SummaryHeader};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn summarize(raw_answers: &str, format: OutputFormat, header: &SummaryHeader) -> Result<String> {
    let answers: AnswerSet =
        serde_json::from_str(raw_answers).context("answers file is not a valid answer set")?;
    let form = FormCollector::from_answers(answers);

    let Some(snapshot) = form.submit() else {
        let missing: Vec<String> = form
            .missing_requirements()
            .iter()
            .map(|req| format!("{} ({})", req.hint(), req.field()))
            .collect();
        bail!("answers are incomplete: {}", missing.join("; "));
    };

    let grouping = project(&snapshot);
    match format {
        OutputFormat::Text => Ok(render_text(&grouping, header)),
        OutputFormat::Json => {
            let document = json!({
                "eventTitle": header.event_title,
                "generatedOn": header.generated_on,
                "snapshot": snapshot,
                "summary": grouping,
            });
            serde_json::to_string_pretty(&document).context("failed to serialize summary")
        }
    }
}
