//! Plain-text rendering of the summary view, used for export and the terminal.

use chrono::NaiveDate;

use crate::{
    dates::full_date,
    summary::{DisplayGrouping, SectionBody},
};

pub const SUMMARY_HEADING: &str = "Your SoTL Snapshot";
pub const SUMMARY_INTRO: &str =
    "Here's your personalised starting point for Scholarship of Teaching and Learning";
pub const SUMMARY_FOOTNOTE: &str =
    "This summary reflects your current thinking and can evolve as you develop your SoTL practice.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryHeader {
    pub event_title: String,
    pub generated_on: NaiveDate,
}

impl SummaryHeader {
    pub fn new(event_title: impl Into<String>, generated_on: NaiveDate) -> Self {
        Self {
            event_title: event_title.into(),
            generated_on,
        }
    }
}

pub fn render_text(grouping: &DisplayGrouping, header: &SummaryHeader) -> String {
    let mut out = String::new();
    out.push_str(SUMMARY_HEADING);
    out.push('\n');
    out.push_str(&header.event_title);
    out.push_str("\n\n");
    out.push_str(SUMMARY_INTRO);
    out.push('\n');

    for section in grouping.sections() {
        out.push_str(&format!("\n== {} ==\n", section.title));
        match &section.body {
            SectionBody::Quote(text) => out.push_str(&format!("\"{text}\"\n")),
            SectionBody::Text(text) => {
                out.push_str(text);
                out.push('\n');
            }
            SectionBody::Badges(badges) => {
                let line = badges
                    .iter()
                    .map(|badge| format!("[{}]", badge.text))
                    .collect::<Vec<_>>()
                    .join(" ");
                out.push_str(&line);
                out.push('\n');
            }
            SectionBody::Checklist(items) => {
                for item in items {
                    out.push_str(&format!("✓ {item}\n"));
                }
            }
        }
    }

    out.push_str(&format!(
        "\nGenerated on {}\n{}\n",
        full_date(header.generated_on),
        SUMMARY_FOOTNOTE
    ));
    out
}
