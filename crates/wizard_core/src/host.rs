//! Host capabilities used by the summary screen's export actions.
//!
//! Printing, sharing and the clipboard belong to whatever shell hosts the
//! wizard. Export actions are fire-and-forget: failures are logged and reported
//! as an [`ExportOutcome`] for a status line, never fed back into the session.

use anyhow::Result;
use tracing::{info, warn};

use crate::{
    render::{render_text, SummaryHeader},
    summary::DisplayGrouping,
};

pub const SHARE_TITLE: &str = "My SoTL Starting Point";
const SHARE_EXCERPT_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub title: String,
    pub file_name: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

pub trait PrintHost {
    fn print(&self, document: &ExportDocument) -> Result<()>;
}

pub trait ShareHost {
    fn share(&self, payload: &SharePayload) -> Result<()>;
}

pub trait ClipboardHost {
    fn write_text(&self, text: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Printed,
    Shared,
    CopiedLink,
    Failed(String),
}

impl ExportOutcome {
    pub fn status_message(&self) -> String {
        match self {
            Self::Printed => "Summary sent to print/export".to_string(),
            Self::Shared => "Summary shared".to_string(),
            Self::CopiedLink => "Link copied to clipboard".to_string(),
            Self::Failed(reason) => format!("Export failed: {reason}"),
        }
    }
}

pub fn export_document(grouping: &DisplayGrouping, header: &SummaryHeader) -> ExportDocument {
    ExportDocument {
        title: SHARE_TITLE.to_string(),
        file_name: format!("sotl-snapshot-{}.txt", header.generated_on.format("%Y-%m-%d")),
        body: render_text(grouping, header),
    }
}

/// Share text built from the rendered challenge: the first 100 characters
/// followed by an ellipsis.
pub fn share_payload(grouping: &DisplayGrouping, url: &str) -> SharePayload {
    let excerpt: String = grouping.challenge().chars().take(SHARE_EXCERPT_CHARS).collect();
    SharePayload {
        title: SHARE_TITLE.to_string(),
        text: format!("My SoTL focus: {excerpt}..."),
        url: url.to_string(),
    }
}

/// Hands the rendered summary to the host's print/export capability.
pub fn download(
    printer: &dyn PrintHost,
    grouping: &DisplayGrouping,
    header: &SummaryHeader,
) -> ExportOutcome {
    let document = export_document(grouping, header);
    match printer.print(&document) {
        Ok(()) => {
            info!(file_name = %document.file_name, "summary exported");
            ExportOutcome::Printed
        }
        Err(err) => {
            warn!(error = %format!("{err:#}"), "summary export failed");
            ExportOutcome::Failed(format!("{err:#}"))
        }
    }
}

/// Uses the native share capability when the host has one and falls back to
/// copying the reference URL when it is missing or fails.
pub fn share(
    share_host: Option<&dyn ShareHost>,
    clipboard: &dyn ClipboardHost,
    grouping: &DisplayGrouping,
    reference_url: &str,
) -> ExportOutcome {
    if let Some(host) = share_host {
        let payload = share_payload(grouping, reference_url);
        match host.share(&payload) {
            Ok(()) => {
                info!("summary shared");
                return ExportOutcome::Shared;
            }
            Err(err) => {
                warn!(error = %format!("{err:#}"), "native share failed; copying link instead");
            }
        }
    }

    match clipboard.write_text(reference_url) {
        Ok(()) => {
            info!("share link copied to clipboard");
            ExportOutcome::CopiedLink
        }
        Err(err) => {
            warn!(error = %format!("{err:#}"), "clipboard copy failed");
            ExportOutcome::Failed(format!("{err:#}"))
        }
    }
}

#[cfg(test)]
#[path = "tests/host_tests.rs"]
mod tests;
