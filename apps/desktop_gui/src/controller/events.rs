//! Events reported back to the UI by the export worker.

use wizard_core::ExportOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportAction {
    Download,
    Share,
}

impl ExportAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Download => "download",
            Self::Share => "share",
        }
    }
}

pub enum UiEvent {
    ExportFinished {
        action: ExportAction,
        outcome: ExportOutcome,
    },
}

/// Status line text for a finished export.
pub fn status_for(action: ExportAction, outcome: &ExportOutcome) -> String {
    match (action, outcome) {
        (ExportAction::Download, ExportOutcome::Printed) => {
            "Summary saved and opened for printing".to_string()
        }
        (ExportAction::Share, ExportOutcome::CopiedLink) => {
            "Link copied to clipboard!".to_string()
        }
        (_, ExportOutcome::Failed(reason)) => {
            format!("Could not {} the summary: {reason}", action.as_str())
        }
        (_, other) => other.status_message(),
    }
}
