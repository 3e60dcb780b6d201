//! Export commands queued from the UI to the export worker.

use std::path::PathBuf;

use wizard_core::{DisplayGrouping, SummaryHeader};

use crate::controller::events::ExportAction;

/// Where a downloaded summary is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// Written under the directory with the generated file name.
    Directory(PathBuf),
    /// Written to exactly this path, usually picked from a save dialog.
    File(PathBuf),
}

pub enum ExportCommand {
    Download {
        grouping: DisplayGrouping,
        header: SummaryHeader,
        target: ExportTarget,
    },
    Share {
        grouping: DisplayGrouping,
        url: String,
    },
}

impl ExportCommand {
    pub fn action(&self) -> ExportAction {
        match self {
            Self::Download { .. } => ExportAction::Download,
            Self::Share { .. } => ExportAction::Share,
        }
    }
}
