//! Command orchestration from summary-screen buttons to the export queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::ExportCommand;

/// Queues `cmd` without blocking the frame. Returns whether it was accepted;
/// on rejection `status` explains why.
pub fn dispatch_export_command(
    cmd_tx: &Sender<ExportCommand>,
    cmd: ExportCommand,
    status: &mut String,
) -> bool {
    let action = cmd.action();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(action = action.as_str(), "queued export command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "An export is already in progress; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(action = action.as_str(), "export worker disconnected");
            *status = "Export worker stopped; restart the app to export again".to_string();
            false
        }
    }
}
