//! Export worker: drains the command queue off the UI thread so file writes,
//! viewer launches and clipboard access never stall a frame.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use wizard_core::{host, ClipboardHost};

use crate::backend_bridge::{
    commands::{ExportCommand, ExportTarget},
    hosts::{SystemClipboard, ViewerPrinter},
};
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<ExportCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        tracing::debug!("export worker started");
        while let Ok(cmd) = cmd_rx.recv() {
            let event = execute(cmd, &SystemClipboard, ViewerPrinter::new);
            if ui_tx.send(event).is_err() {
                break;
            }
        }
        tracing::debug!("export worker stopped");
    });
}

/// Runs one command against the given hosts. There is no native share sheet
/// on the desktop, so sharing always lands on the clipboard.
pub fn execute(
    cmd: ExportCommand,
    clipboard: &dyn ClipboardHost,
    printer_for: impl Fn(ExportTarget) -> ViewerPrinter,
) -> UiEvent {
    let action = cmd.action();
    let outcome = match cmd {
        ExportCommand::Download {
            grouping,
            header,
            target,
        } => host::download(&printer_for(target), &grouping, &header),
        ExportCommand::Share { grouping, url } => host::share(None, clipboard, &grouping, &url),
    };
    UiEvent::ExportFinished { action, outcome }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, fs};

    use anyhow::{anyhow, Result};
    use chrono::NaiveDate;
    use shared::{Collaborator, DataSource};
    use wizard_core::{
        DisplayGrouping, ExportOutcome, FieldUpdate, FormCollector, SetMember, SummaryHeader,
    };

    use super::*;
    use crate::controller::events::ExportAction;

    #[derive(Default)]
    struct RecordingClipboard {
        copied: RefCell<Vec<String>>,
        fail: bool,
    }

    impl ClipboardHost for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            if self.fail {
                return Err(anyhow!("no display"));
            }
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn grouping() -> DisplayGrouping {
        let mut form = FormCollector::new();
        form.set_field(FieldUpdate::Problem("Students disengage".to_string()));
        form.set_field(FieldUpdate::Collaborator(Some(Collaborator::Librarian)));
        form.toggle_set_member(SetMember::DataSource(DataSource::LmsData), true);
        wizard_core::project(&form.submit().expect("complete form"))
    }

    fn header() -> SummaryHeader {
        SummaryHeader::new(
            "SoTL in Action",
            NaiveDate::from_ymd_opt(2025, 8, 5).expect("date"),
        )
    }

    #[test]
    fn share_copies_reference_link() {
        let clipboard = RecordingClipboard::default();
        let event = execute(
            ExportCommand::Share {
                grouping: grouping(),
                url: "https://example.edu/sotl".to_string(),
            },
            &clipboard,
            ViewerPrinter::without_viewer,
        );

        let UiEvent::ExportFinished { action, outcome } = event;
        assert_eq!(action, ExportAction::Share);
        assert_eq!(outcome, ExportOutcome::CopiedLink);
        assert_eq!(*clipboard.copied.borrow(), vec!["https://example.edu/sotl".to_string()]);
    }

    #[test]
    fn share_reports_clipboard_failure() {
        let clipboard = RecordingClipboard {
            fail: true,
            ..RecordingClipboard::default()
        };
        let event = execute(
            ExportCommand::Share {
                grouping: grouping(),
                url: "https://example.edu/sotl".to_string(),
            },
            &clipboard,
            ViewerPrinter::without_viewer,
        );

        let UiEvent::ExportFinished { outcome, .. } = event;
        assert!(matches!(outcome, ExportOutcome::Failed(reason) if reason.contains("no display")));
    }

    #[test]
    fn download_writes_rendered_summary() {
        let dir = tempfile::tempdir().expect("temp dir");
        let event = execute(
            ExportCommand::Download {
                grouping: grouping(),
                header: header(),
                target: ExportTarget::Directory(dir.path().to_path_buf()),
            },
            &RecordingClipboard::default(),
            ViewerPrinter::without_viewer,
        );

        let UiEvent::ExportFinished { action, outcome } = event;
        assert_eq!(action, ExportAction::Download);
        assert_eq!(outcome, ExportOutcome::Printed);
        let body = fs::read_to_string(dir.path().join("sotl-snapshot-2025-08-05.txt"))
            .expect("summary file");
        assert!(body.contains("[Librarian]"));
        assert!(body.contains("Generated on Tuesday, August 5th, 2025"));
    }
}
