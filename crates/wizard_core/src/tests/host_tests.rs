use std::cell::RefCell;

use anyhow::anyhow;
use chrono::NaiveDate;
use shared::{Collaborator, DataSource};

use super::*;
use crate::{
    form::{FieldUpdate, FormCollector, SetMember},
    session::{Intent, ScreenId, SessionController},
    summary::project,
};

#[derive(Default)]
struct RecordingPrinter {
    documents: RefCell<Vec<ExportDocument>>,
    fail_with: Option<String>,
}

impl PrintHost for RecordingPrinter {
    fn print(&self, document: &ExportDocument) -> Result<()> {
        if let Some(err) = &self.fail_with {
            return Err(anyhow!(err.clone()));
        }
        self.documents.borrow_mut().push(document.clone());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingShare {
    payloads: RefCell<Vec<SharePayload>>,
    fail_with: Option<String>,
}

impl ShareHost for RecordingShare {
    fn share(&self, payload: &SharePayload) -> Result<()> {
        if let Some(err) = &self.fail_with {
            return Err(anyhow!(err.clone()));
        }
        self.payloads.borrow_mut().push(payload.clone());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingClipboard {
    texts: RefCell<Vec<String>>,
    unavailable: bool,
}

impl ClipboardHost for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        if self.unavailable {
            return Err(anyhow!("clipboard unavailable"));
        }
        self.texts.borrow_mut().push(text.to_string());
        Ok(())
    }
}

const URL: &str = "https://example.edu/sotl";

fn grouping_for(problem: &str) -> DisplayGrouping {
    let mut form = FormCollector::new();
    form.set_field(FieldUpdate::Problem(problem.to_string()));
    form.set_field(FieldUpdate::Collaborator(Some(Collaborator::Librarian)));
    form.toggle_set_member(SetMember::DataSource(DataSource::LmsData), true);
    project(&form.submit().expect("snapshot"))
}

fn header() -> SummaryHeader {
    SummaryHeader::new(
        "SoTL in Action",
        NaiveDate::from_ymd_opt(2025, 8, 5).expect("date"),
    )
}

#[test]
fn download_hands_rendered_view_to_printer() {
    let printer = RecordingPrinter::default();
    let outcome = download(&printer, &grouping_for("Students disengage"), &header());

    assert_eq!(outcome, ExportOutcome::Printed);
    let documents = printer.documents.borrow();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].file_name, "sotl-snapshot-2025-08-05.txt");
    assert!(documents[0].body.contains("\"Students disengage\""));
}

#[test]
fn download_failure_is_reported_not_raised() {
    let printer = RecordingPrinter {
        fail_with: Some("no printer".to_string()),
        ..RecordingPrinter::default()
    };
    let outcome = download(&printer, &grouping_for("x"), &header());
    assert_eq!(outcome, ExportOutcome::Failed("no printer".to_string()));
    assert_eq!(outcome.status_message(), "Export failed: no printer");
}

#[test]
fn share_uses_native_host_when_available() {
    let share_host = RecordingShare::default();
    let clipboard = RecordingClipboard::default();
    let outcome = share(
        Some(&share_host as &dyn ShareHost),
        &clipboard,
        &grouping_for("Students disengage"),
        URL,
    );

    assert_eq!(outcome, ExportOutcome::Shared);
    assert!(clipboard.texts.borrow().is_empty());
    assert_eq!(
        share_host.payloads.borrow()[0],
        SharePayload {
            title: "My SoTL Starting Point".to_string(),
            text: "My SoTL focus: Students disengage...".to_string(),
            url: URL.to_string(),
        }
    );
}

#[test]
fn share_without_native_host_copies_link() {
    let clipboard = RecordingClipboard::default();
    let outcome = share(None, &clipboard, &grouping_for("Students disengage"), URL);
    assert_eq!(outcome, ExportOutcome::CopiedLink);
    assert_eq!(*clipboard.texts.borrow(), vec![URL.to_string()]);
}

#[test]
fn failed_native_share_falls_back_to_clipboard() {
    let share_host = RecordingShare {
        fail_with: Some("share sheet dismissed".to_string()),
        ..RecordingShare::default()
    };
    let clipboard = RecordingClipboard::default();
    let outcome = share(Some(&share_host as &dyn ShareHost), &clipboard, &grouping_for("x"), URL);
    assert_eq!(outcome, ExportOutcome::CopiedLink);
}

#[test]
fn unavailable_clipboard_reports_failure() {
    let clipboard = RecordingClipboard {
        unavailable: true,
        ..RecordingClipboard::default()
    };
    let outcome = share(None, &clipboard, &grouping_for("x"), URL);
    assert!(matches!(outcome, ExportOutcome::Failed(_)));
}

#[test]
fn share_excerpt_is_capped_at_one_hundred_characters() {
    let long_problem = "é".repeat(150);
    let payload = share_payload(&grouping_for(&long_problem), URL);
    let excerpt = payload
        .text
        .strip_prefix("My SoTL focus: ")
        .and_then(|rest| rest.strip_suffix("..."))
        .expect("share text shape");
    assert_eq!(excerpt.chars().count(), 100);
}

#[test]
fn export_failures_leave_session_untouched() {
    let mut session = SessionController::new();
    session.dispatch(Intent::Continue);
    {
        let form = session.form_mut().expect("form");
        form.set_field(FieldUpdate::Problem("Students disengage".to_string()));
        form.set_field(FieldUpdate::Collaborator(Some(Collaborator::Librarian)));
        form.toggle_set_member(SetMember::DataSource(DataSource::LmsData), true);
    }
    session.dispatch(Intent::Submit);
    let before = session.snapshot().cloned();
    let grouping = session.summary().expect("summary");

    let printer = RecordingPrinter {
        fail_with: Some("spooler offline".to_string()),
        ..RecordingPrinter::default()
    };
    let clipboard = RecordingClipboard {
        unavailable: true,
        ..RecordingClipboard::default()
    };
    download(&printer, &grouping, &header());
    share(None, &clipboard, &grouping, URL);

    assert_eq!(session.screen_id(), ScreenId::Summary);
    assert_eq!(session.snapshot().cloned(), before);
}
