//! Desktop implementations of the wizard's host capabilities.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{bail, Context, Result};
use arboard::Clipboard;
use wizard_core::{host::ExportDocument, ClipboardHost, PrintHost};

use crate::backend_bridge::commands::ExportTarget;

/// System clipboard through arboard. A fresh handle is opened per copy.
pub struct SystemClipboard;

impl ClipboardHost for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("clipboard unavailable")?;
        clipboard
            .set_text(text.to_string())
            .context("failed to copy to clipboard")
    }
}

/// Writes the summary to disk and hands it to the platform viewer, which
/// offers printing or saving as PDF.
pub struct ViewerPrinter {
    target: ExportTarget,
    open_after_write: bool,
}

impl ViewerPrinter {
    pub fn new(target: ExportTarget) -> Self {
        Self {
            target,
            open_after_write: true,
        }
    }

    pub fn without_viewer(target: ExportTarget) -> Self {
        Self {
            target,
            open_after_write: false,
        }
    }

    pub fn output_path(&self, document: &ExportDocument) -> PathBuf {
        match &self.target {
            ExportTarget::Directory(dir) => dir.join(&document.file_name),
            ExportTarget::File(path) => path.clone(),
        }
    }
}

impl PrintHost for ViewerPrinter {
    fn print(&self, document: &ExportDocument) -> Result<()> {
        let path = self.output_path(document);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create export directory '{}'", parent.display())
            })?;
        }
        fs::write(&path, &document.body)
            .with_context(|| format!("failed to write summary to '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "summary written");

        if self.open_after_write {
            open_in_external_viewer(&path)?;
        }
        Ok(())
    }
}

fn viewer_command(path: &Path) -> Command {
    #[cfg(target_os = "windows")]
    let command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    };

    #[cfg(target_os = "macos")]
    let command = {
        let mut command = Command::new("open");
        command.arg(path);
        command
    };

    #[cfg(all(unix, not(target_os = "macos")))]
    let command = {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    };

    command
}

/// Waits for the platform launcher, which hands the file off and exits.
fn open_in_external_viewer(path: &Path) -> Result<()> {
    let status = viewer_command(path)
        .status()
        .with_context(|| format!("saved to '{}' but no viewer could open it", path.display()))?;
    if !status.success() {
        bail!(
            "saved to '{}' but the viewer exited with {status}",
            path.display()
        );
    }
    Ok(())
}
