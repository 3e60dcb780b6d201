//! Host capabilities available from a terminal session.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use wizard_core::{host::ExportDocument, ClipboardHost, PrintHost};

/// "Prints" by writing the rendered summary into the export directory.
pub struct FilePrinter {
    dir: PathBuf,
    last_written: RefCell<Option<PathBuf>>,
}

impl FilePrinter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            last_written: RefCell::new(None),
        }
    }

    pub fn last_written(&self) -> Option<PathBuf> {
        self.last_written.borrow().clone()
    }
}

impl PrintHost for FilePrinter {
    fn print(&self, document: &ExportDocument) -> Result<()> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("failed to create export directory '{}'", self.dir.display())
        })?;
        let path = self.dir.join(&document.file_name);
        fs::write(&path, &document.body)
            .with_context(|| format!("failed to write summary to '{}'", path.display()))?;
        *self.last_written.borrow_mut() = Some(path);
        Ok(())
    }
}

/// A terminal has no clipboard we can rely on, so the link is held for the
/// prompt to echo back.
#[derive(Default)]
pub struct EchoClipboard {
    pending: RefCell<Option<String>>,
}

impl EchoClipboard {
    pub fn take(&self) -> Option<String> {
        self.pending.borrow_mut().take()
    }
}

impl ClipboardHost for EchoClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        *self.pending.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
