//! Bridge between the UI thread and the export worker.

pub mod commands;
pub mod hosts;
pub mod runtime;
