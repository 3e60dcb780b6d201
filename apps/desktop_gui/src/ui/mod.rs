//! UI layer for the desktop wizard: one egui app rendering the current screen.

pub mod app;

pub use app::SotlWizardApp;
