//! Core of the SoTL reflection wizard: the form collector, the session
//! controller that moves between intro, form and summary screens, and the
//! summary projector. Host capabilities (print, share, clipboard) are injected
//! through the traits in [`host`].

pub mod config;
pub mod dates;
pub mod form;
pub mod host;
pub mod prompts;
pub mod render;
pub mod session;
mod snapshot;
pub mod summary;

pub use config::{load_settings, WizardSettings};
pub use form::{FieldUpdate, FormCollector, Requirement, SetMember};
pub use host::{ClipboardHost, ExportOutcome, PrintHost, ShareHost};
pub use render::{render_text, SummaryHeader};
pub use session::{IgnoredReason, Intent, Screen, ScreenId, SessionController, TransitionOutcome};
pub use snapshot::Snapshot;
pub use summary::{project, Badge, BadgeStyle, DisplayGrouping, Section, SectionBody, SectionKind};
