//! Session controller: which screen is showing and the submitted snapshot.

use std::fmt;

use tracing::{debug, info};

use crate::{
    form::FormCollector,
    snapshot::Snapshot,
    summary::{project, DisplayGrouping},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Intro,
    Form,
    Summary,
}

impl ScreenId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Form => "form",
            Self::Summary => "summary",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active screen. The answer set lives inside `Form` and the snapshot
/// inside `Summary`, so neither outlives its screen.
#[derive(Debug, Clone)]
pub enum Screen {
    Intro,
    Form(FormCollector),
    Summary(Snapshot),
}

impl Screen {
    pub fn id(&self) -> ScreenId {
        match self {
            Self::Intro => ScreenId::Intro,
            Self::Form(_) => ScreenId::Form,
            Self::Summary(_) => ScreenId::Summary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Continue,
    Back,
    Submit,
    Restart,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Back => "back",
            Self::Submit => "submit",
            Self::Restart => "restart",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// The intent has no transition from the current screen.
    NotApplicable,
    /// Submit was requested while required answers are missing.
    IncompleteForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Moved { from: ScreenId, to: ScreenId },
    Ignored { screen: ScreenId, reason: IgnoredReason },
}

impl TransitionOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

#[derive(Debug, Clone)]
pub struct SessionController {
    screen: Screen,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionController {
    pub fn new() -> Self {
        Self {
            screen: Screen::Intro,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_id(&self) -> ScreenId {
        self.screen.id()
    }

    pub fn form(&self) -> Option<&FormCollector> {
        match &self.screen {
            Screen::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut FormCollector> {
        match &mut self.screen {
            Screen::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match &self.screen {
            Screen::Summary(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Projection of the held snapshot; `None` outside the summary screen.
    pub fn summary(&self) -> Option<DisplayGrouping> {
        self.snapshot().map(project)
    }

    pub fn dispatch(&mut self, intent: Intent) -> TransitionOutcome {
        let from = self.screen_id();
        let next = match (&self.screen, intent) {
            (Screen::Intro, Intent::Continue) => Screen::Form(FormCollector::new()),
            (Screen::Form(_), Intent::Back) => Screen::Intro,
            (Screen::Form(form), Intent::Submit) => match form.submit() {
                Some(snapshot) => Screen::Summary(snapshot),
                None => return self.ignore(intent, IgnoredReason::IncompleteForm),
            },
            (Screen::Summary(_), Intent::Restart) => Screen::Intro,
            _ => return self.ignore(intent, IgnoredReason::NotApplicable),
        };

        self.screen = next;
        let to = self.screen_id();
        info!(%from, %to, %intent, "screen transition");
        TransitionOutcome::Moved { from, to }
    }

    fn ignore(&self, intent: Intent, reason: IgnoredReason) -> TransitionOutcome {
        let screen = self.screen_id();
        debug!(%screen, %intent, ?reason, "intent ignored");
        TransitionOutcome::Ignored { screen, reason }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
