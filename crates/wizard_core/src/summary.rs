//! Summary projector: a pure mapping from a snapshot to labeled display sections.

use serde::Serialize;

use crate::{dates::full_date, snapshot::Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Challenge,
    Collaboration,
    DataSources,
    Principles,
    NextStep,
    Timeline,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Challenge => "The Challenge You Care About",
            Self::Collaboration => "Potential Collaboration",
            Self::DataSources => "Available Data Sources",
            Self::Principles => "Felten's Principles Already in Play",
            Self::NextStep => "Your Next Small Step",
            Self::Timeline => "Target Timeline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeStyle {
    Secondary,
    Outline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub text: String,
    pub style: BadgeStyle,
}

impl Badge {
    fn new(text: impl Into<String>, style: BadgeStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SectionBody {
    Quote(String),
    Badges(Vec<Badge>),
    Checklist(Vec<String>),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: &'static str,
    pub body: SectionBody,
}

impl Section {
    fn new(kind: SectionKind, body: SectionBody) -> Self {
        Self {
            kind,
            title: kind.title(),
            body,
        }
    }

    /// Badge texts, or nothing for non-badge sections.
    pub fn badge_texts(&self) -> Vec<&str> {
        match &self.body {
            SectionBody::Badges(badges) => badges.iter().map(|b| b.text.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayGrouping {
    sections: Vec<Section>,
}

impl DisplayGrouping {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    pub fn has(&self, kind: SectionKind) -> bool {
        self.section(kind).is_some()
    }

    /// The challenge statement as rendered in the view.
    pub fn challenge(&self) -> &str {
        match self.section(SectionKind::Challenge).map(|s| &s.body) {
            Some(SectionBody::Quote(text)) => text,
            _ => "",
        }
    }
}

/// Projects a snapshot into display sections. Challenge, Collaboration and Data
/// Sources are always present; the rest only when answered.
pub fn project(snapshot: &Snapshot) -> DisplayGrouping {
    let mut sections = Vec::with_capacity(6);

    sections.push(Section::new(
        SectionKind::Challenge,
        SectionBody::Quote(snapshot.problem().to_string()),
    ));

    let mut collaborators = vec![Badge::new(
        snapshot.collaborator().label(),
        BadgeStyle::Secondary,
    )];
    if let Some(custom) = non_blank(snapshot.custom_collaborator()) {
        collaborators.push(Badge::new(custom, BadgeStyle::Secondary));
    }
    sections.push(Section::new(
        SectionKind::Collaboration,
        SectionBody::Badges(collaborators),
    ));

    let mut sources: Vec<Badge> = snapshot
        .data_sources()
        .iter()
        .map(|source| Badge::new(source.label(), BadgeStyle::Outline))
        .collect();
    if let Some(custom) = non_blank(snapshot.custom_data_source()) {
        sources.push(Badge::new(custom, BadgeStyle::Outline));
    }
    sections.push(Section::new(
        SectionKind::DataSources,
        SectionBody::Badges(sources),
    ));

    if !snapshot.felten_principles().is_empty() {
        let labels = snapshot
            .felten_principles()
            .iter()
            .map(|principle| principle.label())
            .collect();
        sections.push(Section::new(
            SectionKind::Principles,
            SectionBody::Checklist(labels),
        ));
    }

    if let Some(step) = non_blank(Some(snapshot.next_step())) {
        sections.push(Section::new(
            SectionKind::NextStep,
            SectionBody::Text(step.to_string()),
        ));
    }

    if let Some(timeline) = snapshot.timeline() {
        sections.push(Section::new(
            SectionKind::Timeline,
            SectionBody::Badges(vec![Badge::new(
                full_date(timeline),
                BadgeStyle::Secondary,
            )]),
        ));
    }

    DisplayGrouping { sections }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
#[path = "tests/summary_tests.rs"]
mod tests;
