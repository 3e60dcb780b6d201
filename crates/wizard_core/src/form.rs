//! Form collector: the in-progress answer set, its edits and submission.

use std::fmt;

use chrono::NaiveDate;
use shared::{
    parse_timeline, AnswerSet, Collaborator, DataSource, FeltenPrinciple, FieldName, WizardError,
};
use tracing::{debug, info};

use crate::snapshot::Snapshot;

/// A single-value field edit. Multi-select fields go through [`SetMember`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Problem(String),
    Collaborator(Option<Collaborator>),
    CustomCollaborator(String),
    CustomDataSource(String),
    NextStep(String),
    Timeline(Option<NaiveDate>),
}

impl FieldUpdate {
    pub fn field(&self) -> FieldName {
        match self {
            Self::Problem(_) => FieldName::Problem,
            Self::Collaborator(_) => FieldName::Collaborator,
            Self::CustomCollaborator(_) => FieldName::CustomCollaborator,
            Self::CustomDataSource(_) => FieldName::CustomDataSource,
            Self::NextStep(_) => FieldName::NextStep,
            Self::Timeline(_) => FieldName::Timeline,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetMember {
    DataSource(DataSource),
    Principle(FeltenPrinciple),
}

impl SetMember {
    pub fn field(self) -> FieldName {
        match self {
            Self::DataSource(_) => FieldName::DataSources,
            Self::Principle(_) => FieldName::FeltenPrinciples,
        }
    }
}

/// A submission requirement that the current answers do not meet yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Problem,
    Collaborator,
    DataSources,
}

impl Requirement {
    pub fn field(self) -> FieldName {
        match self {
            Self::Problem => FieldName::Problem,
            Self::Collaborator => FieldName::Collaborator,
            Self::DataSources => FieldName::DataSources,
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::Problem => "Describe a problem you care about",
            Self::Collaborator => "Select a potential collaborator",
            Self::DataSources => "Select at least one data source",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hint())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormCollector {
    answers: AnswerSet,
}

impl FormCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from pre-filled answers, dropping repeated multi-select members.
    pub fn from_answers(mut answers: AnswerSet) -> Self {
        dedup_in_order(&mut answers.data_sources);
        dedup_in_order(&mut answers.felten_principles);
        Self { answers }
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Applies an edit as-is. Validation waits until submission, and moving the
    /// collaborator away from `Other` keeps the custom text around.
    pub fn set_field(&mut self, update: FieldUpdate) {
        debug!(field = %update.field(), "form field updated");
        let answers = &mut self.answers;
        match update {
            FieldUpdate::Problem(text) => answers.problem = text,
            FieldUpdate::Collaborator(choice) => answers.collaborator = choice,
            FieldUpdate::CustomCollaborator(text) => answers.custom_collaborator = Some(text),
            FieldUpdate::CustomDataSource(text) => answers.custom_data_source = Some(text),
            FieldUpdate::NextStep(text) => answers.next_step = text,
            FieldUpdate::Timeline(date) => answers.timeline = date,
        }
    }

    /// Text-keyed variant of [`Self::set_field`] for line-oriented front-ends.
    ///
    /// An empty value clears the collaborator or timeline.
    pub fn set_field_str(&mut self, name: &str, value: &str) -> Result<(), WizardError> {
        let field: FieldName = name.parse()?;
        let update = match field {
            FieldName::Problem => FieldUpdate::Problem(value.to_string()),
            FieldName::Collaborator if value.trim().is_empty() => FieldUpdate::Collaborator(None),
            FieldName::Collaborator => FieldUpdate::Collaborator(Some(value.parse()?)),
            FieldName::CustomCollaborator => FieldUpdate::CustomCollaborator(value.to_string()),
            FieldName::CustomDataSource => FieldUpdate::CustomDataSource(value.to_string()),
            FieldName::NextStep => FieldUpdate::NextStep(value.to_string()),
            FieldName::Timeline if value.trim().is_empty() => FieldUpdate::Timeline(None),
            FieldName::Timeline => FieldUpdate::Timeline(Some(parse_timeline(value)?)),
            FieldName::DataSources | FieldName::FeltenPrinciples => {
                return Err(WizardError::NotAValueField(field.key().to_string()))
            }
        };
        self.set_field(update);
        Ok(())
    }

    /// Adds `member` when `included`, removes it otherwise. Repeating a call is
    /// a no-op and insertion order of the remaining members is kept.
    pub fn toggle_set_member(&mut self, member: SetMember, included: bool) {
        debug!(field = %member.field(), included, "form selection toggled");
        match member {
            SetMember::DataSource(source) => {
                toggle_in_order(&mut self.answers.data_sources, source, included)
            }
            SetMember::Principle(principle) => {
                toggle_in_order(&mut self.answers.felten_principles, principle, included)
            }
        }
    }

    pub fn toggle_set_member_str(
        &mut self,
        field: &str,
        value: &str,
        included: bool,
    ) -> Result<(), WizardError> {
        let member = match field.parse::<FieldName>()? {
            FieldName::DataSources => SetMember::DataSource(value.parse()?),
            FieldName::FeltenPrinciples => SetMember::Principle(value.parse()?),
            other => return Err(WizardError::NotASetField(other.key().to_string())),
        };
        self.toggle_set_member(member, included);
        Ok(())
    }

    pub fn contains(&self, member: SetMember) -> bool {
        match member {
            SetMember::DataSource(source) => self.answers.data_sources.contains(&source),
            SetMember::Principle(principle) => {
                self.answers.felten_principles.contains(&principle)
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.missing_requirements().is_empty()
    }

    pub fn missing_requirements(&self) -> Vec<Requirement> {
        let mut missing = Vec::new();
        if self.answers.problem.trim().is_empty() {
            missing.push(Requirement::Problem);
        }
        if self.answers.collaborator.is_none() {
            missing.push(Requirement::Collaborator);
        }
        if self.answers.data_sources.is_empty() {
            missing.push(Requirement::DataSources);
        }
        missing
    }

    /// Captures an independent snapshot, or `None` when the answers are not
    /// ready for submission.
    pub fn submit(&self) -> Option<Snapshot> {
        if !self.is_valid() {
            debug!(missing = ?self.missing_requirements(), "ignoring submit of incomplete form");
            return None;
        }
        let snapshot = Snapshot::capture(&self.answers)?;
        info!(
            data_sources = snapshot.data_sources().len(),
            principles = snapshot.felten_principles().len(),
            "form submitted"
        );
        Some(snapshot)
    }

    pub fn shows_custom_collaborator(&self) -> bool {
        self.answers
            .collaborator
            .is_some_and(|collaborator| collaborator.is_other())
    }

    pub fn shows_custom_data_source(&self) -> bool {
        self.answers.data_sources.iter().any(|source| source.is_other())
    }
}

fn toggle_in_order<T: PartialEq>(members: &mut Vec<T>, value: T, included: bool) {
    let present = members.contains(&value);
    if included && !present {
        members.push(value);
    } else if !included && present {
        members.retain(|member| *member != value);
    }
}

fn dedup_in_order<T: PartialEq + Copy>(members: &mut Vec<T>) {
    let mut seen = Vec::with_capacity(members.len());
    members.retain(|member| {
        if seen.contains(member) {
            false
        } else {
            seen.push(*member);
            true
        }
    });
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
