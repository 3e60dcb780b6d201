use chrono::NaiveDate;
use serde::Serialize;
use shared::{AnswerSet, Collaborator, DataSource, FeltenPrinciple};

/// Immutable copy of a submitted answer set.
///
/// Only [`crate::form::FormCollector::submit`] creates one, so a snapshot always
/// satisfies the submission invariant and the collaborator is never missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    problem: String,
    collaborator: Collaborator,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_collaborator: Option<String>,
    data_sources: Vec<DataSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_data_source: Option<String>,
    felten_principles: Vec<FeltenPrinciple>,
    next_step: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeline: Option<NaiveDate>,
}

impl Snapshot {
    pub(crate) fn capture(answers: &AnswerSet) -> Option<Self> {
        let collaborator = answers.collaborator?;
        Some(Self {
            problem: answers.problem.clone(),
            collaborator,
            custom_collaborator: answers.custom_collaborator.clone(),
            data_sources: answers.data_sources.clone(),
            custom_data_source: answers.custom_data_source.clone(),
            felten_principles: answers.felten_principles.clone(),
            next_step: answers.next_step.clone(),
            timeline: answers.timeline,
        })
    }

    pub fn problem(&self) -> &str {
        &self.problem
    }

    pub fn collaborator(&self) -> Collaborator {
        self.collaborator
    }

    pub fn custom_collaborator(&self) -> Option<&str> {
        self.custom_collaborator.as_deref()
    }

    pub fn data_sources(&self) -> &[DataSource] {
        &self.data_sources
    }

    pub fn custom_data_source(&self) -> Option<&str> {
        self.custom_data_source.as_deref()
    }

    pub fn felten_principles(&self) -> &[FeltenPrinciple] {
        &self.felten_principles
    }

    pub fn next_step(&self) -> &str {
        &self.next_step
    }

    pub fn timeline(&self) -> Option<NaiveDate> {
        self.timeline
    }

    /// Rebuilds the answer set this snapshot was captured from.
    pub fn to_answers(&self) -> AnswerSet {
        AnswerSet {
            problem: self.problem.clone(),
            collaborator: Some(self.collaborator),
            custom_collaborator: self.custom_collaborator.clone(),
            data_sources: self.data_sources.clone(),
            custom_data_source: self.custom_data_source.clone(),
            felten_principles: self.felten_principles.clone(),
            next_step: self.next_step.clone(),
            timeline: self.timeline,
        }
    }
}
