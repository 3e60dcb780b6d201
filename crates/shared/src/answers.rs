use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{Collaborator, DataSource, FeltenPrinciple},
    error::WizardError,
};

/// Answers collected by the reflective form.
///
/// Multi-select fields keep insertion order; duplicates are filtered by the
/// form collector, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerSet {
    pub problem: String,
    pub collaborator: Option<Collaborator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_collaborator: Option<String>,
    pub data_sources: Vec<DataSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data_source: Option<String>,
    pub felten_principles: Vec<FeltenPrinciple>,
    pub next_step: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Problem,
    Collaborator,
    CustomCollaborator,
    DataSources,
    CustomDataSource,
    FeltenPrinciples,
    NextStep,
    Timeline,
}

impl FieldName {
    pub const ALL: &'static [FieldName] = &[
        FieldName::Problem,
        FieldName::Collaborator,
        FieldName::CustomCollaborator,
        FieldName::DataSources,
        FieldName::CustomDataSource,
        FieldName::FeltenPrinciples,
        FieldName::NextStep,
        FieldName::Timeline,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Problem => "problem",
            Self::Collaborator => "collaborator",
            Self::CustomCollaborator => "customCollaborator",
            Self::DataSources => "dataSources",
            Self::CustomDataSource => "customDataSource",
            Self::FeltenPrinciples => "feltenPrinciples",
            Self::NextStep => "nextStep",
            Self::Timeline => "timeline",
        }
    }

    pub fn is_multi_select(self) -> bool {
        matches!(self, Self::DataSources | Self::FeltenPrinciples)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = WizardError;

    /// Accepts camelCase (`nextStep`), snake_case (`next_step`) and kebab-case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.key().to_ascii_lowercase() == normalized)
            .ok_or_else(|| WizardError::unknown_field(s.trim()))
    }
}

/// Parses a `YYYY-MM-DD` timeline date.
pub fn parse_timeline(value: &str) -> Result<NaiveDate, WizardError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| WizardError::invalid_date(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_accept_common_spellings() {
        assert_eq!("nextStep".parse::<FieldName>().expect("camel"), FieldName::NextStep);
        assert_eq!("next_step".parse::<FieldName>().expect("snake"), FieldName::NextStep);
        assert_eq!(
            "custom-collaborator".parse::<FieldName>().expect("kebab"),
            FieldName::CustomCollaborator
        );
        assert_eq!(
            "budget".parse::<FieldName>().unwrap_err(),
            WizardError::UnknownField("budget".to_string())
        );
    }

    #[test]
    fn only_data_sources_and_principles_are_multi_select() {
        let multi: Vec<_> = FieldName::ALL
            .iter()
            .copied()
            .filter(|field| field.is_multi_select())
            .collect();
        assert_eq!(multi, vec![FieldName::DataSources, FieldName::FeltenPrinciples]);
    }

    #[test]
    fn parses_iso_timeline_dates() {
        assert_eq!(
            parse_timeline("2025-08-05").expect("date"),
            NaiveDate::from_ymd_opt(2025, 8, 5).expect("valid")
        );
        assert_eq!(
            parse_timeline("05/08/2025").unwrap_err(),
            WizardError::invalid_date("05/08/2025")
        );
    }

    #[test]
    fn deserializes_partial_answer_file_with_defaults() {
        let answers: AnswerSet = serde_json::from_str(
            r#"{"problem":"Students disengage","collaborator":"Librarian","dataSources":["LMS data"]}"#,
        )
        .expect("deserialize");

        assert_eq!(answers.problem, "Students disengage");
        assert_eq!(answers.collaborator, Some(Collaborator::Librarian));
        assert_eq!(answers.data_sources, vec![DataSource::LmsData]);
        assert!(answers.felten_principles.is_empty());
        assert!(answers.next_step.is_empty());
        assert_eq!(answers.timeline, None);
    }

    #[test]
    fn serializes_timeline_as_iso_date() {
        let answers = AnswerSet {
            timeline: NaiveDate::from_ymd_opt(2025, 9, 1),
            ..AnswerSet::default()
        };
        let json = serde_json::to_value(&answers).expect("serialize");
        assert_eq!(json["timeline"], "2025-09-01");
        assert!(json.get("customCollaborator").is_none());
    }
}
