use thiserror::Error;

/// Failures while turning free-form text input into answer-set edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("'{value}' is not a valid {kind} option")]
    UnknownOption { kind: &'static str, value: String },
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("field '{0}' is not a multi-select field")]
    NotASetField(String),
    #[error("field '{0}' is a multi-select field; toggle its members instead")]
    NotAValueField(String),
}

impl WizardError {
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }

    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }
}
