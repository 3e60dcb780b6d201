use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::WizardError;

macro_rules! option_enum {
    ($name:ident, $kind:literal { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// The escape-hatch choice that surfaces a free-text input.
            pub fn is_other(self) -> bool {
                self == $name::Other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = WizardError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| WizardError::UnknownOption {
                        kind: $kind,
                        value: wanted.to_string(),
                    })
            }
        }
    };
}

option_enum!(Collaborator, "collaborator" {
    AcademicStaff => "Academic staff",
    EducationalDeveloper => "Educational developer",
    Librarian => "Librarian",
    LearningDesigner => "Learning designer",
    EducationalTechnologist => "Educational technologist",
    StudentsAsPartners => "Students as partners",
    Other => "Other",
});

option_enum!(DataSource, "data source" {
    StudentFeedback => "Student feedback",
    LmsData => "LMS data",
    PeerReview => "Peer review",
    AssessmentArtefacts => "Assessment artefacts",
    FocusGroups => "Focus groups",
    InstitutionalReports => "Institutional reports",
    Other => "Other",
});

/// Felten's five principles of good practice in SoTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeltenPrinciple {
    Inquiry,
    Context,
    Methodological,
    Partnership,
    Public,
}

impl FeltenPrinciple {
    pub const ALL: &'static [FeltenPrinciple] = &[
        FeltenPrinciple::Inquiry,
        FeltenPrinciple::Context,
        FeltenPrinciple::Methodological,
        FeltenPrinciple::Partnership,
        FeltenPrinciple::Public,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Inquiry => "inquiry",
            Self::Context => "context",
            Self::Methodological => "methodological",
            Self::Partnership => "partnership",
            Self::Public => "public",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Inquiry => "🎯",
            Self::Context => "🌐",
            Self::Methodological => "🧪",
            Self::Partnership => "🤝",
            Self::Public => "📣",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Inquiry => "Inquiry focused on learning",
            Self::Context => "Grounded in context",
            Self::Methodological => "Methodologically sound",
            Self::Partnership => "Partnered with students",
            Self::Public => "Appropriately public",
        }
    }

    /// Emoji-prefixed title, as shown next to checkboxes and in the summary.
    pub fn label(self) -> String {
        format!("{} {}", self.emoji(), self.title())
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Inquiry => "Research questions emerge from real teaching and learning challenges",
            Self::Context => {
                "Research is situated within specific institutional and disciplinary contexts"
            }
            Self::Methodological => {
                "Appropriate research methods are used to investigate the questions"
            }
            Self::Partnership => "Students are involved as collaborators in the research process",
            Self::Public => {
                "Findings are shared with relevant communities for peer review and application"
            }
        }
    }
}

impl fmt::Display for FeltenPrinciple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FeltenPrinciple {
    type Err = WizardError;

    /// Accepts the id (`inquiry`), the plain title or the emoji-prefixed label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|principle| {
                principle.id().eq_ignore_ascii_case(wanted)
                    || principle.title().eq_ignore_ascii_case(wanted)
                    || principle.label() == wanted
            })
            .ok_or_else(|| WizardError::UnknownOption {
                kind: "Felten principle",
                value: wanted.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_option_labels_case_insensitively() {
        assert_eq!("lms data".parse::<DataSource>().expect("parse"), DataSource::LmsData);
        assert_eq!(
            "  Students as partners ".parse::<Collaborator>().expect("parse"),
            Collaborator::StudentsAsPartners
        );
    }

    #[test]
    fn rejects_unknown_collaborator() {
        let err = "Dean".parse::<Collaborator>().unwrap_err();
        assert_eq!(
            err,
            WizardError::UnknownOption {
                kind: "collaborator",
                value: "Dean".to_string(),
            }
        );
    }

    #[test]
    fn option_sets_keep_declared_order_and_end_with_other() {
        assert_eq!(Collaborator::ALL.len(), 7);
        assert_eq!(DataSource::ALL.len(), 7);
        assert_eq!(Collaborator::ALL.last(), Some(&Collaborator::Other));
        assert_eq!(DataSource::ALL[1], DataSource::LmsData);
        assert!(DataSource::Other.is_other());
        assert!(!Collaborator::Librarian.is_other());
    }

    #[test]
    fn felten_principle_accepts_id_title_or_label() {
        assert_eq!(
            "partnership".parse::<FeltenPrinciple>().expect("id"),
            FeltenPrinciple::Partnership
        );
        assert_eq!(
            "Grounded in context".parse::<FeltenPrinciple>().expect("title"),
            FeltenPrinciple::Context
        );
        assert_eq!(
            "📣 Appropriately public".parse::<FeltenPrinciple>().expect("label"),
            FeltenPrinciple::Public
        );
        assert!("rigorous".parse::<FeltenPrinciple>().is_err());
    }

    #[test]
    fn serializes_options_by_label_and_principles_by_id() {
        let json = serde_json::to_string(&(DataSource::LmsData, FeltenPrinciple::Inquiry))
            .expect("serialize");
        assert_eq!(json, r#"["LMS data","inquiry"]"#);

        let collaborator: Collaborator =
            serde_json::from_str(r#""Educational developer""#).expect("deserialize");
        assert_eq!(collaborator, Collaborator::EducationalDeveloper);
    }
}
