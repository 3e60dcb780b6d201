pub mod answers;
pub mod domain;
pub mod error;

pub use answers::{parse_timeline, AnswerSet, FieldName};
pub use domain::{Collaborator, DataSource, FeltenPrinciple};
pub use error::WizardError;
