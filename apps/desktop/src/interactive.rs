//! Line-oriented wizard: one command per line, the current screen redrawn after
//! every transition.

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::NaiveDate;
use shared::{Collaborator, DataSource, FeltenPrinciple};
use tracing::debug;
use wizard_core::{
    dates::long_date,
    host,
    prompts::{self, PROMPTS},
    render_text, FormCollector, IgnoredReason, Screen, SessionController, SummaryHeader,
    TransitionOutcome, WizardSettings,
};

use crate::{
    commands::{parse_command, Command, HELP},
    terminal_host::{EchoClipboard, FilePrinter},
};

pub struct InteractiveSession {
    session: SessionController,
    settings: WizardSettings,
    today: NaiveDate,
    printer: FilePrinter,
    clipboard: EchoClipboard,
}

impl InteractiveSession {
    pub fn new(settings: WizardSettings, today: NaiveDate) -> Self {
        Self {
            session: SessionController::new(),
            printer: FilePrinter::new(settings.export_dir.clone()),
            clipboard: EchoClipboard::default(),
            settings,
            today,
        }
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.draw(out)?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                write!(out, "> ")?;
                out.flush()?;
                continue;
            }
            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.apply(command, out)?,
                Err(err) => {
                    debug!(line = line.trim(), error = %err, "command rejected");
                    writeln!(out, "{err}")?
                }
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn apply<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        match command {
            Command::Intent(intent) => match self.session.dispatch(intent) {
                TransitionOutcome::Moved { .. } => self.draw(out)?,
                TransitionOutcome::Ignored {
                    reason: IgnoredReason::IncompleteForm,
                    ..
                } => {
                    writeln!(out, "{}:", prompts::REQUIRED_NOTE)?;
                    if let Some(form) = self.session.form() {
                        for requirement in form.missing_requirements() {
                            writeln!(out, "  - {requirement}")?;
                        }
                    }
                }
                TransitionOutcome::Ignored {
                    screen,
                    reason: IgnoredReason::NotApplicable,
                } => writeln!(out, "'{intent}' is not available on the {screen} screen")?,
            },
            Command::Set { field, value } => match self.session.form_mut() {
                Some(form) => match form.set_field_str(&field, &value) {
                    Ok(()) => writeln!(out, "ok")?,
                    Err(err) => writeln!(out, "{err}")?,
                },
                None => writeln!(out, "answers can only be edited on the form screen")?,
            },
            Command::Toggle {
                field,
                value,
                included,
            } => match self.session.form_mut() {
                Some(form) => match form.toggle_set_member_str(&field, &value, included) {
                    Ok(()) => writeln!(out, "ok")?,
                    Err(err) => writeln!(out, "{err}")?,
                },
                None => writeln!(out, "answers can only be edited on the form screen")?,
            },
            Command::Show => self.draw(out)?,
            Command::Options => write_options(out)?,
            Command::Print => match self.session.summary() {
                Some(grouping) => {
                    let outcome = host::download(&self.printer, &grouping, &self.header());
                    match (outcome.clone(), self.printer.last_written()) {
                        (wizard_core::ExportOutcome::Printed, Some(path)) => {
                            writeln!(out, "Summary saved to {}", path.display())?
                        }
                        _ => writeln!(out, "{}", outcome.status_message())?,
                    }
                }
                None => writeln!(out, "submit the form to generate a summary first")?,
            },
            Command::Share => match self.session.summary() {
                Some(grouping) => {
                    let outcome =
                        host::share(None, &self.clipboard, &grouping, &self.settings.share_url);
                    match self.clipboard.take() {
                        Some(link) => writeln!(out, "Copy this link to share: {link}")?,
                        None => writeln!(out, "{}", outcome.status_message())?,
                    }
                }
                None => writeln!(out, "submit the form to generate a summary first")?,
            },
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn header(&self) -> SummaryHeader {
        SummaryHeader::new(self.settings.event_title.clone(), self.today)
    }

    fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.session.screen() {
            Screen::Intro => write_intro(out, &self.settings),
            Screen::Form(form) => write_form(out, form),
            Screen::Summary(_) => {
                if let Some(grouping) = self.session.summary() {
                    writeln!(out, "{}", render_text(&grouping, &self.header()))?;
                    writeln!(out, "Next Steps & Resources: {}", self.settings.resources_url)?;
                    writeln!(out, "Type 'print', 'share' or 'restart'.")?;
                }
                Ok(())
            }
        }
    }
}

fn write_intro<W: Write>(out: &mut W, settings: &WizardSettings) -> Result<()> {
    writeln!(out, "{}", prompts::INTRO_TITLE)?;
    writeln!(out, "{}\n", settings.event_title)?;
    writeln!(out, "{}", prompts::INTRO_LEAD)?;
    writeln!(out, "{}\n", prompts::INTRO_NOTE)?;
    for feature in &prompts::INTRO_FEATURES {
        writeln!(out, "  {} - {}", feature.title, feature.description)?;
    }
    writeln!(
        out,
        "\n{} (type 'continue'). {}",
        prompts::INTRO_CTA,
        prompts::INTRO_DURATION
    )?;
    Ok(())
}

fn write_form<W: Write>(out: &mut W, form: &FormCollector) -> Result<()> {
    let answers = form.answers();
    writeln!(out, "{}", prompts::FORM_TITLE)?;
    writeln!(out, "{}\n", prompts::FORM_SUBTITLE)?;

    for (index, prompt) in PROMPTS.iter().enumerate() {
        let marker = if prompt.required { " *" } else { "" };
        writeln!(out, "{}. {}{} [{}]", index + 1, prompt.title, marker, prompt.field)?;
        let current = match prompt.field {
            shared::FieldName::Problem => non_empty_or(&answers.problem, prompt.placeholder),
            shared::FieldName::Collaborator => answers
                .collaborator
                .map(|c| c.label().to_string())
                .unwrap_or_else(|| prompt.placeholder.to_string()),
            shared::FieldName::DataSources => join_or_none(
                answers.data_sources.iter().map(|s| s.label().to_string()),
            ),
            shared::FieldName::FeltenPrinciples => {
                join_or_none(answers.felten_principles.iter().map(|p| p.label()))
            }
            shared::FieldName::NextStep => non_empty_or(&answers.next_step, prompt.placeholder),
            shared::FieldName::Timeline => answers
                .timeline
                .map(long_date)
                .unwrap_or_else(|| prompt.placeholder.to_string()),
            _ => String::new(),
        };
        writeln!(out, "   > {current}")?;

        if prompt.field == shared::FieldName::Collaborator && form.shows_custom_collaborator() {
            let custom = answers.custom_collaborator.as_deref().unwrap_or_default();
            writeln!(
                out,
                "   [customCollaborator] > {}",
                non_empty_or(custom, prompts::CUSTOM_PLACEHOLDER)
            )?;
        }
        if prompt.field == shared::FieldName::DataSources && form.shows_custom_data_source() {
            let custom = answers.custom_data_source.as_deref().unwrap_or_default();
            writeln!(
                out,
                "   [customDataSource] > {}",
                non_empty_or(custom, prompts::CUSTOM_PLACEHOLDER)
            )?;
        }
    }

    if form.is_valid() {
        writeln!(out, "\nReady: type 'submit' to {}.", prompts::SUBMIT_LABEL.to_lowercase())?;
    } else {
        writeln!(out, "\n{}.", prompts::REQUIRED_NOTE)?;
    }
    Ok(())
}

fn write_options<W: Write>(out: &mut W) -> Result<()> {
    let collaborators: Vec<_> = Collaborator::ALL.iter().map(|c| c.label()).collect();
    let sources: Vec<_> = DataSource::ALL.iter().map(|s| s.label()).collect();
    writeln!(out, "collaborator: {}", collaborators.join(", "))?;
    writeln!(out, "dataSources: {}", sources.join(", "))?;
    writeln!(out, "feltenPrinciples:")?;
    for principle in FeltenPrinciple::ALL {
        writeln!(
            out,
            "  {} - {}: {}",
            principle.id(),
            principle.label(),
            principle.description()
        )?;
    }
    writeln!(out, "timeline: YYYY-MM-DD")?;
    Ok(())
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        format!("({fallback})")
    } else {
        value.to_string()
    }
}

fn join_or_none(items: impl Iterator<Item = String>) -> String {
    let items: Vec<String> = items.collect();
    if items.is_empty() {
        "(none selected)".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use wizard_core::ScreenId;

    fn run_script(script: &str, settings: WizardSettings) -> (InteractiveSession, String) {
        let mut wizard = InteractiveSession::new(
            settings,
            NaiveDate::from_ymd_opt(2025, 8, 5).expect("date"),
        );
        let mut out = Vec::new();
        wizard
            .run(Cursor::new(script.to_string()), &mut out)
            .expect("run");
        (wizard, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn scripted_session_reaches_summary() {
        let script = "\
continue
set problem Students disengage
set collaborator Librarian
add dataSources LMS data
submit
";
        let (wizard, output) = run_script(script, WizardSettings::default());
        assert_eq!(wizard.session().screen_id(), ScreenId::Summary);
        assert!(output.contains("Start Your SoTL Journey"));
        assert!(output.contains("== Potential Collaboration ==\n[Librarian]"));
        assert!(output.contains("Generated on Tuesday, August 5th, 2025"));
    }

    #[test]
    fn incomplete_submit_lists_missing_answers_and_stays_on_form() {
        let (wizard, output) = run_script("continue\nset collaborator Other\nsubmit\n", WizardSettings::default());
        assert_eq!(wizard.session().screen_id(), ScreenId::Form);
        assert!(output.contains("  - Describe a problem you care about"));
        assert!(output.contains("  - Select at least one data source"));
        assert!(!output.contains("  - Select a potential collaborator"));
    }

    #[test]
    fn inapplicable_intent_on_incomplete_form_is_not_a_submit() {
        let (wizard, output) =
            run_script("continue\ncontinue\nrestart\n", WizardSettings::default());
        assert_eq!(wizard.session().screen_id(), ScreenId::Form);
        assert!(output.contains("'continue' is not available on the form screen"));
        assert!(output.contains("'restart' is not available on the form screen"));
        assert!(!output.contains("  - Describe a problem you care about"));
    }

    #[test]
    fn edits_outside_the_form_are_refused() {
        let (wizard, output) = run_script("set problem x\nback\n", WizardSettings::default());
        assert_eq!(wizard.session().screen_id(), ScreenId::Intro);
        assert!(output.contains("answers can only be edited on the form screen"));
        assert!(output.contains("'back' is not available on the intro screen"));
    }

    #[test]
    fn print_and_share_use_terminal_hosts() {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings = WizardSettings {
            export_dir: dir.path().to_path_buf(),
            share_url: "https://example.edu/sotl".to_string(),
            ..WizardSettings::default()
        };
        let script = "\
continue
set problem Students disengage
set collaborator Librarian
add dataSources LMS data
submit
print
share
";
        let (_, output) = run_script(script, settings);
        let exported = dir.path().join("sotl-snapshot-2025-08-05.txt");
        assert!(exported.exists());
        assert!(output.contains(&format!("Summary saved to {}", exported.display())));
        assert!(output.contains("Copy this link to share: https://example.edu/sotl"));
    }

    #[test]
    fn custom_collaborator_line_appears_only_for_other() {
        let (_, output) = run_script(
            "continue\nset collaborator Other\nshow\nset collaborator Librarian\nshow\n",
            WizardSettings::default(),
        );
        assert_eq!(output.matches("[customCollaborator]").count(), 1);
    }
}
