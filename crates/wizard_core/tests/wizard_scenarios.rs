use shared::{Collaborator, DataSource};
use wizard_core::{
    FieldUpdate, IgnoredReason, Intent, ScreenId, SectionKind, SessionController, SetMember,
    TransitionOutcome,
};

fn session_on_form() -> SessionController {
    let mut session = SessionController::new();
    assert!(session.dispatch(Intent::Continue).moved());
    session
}

#[test]
fn minimal_submission_produces_three_section_summary() {
    let mut session = session_on_form();
    {
        let form = session.form_mut().expect("form");
        form.set_field(FieldUpdate::Problem("Students disengage".to_string()));
        form.set_field(FieldUpdate::Collaborator(Some(Collaborator::Librarian)));
        form.toggle_set_member(SetMember::DataSource(DataSource::LmsData), true);
    }

    assert_eq!(
        session.dispatch(Intent::Submit),
        TransitionOutcome::Moved {
            from: ScreenId::Form,
            to: ScreenId::Summary
        }
    );

    let summary = session.summary().expect("summary view");
    assert_eq!(summary.challenge(), "Students disengage");
    assert_eq!(
        summary
            .section(SectionKind::Collaboration)
            .expect("collaboration")
            .badge_texts(),
        vec!["Librarian"]
    );
    assert_eq!(
        summary
            .section(SectionKind::DataSources)
            .expect("data sources")
            .badge_texts(),
        vec!["LMS data"]
    );
    assert!(!summary.has(SectionKind::Principles));
    assert!(!summary.has(SectionKind::NextStep));
    assert!(!summary.has(SectionKind::Timeline));
}

#[test]
fn other_collaborator_with_custom_text_shows_both_badges() {
    let mut session = session_on_form();
    {
        let form = session.form_mut().expect("form");
        form.set_field_str("problem", "Feedback is rarely read").expect("problem");
        form.set_field_str("collaborator", "Other").expect("collaborator");
        form.set_field_str("customCollaborator", "Department chair")
            .expect("custom");
        form.toggle_set_member_str("dataSources", "Student feedback", true)
            .expect("source");
    }
    session.dispatch(Intent::Submit);

    let summary = session.summary().expect("summary view");
    assert_eq!(
        summary
            .section(SectionKind::Collaboration)
            .expect("collaboration")
            .badge_texts(),
        vec!["Other", "Department chair"]
    );
}

#[test]
fn empty_problem_keeps_the_form_open() {
    let mut session = session_on_form();
    {
        let form = session.form_mut().expect("form");
        form.set_field(FieldUpdate::Problem(String::new()));
        form.set_field(FieldUpdate::Collaborator(Some(Collaborator::AcademicStaff)));
        form.toggle_set_member(SetMember::DataSource(DataSource::PeerReview), true);
        assert!(!form.is_valid());
    }

    assert_eq!(
        session.dispatch(Intent::Submit),
        TransitionOutcome::Ignored {
            screen: ScreenId::Form,
            reason: IgnoredReason::IncompleteForm
        }
    );
    assert_eq!(session.screen_id(), ScreenId::Form);
    assert!(session.snapshot().is_none());
}

#[test]
fn full_round_trip_restarts_with_a_clean_form() {
    let mut session = session_on_form();
    {
        let form = session.form_mut().expect("form");
        form.set_field(FieldUpdate::Problem("Large classes".to_string()));
        form.set_field(FieldUpdate::Collaborator(Some(Collaborator::Other)));
        form.set_field(FieldUpdate::CustomCollaborator("Tutor".to_string()));
        form.toggle_set_member(SetMember::DataSource(DataSource::FocusGroups), true);
    }
    session.dispatch(Intent::Submit);
    session.dispatch(Intent::Restart);
    assert_eq!(session.screen_id(), ScreenId::Intro);
    assert!(session.snapshot().is_none());

    session.dispatch(Intent::Continue);
    let form = session.form().expect("form");
    assert!(form.answers().custom_collaborator.is_none());
    assert!(form.answers().data_sources.is_empty());
}
