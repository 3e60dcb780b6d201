use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{Collaborator, DataSource, FeltenPrinciple, FieldName};
use wizard_core::{
    dates::long_date,
    host::export_document,
    prompts::{self, Prompt, PROMPTS},
    render::{SUMMARY_FOOTNOTE, SUMMARY_HEADING, SUMMARY_INTRO},
    BadgeStyle, DisplayGrouping, FieldUpdate, FormCollector, Intent, ScreenId,
    SectionBody, SessionController, SetMember, SummaryHeader, WizardSettings,
};

use crate::backend_bridge::commands::{ExportCommand, ExportTarget};
use crate::controller::events::{status_for, UiEvent};
use crate::controller::orchestration::dispatch_export_command;

const CARD_WIDTH: f32 = 720.0;

enum SummaryAction {
    Download,
    SaveAs,
    Share,
}

pub struct SotlWizardApp {
    session: SessionController,
    settings: WizardSettings,
    cmd_tx: Sender<ExportCommand>,
    ui_rx: Receiver<UiEvent>,
    export_in_flight: bool,
    status: String,
}

impl SotlWizardApp {
    pub fn new(
        settings: WizardSettings,
        cmd_tx: Sender<ExportCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            session: SessionController::new(),
            settings,
            cmd_tx,
            ui_rx,
            export_in_flight: false,
            status: String::new(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ExportFinished { action, outcome } => {
                    self.export_in_flight = false;
                    self.status = status_for(action, &outcome);
                }
            }
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        if self.session.dispatch(intent).moved() {
            self.status.clear();
        }
    }

    fn header(&self) -> SummaryHeader {
        SummaryHeader::new(self.settings.event_title.clone(), Local::now().date_naive())
    }

    fn request_export(&mut self, action: SummaryAction, grouping: DisplayGrouping) {
        let cmd = match action {
            SummaryAction::Download => ExportCommand::Download {
                grouping,
                header: self.header(),
                target: ExportTarget::Directory(self.settings.export_dir.clone()),
            },
            SummaryAction::SaveAs => {
                let header = self.header();
                let suggested = export_document(&grouping, &header).file_name;
                let Some(path) = rfd::FileDialog::new()
                    .set_directory(&self.settings.export_dir)
                    .set_file_name(suggested)
                    .save_file()
                else {
                    return;
                };
                ExportCommand::Download {
                    grouping,
                    header,
                    target: ExportTarget::File(path),
                }
            }
            SummaryAction::Share => ExportCommand::Share {
                grouping,
                url: self.settings.share_url.clone(),
            },
        };

        if dispatch_export_command(&self.cmd_tx, cmd, &mut self.status) {
            self.export_in_flight = true;
            self.status = "Working...".to_string();
        }
    }

    fn show_intro_screen(&mut self, ctx: &egui::Context) {
        let mut begin = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CARD_WIDTH);
                        ui.add_space(24.0);
                        ui.label(egui::RichText::new(prompts::INTRO_TITLE).size(30.0).strong());
                        ui.label(egui::RichText::new(&self.settings.event_title).weak());
                        ui.add_space(12.0);
                        ui.label(prompts::INTRO_LEAD);
                        ui.label(egui::RichText::new(prompts::INTRO_NOTE).strong());
                        ui.add_space(16.0);

                        ui.columns(prompts::INTRO_FEATURES.len(), |columns| {
                            for (column, feature) in
                                columns.iter_mut().zip(prompts::INTRO_FEATURES.iter())
                            {
                                card(column, |ui| {
                                    ui.label(egui::RichText::new(feature.title).strong());
                                    ui.label(feature.description);
                                });
                            }
                        });

                        ui.add_space(20.0);
                        let cta = egui::Button::new(
                            egui::RichText::new(prompts::INTRO_CTA).size(18.0),
                        )
                        .min_size(egui::vec2(240.0, 40.0));
                        if ui.add(cta).clicked() {
                            begin = true;
                        }
                        ui.weak(prompts::INTRO_DURATION);
                    });
                });
        });

        if begin {
            self.dispatch(Intent::Continue);
        }
    }

    fn show_form_screen(&mut self, ctx: &egui::Context) {
        let mut intent = None;
        let today = Local::now().date_naive();
        let Some(form) = self.session.form_mut() else {
            return;
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CARD_WIDTH);
                        ui.add_space(16.0);
                        ui.heading(prompts::FORM_TITLE);
                        ui.weak(prompts::FORM_SUBTITLE);
                    });
                    ui.add_space(12.0);

                    for prompt in PROMPTS.iter() {
                        card(ui, |ui| {
                            prompt_header(ui, prompt);
                            show_field(ui, prompt, form, today);
                        });
                        ui.add_space(8.0);
                    }

                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Back").clicked() {
                            intent = Some(Intent::Back);
                        }
                        let submit = ui.add_enabled(
                            form.is_valid(),
                            egui::Button::new(
                                egui::RichText::new(prompts::SUBMIT_LABEL).strong(),
                            ),
                        );
                        if submit.clicked() {
                            intent = Some(Intent::Submit);
                        }
                    });

                    if !form.is_valid() {
                        ui.add_space(4.0);
                        ui.weak(prompts::REQUIRED_NOTE);
                        for requirement in form.missing_requirements() {
                            ui.weak(format!("• {requirement}"));
                        }
                    }
                    ui.add_space(24.0);
                });
        });

        if let Some(intent) = intent {
            self.dispatch(intent);
        }
    }

    fn show_summary_screen(&mut self, ctx: &egui::Context) {
        let Some(grouping) = self.session.summary() else {
            return;
        };
        let header = self.header();
        let mut action = None;
        let mut restart = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CARD_WIDTH);
                        ui.add_space(16.0);
                        ui.label(egui::RichText::new(SUMMARY_HEADING).size(26.0).strong());
                        ui.weak(&header.event_title);
                        ui.label(SUMMARY_INTRO);
                    });
                    ui.add_space(12.0);

                    for section in grouping.sections() {
                        card(ui, |ui| {
                            ui.label(egui::RichText::new(section.title).strong().size(16.0));
                            ui.add_space(4.0);
                            show_section_body(ui, &section.body);
                        });
                        ui.add_space(8.0);
                    }

                    ui.add_space(8.0);
                    ui.horizontal_wrapped(|ui| {
                        let idle = !self.export_in_flight;
                        if ui.add_enabled(idle, egui::Button::new("Download Summary")).clicked() {
                            action = Some(SummaryAction::Download);
                        }
                        if ui.add_enabled(idle, egui::Button::new("Save As...")).clicked() {
                            action = Some(SummaryAction::SaveAs);
                        }
                        if ui.add_enabled(idle, egui::Button::new("Share")).clicked() {
                            action = Some(SummaryAction::Share);
                        }
                        ui.hyperlink_to("Next Steps & Resources", &self.settings.resources_url);
                        if ui.button("Start Over").clicked() {
                            restart = true;
                        }
                    });

                    ui.add_space(12.0);
                    ui.separator();
                    ui.weak(format!(
                        "Generated on {}",
                        wizard_core::dates::full_date(header.generated_on)
                    ));
                    ui.weak(SUMMARY_FOOTNOTE);
                });
        });

        if let Some(action) = action {
            self.request_export(action, grouping);
        }
        if restart {
            self.dispatch(Intent::Restart);
        }
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        if self.status.is_empty() {
            return;
        }
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.status);
        });
    }
}

impl eframe::App for SotlWizardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_status_bar(ctx);

        match self.session.screen_id() {
            ScreenId::Intro => self.show_intro_screen(ctx),
            ScreenId::Form => self.show_form_screen(ctx),
            ScreenId::Summary => self.show_summary_screen(ctx),
        }

        if self.export_in_flight {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn card(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui)) {
    let fill = ui.visuals().faint_bg_color;
    let stroke = ui.visuals().widgets.noninteractive.bg_stroke.color;
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(12.0)
        .stroke(egui::Stroke::new(1.0, stroke))
        .inner_margin(egui::Margin::symmetric(14, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add(ui);
        });
}

fn prompt_header(ui: &mut egui::Ui, prompt: &Prompt) {
    let title = if prompt.required {
        format!("{} *", prompt.title)
    } else {
        prompt.title.to_string()
    };
    ui.label(egui::RichText::new(title).strong().size(16.0));
    ui.weak(prompt.description);
    ui.add_space(4.0);
}

fn show_field(
    ui: &mut egui::Ui,
    prompt: &Prompt,
    form: &mut FormCollector,
    today: NaiveDate,
) {
    match prompt.field {
        FieldName::Problem | FieldName::NextStep => {
            let is_problem = prompt.field == FieldName::Problem;
            let mut text = if is_problem {
                form.answers().problem.clone()
            } else {
                form.answers().next_step.clone()
            };
            let edit = egui::TextEdit::multiline(&mut text)
                .id_salt(prompt.field.key())
                .hint_text(prompt.placeholder)
                .desired_rows(3)
                .desired_width(f32::INFINITY);
            if ui.add(edit).changed() {
                form.set_field(if is_problem {
                    FieldUpdate::Problem(text)
                } else {
                    FieldUpdate::NextStep(text)
                });
            }
        }
        FieldName::Collaborator => {
            let current = form.answers().collaborator;
            let mut selected = current;
            egui::ComboBox::from_id_salt("collaborator")
                .selected_text(current.map_or(prompt.placeholder, Collaborator::label))
                .width(320.0)
                .show_ui(ui, |ui| {
                    for option in Collaborator::ALL {
                        ui.selectable_value(&mut selected, Some(*option), option.label());
                    }
                });
            if selected != current {
                form.set_field(FieldUpdate::Collaborator(selected));
            }

            if form.shows_custom_collaborator() {
                let mut custom = form.answers().custom_collaborator.clone().unwrap_or_default();
                if custom_text(ui, "custom_collaborator", &mut custom) {
                    form.set_field(FieldUpdate::CustomCollaborator(custom));
                }
            }
        }
        FieldName::DataSources => {
            for source in DataSource::ALL {
                let member = SetMember::DataSource(*source);
                let mut checked = form.contains(member);
                if ui.checkbox(&mut checked, source.label()).changed() {
                    form.toggle_set_member(member, checked);
                }
            }

            if form.shows_custom_data_source() {
                let mut custom = form.answers().custom_data_source.clone().unwrap_or_default();
                if custom_text(ui, "custom_data_source", &mut custom) {
                    form.set_field(FieldUpdate::CustomDataSource(custom));
                }
            }
        }
        FieldName::FeltenPrinciples => {
            for principle in FeltenPrinciple::ALL {
                let member = SetMember::Principle(*principle);
                let mut checked = form.contains(member);
                if ui.checkbox(&mut checked, principle.label()).changed() {
                    form.toggle_set_member(member, checked);
                }
                ui.indent(principle.id(), |ui| {
                    ui.weak(principle.description());
                });
            }
        }
        FieldName::Timeline => {
            ui.horizontal(|ui| {
                let mut date = picker_start(form, today);
                let picker = egui_extras::DatePickerButton::new(&mut date)
                    .id_salt("timeline")
                    .calendar_week(false);
                if ui.add(picker).changed() {
                    form.set_field(FieldUpdate::Timeline(Some(date)));
                }
                match form.answers().timeline {
                    Some(chosen) => {
                        ui.label(long_date(chosen));
                        if ui.small_button("Clear").clicked() {
                            form.set_field(FieldUpdate::Timeline(None));
                        }
                    }
                    None => {
                        ui.weak(prompt.placeholder);
                    }
                }
            });
        }
        FieldName::CustomCollaborator | FieldName::CustomDataSource => {}
    }
}

fn custom_text(ui: &mut egui::Ui, id: &str, value: &mut String) -> bool {
    let edit = egui::TextEdit::singleline(value)
        .id_salt(id)
        .hint_text(prompts::CUSTOM_PLACEHOLDER)
        .desired_width(f32::INFINITY);
    ui.add(edit).changed()
}

/// Date the picker opens on: the chosen timeline, or today while unset.
fn picker_start(form: &FormCollector, today: NaiveDate) -> NaiveDate {
    form.answers().timeline.unwrap_or(today)
}

fn show_section_body(ui: &mut egui::Ui, body: &SectionBody) {
    match body {
        SectionBody::Quote(text) => {
            ui.label(egui::RichText::new(format!("\"{text}\"")).italics());
        }
        SectionBody::Text(text) => {
            ui.label(text);
        }
        SectionBody::Checklist(items) => {
            for item in items {
                ui.label(format!("✓ {item}"));
            }
        }
        SectionBody::Badges(badges) => {
            ui.horizontal_wrapped(|ui| {
                for badge in badges {
                    let visuals = ui.visuals();
                    let frame = match badge.style {
                        BadgeStyle::Secondary => {
                            egui::Frame::NONE.fill(visuals.widgets.inactive.weak_bg_fill)
                        }
                        BadgeStyle::Outline => egui::Frame::NONE.stroke(egui::Stroke::new(
                            1.0,
                            visuals.widgets.noninteractive.bg_stroke.color,
                        )),
                    };
                    frame
                        .corner_radius(10.0)
                        .inner_margin(egui::Margin::symmetric(8, 3))
                        .show(ui, |ui| {
                            ui.label(&badge.text);
                        });
                }
            });
        }
    }
}
