use eframe::egui::{
    self,
    Id,
    Key,
    Modifiers,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    focus::FocusTrap,
    theme::Theme,
};
use crate::directory::MentorDetails;

pub enum DetailAction {
    RequestMentorship(String),
}

/// The shared mentor dialog. Focus is trapped inside while it is open and
/// handed back to the widget that opened it on close.
pub struct DetailModal {
    details: Option<MentorDetails>,
    opener: Option<Id>,
    focus_close_button: bool,
    last_focused: Option<Id>,
}

impl DetailModal {
    pub fn new() -> Self {
        Self { details: None, opener: None, focus_close_button: false, last_focused: None }
    }

    pub fn open(&mut self, details: MentorDetails, opener: Option<Id>) {
        tracing::debug!("Opening details for mentor {}", details.id);
        self.details = Some(details);
        self.opener = opener;
        self.focus_close_button = true;
        self.last_focused = None;
    }

    pub fn close(&mut self, ctx: &egui::Context) {
        self.details = None;
        if let Some(opener) = self.opener.take() {
            ctx.memory_mut(|m| m.request_focus(opener));
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> Option<DetailAction> {
        let details = self.details.clone()?;

        // Shift+Tab has to be checked first: a plain Tab pattern also matches
        // when shift is held.
        let tab = ctx.input_mut(|i| {
            if i.consume_key(Modifiers::SHIFT, Key::Tab) {
                Some(true)
            } else if i.consume_key(Modifiers::NONE, Key::Tab) {
                Some(false)
            } else {
                None
            }
        });

        let mut action = None;
        let mut focusable = Vec::new();

        let modal = egui::Modal::new(Id::new("mentor_detail_modal")).show(ctx, |ui| {
            ui.set_width(480.0);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(theme.heading(ui.ctx(), &details.name).size(20.0));
                    ui.label(egui::RichText::new(&details.role_line).color(theme.muted(ui.ctx())));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    let close = ui.button("✖").on_hover_text("Close");
                    if self.focus_close_button {
                        close.request_focus();
                        self.focus_close_button = false;
                    }
                    if close.clicked() {
                        ui.close();
                    }
                    focusable.push(close.id);
                });
            });

            ui.separator();

            let rows = [
                ("Organization", details.org.as_str()),
                ("Class of", details.year.as_str()),
                ("Interests", details.interests.as_str()),
                ("Mode", details.mode.as_str()),
                ("Availability", details.availability.as_str()),
            ];

            TableBuilder::new(ui)
                .id_salt("mentor_detail_fields")
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::exact(110.0))
                .column(Column::remainder())
                .body(|mut body| {
                    for (label, value) in rows {
                        body.row(22.0, |mut row| {
                            row.col(|ui| {
                                ui.strong(label);
                            });
                            row.col(|ui| {
                                ui.add(egui::Label::new(value).truncate());
                            });
                        });
                    }
                });

            ui.add_space(8.0);
            ui.strong("Notes");
            ui.label(&details.notes);
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let request = ui.add_enabled(
                    details.has_request_link(),
                    egui::Button::new(
                        egui::RichText::new("Request mentorship").color(theme.primary(ui.ctx())),
                    ),
                );
                if request.clicked() {
                    action = Some(DetailAction::RequestMentorship(details.request_link.clone()));
                }
                if details.has_request_link() {
                    focusable.push(request.id);
                } else {
                    ui.small("No request link configured");
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let done = ui.button("Done");
                    if done.clicked() {
                        ui.close();
                    }
                    focusable.push(done.id);
                });
            });
        });

        let trap = FocusTrap::new(focusable);
        if let Some(backwards) = tab {
            if let Some(target) = trap.next(self.last_focused, backwards) {
                ctx.memory_mut(|m| m.request_focus(target));
                self.last_focused = Some(target);
            }
        } else if let Some(focused) = ctx.memory(|m| m.focused()).filter(|&id| trap.contains(id)) {
            self.last_focused = Some(focused);
        }

        if modal.should_close() {
            tracing::debug!("Closing details for mentor {}", details.id);
            self.close(ctx);
        }

        action
    }
}

impl Default for DetailModal {
    fn default() -> Self {
        Self::new()
    }
}
