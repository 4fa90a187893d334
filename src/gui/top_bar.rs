use eframe::egui::{
    self,
    containers,
};

use super::actions::{
    ActionQueue,
    UiAction,
};

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        actions: &mut ActionQueue,
        dark_mode: &mut bool,
        share_link: &str,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Mentors File…").clicked() {
                        actions.push(UiAction::OpenMentorsFile);
                    }
                    if ui.button("Export Printable Page…").clicked() {
                        actions.push(UiAction::ExportPrintable);
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                if ui.button("Request Mentorship").clicked() {
                    actions.push(UiAction::OpenRequestForm(None));
                }

                if ui.button("🔗 Copy Share Link").on_hover_text(share_link).clicked() {
                    actions.push(UiAction::CopyShareLink);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if *dark_mode { "☀" } else { "🌙" };
                    if ui.button(icon).on_hover_text("Toggle dark mode").clicked() {
                        *dark_mode = !*dark_mode;
                    }
                });
            });
        });
    }
}
