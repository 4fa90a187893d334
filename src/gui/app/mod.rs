mod modals;

use eframe::egui;
use modals::Modals;
use rfd::FileDialog;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    cards,
    chips::chip_bar,
    controls::controls_row,
    detail_modal::DetailAction,
    theme::{
        apply_dark_mode,
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    session::DirectorySession,
    settings::Settings,
};

pub struct PortalApp {
    // Directory
    pub session: DirectorySession,

    // Configuration
    pub settings: Settings,

    // UI State
    pub theme: Theme,
    pub modals: Modals,
    actions: ActionQueue,
}

impl PortalApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        session: DirectorySession,
        settings: Settings,
    ) -> Self {
        let app = Self {
            session,
            settings,
            theme: Theme::portal(),
            modals: Modals::default(),
            actions: ActionQueue::new(),
        };

        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);
        set_theme(&cc.egui_ctx, &app.theme);
        apply_dark_mode(&cc.egui_ctx, app.settings.dark_mode);

        app
    }
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut dark_mode = self.settings.dark_mode;
        TopBar::show(ctx, &mut self.actions, &mut dark_mode, &self.session.share_link());
        if dark_mode != self.settings.dark_mode {
            self.settings.dark_mode = dark_mode;
            apply_dark_mode(ctx, dark_mode);
            self.save_settings();
        }

        egui::TopBottomPanel::bottom("footer_panel").show(ctx, cards::footer);

        egui::CentralPanel::default().show(ctx, |ui| {
            let session = &self.session;
            let view = session.view();

            ui.heading(self.theme.heading(ui.ctx(), "Mentor Directory"));
            ui.add_space(6.0);

            controls_row(ui, session.state(), &view.counts, &mut self.actions);
            ui.add_space(6.0);
            let chips = &session.state().chips;
            chip_bar(ui, &self.theme, session.universe(), chips, &mut self.actions);
            ui.add_space(6.0);
            cards::summary_line(ui, view, session.mentors().len(), session.universe().len());
            ui.separator();

            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                cards::card_grid(ui, &self.theme, view, session.cards(), &mut self.actions);
            });
        });

        if let Some(DetailAction::RequestMentorship(link)) =
            self.modals.detail.show(ctx, &self.theme)
        {
            self.actions.push(UiAction::OpenRequestForm(Some(link)));
        }
        self.modals.notice.show(ctx);

        self.apply_actions(ctx);
    }
}

impl PortalApp {
    fn apply_actions(&mut self, ctx: &egui::Context) {
        if self.actions.is_empty() {
            return;
        }

        let pending: Vec<UiAction> = self.actions.drain().collect();
        for action in pending {
            self.handle_action(action, ctx);
        }
        ctx.request_repaint();
    }

    fn handle_action(&mut self, action: UiAction, ctx: &egui::Context) {
        match action {
            UiAction::SetQuery(query) => self.session.set_query(&query),
            UiAction::ToggleChip(label) => self.session.toggle_chip(&label),
            UiAction::SetSort(sort) => self.session.set_sort(sort),
            UiAction::SetAvailability(availability) => self.session.set_availability(availability),
            UiAction::ToggleFavoritesOnly => self.session.toggle_favorites_only(),
            UiAction::LoadMore => self.session.load_more(),
            UiAction::Clear => self.session.clear(),
            UiAction::ToggleFavorite(id) => self.session.toggle_favorite(&id),

            UiAction::OpenDetails { index, opener } => {
                if !self.settings.modal_dialogs {
                    self.modals.notice.show_info(
                        "Dialogs unavailable",
                        "Mentor details need dialog support. Please update your environment.",
                    );
                    return;
                }
                if let Some(details) = self.session.open_details(index) {
                    self.modals.detail.open(details, Some(opener));
                }
            }

            UiAction::OpenRequestForm(link) => {
                let link = link.or_else(|| self.session.request_form().map(str::to_string));
                match link.filter(|l| !l.is_empty() && l != "#") {
                    Some(url) => {
                        if let Err(e) = open::that(&url) {
                            tracing::warn!("Failed to open {url}: {e}");
                            self.modals.notice.show_error(
                                "Request Mentorship",
                                "Unable to open the request form",
                                Some(format!("{url}\n{e}")),
                            );
                        }
                    }
                    None => self.modals.notice.show_info(
                        "Request Mentorship",
                        "Please configure the mentorship request form link.",
                    ),
                }
            }

            UiAction::ExportPrintable => {
                let Some(path) = FileDialog::new()
                    .add_filter("HTML", &["html", "htm"])
                    .set_file_name("mentors.html")
                    .save_file()
                else {
                    return;
                };
                if let Err(e) = self.session.export_printable(&path) {
                    self.modals.notice.show_error(
                        "Export Error",
                        format!("Unable to write {}", path.display()),
                        Some(e.to_string()),
                    );
                }
            }

            UiAction::OpenMentorsFile => {
                let Some(path) = FileDialog::new().add_filter("Mentor list", &["json"]).pick_file()
                else {
                    return;
                };
                if let Err(e) = self.session.load_mentors_file(&path) {
                    tracing::warn!("Failed to load {}: {e}", path.display());
                    self.modals.notice.show_error(
                        "File Load Error",
                        format!("Unable to load mentors from {}", path.display()),
                        Some(e.to_string()),
                    );
                }
            }

            UiAction::CopyShareLink => {
                let link = self.session.share_link();
                tracing::debug!("Copied share link {link}");
                ctx.copy_text(link);
            }
        }
    }

    /// Only the theme choice is written back; command-line overrides stay
    /// out of the settings file.
    fn save_settings(&self) {
        let mut stored = Settings::load();
        stored.dark_mode = self.settings.dark_mode;
        if let Err(e) = stored.save() {
            tracing::warn!("Failed to save settings: {e}");
        }
    }
}
