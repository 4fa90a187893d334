use eframe::egui;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Error,
}

#[derive(Default, Clone)]
struct Notice {
    kind: NoticeKind,
    title: String,
    message: String,
    details: Option<String>,
}

/// Blocking message box for the few failures the user is told about.
pub struct NoticeModal {
    open: bool,
    notice: Notice,
}

impl NoticeModal {
    pub fn new() -> Self {
        Self { open: false, notice: Notice::default() }
    }

    pub fn show_info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.set(NoticeKind::Info, title.into(), message.into(), None);
    }

    pub fn show_error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        details: Option<impl Into<String>>,
    ) {
        self.set(NoticeKind::Error, title.into(), message.into(), details.map(Into::into));
    }

    fn set(&mut self, kind: NoticeKind, title: String, message: String, details: Option<String>) {
        tracing::debug!("Notice: {title}: {message}");
        self.notice = Notice { kind, title, message, details };
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.horizontal(|ui| {
                let (icon, color) = match self.notice.kind {
                    NoticeKind::Info => ("ℹ", ui.visuals().hyperlink_color),
                    NoticeKind::Error => ("⚠", ui.visuals().error_fg_color),
                };
                ui.label(egui::RichText::new(icon).size(22.0).color(color));
                ui.label(egui::RichText::new(&self.notice.title).size(18.0).strong());
            });

            ui.add_space(10.0);
            ui.label(&self.notice.message);

            if let Some(details) = &self.notice.details {
                ui.add_space(10.0);
                ui.collapsing("Details", |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut details.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(3)
                            .code_editor(),
                    );
                });
            }

            ui.add_space(15.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            self.notice = Notice::default();
        }
    }
}

impl Default for NoticeModal {
    fn default() -> Self {
        Self::new()
    }
}
