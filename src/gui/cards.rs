use chrono::Datelike;
use eframe::egui::{
    self,
    text::LayoutJob,
    Color32,
    FontId,
    Frame,
    RichText,
    TextFormat,
    Ui,
};
use egui_flex::{
    item,
    Flex,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::directory::{
    card::{
        Tag,
        TagStyle,
    },
    highlight::Segment,
    DirectoryView,
    MentorCard,
};

const CARD_WIDTH: f32 = 300.0;
const AVATAR_SIZE: f32 = 40.0;

fn segments_job(segments: &[Segment], font: FontId, color: Color32, mark: Color32) -> LayoutJob {
    let mut job = LayoutJob::default();
    for segment in segments {
        let format = TextFormat {
            font_id: font.clone(),
            color,
            background: if segment.marked { mark } else { Color32::TRANSPARENT },
            ..Default::default()
        };
        job.append(&segment.text, 0.0, format);
    }
    job
}

pub fn summary_line(ui: &mut Ui, view: &DirectoryView, mentor_count: usize, domain_count: usize) {
    ui.horizontal(|ui| {
        ui.strong(format!("{} results", view.total_matches));
        ui.weak(format!("{mentor_count} mentors · {domain_count} domains"));
    });
}

/// `cards` lines up with `view.shown`.
pub fn card_grid(
    ui: &mut Ui,
    theme: &Theme,
    view: &DirectoryView,
    cards: &[MentorCard],
    actions: &mut ActionQueue,
) {
    if view.is_empty() {
        empty_state(ui);
        return;
    }

    Flex::horizontal().wrap(true).show(ui, |flex| {
        for (&index, card) in view.shown.iter().zip(cards) {
            flex.add_ui(item(), |ui| mentor_card(ui, theme, index, card, actions));
        }
    });

    if let Some(label) = view.load_more_label() {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            if ui.button(label).clicked() {
                actions.push(UiAction::LoadMore);
            }
        });
    }
}

fn empty_state(ui: &mut Ui) {
    Frame::group(ui.style()).inner_margin(16.0).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.heading("No mentors found");
            ui.weak("Try clearing filters or searching a broader term.");
        });
    });
}

fn mentor_card(
    ui: &mut Ui,
    theme: &Theme,
    index: usize,
    card: &MentorCard,
    actions: &mut ActionQueue,
) {
    let ctx = ui.ctx().clone();
    let mark = theme.mark(&ctx);
    let text = ui.visuals().text_color();

    Frame::new()
        .fill(theme.card(&ctx))
        .stroke(egui::Stroke::new(1.0, theme.card_stroke(&ctx)))
        .corner_radius(12.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);

            ui.horizontal(|ui| {
                avatar(ui, theme, &card.initials);

                ui.vertical(|ui| {
                    ui.label(segments_job(&card.name, FontId::proportional(16.0), text, mark));
                    ui.label(segments_job(
                        &card.subtitle,
                        FontId::proportional(12.0),
                        theme.muted(&ctx),
                        mark,
                    ));
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    let (star, hint) = if card.favorite {
                        (RichText::new("★").color(theme.gold(&ctx)), "Remove from favorites")
                    } else {
                        (RichText::new("☆"), "Add to favorites")
                    };
                    let fav = egui::Button::new(star.size(18.0)).fill(Color32::TRANSPARENT);
                    if ui.add(fav).on_hover_text(hint).clicked() {
                        actions.push(UiAction::ToggleFavorite(card.id.clone()));
                    }
                });
            });

            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(4.0, 4.0);
                for tag in &card.tags {
                    tag_pill(ui, theme, tag);
                }
            });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.small(RichText::new(&card.footer).color(theme.muted(&ctx)));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let view = ui.button("View details");
                    if view.clicked() {
                        actions.push(UiAction::OpenDetails { index, opener: view.id });
                    }
                });
            });
        });
}

fn avatar(ui: &mut Ui, theme: &Theme, initials: &str) {
    let ctx = ui.ctx().clone();
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), AVATAR_SIZE / 2.0, theme.gold_soft(&ctx));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        FontId::proportional(15.0),
        theme.primary(&ctx),
    );
}

fn tag_pill(ui: &mut Ui, theme: &Theme, tag: &Tag) {
    let ctx = ui.ctx().clone();
    let (fill, color, strong) = match tag.style {
        TagStyle::Gold => (theme.gold_soft(&ctx), theme.gold(&ctx), false),
        TagStyle::Primary => (Color32::TRANSPARENT, theme.primary(&ctx), true),
        TagStyle::Plain => (Color32::TRANSPARENT, ui.visuals().text_color(), false),
    };

    Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, theme.card_stroke(&ctx)))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            let mut text = RichText::new(&tag.text).size(11.0).color(color);
            if strong {
                text = text.strong();
            }
            ui.label(text);
        });
}

pub fn footer(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.small(format!("© {} Mentor Portal", chrono::Local::now().year()));
    });
}
