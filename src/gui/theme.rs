use eframe::egui::{
    self,
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    RichText,
    Stroke,
    Visuals,
};

/// Portal palette, one set of colors per egui theme.
#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::portal()
    }
}

impl Theme {
    pub fn portal() -> Self {
        Self { dark: Palette::navy_night(), light: Palette::ivory() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).primary).strong()
    }

    pub fn primary(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).primary
    }

    pub fn gold(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).gold
    }

    pub fn gold_soft(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).gold_soft
    }

    pub fn mark(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).mark
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).muted
    }

    pub fn card(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).card
    }

    pub fn card_stroke(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).card_stroke
    }

    pub fn danger(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).danger
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    panel: Color32,
    card: Color32,
    card_stroke: Color32,
    foreground: Color32,
    muted: Color32,
    primary: Color32,
    gold: Color32,
    gold_soft: Color32,
    mark: Color32,
    selection: Color32,
    danger: Color32,
}

impl Palette {
    fn navy_night() -> Self {
        Self {
            background: Color32::from_rgb(0x0a, 0x16, 0x2e),
            panel: Color32::from_rgb(0x0d, 0x1d, 0x3a),
            card: Color32::from_rgb(0x12, 0x26, 0x4a),
            card_stroke: Color32::from_rgb(0x23, 0x3b, 0x66),
            foreground: Color32::from_rgb(0xe8, 0xee, 0xf7),
            muted: Color32::from_rgb(0x94, 0xa3, 0xb8),
            primary: Color32::from_rgb(0x9c, 0xc3, 0xff),
            gold: Color32::from_rgb(0xe0, 0xb8, 0x4c),
            gold_soft: Color32::from_rgb(0x4a, 0x3d, 0x1c),
            mark: Color32::from_rgb(0x6b, 0x55, 0x12),
            selection: Color32::from_rgb(0x1f, 0x3f, 0x73),
            danger: Color32::from_rgb(0xf8, 0x71, 0x71),
        }
    }

    fn ivory() -> Self {
        Self {
            background: Color32::from_rgb(0xf8, 0xfa, 0xfc),
            panel: Color32::from_rgb(0xff, 0xff, 0xff),
            card: Color32::from_rgb(0xff, 0xff, 0xff),
            card_stroke: Color32::from_rgb(0xe2, 0xe8, 0xf0),
            foreground: Color32::from_rgb(0x0f, 0x17, 0x2a),
            muted: Color32::from_rgb(0x64, 0x74, 0x8b),
            primary: Color32::from_rgb(0x0b, 0x2a, 0x5b),
            gold: Color32::from_rgb(0xb8, 0x8a, 0x1e),
            gold_soft: Color32::from_rgb(0xf6, 0xec, 0xd6),
            mark: Color32::from_rgb(0xfd, 0xe6, 0x8a),
            selection: Color32::from_rgb(0xdb, 0xe7, 0xfb),
            danger: Color32::from_rgb(0xc0, 0x39, 0x2b),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn widget(base: WidgetVisuals, fill: Color32, stroke: Color32, text: Color32) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke: Stroke { color: stroke, ..base.bg_stroke },
        fg_stroke: Stroke { color: text, ..base.fg_stroke },
        ..base
    }
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };
    let p = palette;

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    default.widgets.noninteractive,
                    p.background,
                    p.card_stroke,
                    p.foreground,
                ),
                inactive: widget(default.widgets.inactive, p.card, p.card_stroke, p.foreground),
                hovered: widget(default.widgets.hovered, p.selection, p.primary, p.foreground),
                active: widget(default.widgets.active, p.selection, p.gold, p.foreground),
                open: widget(default.widgets.open, p.panel, p.primary, p.foreground),
            },
            selection: Selection {
                bg_fill: p.selection,
                stroke: Stroke { color: p.primary, ..default.selection.stroke },
            },
            hyperlink_color: p.primary,
            faint_bg_color: p.panel,
            extreme_bg_color: p.background,
            error_fg_color: p.danger,
            warn_fg_color: p.gold,
            window_shadow: Shadow { color: Color32::from_black_alpha(60), ..default.window_shadow },
            window_fill: p.panel,
            window_stroke: Stroke { color: p.card_stroke, ..default.window_stroke },
            panel_fill: p.background,
            ..default
        },
    );
}

/// Switches between the registered dark and light variants.
pub fn apply_dark_mode(ctx: &egui::Context, dark_mode: bool) {
    let (theme, preference) = if dark_mode {
        (egui::Theme::Dark, egui::ThemePreference::Dark)
    } else {
        (egui::Theme::Light, egui::ThemePreference::Light)
    };
    ctx.set_theme(theme);
    ctx.options_mut(|o| o.theme_preference = preference);
}
