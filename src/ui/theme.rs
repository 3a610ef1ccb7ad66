//! Theme and styling for the UI

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

/// Application color palette
pub struct Theme;

impl Theme {
    // Accent
    pub const PRIMARY: Color32 = Color32::from_rgb(37, 99, 235); // Blue-600
    pub const PRIMARY_DARK: Color32 = Color32::from_rgb(29, 78, 216); // Blue-700

    // Status colors
    pub const SUCCESS: Color32 = Color32::from_rgb(16, 185, 129); // Emerald-500
    pub const WARNING: Color32 = Color32::from_rgb(245, 158, 11); // Amber-500
    pub const ERROR: Color32 = Color32::from_rgb(244, 63, 94); // Rose-500
    pub const INFO: Color32 = Color32::from_rgb(6, 182, 212); // Cyan-500

    // Window chrome, close to the classic admin console greys
    pub const BG_WINDOW: Color32 = Color32::from_rgb(245, 245, 245); // #f5f5f5
    pub const BG_HEADER: Color32 = Color32::from_rgb(225, 225, 225); // #e1e1e1
    pub const BG_HEADER_HOVER: Color32 = Color32::from_rgb(209, 209, 209); // #d1d1d1
    pub const BG_TABLE: Color32 = Color32::WHITE;
    pub const BG_ELEVATED: Color32 = Color32::WHITE;

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39); // Gray-900
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(75, 85, 99); // Gray-600
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 114, 128); // Gray-500

    pub const BORDER: Color32 = Color32::from_rgb(209, 213, 219); // Gray-300

    /// Apply light theme to egui
    pub fn apply_light(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let mut visuals = Visuals::light();

        visuals.panel_fill = Self::BG_WINDOW;
        visuals.window_fill = Self::BG_ELEVATED;
        visuals.extreme_bg_color = Self::BG_TABLE;
        visuals.faint_bg_color = Color32::from_rgb(248, 248, 248);

        visuals.widgets.noninteractive.bg_fill = Self::BG_WINDOW;
        visuals.widgets.noninteractive.weak_bg_fill = Color32::from_rgb(240, 240, 240); // menu bar
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.5, Self::BORDER);

        visuals.widgets.inactive.bg_fill = Self::BG_HEADER;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.inactive.rounding = Rounding::same(3.0);

        visuals.widgets.hovered.bg_fill = Self::BG_HEADER_HOVER;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.hovered.rounding = Rounding::same(3.0);

        visuals.widgets.active.bg_fill = Self::PRIMARY;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, Self::PRIMARY_DARK);

        visuals.selection.bg_fill = Self::PRIMARY.linear_multiply(0.25);
        visuals.selection.stroke = Stroke::new(1.0, Self::PRIMARY);

        visuals.window_rounding = Rounding::same(6.0);
        visuals.window_stroke = Stroke::new(0.5, Self::BORDER);
        visuals.striped = true;

        style.visuals = visuals;
        Self::apply_text_and_spacing(&mut style);
        ctx.set_style(style);
    }

    /// Apply dark theme to egui
    pub fn apply_dark(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let mut visuals = Visuals::dark();

        visuals.selection.bg_fill = Self::PRIMARY.linear_multiply(0.4);
        visuals.selection.stroke = Stroke::new(1.0, Self::PRIMARY);
        visuals.window_rounding = Rounding::same(6.0);
        visuals.striped = true;

        style.visuals = visuals;
        Self::apply_text_and_spacing(&mut style);
        ctx.set_style(style);
    }

    fn apply_text_and_spacing(style: &mut egui::Style) {
        // Arial 9pt in the classic console reads roughly like 13px here
        style.text_styles = [
            (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(13.0, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(13.0, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(16.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace)),
        ]
        .into();

        style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        style.spacing.window_margin = egui::Margin::same(20.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);
        style.interaction.tooltip_delay = 0.3;
    }

    /// Apply the theme stored in settings
    pub fn apply(ctx: &egui::Context, theme: crate::core::settings::Theme) {
        match theme {
            crate::core::settings::Theme::Light => Self::apply_light(ctx),
            crate::core::settings::Theme::Dark => Self::apply_dark(ctx),
        }
    }
}

/// Fills and text colors for the window chrome, read from the active visuals
/// so the menu bar, toolbar and toasts follow the light or dark theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chrome {
    pub menu_fill: Color32,
    pub panel_fill: Color32,
    pub tab_fill: Color32,
    pub surface_fill: Color32,
    pub border: Color32,
    pub text: Color32,
}

impl Chrome {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            menu_fill: visuals.widgets.noninteractive.weak_bg_fill,
            panel_fill: visuals.panel_fill,
            tab_fill: visuals.widgets.inactive.bg_fill,
            surface_fill: visuals.window_fill,
            border: visuals.widgets.noninteractive.bg_stroke.color,
            text: visuals.text_color(),
        }
    }
}

/// Icon characters (using Unicode symbols)
pub struct Icons;

impl Icons {
    pub const CLOSE: &'static str = "×";
    pub const ADD: &'static str = "+";
    pub const FILTER: &'static str = "⚖";
    pub const EDIT: &'static str = "✎";
    pub const TRASH: &'static str = "🗑";
    pub const INFO: &'static str = "ℹ";
    pub const SUCCESS: &'static str = "✓";
    pub const WARNING: &'static str = "⚠";
    pub const ERROR: &'static str = "✕";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::Theme as SettingsTheme;

    fn chrome_for(theme: SettingsTheme) -> Chrome {
        let ctx = egui::Context::default();
        Theme::apply(&ctx, theme);
        Chrome::from_visuals(&ctx.style().visuals)
    }

    #[test]
    fn test_light_chrome_uses_palette() {
        let chrome = chrome_for(SettingsTheme::Light);
        assert_eq!(chrome.panel_fill, Theme::BG_WINDOW);
        assert_eq!(chrome.surface_fill, Theme::BG_ELEVATED);
        assert_eq!(chrome.text, Theme::TEXT_PRIMARY);
    }

    #[test]
    fn test_dark_chrome_follows_dark_visuals() {
        let chrome = chrome_for(SettingsTheme::Dark);
        assert_ne!(chrome.surface_fill, Theme::BG_ELEVATED);
        assert_ne!(chrome.text, Theme::TEXT_PRIMARY);
        // Light text on a dark surface
        assert!(chrome.text.r() > chrome.surface_fill.r());
        assert!(chrome.menu_fill.r() < 128);
    }
}
