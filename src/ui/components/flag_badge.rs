//! Flag badge component - Boolean cells (Locked, Is demo) drawn as small pills

use egui::{Color32, Response, Rounding, Ui, Vec2};

use crate::core::account::bool_text;
use crate::ui::theme::Theme;

pub struct FlagBadge;

impl FlagBadge {
    /// Render a boolean cell. The visible text is the raw cell text so the
    /// table shows exactly what sort and filter compare against.
    pub fn show(ui: &mut Ui, value: bool, on_color: Color32) -> Response {
        let color = if value { on_color } else { Theme::TEXT_MUTED };
        let label = bool_text(value);

        let (rect, response) = ui.allocate_exact_size(Vec2::new(54.0, 18.0), egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            painter.rect_filled(rect, Rounding::same(9.0), color.linear_multiply(0.15));
            painter.rect_stroke(
                rect,
                Rounding::same(9.0),
                egui::Stroke::new(1.0, color.linear_multiply(0.4)),
            );
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                label,
                egui::FontId::proportional(11.0),
                color,
            );
        }

        response
    }
}
