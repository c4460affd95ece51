//! Reusable UI components shared by the panel and the imitator.

use eframe::egui::{self, RichText, Sense, Ui};

use super::theme::Theme;

/// Render a titled card around `add_contents`.
pub fn card<R>(
    ui: &mut Ui,
    theme: &Theme,
    title: &str,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> R {
    egui::Frame::new()
        .fill(theme.bg_card)
        .inner_margin(egui::Margin::same(theme.spacing.card_padding as i8))
        .corner_radius(egui::CornerRadius::same(theme.rounding.md as u8))
        .stroke(egui::Stroke::new(1.0, theme.border_subtle))
        .show(ui, |ui| {
            ui.set_min_width(180.0);
            ui.label(
                RichText::new(title)
                    .color(theme.text_muted)
                    .size(theme.typography.caption),
            );
            ui.add_space(theme.spacing.xs);
            add_contents(ui)
        })
        .inner
}

/// Render a large value with its unit symbol.
pub fn readout(ui: &mut Ui, theme: &Theme, value: &str, unit: &str) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(value)
                .color(theme.text_primary)
                .size(theme.typography.readout)
                .strong(),
        );
        if !unit.is_empty() {
            ui.label(
                RichText::new(unit)
                    .color(theme.text_muted)
                    .size(theme.typography.body),
            );
        }
    });
}

/// Render one button of an exclusive option group. Returns `true` when an
/// unselected option is clicked.
pub fn option_button(ui: &mut Ui, theme: &Theme, label: &str, selected: bool) -> bool {
    let (bg, text_color) = if selected {
        (theme.accent, theme.text_on_accent)
    } else {
        (theme.bg_secondary, theme.text_secondary)
    };
    let button = egui::Button::new(
        RichText::new(label)
            .size(theme.typography.caption)
            .color(text_color),
    )
    .fill(bg)
    .corner_radius(egui::CornerRadius::same(theme.rounding.sm as u8));

    ui.add(button).clicked() && !selected
}

/// Render a block health indicator.
pub fn block_indicator(ui: &mut Ui, theme: &Theme, label: &str, ok: bool) {
    let size = egui::vec2(28.0, 28.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().rect(
            rect,
            egui::CornerRadius::same(theme.rounding.sm as u8),
            theme.block_color(ok),
            egui::Stroke::new(1.0, theme.border),
            egui::StrokeKind::Inside,
        );
    }
    let status = if ok { "OK" } else { "Fault" };
    response.on_hover_text(format!("{label}: {status}"));
    ui.label(
        RichText::new(label)
            .color(theme.text_secondary)
            .size(theme.typography.caption),
    );
}
