//! Device imitator window.
//!
//! Rendered as an immediate child viewport while the unit is on. Edits go
//! through [`DeviceSimulator`], whose input masks decide what the fields
//! accept; the panel picks the queued edits up after the window is drawn.

use conditioner_core::DeviceSimulator;
use conditioner_types::Block;
use eframe::egui::{self, RichText};
use tracing::info;

use crate::app::ConditionerApp;
use crate::components;
use crate::theme::Theme;

const IMITATOR_TITLE: &str = "Imitator";

impl ConditionerApp {
    /// Show the imitator window. Closing it turns the unit off.
    pub(crate) fn show_imitator(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();
        let mut close_requested = false;

        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("device_imitator"),
            egui::ViewportBuilder::default()
                .with_title(IMITATOR_TITLE)
                .with_inner_size([320.0, 360.0])
                .with_min_inner_size([280.0, 300.0]),
            |ctx, _class| {
                if ctx.input(|i| i.viewport().close_requested()) {
                    close_requested = true;
                }
                egui::CentralPanel::default()
                    .frame(
                        egui::Frame::new()
                            .fill(theme.bg_primary)
                            .inner_margin(egui::Margin::same(theme.spacing.md as i8)),
                    )
                    .show(ctx, |ui| {
                        if let Some(simulator) = self.panel.simulator_mut() {
                            render_imitator(ui, &theme, simulator);
                        }
                    });
            },
        );

        if close_requested {
            info!("Imitator window closed");
            self.panel.power_off();
        }
    }
}

fn render_imitator(ui: &mut egui::Ui, theme: &Theme, simulator: &mut DeviceSimulator) {
    components::card(ui, theme, "Sensors", |ui| {
        egui::Grid::new("imitator_fields")
            .num_columns(2)
            .spacing([theme.spacing.md, theme.spacing.sm])
            .show(ui, |ui| {
                ui.label("Temperature");
                let mut temperature = simulator.temperature();
                let response = ui.add(
                    egui::DragValue::new(&mut temperature)
                        .speed(0.1)
                        .max_decimals(2),
                );
                if response.changed() {
                    simulator.edit_temperature(temperature);
                }
                ui.end_row();

                ui.label("Humidity, %");
                let mut humidity = simulator.humidity().to_string();
                if ui
                    .add(egui::TextEdit::singleline(&mut humidity).desired_width(90.0))
                    .changed()
                {
                    simulator.edit_humidity(&humidity);
                }
                ui.end_row();

                ui.label("Pressure");
                let mut pressure = simulator.pressure().to_string();
                if ui
                    .add(egui::TextEdit::singleline(&mut pressure).desired_width(90.0))
                    .changed()
                {
                    simulator.edit_pressure(&pressure);
                }
                ui.end_row();
            });
    });

    ui.add_space(theme.spacing.md);

    components::card(ui, theme, "Faults", |ui| {
        for (block, name) in [(Block::Inner, "inner"), (Block::Outer, "outer")] {
            ui.horizontal(|ui| {
                if ui.button(format!("Raise {name} fault")).clicked() {
                    simulator.raise_fault(block);
                }
                if ui.button(format!("Clear {name} fault")).clicked() {
                    simulator.clear_fault(block);
                }
            });
        }
        ui.label(
            RichText::new("Masked fields reject invalid keystrokes.")
                .color(theme.text_muted)
                .size(theme.typography.caption),
        );
    });
}
