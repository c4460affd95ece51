//! Main control-panel view.
//!
//! Readouts for temperature, humidity and pressure, unit and airflow
//! selectors, the power and theme switches, and the block indicators.
//! The temperature step buttons are the manual controls: they are hidden
//! while the unit is on and the imitator drives it.

use conditioner_core::StepDirection;
use conditioner_types::{Block, Direction, PressureUnit, TemperatureUnit, ThemeMode};
use eframe::egui::{self, RichText};

use crate::app::ConditionerApp;
use crate::components;

fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "Left",
        Direction::Center => "Center",
        Direction::Right => "Right",
    }
}

impl ConditionerApp {
    /// Render the whole control panel.
    pub(crate) fn render_control_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        self.render_header(ui, ctx);
        ui.add_space(self.theme.spacing.md);

        ui.horizontal_wrapped(|ui| {
            self.render_temperature_card(ui);
            self.render_humidity_card(ui);
            self.render_pressure_card(ui);
        });
        ui.add_space(self.theme.spacing.md);

        ui.horizontal_wrapped(|ui| {
            self.render_direction_card(ui);
            self.render_blocks_card(ui);
        });
    }

    fn render_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&self.panel.config().app_title)
                    .size(self.theme.typography.heading)
                    .strong()
                    .color(self.theme.text_primary),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let powered = self.panel.state().powered;
                let (label, fill) = if powered {
                    ("Power: On", self.theme.power_on)
                } else {
                    ("Power: Off", self.theme.bg_card)
                };
                let text_color = if powered {
                    self.theme.text_on_accent
                } else {
                    self.theme.text_secondary
                };
                let button = egui::Button::new(
                    RichText::new(label)
                        .size(self.theme.typography.body)
                        .color(text_color),
                )
                .fill(fill);
                if ui.add(button).clicked() {
                    self.panel.toggle_power();
                }

                ui.add_space(self.theme.spacing.sm);

                let current = self.panel.state().theme;
                for (mode, label) in [(ThemeMode::Dark, "Dark"), (ThemeMode::Light, "Light")] {
                    if components::option_button(ui, &self.theme, label, current == mode) {
                        self.apply_theme(ctx, mode);
                    }
                }
            });
        });
    }

    fn render_temperature_card(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme.clone();
        components::card(ui, &theme, "Temperature", |ui| {
            let state = self.panel.state();
            components::readout(
                ui,
                &theme,
                &state.temperature_text(),
                state.temperature_unit.symbol(),
            );

            let current = state.temperature_unit;
            ui.horizontal(|ui| {
                for unit in TemperatureUnit::ALL {
                    if components::option_button(ui, &theme, unit.symbol(), current == unit) {
                        self.panel.set_temperature_unit(unit);
                    }
                }
            });

            if self.panel.controls_visible() {
                ui.horizontal(|ui| {
                    if ui.button("-").clicked() {
                        self.panel.step(StepDirection::Down);
                    }
                    if ui.button("+").clicked() {
                        self.panel.step(StepDirection::Up);
                    }
                });
            }
        });
    }

    fn render_humidity_card(&self, ui: &mut egui::Ui) {
        components::card(ui, &self.theme, "Humidity", |ui| {
            components::readout(ui, &self.theme, &self.panel.state().humidity_text(), "");
        });
    }

    fn render_pressure_card(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme.clone();
        components::card(ui, &theme, "Pressure", |ui| {
            let state = self.panel.state();
            components::readout(
                ui,
                &theme,
                &state.pressure_text(),
                state.pressure_unit.symbol(),
            );

            let current = state.pressure_unit;
            ui.horizontal(|ui| {
                for unit in PressureUnit::ALL {
                    if components::option_button(ui, &theme, unit.symbol(), current == unit) {
                        self.panel.set_pressure_unit(unit);
                    }
                }
            });
        });
    }

    fn render_direction_card(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme.clone();
        components::card(ui, &theme, "Airflow", |ui| {
            let current = self.panel.state().direction;
            ui.horizontal(|ui| {
                for direction in Direction::ALL {
                    let label = direction_label(direction);
                    if components::option_button(ui, &theme, label, current == direction) {
                        self.panel.set_direction(direction);
                    }
                }
            });
        });
    }

    fn render_blocks_card(&self, ui: &mut egui::Ui) {
        let faults = self.panel.faults();
        components::card(ui, &self.theme, "Blocks", |ui| {
            ui.horizontal(|ui| {
                components::block_indicator(
                    ui,
                    &self.theme,
                    "Inner",
                    faults.is_ok(Block::Inner),
                );
                ui.add_space(self.theme.spacing.sm);
                components::block_indicator(
                    ui,
                    &self.theme,
                    "Outer",
                    faults.is_ok(Block::Outer),
                );
            });
        });
    }
}
