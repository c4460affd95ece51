//! Main application state for the conditioner GUI.
//!
//! [`ConditionerApp`] wraps a [`ControlPanel`] and renders it each frame:
//! the control panel in the root viewport and, while the unit is on, the
//! device imitator in a second native window.

use conditioner_core::{ControlPanel, LoadWarning};
use conditioner_types::ThemeMode;
use eframe::egui::{self, RichText};
use tracing::{debug, info, warn};

use super::theme::Theme;

/// The egui application.
pub struct ConditionerApp {
    pub(crate) panel: ControlPanel,
    pub(crate) theme: Theme,
    /// Warning shown over the panel until acknowledged.
    pub(crate) warning: Option<LoadWarning>,
    closed: bool,
}

impl ConditionerApp {
    /// Create the app around an already restored panel.
    pub fn new(cc: &eframe::CreationContext<'_>, mut panel: ControlPanel) -> Self {
        let theme = Theme::for_mode(panel.state().theme);
        cc.egui_ctx.set_style(theme.to_style());
        let warning = panel.take_warning();

        Self {
            panel,
            theme,
            warning,
            closed: false,
        }
    }

    /// Switch light/dark mode and restyle.
    pub(crate) fn apply_theme(&mut self, ctx: &egui::Context, mode: ThemeMode) {
        self.panel.set_theme(mode);
        if self.theme.mode != mode {
            self.theme = Theme::for_mode(mode);
            ctx.set_style(self.theme.to_style());
        }
    }

    /// Run the close sequence once.
    fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        info!("Main window closing");
        if let Err(e) = self.panel.close() {
            warn!("Settings were not saved: {}", e);
        }
    }

    fn render_warning(&mut self, ctx: &egui::Context) {
        let Some(warning) = &self.warning else {
            return;
        };

        let mut acknowledged = false;
        egui::Window::new(&warning.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(&warning.message)
                        .color(self.theme.text_primary)
                        .size(self.theme.typography.body),
                );
                ui.add_space(self.theme.spacing.md);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }
                });
            });

        if acknowledged {
            debug!("Settings warning acknowledged");
            self.warning = None;
        }
    }
}

impl eframe::App for ConditionerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.shutdown();
            return;
        }

        if self.panel.state().powered {
            self.show_imitator(ctx);
        }
        let applied = self.panel.process_device_messages();
        if applied > 0 {
            debug!("Applied {} imitator edits", applied);
        }

        self.render_warning(ctx);
        let blocked = self.warning.is_some();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(self.theme.bg_primary)
                    .inner_margin(egui::Margin::same(self.theme.spacing.lg as i8)),
            )
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| {
                    self.render_control_panel(ui, ctx);
                });
            });
    }
}
