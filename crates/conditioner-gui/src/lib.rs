//! Desktop front end for the air-conditioner control panel.
//!
//! Built with [egui](https://www.egui.rs/) on eframe. The root viewport shows
//! the control panel; switching the unit on opens the device imitator in a
//! second native window.
//!
//! # Usage
//!
//! ```bash
//! conditioner
//! conditioner --settings ./my-settings.toml --verbose
//! conditioner --reset
//! ```

mod app;
mod components;
mod panels;
mod theme;

use std::path::PathBuf;

use anyhow::Result;
use conditioner_core::{ControlPanel, FileSettingsStore, PanelConfig};
use eframe::egui;
use tracing::info;

pub use app::ConditionerApp;
pub use theme::Theme;

/// Options for running the GUI application.
#[derive(Debug, Default, Clone)]
pub struct GuiOptions {
    /// Settings file; the per-user default location when `None`.
    pub settings_path: Option<PathBuf>,
    /// Start from the defaults without reading the stored settings.
    pub reset: bool,
}

impl GuiOptions {
    /// Set the settings file path.
    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = Some(path.into());
        self
    }
}

/// Build the control panel the application will drive.
fn build_panel(options: &GuiOptions) -> ControlPanel {
    let store = match &options.settings_path {
        Some(path) => FileSettingsStore::new(path),
        None => FileSettingsStore::at_default_path(),
    };
    info!("Using settings at: {:?}", store.path());

    let config = PanelConfig::default();
    if options.reset {
        info!("Ignoring stored settings");
        ControlPanel::with_defaults(config, store)
    } else {
        ControlPanel::new(config, store)
    }
}

/// Run the GUI application.
///
/// Logging must already be initialised by the caller.
pub fn run(options: GuiOptions) -> Result<()> {
    let panel = build_panel(&options);
    let title = panel.config().app_title.clone();

    let viewport = egui::ViewportBuilder::default()
        .with_title(&title)
        .with_inner_size([720.0, 480.0])
        .with_min_inner_size([560.0, 400.0])
        .with_close_button(true);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(ConditionerApp::new(cc, panel)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_raise_warning() {
        let dir = TempDir::new().unwrap();
        let options = GuiOptions::default().with_settings_path(dir.path().join("settings.toml"));
        let mut panel = build_panel(&options);
        assert!(panel.take_warning().is_some());
    }

    #[test]
    fn test_reset_skips_stored_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "garbage").unwrap();

        let options = GuiOptions {
            reset: true,
            ..GuiOptions::default().with_settings_path(&path)
        };
        let panel = build_panel(&options);
        assert!(panel.warning().is_none());
        assert!(!panel.state().powered);
    }
}
