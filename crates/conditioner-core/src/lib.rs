//! Control-panel logic for the air-conditioner simulator.
//!
//! This crate holds everything behind the two windows of the desktop app,
//! with no GUI dependency:
//!
//! - [`ControlPanel`]: sole owner of the [`ClimateState`]. Converts units,
//!   enforces bounds, drives the power state machine and persists settings.
//! - [`DeviceSimulator`]: the imitator spawned on power-on. Keeps a shadow
//!   copy of the numeric fields and reports edits and faults upward.
//! - [`SettingsStore`]: where settings live between sessions, with a TOML
//!   file implementation and an in-memory one.
//!
//! # Data flow
//!
//! The panel pushes [`PanelEvent`]s down synchronously. The imitator queues
//! [`DeviceMessage`]s which the panel validates in
//! [`ControlPanel::process_device_messages`]. Applied edits are never echoed
//! back down.
//!
//! # Quick Start
//!
//! ```
//! use conditioner_core::{ControlPanel, MemorySettingsStore, PanelConfig};
//!
//! let mut panel = ControlPanel::new(PanelConfig::default(), MemorySettingsStore::new());
//! let _ = panel.take_warning();
//!
//! panel.toggle_power();
//! let sim = panel.simulator_mut().unwrap();
//! sim.edit_humidity("35");
//!
//! panel.process_device_messages();
//! assert_eq!(panel.state().humidity_text(), "35%");
//!
//! panel.close().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod panel;
pub mod settings;
pub mod simulator;
pub mod state;

// Re-export types from conditioner-types
pub use conditioner_types::units;
pub use conditioner_types::{Block, Direction, PressureUnit, TemperatureUnit, ThemeMode};

// Core exports
pub use config::{Limits, PanelConfig};
pub use error::{Error, Result};
pub use events::{DeviceEdit, DeviceMessage, EventDispatcher, PanelEvent};
pub use panel::{ControlPanel, LoadWarning, StepDirection};
pub use settings::{FileSettingsStore, MemorySettingsStore, SettingsDocument, SettingsStore};
pub use simulator::DeviceSimulator;
pub use state::{ClimateState, FaultIndicators};
