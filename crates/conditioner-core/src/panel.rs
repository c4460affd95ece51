//! The control panel: sole owner of the climate state.
//!
//! Every user-facing operation validates its input, mutates [`ClimateState`]
//! and pushes a [`PanelEvent`] to the device imitator (when powered) and to
//! external subscribers. Rejected input returns `false` and changes nothing.
//!
//! # Example
//!
//! ```
//! use conditioner_core::{ControlPanel, MemorySettingsStore, PanelConfig, StepDirection};
//! use conditioner_types::TemperatureUnit;
//!
//! let mut panel = ControlPanel::new(PanelConfig::default(), MemorySettingsStore::new());
//! // Nothing stored yet: defaults are applied and a warning is pending.
//! assert!(panel.take_warning().is_some());
//!
//! panel.set_temperature_unit(TemperatureUnit::Fahrenheit);
//! assert_eq!(panel.state().temperature_text(), "71.6");
//!
//! assert!(panel.step(StepDirection::Up));
//! assert_eq!(panel.state().temperature_text(), "73.4");
//! ```

use std::fmt;
use std::sync::mpsc;

use tracing::{debug, info, warn};

use conditioner_types::units::{
    convert_pressure, convert_temperature, normalize_temperature, parse_integer,
};
use conditioner_types::{Block, Direction, PressureUnit, TemperatureUnit, ThemeMode};

use crate::config::PanelConfig;
use crate::error::Result;
use crate::events::{
    DeviceEdit, DeviceMessage, DeviceReceiver, EventDispatcher, PanelEvent, device_channel,
};
use crate::settings::{SettingsDocument, SettingsStore};
use crate::simulator::DeviceSimulator;
use crate::state::{ClimateState, FaultIndicators};

/// Direction of a temperature step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

impl StepDirection {
    fn sign(self) -> f64 {
        match self {
            StepDirection::Up => 1.0,
            StepDirection::Down => -1.0,
        }
    }
}

/// Blocking warning raised when stored settings could not be restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub title: String,
    pub message: String,
}

/// A live imitator together with the receiving end of its messages.
struct SimulatorLink {
    simulator: DeviceSimulator,
    messages: DeviceReceiver,
}

/// The air-conditioner control panel.
pub struct ControlPanel {
    config: PanelConfig,
    state: ClimateState,
    faults: FaultIndicators,
    store: Box<dyn SettingsStore>,
    link: Option<SimulatorLink>,
    dispatcher: EventDispatcher,
    warning: Option<LoadWarning>,
}

impl fmt::Debug for ControlPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlPanel")
            .field("state", &self.state)
            .field("faults", &self.faults)
            .field("simulator", &self.link.as_ref().map(|link| &link.simulator))
            .field("warning", &self.warning)
            .finish_non_exhaustive()
    }
}

impl ControlPanel {
    /// Create a panel and restore its state from `store`.
    ///
    /// When restoring fails the defaults from `config` are applied and a
    /// [`LoadWarning`] is left pending.
    pub fn new(config: PanelConfig, store: impl SettingsStore + 'static) -> Self {
        let mut panel = Self::with_defaults(config, store);
        panel.restore();
        panel
    }

    /// Create a panel with the defaults from `config`, ignoring whatever is
    /// in `store`. No warning is raised.
    pub fn with_defaults(config: PanelConfig, store: impl SettingsStore + 'static) -> Self {
        let state = config.defaults.clone();
        Self {
            config,
            state,
            faults: FaultIndicators::default(),
            store: Box::new(store),
            link: None,
            dispatcher: EventDispatcher::new(),
            warning: None,
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Current state.
    pub fn state(&self) -> &ClimateState {
        &self.state
    }

    /// Injected configuration.
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Fault indicators of both blocks.
    pub fn faults(&self) -> FaultIndicators {
        self.faults
    }

    /// Whether the manual controls are shown. They are hidden while the
    /// unit is on and the imitator drives it.
    pub fn controls_visible(&self) -> bool {
        !self.state.powered
    }

    /// The live imitator, if the unit is on.
    pub fn simulator(&self) -> Option<&DeviceSimulator> {
        self.link.as_ref().map(|link| &link.simulator)
    }

    /// Mutable access to the live imitator, for front ends that render it.
    pub fn simulator_mut(&mut self) -> Option<&mut DeviceSimulator> {
        self.link.as_mut().map(|link| &mut link.simulator)
    }

    /// The pending settings-load warning, if any.
    pub fn warning(&self) -> Option<&LoadWarning> {
        self.warning.as_ref()
    }

    /// Take the pending settings-load warning. Returns `Some` at most once
    /// per failed restore.
    pub fn take_warning(&mut self) -> Option<LoadWarning> {
        self.warning.take()
    }

    /// Subscribe to the events pushed to the imitator.
    pub fn subscribe(&mut self) -> mpsc::Receiver<PanelEvent> {
        self.dispatcher.subscribe()
    }

    // -------------------------------------------------------------------------
    // Temperature
    // -------------------------------------------------------------------------

    /// Switch the temperature unit, re-expressing the current value.
    ///
    /// Bounds are not re-checked. Returns `false` if `unit` is already
    /// selected.
    pub fn set_temperature_unit(&mut self, unit: TemperatureUnit) -> bool {
        let from = self.state.temperature_unit;
        if from == unit {
            return false;
        }
        let value = normalize_temperature(
            convert_temperature(self.state.temperature, from, unit),
            unit,
        );
        debug!(
            "Temperature unit {:?} -> {:?}: {} -> {}",
            from, unit, self.state.temperature, value
        );
        self.state.temperature_unit = unit;
        self.state.temperature = value;
        self.notify(PanelEvent::TemperatureChanged(value));
        true
    }

    /// Step the temperature by one unit step.
    ///
    /// Returns `false`, leaving the value unchanged and notifying no one,
    /// if the result would leave the active unit's bounds.
    pub fn step(&mut self, direction: StepDirection) -> bool {
        let unit = self.state.temperature_unit;
        let candidate = normalize_temperature(
            self.state.temperature + direction.sign() * unit.step(),
            unit,
        );
        if !self.config.limits.temperature_in_bounds(candidate, unit) {
            debug!(
                "Temperature step {:?} rejected: {} {} out of bounds",
                direction,
                candidate,
                unit.symbol()
            );
            return false;
        }
        self.state.temperature = candidate;
        debug!("Temperature stepped to {} {}", candidate, unit.symbol());
        self.notify(PanelEvent::TemperatureChanged(candidate));
        true
    }

    // -------------------------------------------------------------------------
    // Pressure
    // -------------------------------------------------------------------------

    /// Switch the pressure unit, re-expressing the current value.
    ///
    /// Returns `false` if `unit` is already selected.
    pub fn set_pressure_unit(&mut self, unit: PressureUnit) -> bool {
        let from = self.state.pressure_unit;
        if from == unit {
            return false;
        }
        let value = convert_pressure(self.state.pressure, from, unit);
        debug!(
            "Pressure unit {:?} -> {:?}: {} -> {}",
            from, unit, self.state.pressure, value
        );
        self.state.pressure_unit = unit;
        self.state.pressure = value;
        self.notify(PanelEvent::PressureChanged(value));
        true
    }

    // -------------------------------------------------------------------------
    // Direction, theme, faults
    // -------------------------------------------------------------------------

    /// Select the airflow direction. Returns `false` if it was already
    /// selected.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.state.direction == direction {
            return false;
        }
        self.state.direction = direction;
        debug!("Airflow direction set to {}", direction);
        self.notify(PanelEvent::DirectionChanged(direction));
        true
    }

    /// Switch between light and dark mode.
    pub fn set_theme(&mut self, theme: ThemeMode) {
        if self.state.theme != theme {
            debug!("Theme set to {:?}", theme);
            self.state.theme = theme;
        }
    }

    /// Set the fault indicator of `block`.
    pub fn report_fault(&mut self, block: Block, ok: bool) {
        if ok {
            debug!("{} recovered", block);
        } else {
            debug!("{} reported a fault", block);
        }
        self.faults.set(block, ok);
    }

    // -------------------------------------------------------------------------
    // Power
    // -------------------------------------------------------------------------

    /// Toggle the power. Returns the new power state.
    pub fn toggle_power(&mut self) -> bool {
        if self.state.powered {
            self.power_off();
        } else {
            self.power_on();
        }
        self.state.powered
    }

    /// Turn the unit on, spawning an imitator seeded with the displayed
    /// values. Does nothing if already on.
    pub fn power_on(&mut self) {
        if self.state.powered {
            return;
        }
        let (tx, rx) = device_channel();
        let simulator = DeviceSimulator::new(
            &self.state.temperature_text(),
            &self.state.humidity_text(),
            &self.state.pressure_text(),
            &self.config.limits,
            tx,
        );
        self.link = Some(SimulatorLink {
            simulator,
            messages: rx,
        });
        self.state.powered = true;
        info!("Power on");
    }

    /// Turn the unit off, destroying the imitator. Messages it queued but
    /// the panel has not processed are discarded.
    pub fn power_off(&mut self) {
        if !self.state.powered {
            return;
        }
        if let Some(link) = self.link.take() {
            let dropped = link.messages.try_iter().count();
            if dropped > 0 {
                debug!("Discarded {} unprocessed imitator messages", dropped);
            }
        }
        self.state.powered = false;
        info!("Power off");
    }

    // -------------------------------------------------------------------------
    // Imitator edits
    // -------------------------------------------------------------------------

    /// Apply every message the imitator has queued. Returns how many edits
    /// were applied.
    pub fn process_device_messages(&mut self) -> usize {
        let pending: Vec<DeviceMessage> = match &self.link {
            Some(link) => link.messages.try_iter().collect(),
            None => return 0,
        };

        let mut applied = 0;
        for message in pending {
            match message {
                DeviceMessage::Edit { edit } => {
                    if self.on_device_edit(edit) {
                        applied += 1;
                    }
                }
                DeviceMessage::Fault { block, ok } => self.report_fault(block, ok),
            }
        }
        applied
    }

    /// Validate and apply an edit made in the imitator.
    ///
    /// The imitator is the edit's origin, so nothing is sent back to it.
    pub fn on_device_edit(&mut self, edit: DeviceEdit) -> bool {
        match edit {
            DeviceEdit::Temperature(value) => self.apply_device_temperature(value),
            DeviceEdit::Humidity(text) => self.apply_device_humidity(&text),
            DeviceEdit::Pressure(text) => self.apply_device_pressure(&text),
        }
    }

    fn apply_device_temperature(&mut self, value: f64) -> bool {
        let unit = self.state.temperature_unit;
        let displayed = normalize_temperature(value, unit);
        if !displayed.is_finite() || !self.config.limits.temperature_in_bounds(displayed, unit) {
            debug!(
                "Imitator temperature {} {} rejected: out of bounds",
                value,
                unit.symbol()
            );
            return false;
        }
        self.state.temperature = displayed;
        debug!(
            "Imitator set temperature to {} {}",
            self.state.temperature,
            unit.symbol()
        );
        true
    }

    fn apply_device_humidity(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            self.state.humidity = 0;
            debug!("Imitator cleared humidity");
            return true;
        }
        let accepted = parse_integer(text)
            .ok()
            .filter(|v| self.config.limits.humidity_in_bounds(*v))
            .and_then(|v| u8::try_from(v).ok());
        match accepted {
            Some(percent) => {
                self.state.humidity = percent;
                debug!("Imitator set humidity to {}%", percent);
                true
            }
            None => {
                debug!("Imitator humidity {:?} rejected", text);
                false
            }
        }
    }

    fn apply_device_pressure(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            self.state.pressure = 0.0;
            debug!("Imitator cleared pressure");
            return true;
        }
        match parse_integer(text) {
            Ok(value) if self.config.limits.pressure_input_in_bounds(value) => {
                self.state.pressure = value as f64;
                debug!(
                    "Imitator set pressure to {} {}",
                    value,
                    self.state.pressure_unit.symbol()
                );
                true
            }
            _ => {
                debug!("Imitator pressure {:?} rejected", text);
                false
            }
        }
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    /// Write the current state to the settings store.
    pub fn persist(&self) -> Result<()> {
        self.store
            .save(&SettingsDocument::from_state(&self.state))
            .inspect_err(|e| warn!("Failed to persist settings: {}", e))?;
        info!("Settings persisted");
        Ok(())
    }

    /// Replace the persisted part of the state with what the store holds.
    ///
    /// On any failure the defaults are applied instead and a [`LoadWarning`]
    /// is left pending. Returns whether the stored settings were used. The
    /// power state is left alone.
    pub fn restore(&mut self) -> bool {
        let loaded = self
            .store
            .load()
            .and_then(|doc| doc.to_state(&self.config.limits));
        let powered = self.state.powered;

        let restored = match loaded {
            Ok(state) => {
                self.state = state;
                info!("Settings restored");
                true
            }
            Err(e) => {
                warn!("Failed to restore settings, applying defaults: {}", e);
                self.state = self.config.defaults.clone();
                self.warning = Some(LoadWarning {
                    title: self.config.app_title.clone(),
                    message: self.config.load_warning.clone(),
                });
                false
            }
        };
        self.state.powered = powered;
        restored
    }

    /// Window-close sequence: power off if on, then persist.
    pub fn close(&mut self) -> Result<()> {
        self.power_off();
        self.persist()
    }

    fn notify(&mut self, event: PanelEvent) {
        if let Some(link) = self.link.as_mut() {
            link.simulator.handle_panel_event(&event);
        }
        self.dispatcher.send(&event);
    }
}
