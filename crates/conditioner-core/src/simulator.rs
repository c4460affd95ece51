//! Device imitator: a stand-in for the real air-conditioner hardware.
//!
//! The imitator keeps its own editable copy of the temperature, humidity and
//! pressure fields. It never touches the panel's state: every local edit is
//! queued upward as a [`DeviceMessage`] and the panel decides whether to
//! apply it. Values pushed down from the panel overwrite the local fields.
//!
//! Humidity and pressure are typed as text, behind integer input masks, so
//! an empty field is a legitimate value (the panel reads it as zero).

use tracing::debug;

use conditioner_types::units::{format_value, parse_number};
use conditioner_types::{Block, Direction};

use crate::config::Limits;
use crate::events::{DeviceEdit, DeviceMessage, DeviceSender, PanelEvent};

/// The imitator window's state.
///
/// Created when the unit is powered on, seeded from the panel's displayed
/// values, and dropped when it is powered off. Nothing here is persisted.
pub struct DeviceSimulator {
    temperature: f64,
    humidity: String,
    pressure: String,
    limits: Limits,
    outbox: DeviceSender,
}

impl std::fmt::Debug for DeviceSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceSimulator")
            .field("temperature", &self.temperature)
            .field("humidity", &self.humidity)
            .field("pressure", &self.pressure)
            .finish()
    }
}

impl DeviceSimulator {
    /// Create an imitator seeded with the panel's displayed texts.
    ///
    /// `humidity` is the panel's percent-suffixed text (`"45%"`); the suffix
    /// is stripped for editing. An unparsable temperature seeds as zero.
    pub fn new(
        temperature: &str,
        humidity: &str,
        pressure: &str,
        limits: &Limits,
        outbox: DeviceSender,
    ) -> Self {
        let humidity = humidity.strip_suffix('%').unwrap_or(humidity);
        Self {
            temperature: parse_number(temperature).unwrap_or(0.0),
            humidity: humidity.to_string(),
            pressure: pressure.to_string(),
            limits: limits.clone(),
            outbox,
        }
    }

    /// Current value of the temperature spin box.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Current text of the humidity field, without `%`.
    pub fn humidity(&self) -> &str {
        &self.humidity
    }

    /// Current text of the pressure field.
    pub fn pressure(&self) -> &str {
        &self.pressure
    }

    // -------------------------------------------------------------------------
    // Downward sync
    // -------------------------------------------------------------------------

    /// Apply a change pushed from the control panel.
    pub fn handle_panel_event(&mut self, event: &PanelEvent) {
        match event {
            PanelEvent::TemperatureChanged(value) => self.on_parent_temperature_changed(*value),
            PanelEvent::PressureChanged(value) => self.on_parent_pressure_changed(*value),
            PanelEvent::DirectionChanged(direction) => {
                self.on_parent_direction_changed(*direction)
            }
        }
    }

    /// Overwrite the local temperature with the panel's value.
    pub fn on_parent_temperature_changed(&mut self, value: f64) {
        self.temperature = value;
    }

    /// Overwrite the local pressure with the panel's value.
    pub fn on_parent_pressure_changed(&mut self, value: f64) {
        self.pressure = format_value(value);
    }

    /// Accept a direction change. The imitator has no louvre actuator, so
    /// the change is only logged.
    pub fn on_parent_direction_changed(&mut self, direction: Direction) {
        debug!("Imitator received airflow direction: {}", direction);
    }

    // -------------------------------------------------------------------------
    // Local edits
    // -------------------------------------------------------------------------

    /// Edit the temperature spin box and report it upward.
    pub fn edit_temperature(&mut self, value: f64) {
        self.temperature = value;
        self.send(DeviceMessage::Edit {
            edit: DeviceEdit::Temperature(value),
        });
    }

    /// Edit the humidity field.
    ///
    /// Returns `false` (field unchanged, nothing sent) when the text does not
    /// pass the input mask: empty, or an integer within the humidity range.
    pub fn edit_humidity(&mut self, text: &str) -> bool {
        let accepted = text.is_empty()
            || masked_integer(text).is_some_and(|v| self.limits.humidity_in_bounds(v));
        if !accepted {
            debug!("Imitator humidity mask rejected {:?}", text);
            return false;
        }
        self.humidity = text.to_string();
        self.send(DeviceMessage::Edit {
            edit: DeviceEdit::Humidity(text.to_string()),
        });
        true
    }

    /// Edit the pressure field.
    ///
    /// Returns `false` (field unchanged, nothing sent) when the text does not
    /// pass the input mask: empty, or an integer within the sentinel range.
    pub fn edit_pressure(&mut self, text: &str) -> bool {
        let accepted = text.is_empty()
            || masked_integer(text).is_some_and(|v| self.limits.pressure_input_in_bounds(v));
        if !accepted {
            debug!("Imitator pressure mask rejected {:?}", text);
            return false;
        }
        self.pressure = text.to_string();
        self.send(DeviceMessage::Edit {
            edit: DeviceEdit::Pressure(text.to_string()),
        });
        true
    }

    // -------------------------------------------------------------------------
    // Fault buttons
    // -------------------------------------------------------------------------

    /// Report a fault in `block`.
    pub fn raise_fault(&self, block: Block) {
        self.send(DeviceMessage::Fault { block, ok: false });
    }

    /// Report that `block` has recovered.
    pub fn clear_fault(&self, block: Block) {
        self.send(DeviceMessage::Fault { block, ok: true });
    }

    fn send(&self, message: DeviceMessage) {
        if self.outbox.send(message).is_err() {
            debug!("Control panel no longer listening; imitator message dropped");
        }
    }
}

/// Integer input mask: an optional leading `-` and at least one ASCII
/// digit, with nothing else around them.
fn masked_integer(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
