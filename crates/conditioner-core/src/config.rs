//! Static configuration injected into the control panel.
//!
//! Bounds, bundled strings and factory defaults live here rather than in
//! module-level globals, so tests and alternative front ends can supply
//! their own.
//!
//! # Example
//!
//! ```
//! use conditioner_core::config::{Limits, PanelConfig};
//! use conditioner_types::units::convert_pressure;
//! use conditioner_types::{PressureUnit, TemperatureUnit};
//!
//! let limits = Limits::new().temperature_range(TemperatureUnit::Celsius, 16.0, 30.0);
//! let config = PanelConfig::default().with_limits(limits);
//!
//! assert!(config.limits.temperature_in_bounds(16.0, TemperatureUnit::Celsius));
//! assert!(!config.limits.temperature_in_bounds(15.0, TemperatureUnit::Celsius));
//! ```

use conditioner_types::units::convert_pressure;
use conditioner_types::{PressureUnit, TemperatureUnit};

use crate::state::ClimateState;

/// Title shown on the main window and on warning dialogs.
pub const APP_TITLE: &str = "Conditioner";

/// Bundled text of the settings-load warning.
pub const LOAD_WARNING: &str =
    "Failed to load the previous settings.\nDefault settings have been applied.";

/// Inclusive bounds for every validated quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct Limits {
    /// Minimum settable temperature (°C).
    pub celsius_min: f64,
    /// Maximum settable temperature (°C).
    pub celsius_max: f64,
    /// Minimum settable temperature (°F).
    pub fahrenheit_min: f64,
    /// Maximum settable temperature (°F).
    pub fahrenheit_max: f64,
    /// Minimum settable temperature (K).
    pub kelvin_min: f64,
    /// Maximum settable temperature (K).
    pub kelvin_max: f64,
    /// Minimum relative humidity (%).
    pub humidity_min: u8,
    /// Maximum relative humidity (%).
    pub humidity_max: u8,
    /// Smallest pressure the device imitator accepts as input.
    pub pressure_input_min: i64,
    /// Largest pressure the device imitator accepts as input.
    pub pressure_input_max: i64,
    /// Largest pressure magnitude the panel keeps, in any unit.
    pub pressure_stored_max: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            celsius_min: -10.0,
            celsius_max: 42.0,
            fahrenheit_min: 14.0,
            fahrenheit_max: 107.6,
            kelvin_min: 263.15,
            kelvin_max: 315.15,
            humidity_min: 0,
            humidity_max: 100,
            // Sentinel range: wide enough to never bite in practice.
            pressure_input_min: -1_000_000,
            pressure_input_max: 10_000_000,
            pressure_stored_max: 1e12,
        }
    }
}

impl Limits {
    /// Create limits with the factory bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the temperature range for one unit.
    #[must_use]
    pub fn temperature_range(mut self, unit: TemperatureUnit, min: f64, max: f64) -> Self {
        match unit {
            TemperatureUnit::Celsius => {
                self.celsius_min = min;
                self.celsius_max = max;
            }
            TemperatureUnit::Fahrenheit => {
                self.fahrenheit_min = min;
                self.fahrenheit_max = max;
            }
            TemperatureUnit::Kelvin => {
                self.kelvin_min = min;
                self.kelvin_max = max;
            }
        }
        self
    }

    /// Set the humidity range (%).
    #[must_use]
    pub fn humidity_range(mut self, min: u8, max: u8) -> Self {
        self.humidity_min = min;
        self.humidity_max = max;
        self
    }

    /// Set the pressure input mask range of the device imitator.
    #[must_use]
    pub fn pressure_input_range(mut self, min: i64, max: i64) -> Self {
        self.pressure_input_min = min;
        self.pressure_input_max = max;
        self
    }

    /// Set the largest pressure magnitude the panel keeps.
    #[must_use]
    pub fn pressure_stored_range(mut self, max: f64) -> Self {
        self.pressure_stored_max = max;
        self
    }

    /// Temperature bounds `(min, max)` for `unit`.
    pub fn temperature_bounds(&self, unit: TemperatureUnit) -> (f64, f64) {
        match unit {
            TemperatureUnit::Celsius => (self.celsius_min, self.celsius_max),
            TemperatureUnit::Fahrenheit => (self.fahrenheit_min, self.fahrenheit_max),
            TemperatureUnit::Kelvin => (self.kelvin_min, self.kelvin_max),
        }
    }

    /// Quick check if a temperature is settable in `unit`.
    pub fn temperature_in_bounds(&self, value: f64, unit: TemperatureUnit) -> bool {
        let (min, max) = self.temperature_bounds(unit);
        value >= min && value <= max
    }

    /// Quick check if a humidity percentage is settable.
    pub fn humidity_in_bounds(&self, percent: i64) -> bool {
        percent >= i64::from(self.humidity_min) && percent <= i64::from(self.humidity_max)
    }

    /// Check that a pressure in `unit` can be kept and shown in every unit.
    ///
    /// The value is converted to each pressure unit; all results must be
    /// finite and within `±pressure_stored_max`.
    pub fn pressure_storable(&self, value: f64, unit: PressureUnit) -> bool {
        PressureUnit::ALL.into_iter().all(|to| {
            let converted = convert_pressure(value, unit, to);
            converted.is_finite() && converted.abs() <= self.pressure_stored_max
        })
    }

    /// Quick check if a pressure passes the imitator's input mask.
    pub fn pressure_input_in_bounds(&self, value: i64) -> bool {
        value >= self.pressure_input_min && value <= self.pressure_input_max
    }
}

/// Everything the control panel needs besides its settings store.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    /// Validation bounds.
    pub limits: Limits,
    /// Window and dialog title.
    pub app_title: String,
    /// Text shown once when stored settings cannot be restored.
    pub load_warning: String,
    /// State applied when no usable settings exist.
    pub defaults: ClimateState,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            app_title: APP_TITLE.to_string(),
            load_warning: LOAD_WARNING.to_string(),
            defaults: ClimateState::default(),
        }
    }
}

impl PanelConfig {
    /// Replace the validation bounds.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Replace the factory defaults.
    #[must_use]
    pub fn with_defaults(mut self, defaults: ClimateState) -> Self {
        self.defaults = defaults;
        self
    }
}
