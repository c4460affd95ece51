//! Canonical climate state owned by the control panel.

use conditioner_types::units::{format_humidity, format_temperature, format_value};
use conditioner_types::{Block, Direction, PressureUnit, TemperatureUnit, ThemeMode};

/// Everything the control panel displays.
///
/// Values are always stored at display precision, so what is shown, what is
/// persisted and what is compared against bounds are the same number.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateState {
    /// Target temperature in `temperature_unit`.
    pub temperature: f64,
    pub temperature_unit: TemperatureUnit,
    /// Relative humidity (%).
    pub humidity: u8,
    /// Pressure in `pressure_unit`.
    pub pressure: f64,
    pub pressure_unit: PressureUnit,
    pub direction: Direction,
    /// Whether the unit is switched on. Never persisted.
    pub powered: bool,
    pub theme: ThemeMode,
}

impl Default for ClimateState {
    fn default() -> Self {
        Self {
            temperature: 22.0,
            temperature_unit: TemperatureUnit::Celsius,
            humidity: 50,
            pressure: 760.0,
            pressure_unit: PressureUnit::MmHg,
            direction: Direction::Center,
            powered: false,
            theme: ThemeMode::Light,
        }
    }
}

impl ClimateState {
    /// Temperature as displayed, e.g. `"22"` or `"71.6"`.
    pub fn temperature_text(&self) -> String {
        format_temperature(self.temperature, self.temperature_unit)
    }

    /// Humidity as displayed, e.g. `"50%"`.
    pub fn humidity_text(&self) -> String {
        format_humidity(self.humidity)
    }

    /// Pressure as displayed, e.g. `"760"` or `"101323.2"`.
    pub fn pressure_text(&self) -> String {
        format_value(self.pressure)
    }
}

/// Fault indicator of the indoor and outdoor blocks.
///
/// Purely cosmetic: a fault never changes panel behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultIndicators {
    inner_ok: bool,
    outer_ok: bool,
}

impl Default for FaultIndicators {
    fn default() -> Self {
        Self {
            inner_ok: true,
            outer_ok: true,
        }
    }
}

impl FaultIndicators {
    /// Whether `block` is currently reported healthy.
    pub fn is_ok(&self, block: Block) -> bool {
        match block {
            Block::Inner => self.inner_ok,
            Block::Outer => self.outer_ok,
        }
    }

    /// Record the health of `block`.
    pub fn set(&mut self, block: Block, ok: bool) {
        match block {
            Block::Inner => self.inner_ok = ok,
            Block::Outer => self.outer_ok = ok,
        }
    }

    /// Whether any block is faulted.
    pub fn any_fault(&self) -> bool {
        !(self.inner_ok && self.outer_ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_texts() {
        let state = ClimateState::default();
        assert_eq!(state.temperature_text(), "22");
        assert_eq!(state.humidity_text(), "50%");
        assert_eq!(state.pressure_text(), "760");
        assert!(!state.powered);
    }

    #[test]
    fn test_fractional_texts() {
        let state = ClimateState {
            temperature: 295.15,
            temperature_unit: TemperatureUnit::Kelvin,
            pressure: 101323.2,
            pressure_unit: PressureUnit::Pascal,
            ..Default::default()
        };
        assert_eq!(state.temperature_text(), "295.15");
        assert_eq!(state.pressure_text(), "101323.2");
    }

    #[test]
    fn test_fault_indicators() {
        let mut faults = FaultIndicators::default();
        assert!(!faults.any_fault());

        faults.set(Block::Outer, false);
        assert!(faults.is_ok(Block::Inner));
        assert!(!faults.is_ok(Block::Outer));
        assert!(faults.any_fault());

        faults.set(Block::Outer, true);
        assert!(!faults.any_fault());
    }
}
