//! Unit conversion and display formatting.
//!
//! The conversion formulas are fixed; the display rules decide how a
//! converted value is rounded before it becomes the panel's new state:
//!
//! | Target | Display precision |
//! |--------|-------------------|
//! | Celsius | whole degrees |
//! | Fahrenheit, Kelvin | up to 2 decimals |
//! | mmHg (from Pascal) | whole millimetres |
//! | Pascal | up to 2 decimals |

use crate::error::{ParseError, ParseResult};
use crate::types::{PressureUnit, TemperatureUnit};

/// Pascals in one millimetre of mercury.
pub const PASCALS_PER_MMHG: f64 = 133.32;

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Decimal places kept for fractional displays.
pub const DISPLAY_DECIMALS: i32 = 2;

/// Convert Celsius to Fahrenheit.
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

/// Convert Fahrenheit to Celsius.
#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) / 1.8
}

/// Convert Celsius to Kelvin.
#[inline]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

/// Convert Kelvin to Celsius.
#[inline]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// Convert Fahrenheit to Kelvin.
#[inline]
pub fn fahrenheit_to_kelvin(fahrenheit: f64) -> f64 {
    (fahrenheit + 459.67) / 1.8
}

/// Convert Kelvin to Fahrenheit.
#[inline]
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    kelvin * 1.8 - 459.67
}

/// Convert millimetres of mercury to Pascal.
#[inline]
pub fn mmhg_to_pascal(mmhg: f64) -> f64 {
    mmhg * PASCALS_PER_MMHG
}

/// Convert Pascal to millimetres of mercury.
#[inline]
pub fn pascal_to_mmhg(pascal: f64) -> f64 {
    pascal / PASCALS_PER_MMHG
}

/// Round `value` to `decimals` decimal places.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Re-express a temperature in another unit, without display rounding.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::*;

    match (from, to) {
        (Celsius, Fahrenheit) => celsius_to_fahrenheit(value),
        (Celsius, Kelvin) => celsius_to_kelvin(value),
        (Fahrenheit, Celsius) => fahrenheit_to_celsius(value),
        (Fahrenheit, Kelvin) => fahrenheit_to_kelvin(value),
        (Kelvin, Celsius) => kelvin_to_celsius(value),
        (Kelvin, Fahrenheit) => kelvin_to_fahrenheit(value),
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
    }
}

/// Round a temperature to the display precision of `unit`.
pub fn normalize_temperature(value: f64, unit: TemperatureUnit) -> f64 {
    if unit.is_integral() {
        value.round()
    } else {
        round_to(value, DISPLAY_DECIMALS)
    }
}

/// Re-express a pressure in another unit, rounded for display.
///
/// Pascal to mmHg rounds to the nearest whole millimetre; mmHg to Pascal
/// keeps fractional precision.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    match (from, to) {
        (PressureUnit::MmHg, PressureUnit::Pascal) => {
            round_to(mmhg_to_pascal(value), DISPLAY_DECIMALS)
        }
        (PressureUnit::Pascal, PressureUnit::MmHg) => pascal_to_mmhg(value).round(),
        _ => value,
    }
}

/// Format a number with at most two decimals and no trailing zeros.
///
/// ```
/// use conditioner_types::units::format_value;
///
/// assert_eq!(format_value(101323.2), "101323.2");
/// assert_eq!(format_value(293.15), "293.15");
/// assert_eq!(format_value(68.0), "68");
/// assert_eq!(format_value(-0.001), "0");
/// ```
pub fn format_value(value: f64) -> String {
    let rounded = round_to(value, DISPLAY_DECIMALS);
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{:.*}", DISPLAY_DECIMALS as usize, rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Format a temperature the way the panel displays it in `unit`.
pub fn format_temperature(value: f64, unit: TemperatureUnit) -> String {
    if unit.is_integral() {
        format_value(value.round())
    } else {
        format_value(value)
    }
}

/// Format a humidity percentage, e.g. `"45%"`.
pub fn format_humidity(percent: u8) -> String {
    format!("{percent}%")
}

/// Parse a displayed decimal number.
///
/// Surrounding whitespace is ignored. Non-finite values are rejected.
pub fn parse_number(text: &str) -> ParseResult<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidNumber(text.to_string())),
    }
}

/// Parse an integer field as typed into the device imitator.
pub fn parse_integer(text: &str) -> ParseResult<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidNumber(text.to_string()))
}

/// Parse a displayed humidity such as `"45%"` (the suffix is optional).
pub fn parse_humidity(text: &str) -> ParseResult<u8> {
    let trimmed = text.trim();
    let digits = trimmed.strip_suffix('%').unwrap_or(trimmed);
    let value = parse_integer(digits)?;
    if !(0..=100).contains(&value) {
        return Err(ParseError::OutOfRange {
            value: value as f64,
            min: 0.0,
            max: 100.0,
        });
    }
    Ok(value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- temperature formulas ---

    #[test]
    fn test_celsius_fahrenheit_fixed_points() {
        assert!((celsius_to_fahrenheit(0.0) - 32.0).abs() < 1e-9);
        assert!((celsius_to_fahrenheit(100.0) - 212.0).abs() < 1e-9);
        assert!((fahrenheit_to_celsius(14.0) - -10.0).abs() < 1e-9);
    }

    #[test]
    fn test_kelvin_formulas() {
        assert!((celsius_to_kelvin(-10.0) - 263.15).abs() < 1e-9);
        assert!((kelvin_to_celsius(315.15) - 42.0).abs() < 1e-9);
        assert!((fahrenheit_to_kelvin(107.6) - 315.15).abs() < 1e-9);
        assert!((kelvin_to_fahrenheit(263.15) - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_temperature_same_unit_is_identity() {
        for unit in TemperatureUnit::ALL {
            assert_eq!(convert_temperature(21.37, unit, unit), 21.37);
        }
    }

    #[test]
    fn test_normalize_celsius_rounds_to_integer() {
        assert_eq!(normalize_temperature(21.6, TemperatureUnit::Celsius), 22.0);
        assert_eq!(normalize_temperature(21.4, TemperatureUnit::Celsius), 21.0);
    }

    #[test]
    fn test_normalize_fractional_units_keep_two_decimals() {
        assert_eq!(
            normalize_temperature(107.60000000000001, TemperatureUnit::Fahrenheit),
            107.6
        );
        assert_eq!(normalize_temperature(293.149999, TemperatureUnit::Kelvin), 293.15);
    }

    // --- pressure ---

    #[test]
    fn test_mmhg_to_pascal_keeps_fraction() {
        let pa = convert_pressure(760.0, PressureUnit::MmHg, PressureUnit::Pascal);
        assert!((pa - 101323.2).abs() < 1e-6);
    }

    #[test]
    fn test_pascal_to_mmhg_rounds() {
        let mm = convert_pressure(101325.0, PressureUnit::Pascal, PressureUnit::MmHg);
        assert_eq!(mm, 760.0);
    }

    #[test]
    fn test_convert_pressure_same_unit_is_identity() {
        assert_eq!(
            convert_pressure(755.5, PressureUnit::MmHg, PressureUnit::MmHg),
            755.5
        );
    }

    // --- formatting ---

    #[test]
    fn test_format_value_trims_zeros() {
        assert_eq!(format_value(101323.2), "101323.2");
        assert_eq!(format_value(50.0), "50");
        assert_eq!(format_value(71.6), "71.6");
        assert_eq!(format_value(-3.456), "-3.46");
    }

    #[test]
    fn test_format_temperature_per_unit() {
        assert_eq!(format_temperature(21.7, TemperatureUnit::Celsius), "22");
        assert_eq!(format_temperature(71.6, TemperatureUnit::Fahrenheit), "71.6");
        assert_eq!(format_temperature(295.15, TemperatureUnit::Kelvin), "295.15");
        assert_eq!(format_temperature(-0.2, TemperatureUnit::Celsius), "0");
    }

    #[test]
    fn test_format_humidity() {
        assert_eq!(format_humidity(0), "0%");
        assert_eq!(format_humidity(100), "100%");
    }

    // --- parsing ---

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 22 ").unwrap(), 22.0);
        assert_eq!(parse_number("-3.5").unwrap(), -3.5);
        assert!(parse_number("").is_err());
        assert!(parse_number("abc").is_err());
        assert!(parse_number("inf").is_err());
        assert!(parse_number("NaN").is_err());
    }

    #[test]
    fn test_parse_humidity() {
        assert_eq!(parse_humidity("45%").unwrap(), 45);
        assert_eq!(parse_humidity("45").unwrap(), 45);
        assert_eq!(parse_humidity("0%").unwrap(), 0);
        assert!(matches!(
            parse_humidity("101%"),
            Err(ParseError::OutOfRange { .. })
        ));
        assert!(parse_humidity("-1").is_err());
        assert!(parse_humidity("4.5%").is_err());
        assert!(parse_humidity("%").is_err());
    }
}
