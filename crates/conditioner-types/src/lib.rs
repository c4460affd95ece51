//! Platform-agnostic types for the air-conditioner control panel.
//!
//! This crate holds the value types shared by the panel logic
//! (conditioner-core) and the desktop front end (conditioner-gui).
//!
//! # Features
//!
//! - Selectable options: temperature and pressure units, airflow direction,
//!   light/dark mode, indoor/outdoor block
//! - Fixed unit-conversion formulas and display rounding rules
//! - Parsing of displayed values
//!
//! # Example
//!
//! ```
//! use conditioner_types::{TemperatureUnit, units};
//!
//! let f = units::convert_temperature(20.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
//! assert_eq!(units::format_temperature(f, TemperatureUnit::Fahrenheit), "68");
//! ```

pub mod error;
pub mod types;
pub mod units;

pub use error::{ParseError, ParseResult};
pub use types::{Block, Direction, PressureUnit, TemperatureUnit, ThemeMode};

#[cfg(test)]
mod tests {
    use super::*;

    // --- key tests ---

    #[test]
    fn test_temperature_unit_keys_round_trip() {
        for unit in TemperatureUnit::ALL {
            assert_eq!(unit.key().parse::<TemperatureUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_pressure_unit_keys_round_trip() {
        for unit in PressureUnit::ALL {
            assert_eq!(unit.key().parse::<PressureUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_direction_parses_key_only() {
        assert_eq!("leftDirButton".parse::<Direction>().unwrap(), Direction::Left);
        assert!("right".parse::<Direction>().is_err());
    }

    #[test]
    fn test_theme_keys_round_trip() {
        for mode in ThemeMode::ALL {
            assert_eq!(mode.key().parse::<ThemeMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "celsius".parse::<TemperatureUnit>().unwrap_err();
        assert_eq!(err, ParseError::UnknownKey("celsius".to_string()));
        assert!("blueToggle".parse::<ThemeMode>().is_err());
    }

    // --- defaults ---

    #[test]
    fn test_defaults_match_factory_settings() {
        assert_eq!(TemperatureUnit::default(), TemperatureUnit::Celsius);
        assert_eq!(PressureUnit::default(), PressureUnit::MmHg);
        assert_eq!(Direction::default(), Direction::Center);
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    // --- behaviour ---

    #[test]
    fn test_temperature_steps() {
        assert_eq!(TemperatureUnit::Celsius.step(), 1.0);
        assert_eq!(TemperatureUnit::Fahrenheit.step(), 1.8);
        assert_eq!(TemperatureUnit::Kelvin.step(), 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(TemperatureUnit::Kelvin.to_string(), "K");
        assert_eq!(PressureUnit::Pascal.to_string(), "Pa");
        assert_eq!(Direction::Center.to_string(), "center");
        assert_eq!(Block::Outer.to_string(), "outer block");
    }

    // --- serialization ---

    #[test]
    fn test_serde_uses_control_keys() {
        assert_eq!(
            serde_json::to_string(&TemperatureUnit::Fahrenheit).unwrap(),
            "\"fahrenheitButton\""
        );
        assert_eq!(
            serde_json::to_string(&ThemeMode::Dark).unwrap(),
            "\"darkToggle\""
        );
        let dir: Direction = serde_json::from_str("\"rightDirButton\"").unwrap();
        assert_eq!(dir, Direction::Right);
    }

    #[test]
    fn test_serde_spells_every_option_with_its_key() {
        fn check<T>(options: &[T])
        where
            T: Copy + PartialEq + core::fmt::Debug + serde::Serialize + serde::de::DeserializeOwned,
            &'static str: From<T>,
        {
            for &option in options {
                let key: &'static str = option.into();
                let json = serde_json::to_string(&option).unwrap();
                assert_eq!(json, format!("\"{key}\""));
                assert_eq!(serde_json::from_str::<T>(&json).unwrap(), option);
            }
        }

        check(&TemperatureUnit::ALL);
        check(&PressureUnit::ALL);
        check(&Direction::ALL);
        check(&ThemeMode::ALL);
    }

    #[test]
    fn test_serde_rejects_unknown_key() {
        let err = serde_json::from_str::<PressureUnit>("\"barButton\"").unwrap_err();
        assert!(err.to_string().contains("barButton"));
        assert!(serde_json::from_str::<Direction>("\"left\"").is_err());
    }
}
