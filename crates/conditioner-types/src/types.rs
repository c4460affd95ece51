//! Core value types for the air-conditioner control panel.
//!
//! Every selectable option carries a stable *key*: the name of the control
//! that selects it. Keys are what the settings store persists, so they must
//! never change between releases. `key()` is their only spelling: parsing
//! and serde both go through it.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Temperature scale used by the panel display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum TemperatureUnit {
    /// Degrees Celsius, displayed as whole numbers.
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Kelvin.
    Kelvin,
}

impl TemperatureUnit {
    /// All units in display order.
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// Settings key of the control selecting this unit.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsiusButton",
            TemperatureUnit::Fahrenheit => "fahrenheitButton",
            TemperatureUnit::Kelvin => "kelvinButton",
        }
    }

    /// Short unit suffix for display.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    /// Size of one increase/decrease step in this unit.
    ///
    /// A Fahrenheit step of 1.8 equals one Celsius degree, so stepping moves
    /// the same physical amount regardless of the active scale.
    #[must_use]
    pub fn step(&self) -> f64 {
        match self {
            TemperatureUnit::Celsius | TemperatureUnit::Kelvin => 1.0,
            TemperatureUnit::Fahrenheit => 1.8,
        }
    }

    /// Whether values in this unit are displayed as whole numbers.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        matches!(self, TemperatureUnit::Celsius)
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Pressure unit used by the panel display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum PressureUnit {
    /// Millimetres of mercury.
    #[default]
    MmHg,
    /// Pascal.
    Pascal,
}

impl PressureUnit {
    /// All units in display order.
    pub const ALL: [PressureUnit; 2] = [PressureUnit::MmHg, PressureUnit::Pascal];

    /// Settings key of the control selecting this unit.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            PressureUnit::MmHg => "mmHgButton",
            PressureUnit::Pascal => "pascalButton",
        }
    }

    /// Short unit suffix for display.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::MmHg => "mmHg",
            PressureUnit::Pascal => "Pa",
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Airflow direction of the louvres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum Direction {
    Left,
    #[default]
    Center,
    Right,
}

impl Direction {
    /// All directions, left to right.
    pub const ALL: [Direction; 3] = [Direction::Left, Direction::Center, Direction::Right];

    /// Settings key of the control selecting this direction.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Direction::Left => "leftDirButton",
            Direction::Center => "centerDirButton",
            Direction::Right => "rightDirButton",
        }
    }

    /// Lowercase name, as forwarded to the device.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Center => "center",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Light or dark appearance of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Both modes.
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// Settings key of the toggle selecting this mode.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            ThemeMode::Light => "lightToggle",
            ThemeMode::Dark => "darkToggle",
        }
    }
}

/// Parsing and serde conversions for an option type with `ALL` and `key()`.
macro_rules! impl_control_key {
    ($($ty:ty),+ $(,)?) => {$(
        impl FromStr for $ty {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|option| option.key() == s)
                    .ok_or_else(|| ParseError::UnknownKey(s.to_string()))
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ParseError;

            fn try_from(key: String) -> Result<Self, Self::Error> {
                key.parse()
            }
        }

        impl From<$ty> for &'static str {
            fn from(option: $ty) -> Self {
                option.key()
            }
        }
    )+};
}

impl_control_key!(TemperatureUnit, PressureUnit, Direction, ThemeMode);

/// One of the two physical halves of a split air conditioner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Block {
    /// The indoor unit.
    Inner,
    /// The outdoor unit.
    Outer,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Inner => f.write_str("inner block"),
            Block::Outer => f.write_str("outer block"),
        }
    }
}
