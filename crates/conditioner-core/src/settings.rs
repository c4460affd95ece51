//! Persisted panel settings.
//!
//! Settings are a small TOML document keyed by the panel's control names:
//!
//! ```toml
//! theme = "lightToggle"
//! temperatureUnit = "celsiusButton"
//! pressureUnit = "mmHgButton"
//! direction = "centerDirButton"
//!
//! [temperature]
//! value = "22"
//!
//! [humidity]
//! value = "50%"
//!
//! [pressure]
//! value = "760"
//! ```
//!
//! Values are stored exactly as displayed. A document is only usable as a
//! whole: a missing key, an unknown option or a value that breaks an
//! invariant rejects everything, and the panel falls back to its defaults.
//! Power state is never stored.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use conditioner_types::units::{normalize_temperature, parse_humidity, parse_number};
use conditioner_types::{Direction, PressureUnit, TemperatureUnit, ThemeMode};

use crate::config::Limits;
use crate::error::{Error, Result};
use crate::state::ClimateState;

/// A displayed value, stored under a `value` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredValue {
    pub value: String,
}

impl StoredValue {
    fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// On-disk form of the panel settings.
///
/// Plain keys come before the value tables so the TOML encoder never has
/// to emit a bare key after a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocument {
    pub theme: ThemeMode,
    pub temperature_unit: TemperatureUnit,
    pub pressure_unit: PressureUnit,
    pub direction: Direction,
    pub temperature: StoredValue,
    pub humidity: StoredValue,
    pub pressure: StoredValue,
}

impl SettingsDocument {
    /// Capture the persisted part of `state`.
    pub fn from_state(state: &ClimateState) -> Self {
        Self {
            theme: state.theme,
            temperature_unit: state.temperature_unit,
            pressure_unit: state.pressure_unit,
            direction: state.direction,
            temperature: StoredValue::new(state.temperature_text()),
            humidity: StoredValue::new(state.humidity_text()),
            pressure: StoredValue::new(state.pressure_text()),
        }
    }

    /// Validate the document and build a state from it.
    ///
    /// The temperature must lie within the bounds of the stored unit, the
    /// humidity must carry its `%` suffix and the pressure must stay
    /// representable in every unit. The result is unpowered.
    pub fn to_state(&self, limits: &Limits) -> Result<ClimateState> {
        let unit = self.temperature_unit;
        let temperature = parse_number(&self.temperature.value)?;
        if !limits.temperature_in_bounds(temperature, unit) {
            let (min, max) = limits.temperature_bounds(unit);
            return Err(Error::invalid_setting(
                "temperature",
                format!("{temperature} is outside {min}..={max} {}", unit.symbol()),
            ));
        }

        let Some(percent) = self.humidity.value.trim().strip_suffix('%') else {
            return Err(Error::invalid_setting("humidity", "missing '%' suffix"));
        };
        let humidity = parse_humidity(percent)?;
        if !limits.humidity_in_bounds(i64::from(humidity)) {
            return Err(Error::invalid_setting(
                "humidity",
                format!("{humidity}% is outside the allowed range"),
            ));
        }

        let pressure_unit = self.pressure_unit;
        let pressure = parse_number(&self.pressure.value)?;
        if !limits.pressure_storable(pressure, pressure_unit) {
            return Err(Error::invalid_setting(
                "pressure",
                format!(
                    "{pressure} {} is beyond ±{}",
                    pressure_unit.symbol(),
                    limits.pressure_stored_max
                ),
            ));
        }

        Ok(ClimateState {
            temperature: normalize_temperature(temperature, unit),
            temperature_unit: unit,
            humidity,
            pressure,
            pressure_unit,
            direction: self.direction,
            powered: false,
            theme: self.theme,
        })
    }

    /// Decode a document from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Encode the document as TOML text.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Where the panel keeps its settings between sessions.
pub trait SettingsStore {
    /// Read the stored document.
    fn load(&self) -> Result<SettingsDocument>;

    /// Replace the stored document.
    fn save(&self, document: &SettingsDocument) -> Result<()>;
}

/// Settings stored in a TOML file.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Store settings at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store settings at the per-user default location.
    pub fn at_default_path() -> Self {
        Self::new(Self::default_path())
    }

    /// Per-user settings file, falling back to the working directory when
    /// the platform has no config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("conditioner"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("settings.toml")
    }

    /// Path of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<SettingsDocument> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(Error::NotFound),
            Err(e) => return Err(self.io_error(e)),
        };
        SettingsDocument::from_toml(&content)
    }

    fn save(&self, document: &SettingsDocument) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| Error::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let content = document.to_toml()?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}

/// In-memory settings store holding raw TOML text.
///
/// Clones share the same storage, so one panel can persist and another
/// restore from the same store.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemorySettingsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with raw text (which need not be valid).
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(Mutex::new(Some(text.into()))),
        }
    }

    /// Raw text currently stored.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<SettingsDocument> {
        match self.contents() {
            Some(text) => SettingsDocument::from_toml(&text),
            None => Err(Error::NotFound),
        }
    }

    fn save(&self, document: &SettingsDocument) -> Result<()> {
        let text = document.to_toml()?;
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text);
        Ok(())
    }
}
