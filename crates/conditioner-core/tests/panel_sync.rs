//! End-to-end tests for the control panel and its device imitator.
//!
//! Run with logs:
//! `RUST_LOG=debug cargo test --package conditioner-core --test panel_sync -- --nocapture`

use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use conditioner_types::units::normalize_temperature;

use conditioner_core::{
    Block, ClimateState, ControlPanel, Direction, FileSettingsStore, MemorySettingsStore,
    PanelConfig, PanelEvent, PressureUnit, StepDirection, TemperatureUnit, ThemeMode,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn fresh_panel() -> ControlPanel {
    init_logging();
    ControlPanel::with_defaults(PanelConfig::default(), MemorySettingsStore::new())
}

// =============================================================================
// Imitator round trips
// =============================================================================

#[test]
fn test_imitator_humidity_edits() {
    let mut panel = fresh_panel();
    panel.toggle_power();

    let sim = panel.simulator_mut().unwrap();
    assert!(sim.edit_humidity(""));
    panel.process_device_messages();
    assert_eq!(panel.state().humidity_text(), "0%");

    // Blocked by the imitator's mask, so the panel never sees it.
    let sim = panel.simulator_mut().unwrap();
    assert!(!sim.edit_humidity("101"));
    assert_eq!(panel.process_device_messages(), 0);
    assert_eq!(panel.state().humidity_text(), "0%");

    let sim = panel.simulator_mut().unwrap();
    assert!(sim.edit_humidity("50"));
    panel.process_device_messages();
    assert_eq!(panel.state().humidity_text(), "50%");
}

#[test]
fn test_imitator_edit_is_not_echoed() {
    let mut panel = fresh_panel();
    let events = panel.subscribe();
    panel.toggle_power();

    let sim = panel.simulator_mut().unwrap();
    sim.edit_temperature(18.0);
    sim.edit_pressure("740");
    assert_eq!(panel.process_device_messages(), 2);

    assert_eq!(panel.state().temperature, 18.0);
    assert_eq!(panel.state().pressure, 740.0);
    assert!(events.try_recv().is_err());
}

#[test]
fn test_panel_changes_follow_into_imitator() {
    let mut panel = fresh_panel();
    let events = panel.subscribe();
    panel.toggle_power();

    panel.step(StepDirection::Up);
    panel.set_pressure_unit(PressureUnit::Pascal);
    panel.set_direction(Direction::Left);

    let sim = panel.simulator().unwrap();
    assert_eq!(sim.temperature(), 23.0);
    assert_eq!(sim.pressure(), "101323.2");

    let received: Vec<_> = events.try_iter().collect();
    assert_eq!(
        received,
        vec![
            PanelEvent::TemperatureChanged(23.0),
            PanelEvent::PressureChanged(101323.2),
            PanelEvent::DirectionChanged(Direction::Left),
        ]
    );
}

#[test]
fn test_imitator_faults_reach_panel() {
    let mut panel = fresh_panel();
    panel.toggle_power();

    let sim = panel.simulator().unwrap();
    sim.raise_fault(Block::Inner);
    sim.raise_fault(Block::Outer);
    sim.clear_fault(Block::Inner);
    panel.process_device_messages();

    assert!(panel.faults().is_ok(Block::Inner));
    assert!(!panel.faults().is_ok(Block::Outer));
}

// =============================================================================
// Unit conversion
// =============================================================================

#[test]
fn test_pressure_conversion_values() {
    let mut panel = fresh_panel();
    panel.set_pressure_unit(PressureUnit::Pascal);
    // 760 x 133.32
    assert_eq!(panel.state().pressure_text(), "101323.2");

    panel.toggle_power();
    panel.simulator_mut().unwrap().edit_pressure("101325");
    panel.process_device_messages();
    panel.toggle_power();

    panel.set_pressure_unit(PressureUnit::MmHg);
    assert_eq!(panel.state().pressure_text(), "760");
}

#[test]
fn test_celsius_display_is_integral_after_conversion() {
    let mut panel = fresh_panel();
    panel.set_temperature_unit(TemperatureUnit::Fahrenheit);
    panel.step(StepDirection::Up);
    assert_eq!(panel.state().temperature_text(), "73.4");

    panel.set_temperature_unit(TemperatureUnit::Celsius);
    assert_eq!(panel.state().temperature_text(), "23");
}

// =============================================================================
// Power
// =============================================================================

#[test]
fn test_power_on_seeds_with_displayed_values() {
    let mut panel = fresh_panel();
    panel.set_temperature_unit(TemperatureUnit::Kelvin);
    panel.on_device_edit(conditioner_core::DeviceEdit::Humidity("45".into()));

    panel.toggle_power();
    assert!(!panel.controls_visible());
    let sim = panel.simulator().unwrap();
    assert_eq!(sim.temperature(), 295.15);
    assert_eq!(sim.humidity(), "45");
    assert_eq!(sim.pressure(), "760");

    panel.toggle_power();
    assert!(panel.controls_visible());
    assert!(panel.simulator().is_none());
    assert_eq!(panel.process_device_messages(), 0);
}

#[test]
fn test_messages_from_destroyed_imitator_are_discarded() {
    let mut panel = fresh_panel();
    panel.toggle_power();
    panel.simulator_mut().unwrap().edit_temperature(30.0);
    panel.toggle_power();

    assert_eq!(panel.process_device_messages(), 0);
    assert_eq!(panel.state().temperature, 22.0);
}

// =============================================================================
// Settings
// =============================================================================

#[test]
fn test_settings_round_trip_through_file() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");

    let mut panel = ControlPanel::new(PanelConfig::default(), FileSettingsStore::new(&path));
    assert!(panel.take_warning().is_some(), "first launch has no settings");

    panel.set_temperature_unit(TemperatureUnit::Kelvin);
    panel.step(StepDirection::Down);
    panel.set_pressure_unit(PressureUnit::Pascal);
    panel.set_direction(Direction::Right);
    panel.set_theme(ThemeMode::Dark);
    panel.toggle_power();
    panel.close().unwrap();
    let saved = panel.state().clone();

    let mut reopened = ControlPanel::new(PanelConfig::default(), FileSettingsStore::new(&path));
    assert!(reopened.take_warning().is_none());
    let restored = reopened.state();

    assert_eq!(restored.temperature_unit, TemperatureUnit::Kelvin);
    assert_eq!(restored.pressure_unit, PressureUnit::Pascal);
    assert_eq!(restored.direction, Direction::Right);
    assert_eq!(restored.theme, ThemeMode::Dark);
    assert_eq!(restored.temperature_text(), "294.15");
    assert_eq!(restored.temperature_text(), saved.temperature_text());
    assert_eq!(restored.humidity_text(), saved.humidity_text());
    assert_eq!(restored.pressure_text(), saved.pressure_text());
    assert!(!restored.powered);
}

#[test]
fn test_malformed_file_falls_back_with_one_warning() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "<?xml version=\"1.0\"?><settings>").unwrap();

    let mut panel = ControlPanel::new(PanelConfig::default(), FileSettingsStore::new(&path));

    let state = panel.state();
    assert_eq!(state.temperature_unit, TemperatureUnit::Celsius);
    assert_eq!(state.pressure_unit, PressureUnit::MmHg);
    assert_eq!(state.direction, Direction::Center);
    assert_eq!(state.theme, ThemeMode::Light);
    assert_eq!(state, &ClimateState::default());

    let warning = panel.take_warning().unwrap();
    assert!(warning.message.contains("Default settings"));
    assert!(panel.take_warning().is_none());
}

#[test]
fn test_partially_valid_file_is_not_merged() {
    init_logging();
    let store = MemorySettingsStore::with_contents(
        r#"
theme = "darkToggle"
temperatureUnit = "kelvinButton"
pressureUnit = "pascalButton"
direction = "rightDirButton"

[temperature]
value = "1000"

[humidity]
value = "40%"

[pressure]
value = "99000"
"#,
    );

    let mut panel = ControlPanel::new(PanelConfig::default(), store);
    assert_eq!(panel.state(), &ClimateState::default());
    assert!(panel.take_warning().is_some());
}

#[test]
fn test_unshowable_stored_pressure_falls_back() {
    init_logging();
    let store = MemorySettingsStore::with_contents(
        r#"
theme = "lightToggle"
temperatureUnit = "celsiusButton"
pressureUnit = "pascalButton"
direction = "centerDirButton"

[temperature]
value = "22"

[humidity]
value = "50%"

[pressure]
value = "1e307"
"#,
    );

    let mut panel = ControlPanel::new(PanelConfig::default(), store.clone());
    assert!(panel.take_warning().is_some());
    assert_eq!(panel.state().pressure_text(), "760");

    // What gets written back restores cleanly.
    panel.close().unwrap();
    let mut reopened = ControlPanel::new(PanelConfig::default(), store);
    assert!(reopened.take_warning().is_none());
    assert_eq!(reopened.state().pressure_text(), "760");
}

// =============================================================================
// Property tests
// =============================================================================

#[derive(Debug, Clone)]
enum Op {
    Unit(TemperatureUnit),
    Step(StepDirection),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => prop_oneof![
            Just(TemperatureUnit::Celsius),
            Just(TemperatureUnit::Fahrenheit),
            Just(TemperatureUnit::Kelvin),
        ]
        .prop_map(Op::Unit),
        3 => prop_oneof![Just(StepDirection::Up), Just(StepDirection::Down)].prop_map(Op::Step),
    ]
}

proptest! {
    /// A step either lands inside the active unit's bounds or changes nothing.
    #[test]
    fn step_never_leaves_bounds(ops in proptest::collection::vec(op_strategy(), 1..200)) {
        let mut panel = ControlPanel::with_defaults(PanelConfig::default(), MemorySettingsStore::new());
        let limits = panel.config().limits.clone();

        for op in ops {
            match op {
                Op::Unit(unit) => {
                    panel.set_temperature_unit(unit);
                }
                Op::Step(direction) => {
                    let before = panel.state().clone();
                    let applied = panel.step(direction);
                    let state = panel.state();
                    if applied {
                        prop_assert!(limits.temperature_in_bounds(state.temperature, state.temperature_unit));
                    } else {
                        prop_assert_eq!(state, &before);
                    }
                }
            }
        }
    }

    /// Imitator temperatures that would display outside the bounds never
    /// reach the panel.
    #[test]
    fn device_temperature_respects_bounds(value in -100.0f64..400.0) {
        let mut panel = ControlPanel::with_defaults(PanelConfig::default(), MemorySettingsStore::new());
        let before = panel.state().temperature;
        let displayed = normalize_temperature(value, TemperatureUnit::Celsius);
        let in_bounds = panel.config().limits.temperature_in_bounds(displayed, TemperatureUnit::Celsius);

        let applied = panel.on_device_edit(conditioner_core::DeviceEdit::Temperature(value));

        prop_assert_eq!(applied, in_bounds);
        if applied {
            prop_assert_eq!(panel.state().temperature, displayed);
        } else {
            prop_assert_eq!(panel.state().temperature, before);
        }
    }
}
