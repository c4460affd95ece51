//! Notification channel between the control panel and the device imitator.
//!
//! ```text
//! +----------------+   PanelEvent    +-----------------+
//! |  ControlPanel  | --------------> | DeviceSimulator |
//! | (owns state)   |                 | (shadow copy)   |
//! |                | <-------------- |                 |
//! +----------------+  DeviceMessage  +-----------------+
//! ```
//!
//! - [`PanelEvent`]: pushed down whenever the panel changes a value the
//!   device mirrors. Delivered synchronously.
//! - [`DeviceMessage`]: queued by the imitator and drained by the panel,
//!   which validates every edit before applying it. Applying an edit never
//!   produces a `PanelEvent`, so the two directions cannot feed back.

use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use conditioner_types::{Block, Direction};

/// Changes pushed from the control panel to its observers.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new event types
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
#[non_exhaustive]
pub enum PanelEvent {
    /// The displayed temperature changed (value in the panel's current unit).
    TemperatureChanged(f64),
    /// The displayed pressure changed (value in the panel's current unit).
    PressureChanged(f64),
    /// The airflow direction changed.
    DirectionChanged(Direction),
}

/// A field edit made in the device imitator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum DeviceEdit {
    /// New temperature from the imitator's spin box.
    Temperature(f64),
    /// Raw humidity text, without a `%` suffix. May be empty.
    Humidity(String),
    /// Raw pressure text. May be empty.
    Pressure(String),
}

/// Everything the device imitator can report upward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeviceMessage {
    /// A local field edit.
    Edit { edit: DeviceEdit },
    /// A block raised or cleared a fault.
    Fault { block: Block, ok: bool },
}

/// Sender half used by the device imitator.
pub type DeviceSender = mpsc::Sender<DeviceMessage>;

/// Receiver half drained by the control panel.
pub type DeviceReceiver = mpsc::Receiver<DeviceMessage>;

/// Create the upward device channel.
pub fn device_channel() -> (DeviceSender, DeviceReceiver) {
    mpsc::channel()
}

/// Fan-out of [`PanelEvent`]s to external subscribers.
///
/// Subscribers whose receiver has been dropped are pruned on the next send.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    subscribers: Vec<mpsc::Sender<PanelEvent>>,
}

impl EventDispatcher {
    /// Create a dispatcher with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to panel events.
    pub fn subscribe(&mut self) -> mpsc::Receiver<PanelEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Send an event to every live subscriber.
    pub fn send(&mut self, event: &PanelEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatcher_fans_out() {
        let mut dispatcher = EventDispatcher::new();
        let a = dispatcher.subscribe();
        let b = dispatcher.subscribe();

        dispatcher.send(&PanelEvent::DirectionChanged(Direction::Left));

        assert_eq!(a.try_recv().unwrap(), PanelEvent::DirectionChanged(Direction::Left));
        assert_eq!(b.try_recv().unwrap(), PanelEvent::DirectionChanged(Direction::Left));
    }

    #[test]
    fn test_dispatcher_prunes_dropped_subscribers() {
        let mut dispatcher = EventDispatcher::new();
        let kept = dispatcher.subscribe();
        drop(dispatcher.subscribe());
        assert_eq!(dispatcher.subscribers.len(), 2);

        dispatcher.send(&PanelEvent::PressureChanged(760.0));

        assert_eq!(dispatcher.subscribers.len(), 1);
        assert!(kept.try_recv().is_ok());
    }

    #[test]
    fn test_device_channel_preserves_order() {
        let (tx, rx) = device_channel();
        tx.send(DeviceMessage::Fault {
            block: Block::Inner,
            ok: false,
        })
        .unwrap();
        tx.send(DeviceMessage::Edit {
            edit: DeviceEdit::Humidity("40".to_string()),
        })
        .unwrap();

        let received: Vec<_> = rx.try_iter().collect();
        assert_eq!(received.len(), 2);
        assert!(matches!(received[0], DeviceMessage::Fault { .. }));
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_string(&PanelEvent::DirectionChanged(Direction::Right)).unwrap();
        assert_eq!(json, r#"{"type":"direction_changed","value":"rightDirButton"}"#);

        let msg = DeviceMessage::Edit {
            edit: DeviceEdit::Pressure("750".to_string()),
        };
        let json = serde_json::to_string(&msg).unwrap();
        let back: DeviceMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
