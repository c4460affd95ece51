//! UI panel rendering for the conditioner GUI.
//!
//! Each panel is implemented as methods on [`super::app::ConditionerApp`].

mod controls;
mod imitator;
