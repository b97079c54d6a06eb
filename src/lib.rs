//! Intersection Simulation Library
//!
//! A four-way intersection simulation with emergency vehicle priority that
//! can run headless or with a Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
